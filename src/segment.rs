use super::cubic_bezier::CubicBezier;
use super::point::Point;

/// The two control points of one cubic piece of a spline.
///
/// A segment does not store its knots: `segments[i]` of a
/// [`SplineBuilder`](crate::SplineBuilder) spans `points[i]` to `points[i + 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Segment<P> {
    pub control1: P,
    pub control2: P,
}

impl<P> Segment<P>
where
    P: Point,
{
    pub fn new(control1: P, control2: P) -> Self {
        Segment { control1, control2 }
    }

    /// Attach the knots this segment spans, giving a drawable curve.
    pub fn to_cubic(&self, start: P, end: P) -> CubicBezier<P> {
        CubicBezier::new(start, self.control1, self.control2, end)
    }
}
