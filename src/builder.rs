use alloc::vec::Vec;
use core::slice;

use super::cubic_bezier::CubicBezier;
use super::error::SplineError;
use super::path::{Path, PathInstruction};
use super::point::Point;
use super::segment::Segment;
use super::solver::solve;

/// Incrementally builds an interpolating cubic spline from a growing sequence of points.
///
/// Every point added is a knot the curve passes through. A segment is only
/// finalized once the points after it fix its shape: while the curve is open
/// the last two points are still provisional, so `n` points yield `n - 2`
/// segments. Closing the curve finalizes the tail. Finalized segments never
/// change afterwards, so a renderer can draw each one as soon as [`add`](Self::add)
/// or [`close`](Self::close) returns `true`.
///
/// # Examples
/// ```rust
/// use stroke_spline::{Point2, SplineBuilder};
///
/// let mut builder = SplineBuilder::new(Point2::new(0.0, 0.0));
/// assert!(!builder.add(Point2::new(1.0, 1.0)).unwrap());
/// assert!(builder.add(Point2::new(3.0, 4.0)).unwrap());
/// assert!(builder.add(Point2::new(10.0, 2.0)).unwrap());
/// assert_eq!(builder.segments().len(), 2);
///
/// assert!(builder.close().unwrap());
/// assert_eq!(builder.segments().len(), 3);
///
/// let path = builder.materialize_path().unwrap();
/// assert_eq!(path.end(), Some(Point2::new(10.0, 2.0)));
/// ```
#[derive(Clone, Debug)]
pub struct SplineBuilder<P> {
    points: Vec<P>,
    segments: Vec<Segment<P>>,
    is_open: bool,
}

impl<P> SplineBuilder<P>
where
    P: Point,
{
    /// Create an open curve starting at `start`.
    pub fn new(start: P) -> Self {
        let mut points = Vec::new();
        points.push(start);
        SplineBuilder {
            points,
            segments: Vec::new(),
            is_open: true,
        }
    }

    /// Knots added so far, in order. Never empty.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Finalized segments, `segments()[i]` joins `points()[i]` and `points()[i + 1]`.
    pub fn segments(&self) -> &[Segment<P>] {
        &self.segments
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn start(&self) -> P {
        self.points[0]
    }

    /// Append a knot, returning whether a new segment was finalized.
    ///
    /// Fails with [`SplineError::AddOnClosedCurve`] once the curve is closed.
    pub fn add(&mut self, point: P) -> Result<bool, SplineError> {
        if !self.is_open {
            log::warn!("rejected point added to a closed curve");
            return Err(SplineError::AddOnClosedCurve);
        }
        self.points.push(point);
        Ok(self.finalize_segments())
    }

    /// Append several knots, returning whether any new segment was finalized.
    pub fn extend<I>(&mut self, points: I) -> Result<bool, SplineError>
    where
        I: IntoIterator<Item = P>,
    {
        let mut changed = false;
        for point in points {
            changed |= self.add(point)?;
        }
        Ok(changed)
    }

    /// Close the curve, returning whether a new segment was finalized.
    ///
    /// Closing switches the tail to the closed boundary condition, which
    /// finalizes the segment ending at the last point. No segment from the
    /// last point back to the start is added: the loop is not joined
    /// geometrically, and a closed curve of `n >= 3` points has `n - 1` segments.
    ///
    /// Fails with [`SplineError::AlreadyClosed`] on the second call.
    pub fn close(&mut self) -> Result<bool, SplineError> {
        if !self.is_open {
            log::warn!("rejected close of an already closed curve");
            return Err(SplineError::AlreadyClosed);
        }
        self.is_open = false;
        log::debug!("closing curve with {} points", self.points.len());
        Ok(self.finalize_segments())
    }

    /// The finalized segment `index` with its knots attached.
    pub fn curve(&self, index: usize) -> Option<CubicBezier<P>> {
        let segment = self.segments.get(index)?;
        Some(segment.to_cubic(self.points[index], self.points[index + 1]))
    }

    /// Iterate over all finalized segments as curves.
    pub fn curves(&self) -> Curves<'_, P> {
        Curves {
            points: &self.points,
            segments: self.segments.iter(),
            index: 0,
        }
    }

    /// Build the drawable path through every finalized knot.
    ///
    /// Fails with [`SplineError::InsufficientPoints`] until at least 3 points
    /// and one finalized segment exist.
    pub fn materialize_path(&self) -> Result<Path<P>, SplineError> {
        if self.points.len() <= 2
            || self.segments.is_empty()
            || self.points.len() <= self.segments.len()
        {
            return Err(SplineError::InsufficientPoints);
        }

        let mut instructions = Vec::with_capacity(self.segments.len() + 1);
        instructions.push(PathInstruction::MoveTo(self.points[0]));
        for (segment, &to) in self.segments.iter().zip(&self.points[1..]) {
            instructions.push(PathInstruction::CurveTo {
                to,
                control1: segment.control1,
                control2: segment.control2,
            });
        }
        Ok(Path::from_instructions(instructions))
    }

    /// Number of segments the current points determine: the last two points
    /// are still free while open, only the last one once closed.
    fn max_segments(&self) -> usize {
        let reserved = if self.is_open { 2 } else { 1 };
        self.points.len().saturating_sub(reserved)
    }

    /// Re-solve the trailing window and commit the segments it fixes.
    fn finalize_segments(&mut self) -> bool {
        let committed = self.segments.len();
        if self.points.len() <= 2 || committed >= self.max_segments() {
            return false;
        }

        // include the last committed knot so the window gets interior rows there
        let window_start = committed.saturating_sub(1);
        let solved = solve(&self.points[window_start..]);
        if solved.is_empty() {
            return false;
        }

        let skip_first = usize::from(committed > 0);
        let skip_last = usize::from(self.is_open);
        let keep = solved.len().saturating_sub(skip_first + skip_last);
        self.segments
            .extend(solved.iter().skip(skip_first).take(keep).copied());

        if keep > 0 {
            log::debug!(
                "finalized {} segments ({} total, {} points)",
                keep,
                self.segments.len(),
                self.points.len()
            );
        }
        keep > 0
    }
}

/// Iterator over the finalized segments of a [`SplineBuilder`] as [`CubicBezier`] curves.
pub struct Curves<'a, P> {
    points: &'a [P],
    segments: slice::Iter<'a, Segment<P>>,
    index: usize,
}

impl<'a, P> Iterator for Curves<'a, P>
where
    P: Point,
{
    type Item = CubicBezier<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.segments.next()?;
        let curve = segment.to_cubic(self.points[self.index], self.points[self.index + 1]);
        self.index += 1;
        Some(curve)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.segments.size_hint()
    }
}

impl<'a, P> ExactSizeIterator for Curves<'a, P> where P: Point {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point2;
    use alloc::vec;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn gesture() -> Vec<Point2<f64>> {
        (0..24)
            .map(|i| {
                let t = i as f64 * 0.3;
                p(t.cos() * (10.0 + t), t.sin() * (6.0 + 0.5 * t))
            })
            .collect()
    }

    #[test]
    fn starts_open_with_one_point() {
        let builder = SplineBuilder::new(p(1.0, 2.0));
        assert!(builder.is_open());
        assert_eq!(builder.points(), &[p(1.0, 2.0)]);
        assert!(builder.segments().is_empty());
        assert_eq!(builder.start(), p(1.0, 2.0));
    }

    #[test]
    fn open_curve_lags_by_two() {
        let mut builder = SplineBuilder::new(p(0.0, 0.0));
        for (i, point) in gesture().into_iter().enumerate() {
            let n = i + 2;
            let changed = builder.add(point).unwrap();
            assert_eq!(builder.points().len(), n);
            assert_eq!(builder.segments().len(), n.saturating_sub(2));
            assert_eq!(changed, n >= 3);
        }
    }

    #[test]
    fn close_finalizes_tail() {
        for count in 3..10 {
            let mut builder = SplineBuilder::new(p(0.0, 0.0));
            builder.extend(gesture().into_iter().take(count - 1)).unwrap();
            assert_eq!(builder.segments().len(), count - 2);

            assert!(builder.close().unwrap());
            assert!(!builder.is_open());
            assert_eq!(builder.points().len(), count);
            assert_eq!(builder.segments().len(), count - 1);
        }
    }

    #[test]
    fn close_commits_last_window_segment() {
        let points = gesture();
        for n in 5..10 {
            let mut builder = SplineBuilder::new(points[0]);
            builder.extend(points[1..n].iter().copied()).unwrap();
            let open = builder.segments().to_vec();
            builder.close().unwrap();
            // closed window keeps its last segment, solved with the (2, 7, 0) row
            let solved = solve(&points[n - 3..n]);
            assert_eq!(builder.segments()[n - 2], solved[1]);
            assert_eq!(&builder.segments()[..n - 2], &open[..]);
        }
    }

    #[test]
    fn close_three_points_resolves_from_start() {
        let knots = [p(0.0, 0.0), p(1.0, 1.0), p(3.0, 4.0)];
        let mut builder = SplineBuilder::new(knots[0]);
        builder.extend(knots[1..].iter().copied()).unwrap();
        builder.close().unwrap();
        let solved = solve(&knots);
        assert_eq!(builder.segments(), &solved[..]);
        assert_eq!(builder.segments()[1], solved[1]);
        let tail = builder.segments()[1];
        assert_eq!(tail.control2, (knots[2] + tail.control1) * 0.5);
    }

    #[test]
    fn close_short_curve_finalizes_nothing() {
        let mut builder = SplineBuilder::new(p(0.0, 0.0));
        assert!(!builder.close().unwrap());
        assert!(builder.segments().is_empty());

        let mut builder = SplineBuilder::new(p(0.0, 0.0));
        builder.add(p(1.0, 1.0)).unwrap();
        assert!(!builder.close().unwrap());
        assert!(builder.segments().is_empty());
    }

    #[test]
    fn add_after_close_fails() {
        let mut builder = SplineBuilder::new(p(0.0, 0.0));
        builder.extend(vec![p(1.0, 1.0), p(3.0, 4.0)]).unwrap();
        builder.close().unwrap();
        let points = builder.points().to_vec();
        let segments = builder.segments().to_vec();

        assert_eq!(builder.add(p(5.0, 5.0)), Err(SplineError::AddOnClosedCurve));
        assert_eq!(
            builder.extend(vec![p(6.0, 6.0)]),
            Err(SplineError::AddOnClosedCurve)
        );
        assert_eq!(builder.points(), &points[..]);
        assert_eq!(builder.segments(), &segments[..]);
    }

    #[test]
    fn close_twice_fails() {
        let mut builder = SplineBuilder::new(p(0.0, 0.0));
        builder.extend(vec![p(1.0, 1.0), p(3.0, 4.0), p(10.0, 2.0)]).unwrap();
        builder.close().unwrap();
        let points = builder.points().to_vec();
        let segments = builder.segments().to_vec();

        assert_eq!(builder.close(), Err(SplineError::AlreadyClosed));
        assert!(!builder.is_open());
        assert_eq!(builder.points(), &points[..]);
        assert_eq!(builder.segments(), &segments[..]);
    }

    #[test]
    fn committed_segments_never_change() {
        let mut builder = SplineBuilder::new(p(0.0, 0.0));
        let mut seen: Vec<Segment<Point2<f64>>> = Vec::new();
        for point in gesture() {
            builder.add(point).unwrap();
            assert_eq!(&builder.segments()[..seen.len()], &seen[..]);
            seen = builder.segments().to_vec();
        }
        builder.close().unwrap();
        assert_eq!(&builder.segments()[..seen.len()], &seen[..]);
    }

    #[test]
    fn first_segment_matches_three_knot_solve() {
        let knots = [p(0.0, 0.0), p(1.0, 1.0), p(3.0, 4.0)];
        let mut builder = SplineBuilder::new(knots[0]);
        builder.extend(knots[1..].iter().copied()).unwrap();
        let solved = solve(&knots);
        assert_eq!(builder.segments(), &solved[..1]);
    }

    #[test]
    fn later_segments_come_from_trailing_window() {
        let points = gesture();
        let mut builder = SplineBuilder::new(points[0]);
        builder.extend(points[1..6].iter().copied()).unwrap();
        // 6 points, 4 segments; the 4th was solved over points[2..6]
        let solved = solve(&points[2..6]);
        assert_eq!(builder.segments()[3], solved[1]);
    }

    #[test]
    fn materialize_requires_a_segment() {
        let mut builder = SplineBuilder::new(p(0.0, 0.0));
        assert_eq!(builder.materialize_path().err(), Some(SplineError::InsufficientPoints));
        builder.add(p(1.0, 1.0)).unwrap();
        assert_eq!(builder.materialize_path().err(), Some(SplineError::InsufficientPoints));
        builder.add(p(3.0, 4.0)).unwrap();
        assert!(builder.materialize_path().is_ok());
    }

    #[test]
    fn materialize_closed_short_curve_fails() {
        let mut builder = SplineBuilder::new(p(0.0, 0.0));
        builder.add(p(1.0, 1.0)).unwrap();
        builder.close().unwrap();
        assert_eq!(builder.materialize_path().err(), Some(SplineError::InsufficientPoints));
    }

    #[test]
    fn materialize_is_idempotent() {
        let mut builder = SplineBuilder::new(p(0.0, 0.0));
        builder.extend(gesture()).unwrap();
        let first = builder.materialize_path().unwrap();
        let second = builder.materialize_path().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn path_passes_through_finalized_knots() {
        let mut builder = SplineBuilder::new(p(0.0, 0.0));
        builder.extend(vec![p(1.0, 1.0), p(3.0, 4.0), p(10.0, 2.0)]).unwrap();
        let path = builder.materialize_path().unwrap();
        let ends: Vec<_> = path.curves().map(|c| (c.start(), c.end())).collect();
        assert_eq!(ends, vec![(p(0.0, 0.0), p(1.0, 1.0)), (p(1.0, 1.0), p(3.0, 4.0))]);

        builder.close().unwrap();
        let path = builder.materialize_path().unwrap();
        assert_eq!(path.len(), 3);
        for (i, curve) in path.curves().enumerate() {
            assert_eq!(curve.eval(0.0), builder.points()[i]);
            assert_eq!(curve.eval(1.0), builder.points()[i + 1]);
        }
        assert_eq!(path.end(), Some(p(10.0, 2.0)));
    }

    #[test]
    fn curves_match_segments() {
        let mut builder = SplineBuilder::new(p(0.0, 0.0));
        builder.extend(gesture()).unwrap();
        assert_eq!(builder.curves().len(), builder.segments().len());
        for (i, curve) in builder.curves().enumerate() {
            assert_eq!(Some(curve), builder.curve(i));
            assert_eq!(curve.ctrl1(), builder.segments()[i].control1);
        }
        assert_eq!(builder.curve(builder.segments().len()), None);
    }

    #[test]
    fn single_precision_points() {
        let mut builder = SplineBuilder::new(Point2::new(0.0f32, 0.0));
        builder
            .extend(vec![Point2::new(1.0, 1.0), Point2::new(2.0, 0.0), Point2::new(3.0, 1.0)])
            .unwrap();
        assert_eq!(builder.segments().len(), 2);
    }
}
