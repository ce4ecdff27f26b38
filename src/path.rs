use alloc::vec::Vec;
use core::slice;

use num_traits::{Float, NumCast, One, Zero};

use super::cubic_bezier::CubicBezier;
use super::point::Point;
use super::spline::Spline;

/// One drawing instruction of a [`Path`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathInstruction<P> {
    /// Start the path at a point
    MoveTo(P),
    /// Cubic curve from the current point to `to`
    CurveTo { to: P, control1: P, control2: P },
}

/// A drawable spline: a `MoveTo` followed by `CurveTo` instructions, one per segment.
///
/// Produced by [`SplineBuilder::materialize_path`](crate::SplineBuilder::materialize_path),
/// which guarantees at least one curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Path<P> {
    instructions: Vec<PathInstruction<P>>,
}

impl<P> Path<P>
where
    P: Point,
{
    pub(crate) fn from_instructions(instructions: Vec<PathInstruction<P>>) -> Self {
        Path { instructions }
    }

    pub fn instructions(&self) -> slice::Iter<'_, PathInstruction<P>> {
        self.instructions.iter()
    }

    /// Number of curves in the path.
    pub fn len(&self) -> usize {
        self.instructions
            .iter()
            .filter(|instruction| matches!(instruction, PathInstruction::CurveTo { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The point the path starts at.
    pub fn start(&self) -> Option<P> {
        match self.instructions.first()? {
            PathInstruction::MoveTo(point) => Some(*point),
            PathInstruction::CurveTo { .. } => None,
        }
    }

    /// The point the path ends at.
    pub fn end(&self) -> Option<P> {
        match self.instructions.last()? {
            PathInstruction::MoveTo(point) => Some(*point),
            PathInstruction::CurveTo { to, .. } => Some(*to),
        }
    }

    /// Iterate over the curves of the path, each starting where the previous one ended.
    pub fn curves(&self) -> impl Iterator<Item = CubicBezier<P>> + '_ {
        let mut current = self.start();
        self.instructions
            .iter()
            .filter_map(move |instruction| match *instruction {
                PathInstruction::MoveTo(point) => {
                    current = Some(point);
                    None
                }
                PathInstruction::CurveTo {
                    to,
                    control1,
                    control2,
                } => {
                    let from = current?;
                    current = Some(to);
                    Some(CubicBezier::new(from, control1, control2, to))
                }
            })
    }

    /// Evaluate a point along the path for t in [0,1], every curve covering an equal
    /// share of the parameter range. Values outside the range are clamped.
    /// Returns None for empty paths.
    pub fn eval(&self, t: P::Scalar) -> Option<P> {
        let (index, local_t) = self.segment_parameter(t)?;
        self.curves().nth(index).map(|curve| curve.eval(local_t))
    }

    fn segment_parameter(&self, t: P::Scalar) -> Option<(usize, P::Scalar)> {
        let count = self.len();
        if count == 0 {
            return None;
        }

        let zero = P::Scalar::zero();
        let one = P::Scalar::one();
        let t = t.max(zero).min(one);

        let count_scalar = <P::Scalar as NumCast>::from(count)?;
        let scaled = t * count_scalar;
        if scaled >= count_scalar {
            return Some((count - 1, one));
        }

        let index: usize = num_traits::cast(scaled.floor())?;
        let local = scaled - scaled.floor();
        Some((index, local))
    }
}

impl<P> Spline<P> for Path<P>
where
    P: Point,
{
    /// Evaluates like [`Path::eval`], falling back to the default point for an empty path
    fn eval(&self, t: P::Scalar) -> P {
        Path::eval(self, t).unwrap_or_default()
    }
}
