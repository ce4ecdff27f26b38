use num_traits::{NumCast, One, Zero};

use super::point::Point;
use super::spline::Spline;

/// A 2d cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end: P,
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn ctrl1(&self) -> P {
        self.ctrl1
    }

    pub fn ctrl2(&self) -> P {
        self.ctrl2
    }

    pub fn end(&self) -> P {
        self.end
    }

    /// Evaluate a CubicBezier curve at t using the numerically stable De Casteljau algorithm.
    /// Exactly returns `start` at t = 0 and `end` at t = 1.
    pub fn eval(&self, t: P::Scalar) -> P {
        let mt = P::Scalar::one() - t;
        let lerp = |a: P, b: P| a * mt + b * t;
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = lerp(self.start, self.ctrl1);
        let ctrl_1bc = lerp(self.ctrl1, self.ctrl2);
        let ctrl_1cd = lerp(self.ctrl2, self.end);
        // second iteration
        let ctrl_2ab = lerp(ctrl_1ab, ctrl_1bc);
        let ctrl_2bc = lerp(ctrl_1bc, ctrl_1cd);
        // third iteration, final point on the curve
        lerp(ctrl_2ab, ctrl_2bc)
    }

    /// Approximates the arc length of the curve by flattening it with straight line segments.
    /// Remember arclen also works by linear approximation, not the integral, so we have to accept error!
    pub fn arclen(&self, nsteps: usize) -> P::Scalar {
        let nsteps = nsteps.max(1);
        let steps = <P::Scalar as NumCast>::from(nsteps).unwrap_or_else(P::Scalar::one);
        let mut arclen = P::Scalar::zero();
        let mut prev = self.start;
        for i in 1..=nsteps {
            let t = <P::Scalar as NumCast>::from(i).unwrap_or_else(P::Scalar::zero) / steps;
            let p = self.eval(t);
            arclen = arclen + prev.distance(p);
            prev = p;
        }
        arclen
    }
}

impl<P> Spline<P> for CubicBezier<P>
where
    P: Point,
{
    fn eval(&self, t: P::Scalar) -> P {
        CubicBezier::eval(self, t)
    }
}
