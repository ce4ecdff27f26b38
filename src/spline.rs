// spline.rs
// Trait for common abstractions over all curve types (Bezier, spline paths)
use super::Point;

pub trait Spline<P: Point> {
    /// Evaluate the curve at `t` in `[0, 1]`
    fn eval(&self, t: P::Scalar) -> P;
}
