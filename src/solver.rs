//! Control point solver for a window of spline knots.
//!
//! Available functions:
//! - `solve()`

use num_traits::{Float, One, Zero};
use tinyvec::TinyVec;

use super::point::Point;
use super::segment::Segment;

/// Number of segments a solve holds inline before spilling to the heap.
/// The builder's steady-state window is 4 knots (3 segments).
pub const WINDOW_CAPACITY: usize = 8;

/// Solver output, one segment per consecutive pair of knots.
pub type Segments<P> = TinyVec<[Segment<P>; WINDOW_CAPACITY]>;

/// Compute the control points of the cubic Bezier segments joining `knots`.
///
/// The first control point of every segment comes from the tridiagonal system
/// (rows are `a·P1[i-1] + b·P1[i] + c·P1[i+1] = r`):
///
/// | row      | a | b | c | r           |
/// |----------|---|---|---|-------------|
/// | first    | 0 | 2 | 1 | P0 + 2·P3   |
/// | interior | 1 | 4 | 1 | 4·P0 + 2·P3 |
/// | last     | 2 | 7 | 0 | 8·P0 + P3   |
///
/// where `P0`, `P3` are the knots the segment joins. Points are solved as a
/// whole, which is the same as solving x and y separately since both share
/// the matrix. The second control point is `2·P3 - P1[i+1]`, or
/// `(P3 + P1) / 2` for the last segment.
///
/// Returns an empty result for fewer than 3 knots.
///
/// # Examples
/// ```rust
/// use stroke_spline::{solve, Point2};
///
/// let knots = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), Point2::new(2.0, 0.0)];
/// let segments = solve(&knots);
/// assert_eq!(segments.len(), 2);
/// assert!(solve(&knots[..2]).is_empty());
/// ```
pub fn solve<P: Point>(knots: &[P]) -> Segments<P> {
    let mut segments = Segments::new();
    if knots.len() < 3 {
        return segments;
    }
    let n = knots.len() - 1;

    let one = P::Scalar::one();
    let two = one + one;
    let four = two + two;
    let seven = four + two + one;
    let eight = four + four;

    // a is implicit: 0 for the first row, 2 for the last, 1 otherwise
    let mut b: TinyVec<[P::Scalar; WINDOW_CAPACITY]> = TinyVec::with_capacity(n);
    let mut c: TinyVec<[P::Scalar; WINDOW_CAPACITY]> = TinyVec::with_capacity(n);
    let mut r: TinyVec<[P; WINDOW_CAPACITY]> = TinyVec::with_capacity(n);

    b.push(two);
    c.push(one);
    r.push(knots[0] + knots[1] * two);
    for i in 1..n - 1 {
        b.push(four);
        c.push(one);
        r.push(knots[i] * four + knots[i + 1] * two);
    }
    b.push(seven);
    c.push(P::Scalar::zero());
    r.push(knots[n - 1] * eight + knots[n]);

    // forward elimination
    for i in 1..n {
        let a = if i == n - 1 { two } else { one };
        let m = a / b[i - 1];
        b[i] = b[i] - m * c[i - 1];
        r[i] = r[i] - r[i - 1] * m;
    }

    // back substitution, r[i] becomes the first control point of segment i
    r[n - 1] = r[n - 1] * b[n - 1].recip();
    for i in (0..n - 1).rev() {
        r[i] = (r[i] - r[i + 1] * c[i]) * b[i].recip();
    }

    for i in 0..n - 1 {
        segments.push(Segment::new(r[i], knots[i + 1] * two - r[i + 1]));
    }
    segments.push(Segment::new(r[n - 1], (knots[n] + r[n - 1]) * two.recip()));

    log::trace!("solved {} segments over {} knots", segments.len(), knots.len());
    segments
}
