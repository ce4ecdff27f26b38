//! Nalgebra adapter implementations.
//!
//! Enable this adapter with the `nalgebra` feature to use `nalgebra::Vector2<T>`
//! as a `Point`. Add `nalgebra` as a direct dependency to construct the vectors
//! in your own code.
//!
//! # Example
//! ```rust,no_run
//! use nalgebra::Vector2;
//! use stroke_spline::SplineBuilder;
//!
//! let mut builder = SplineBuilder::new(Vector2::new(0.0f32, 0.0));
//! builder.add(Vector2::new(1.0, 1.0)).unwrap();
//! builder.add(Vector2::new(2.0, 0.0)).unwrap();
//! assert_eq!(builder.segments().len(), 1);
//! ```
//!
//! The scalar type must satisfy `nalgebra::RealField` and `num_traits::Float`
//! (e.g. `f32` or `f64`).

use nalgebra::{RealField, Vector2};
use num_traits::Float;

use crate::point::Point;

impl<T> Point for Vector2<T>
where
    T: RealField + Float + Default,
{
    type Scalar = T;

    fn x(&self) -> Self::Scalar {
        self[0]
    }

    fn y(&self) -> Self::Scalar {
        self[1]
    }
}
