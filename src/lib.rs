//! Incremental cubic spline construction for 2D point streams.
//!
//! A [`SplineBuilder`] takes points one at a time (for example the samples of a
//! drawing gesture) and emits the cubic Bezier [`Segment`]s interpolating them as
//! soon as later points fix their shape. Only a short trailing window of knots
//! is re-solved per point and segments are never modified once committed, so an
//! incremental renderer can draw each new segment and forget about it.
//!
//! The crate is `#![no_std]` (it requires `alloc`) and generic over the [`Point`]
//! trait; [`Point2`] is the built-in implementation, and the `nalgebra` feature
//! adds one for `nalgebra::Vector2`.
//!
//! ```rust
//! use stroke_spline::{PathInstruction, Point2, SplineBuilder};
//!
//! let mut builder = SplineBuilder::new(Point2::new(0.0, 0.0));
//! for (x, y) in [(1.0, 1.0), (3.0, 4.0), (10.0, 2.0)] {
//!     if builder.add(Point2::new(x, y))? {
//!         let newest = builder.curves().last().unwrap();
//!         println!("draw {:?}", newest);
//!     }
//! }
//! builder.close()?;
//!
//! let path = builder.materialize_path()?;
//! for instruction in path.instructions() {
//!     match instruction {
//!         PathInstruction::MoveTo(p) => println!("move to {:?}", p),
//!         PathInstruction::CurveTo { to, control1, control2 } => {
//!             println!("curve to {:?} via {:?} {:?}", to, control1, control2)
//!         }
//!     }
//! }
//! # Ok::<(), stroke_spline::SplineError>(())
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod adapters;
pub mod builder;
pub mod cubic_bezier;
pub mod error;
pub mod path;
pub mod point;
pub mod point2;
pub mod segment;
pub mod solver;
pub mod spline;

pub use builder::{Curves, SplineBuilder};
pub use cubic_bezier::CubicBezier;
pub use error::SplineError;
pub use path::{Path, PathInstruction};
pub use point::Point;
pub use point2::Point2;
pub use segment::Segment;
pub use solver::{solve, Segments, WINDOW_CAPACITY};
pub use spline::Spline;
