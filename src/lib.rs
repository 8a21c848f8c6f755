/*!
polyclip2d
==========

**polyclip2d** is a 2-dimensional polygon clipping library written with
the rust programming language.

It represents a simple polygon as one closed ring of points and computes
its area and winding order, as well as boolean operations (union,
intersection, difference) between two such polygons.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]

#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod shape;
pub mod transformation;
pub mod utils;

/// Aliases for mathematical types.
pub mod math {
    pub use na::{Point2, Vector2};

    /// The scalar type used throughout this crate.
    pub type Real = f64;

    /// The default tolerance used for geometric operations.
    ///
    /// This is an absolute epsilon for coordinates of magnitude one or
    /// less; every comparison scales it by the magnitude of the involved
    /// coordinates.
    pub const DEFAULT_EPSILON: Real = 1.0e-9;

    /// The point type.
    pub type Point<N> = Point2<N>;

    /// The vector type.
    pub type Vector<N> = Vector2<N>;
}
