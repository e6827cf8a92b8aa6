//! Exact solver for the 2D rectangular Strip Packing Problem, based on a disjunctive Big-M MILP formulation.
//!
//! Rectangles of fixed orientation are packed into a strip of fixed width (the tallest rectangle)
//! such that the used strip length is minimized.

/// Coordinate domains and Big-M constants derived from an instance
pub mod bounds;

/// Entities to model the Strip Packing Problem
pub mod entities;

/// Error taxonomy of the library
pub mod error;

/// Mapping solver values back onto rectangles
pub mod extract;

/// Axis-aligned geometry and the non-overlap relations
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Generic MILP representation and the strip packing formulation on top of it
pub mod model;

/// End-to-end packing pipeline
pub mod packer;

/// Solver boundary and its implementations
pub mod solver;

/// Helper functions which do not belong to any specific module
pub mod util;

/// Independent validation of solved layouts
pub mod validate;
