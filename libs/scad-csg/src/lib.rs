//! # SCAD CSG
//!
//! Immutable constructive-solid-geometry tree and its OpenSCAD printer.
//!
//! ## Architecture
//!
//! ```text
//! primitives (cube, cylinder, cone) → Solid::translate / rotate / color
//!     → union / difference → printer::render → OpenSCAD source
//! ```
//!
//! ## Example
//!
//! ```rust
//! use scad_csg::{cube, cylinder, difference, render};
//!
//! let plate = cube([20.0, 2.0, 20.0], false).unwrap();
//! let hole = cylinder(3.0, 2.0, false)
//!     .unwrap()
//!     .rotate(-90.0, [1.0, 0.0, 0.0])
//!     .unwrap()
//!     .translate([10.0, 0.0, 10.0])
//!     .unwrap();
//! let text = render(&difference(plate, hole), 32);
//! assert!(text.contains("difference() {"));
//! ```
//!
//! ## Design Principles
//!
//! - **Immutable**: Builders consume operands and return new nodes
//! - **Validated**: Primitives reject non-positive sizes up front
//! - **No Meshing**: Geometry is queried through transforms and bounds only

pub mod error;
pub mod placement;
pub mod primitives;
pub mod printer;
pub mod solid;

// Re-export public API
pub use error::{CsgError, CsgResult};
pub use placement::{Aabb, PlacedPrimitive};
pub use primitives::{cone, cube, cylinder};
pub use printer::{header, print, render};
pub use solid::{difference, union, BooleanOperation, Primitive, Solid};
