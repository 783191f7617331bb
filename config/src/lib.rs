//! # Config Crate
//!
//! Centralized configuration constants for the LCD display case generator.
//! Every measured length and every rendering default is defined here once,
//! so the part builders never carry magic numbers of their own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_FACETS, PANEL_WIDTH, FRONT_SIDE_MARGIN};
//!
//! let outer_width = PANEL_WIDTH + 2.0 * FRONT_SIDE_MARGIN;
//! assert_eq!(outer_width, 175.0);
//! assert_eq!(DEFAULT_FACETS, 32);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimeters and Degrees**: Lengths in mm, angles in degrees
//! - **OpenSCAD Compatible**: Rendering defaults map directly to `$fn`

pub mod constants;

#[cfg(test)]
mod tests;
