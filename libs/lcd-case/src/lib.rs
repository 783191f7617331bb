//! # LCD Case
//!
//! Parametric enclosure for a 7" LCD module, emitted as an OpenSCAD scene.
//!
//! ## Architecture
//!
//! ```text
//! Dimensions → parts (×6, local frames) → scene (placement + variant)
//!     → scad_csg::render → export::write_scene
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lcd_case::{Dimensions, Scene};
//!
//! let scene = Scene::production(&Dimensions::default()).unwrap();
//! let text = scene.render();
//! assert!(text.starts_with("$fn = 32;"));
//! ```

pub mod dimensions;
pub mod error;
pub mod export;
pub mod parts;
pub mod scene;

// Re-export public API
pub use dimensions::Dimensions;
pub use error::{CaseError, CaseResult, DimensionError};
pub use parts::{Part, PartKind};
pub use scene::{PlacedParts, Scene, SceneVariant};
