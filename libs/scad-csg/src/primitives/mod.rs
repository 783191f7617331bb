//! # Primitive Builder
//!
//! Validated constructors for the base shapes. Boxes default to a corner
//! origin; cylinders always sit on their own axis, with `center` choosing
//! whether the base or the mid-height is on the XY plane.


use glam::DVec3;

use crate::error::{CsgError, CsgResult};
use crate::solid::{Primitive, Solid};

/// Creates a box of `size` = [width, depth, height].
///
/// # Errors
///
/// [`CsgError::NonPositive`] naming `width`, `depth` or `height` when a side
/// is zero, negative or not finite.
///
/// # Examples
/// ```
/// use scad_csg::cube;
///
/// assert!(cube([165.0, 7.0, 123.0], false).is_ok());
/// assert!(cube([165.0, 0.0, 123.0], false).is_err());
/// ```
pub fn cube(size: impl Into<DVec3>, center: bool) -> CsgResult<Solid> {
    let size = size.into();
    positive("width", size.x)?;
    positive("depth", size.y)?;
    positive("height", size.z)?;
    Ok(Primitive::Cube { size, center }.into())
}

/// Creates a straight cylinder from its diameter.
///
/// # Examples
/// ```
/// use scad_csg::{cylinder, Solid, Primitive};
///
/// let pin = cylinder(3.0, 12.0, false).unwrap();
/// match pin {
///     Solid::Primitive(p) => assert_eq!(p.diameter(), Some(3.0)),
///     _ => unreachable!(),
/// }
/// ```
pub fn cylinder(diameter: f64, height: f64, center: bool) -> CsgResult<Solid> {
    positive("diameter", diameter)?;
    positive("height", height)?;
    let radius = diameter / 2.0;
    Ok(Primitive::Cylinder {
        height,
        radius1: radius,
        radius2: radius,
        center,
    }
    .into())
}

/// Creates a (possibly truncated) cone from bottom and top radii.
pub fn cone(radius1: f64, radius2: f64, height: f64, center: bool) -> CsgResult<Solid> {
    positive("radius1", radius1)?;
    positive("radius2", radius2)?;
    positive("height", height)?;
    Ok(Primitive::Cylinder {
        height,
        radius1,
        radius2,
        center,
    }
    .into())
}

fn positive(parameter: &'static str, value: f64) -> CsgResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CsgError::NonPositive { parameter, value })
    }
}
