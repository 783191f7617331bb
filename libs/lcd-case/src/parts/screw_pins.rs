//! Screw pins: four corner pins matching the LCD board's screw holes plus
//! two pins for the panel mount.
//!
//! The corner positions were measured by hand on the board and are not
//! symmetric. They are kept as literal offsets of the pin's lower-left
//! corner from the panel's lower-left corner.

use scad_csg::{cylinder, union, CsgResult, Solid};
use tracing::debug;

use super::{Part, PartKind, X_AXIS};
use crate::dimensions::Dimensions;
use crate::error::CaseResult;

// =============================================================================
// CALIBRATION
// =============================================================================

/// Left edge to the left pins.
pub(crate) const LEFT_INSET: f64 = 2.0;
/// Right edge to the bottom-right pin.
pub(crate) const RIGHT_INSET_BOTTOM: f64 = 2.2;
/// Right edge to the top-right pin.
pub(crate) const RIGHT_INSET_TOP: f64 = 2.6;
/// Bottom edge to the bottom pins.
pub(crate) const BOTTOM_INSET: f64 = 3.5;
/// Top edge to the top pins.
pub(crate) const TOP_INSET: f64 = 2.3;

/// A panel corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Bottom left.
    BottomLeft,
    /// Bottom right.
    BottomRight,
    /// Top left.
    TopLeft,
    /// Top right.
    TopRight,
}

/// Measured `(left, bottom)` offset of each corner pin's lower-left edge.
pub fn corner_offsets(dims: &Dimensions) -> [(Corner, f64, f64); 4] {
    let d = dims.screw_hole_diameter;
    let w = dims.panel_width;
    let h = dims.panel_height;
    [
        (Corner::BottomLeft, LEFT_INSET, BOTTOM_INSET),
        (Corner::BottomRight, w - RIGHT_INSET_BOTTOM - d, BOTTOM_INSET),
        (Corner::TopLeft, LEFT_INSET, h - TOP_INSET - d),
        (Corner::TopRight, w - RIGHT_INSET_TOP - d, h - TOP_INSET - d),
    ]
}

/// A pin of `length` along +Y whose lower-left edge touches the origin.
pub(crate) fn pin(dims: &Dimensions, length: f64) -> CsgResult<Solid> {
    let r = dims.screw_radius();
    Ok(cylinder(dims.screw_hole_diameter, length, false)?
        .rotate(-90.0, X_AXIS)?
        .translate([r, 0.0, r])?
        .color("purple"))
}

// =============================================================================
// BUILDER
// =============================================================================

/// Build the screw pins.
///
/// Groups: `panel_pins` (the four corners, in top-left, top-right,
/// bottom-left, bottom-right order) and `mount_pins` (one centered on the
/// bottom edge, one centered vertically near the middle band's edge).
pub fn screw_pins(dims: &Dimensions) -> CaseResult<Part> {
    dims.validate()?;

    let pin = pin(dims, dims.screw_pin_length)?;
    let [bottom_left, bottom_right, top_left, top_right] =
        corner_offsets(dims).map(|(_, left, bottom)| pin.clone().translate([left, 0.0, bottom]));
    let panel_pins = union([top_left?, top_right?, bottom_left?, bottom_right?])?;

    let r = dims.screw_radius();
    let bottom_pin = pin.clone().translate([
        dims.panel_width / 2.0 - r,
        dims.mount_pin_depth,
        dims.mount_pin_inset,
    ])?;
    let side_pin = pin.translate([
        dims.back_middle_band_width - dims.mount_pin_inset,
        dims.mount_pin_depth,
        dims.panel_height / 2.0 - r,
    ])?;
    let mount_pins = union([bottom_pin, side_pin])?;

    debug!(
        diameter = dims.screw_hole_diameter,
        length = dims.screw_pin_length,
        "Built screw pins"
    );
    Ok(Part::new(
        PartKind::ScrewPins,
        vec![("panel_pins", panel_pins), ("mount_pins", mount_pins)],
    ))
}
