//! Screw test fixture: a thin open frame carrying the four corner pins,
//! printed to check the measured screw hole positions against the board.

use scad_csg::{cube, difference, union, CsgResult};
use tracing::debug;

use super::screw_pins::{corner_offsets, pin};
use super::{Part, PartKind};
use crate::dimensions::Dimensions;
use crate::error::CaseResult;

/// Build the screw test fixture.
///
/// Groups: `frame` (panel-sized plate with the inner area cut out) and
/// `pins` (boss-depth corner pins reaching forward of the frame).
pub fn screw_test(dims: &Dimensions) -> CaseResult<Part> {
    dims.validate()?;

    let border = dims.screw_test_border;
    let thickness = dims.screw_test_thickness;
    let plate = cube([dims.panel_width, thickness, dims.panel_height], false)?;
    let opening = cube(
        [
            dims.panel_width - border * 2.0,
            thickness,
            dims.panel_height - border * 2.0,
        ],
        false,
    )?
    .translate([border, 0.0, border])?;
    let frame = difference(plate, opening);

    let depth = dims.back_mount_depth;
    let pin = pin(dims, depth)?;
    let pins = corner_offsets(dims)
        .into_iter()
        .map(|(_, left, bottom)| pin.clone().translate([left, -depth, bottom]))
        .collect::<CsgResult<Vec<_>>>()?;
    let pins = union(pins)?;

    debug!(border, thickness, "Built screw test fixture");
    Ok(Part::new(
        PartKind::ScrewTest,
        vec![("frame", frame), ("pins", pins)],
    ))
}
