//! Front panel: a closed rectangular frame of two rails and two stiles.

use scad_csg::{cube, union};
use tracing::debug;

use super::{Part, PartKind};
use crate::dimensions::Dimensions;
use crate::error::CaseResult;

/// Build the front panel frame.
///
/// The rails span the outer width; the stiles span the full panel height.
/// The top rail is the bottom rail moved to the top edge, the right stile
/// is the left stile moved to `outer_width - side_margin`. No holes are cut
/// at this stage.
pub fn front_panel(dims: &Dimensions) -> CaseResult<Part> {
    dims.validate()?;

    let width = dims.outer_width();
    let depth = dims.front_panel_depth();

    let bottom = cube([width, depth, dims.front_rail_height], false)?.color("salmon");
    let top = bottom
        .clone()
        .translate([0.0, 0.0, dims.panel_height - dims.front_rail_height])?;

    let left = cube([dims.front_side_margin, depth, dims.panel_height], false)?.color("tomato");
    let right = left
        .clone()
        .translate([width - dims.front_side_margin, 0.0, 0.0])?;

    debug!(outer_width = width, depth, "Built front panel");
    let frame = union([top, bottom, left, right])?;
    Ok(Part::new(PartKind::FrontPanel, vec![("frame", frame)]))
}
