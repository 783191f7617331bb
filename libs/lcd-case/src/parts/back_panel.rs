//! Back panel: three stacked bands plus four corner mounting bosses.
//!
//! The bands sit one boss depth behind the bosses; the bosses start at
//! y = 0 and run back along +Y. The assembly clearance in front of the
//! bosses is applied by the scene composer.

use scad_csg::{cube, cylinder, union};
use tracing::debug;

use super::{Part, PartKind, X_AXIS};
use crate::dimensions::Dimensions;
use crate::error::CaseResult;

/// Build the back panel.
///
/// Groups: `panel` (top, bottom and middle bands) and `mount` (the four
/// bosses). Band heights sum to the panel height; each boss is tangent to
/// both adjacent panel edges.
pub fn back_panel(dims: &Dimensions) -> CaseResult<Part> {
    dims.validate()?;

    let width = dims.panel_width;
    let height = dims.panel_height;
    let top_h = dims.back_top_band_height;
    let bot_h = dims.back_bottom_band_height;
    let mid_h = dims.back_middle_band_height();

    let top = cube([width, dims.back_panel_depth, top_h], false)?
        .translate([0.0, 0.0, height - top_h])?;
    let bottom = cube([width, dims.back_panel_depth, bot_h], false)?;
    let middle = cube([dims.back_middle_band_width, dims.back_panel_depth, mid_h], false)?
        .translate([0.0, 0.0, height - top_h - mid_h])?;
    let panel = union([top, bottom, middle])?.translate([0.0, dims.back_mount_depth, 0.0])?;

    let diameter = dims.back_mount_diameter();
    let offset = diameter / 2.0;
    let boss = cylinder(diameter, dims.back_mount_depth, false)?.rotate(-90.0, X_AXIS)?;
    let left_x = offset;
    let right_x = (width - diameter) + offset;
    let bottom_z = offset;
    let top_z = (height - diameter) + offset;

    let mount = union([
        boss.clone().translate([right_x, 0.0, top_z])?,
        boss.clone().translate([left_x, 0.0, top_z])?,
        boss.clone().translate([right_x, 0.0, bottom_z])?,
        boss.translate([left_x, 0.0, bottom_z])?,
    ])?;

    debug!(
        top_h,
        mid_h,
        bot_h,
        boss_diameter = diameter,
        "Built back panel"
    );
    Ok(Part::new(
        PartKind::BackPanel,
        vec![("panel", panel), ("mount", mount)],
    ))
}
