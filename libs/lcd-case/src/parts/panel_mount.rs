//! Panel-mount boss: a half-round stand under the back plate with a
//! clearance hole for the stand screw.

use scad_csg::{cone, cube, cylinder, difference};
use tracing::debug;

use super::{Part, PartKind};
use crate::dimensions::Dimensions;
use crate::error::CaseResult;

/// Build the panel-mount boss.
///
/// The stand is a cone with a box cut off its front half, centered on the
/// panel width one assembly clearance behind the bosses. The clearance
/// cylinder sits on the same center line, set back behind the back plate,
/// and is subtracted from the stand.
pub fn panel_mount_boss(dims: &Dimensions) -> CaseResult<Part> {
    dims.validate()?;

    let r = dims.stand_radius;
    let h = dims.stand_height;
    let center_x = dims.panel_width / 2.0;

    let cut = cube([r * 2.0, r, h], false)?
        .translate([0.0, -r, 0.0])?
        .color("red");
    let stand = cone(r, r, h, false)?.translate([r, 0.0, 0.0])?;
    let stand = difference(stand, cut).translate([
        center_x - r,
        dims.back_mount_depth + dims.assembly_clearance,
        0.0,
    ])?;

    let screw = cylinder(dims.stand_screw_diameter, dims.stand_screw_length, false)?
        .translate([
            center_x,
            dims.back_mount_depth + dims.back_panel_depth + dims.stand_screw_setback,
            0.0,
        ])?
        .color("red");

    debug!(radius = r, height = h, center_x, "Built panel-mount boss");
    Ok(Part::new(
        PartKind::PanelMountBoss,
        vec![("stand", difference(stand, screw))],
    ))
}
