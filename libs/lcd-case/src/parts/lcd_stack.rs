//! LCD stack: the driver board behind the LCD layer.
//!
//! The two boxes occupy disjoint depth ranges, so their union needs no
//! subtraction.

use scad_csg::cube;
use tracing::debug;

use super::{Part, PartKind};
use crate::dimensions::Dimensions;
use crate::error::CaseResult;

/// Build the LCD stack.
///
/// Groups: `board` (full panel, behind the LCD layer) and `lcd` (between
/// the bezels, at the front).
pub fn lcd_stack(dims: &Dimensions) -> CaseResult<Part> {
    dims.validate()?;

    let board = cube([dims.panel_width, dims.board_depth(), dims.panel_height], false)?
        .translate([0.0, dims.lcd_depth, 0.0])?
        .color("midnightblue");

    let lcd = cube([dims.panel_width, dims.lcd_depth, dims.lcd_height()], false)?
        .translate([0.0, 0.0, dims.front_bottom_clearance])?
        .color("dimgray");

    debug!(
        board_depth = dims.board_depth(),
        lcd_height = dims.lcd_height(),
        "Built LCD stack"
    );
    Ok(Part::new(PartKind::LcdStack, vec![("board", board), ("lcd", lcd)]))
}
