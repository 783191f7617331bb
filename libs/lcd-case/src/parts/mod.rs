//! # Composite Assembler
//!
//! One pure builder per case part. Each builder takes the dimension set and
//! returns a [`Part`] in its own local frame, with the origin at the part's
//! natural reference corner. Placement into the assembly frame happens in
//! [`crate::scene`].
//!
//! ## Axes
//!
//! - X: panel width, left to right
//! - Y: depth, front (viewer side) to back
//! - Z: panel height, bottom to top

pub mod back_panel;
pub mod front_panel;
pub mod lcd_stack;
pub mod panel_mount;
pub mod screw_pins;
pub mod screw_test;


use scad_csg::{union, CsgResult, Solid};

pub use back_panel::back_panel;
pub use front_panel::front_panel;
pub use lcd_stack::lcd_stack;
pub use panel_mount::panel_mount_boss;
pub use screw_pins::screw_pins;
pub use screw_test::screw_test;

/// Axis the pins and bosses are rotated about to point along +Y.
pub(crate) const X_AXIS: [f64; 3] = [1.0, 0.0, 0.0];

/// Which part of the case a [`Part`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    /// Driver board and LCD layer.
    LcdStack,
    /// Rectangular frame in front of the LCD.
    FrontPanel,
    /// Banded back plate with mounting bosses.
    BackPanel,
    /// Corner and panel-mount screw pins.
    ScrewPins,
    /// Half-round stand with a screw clearance hole.
    PanelMountBoss,
    /// Thin frame used to measure the screw hole positions.
    ScrewTest,
}

impl PartKind {
    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            PartKind::LcdStack => "lcd_stack",
            PartKind::FrontPanel => "front_panel",
            PartKind::BackPanel => "back_panel",
            PartKind::ScrewPins => "screw_pins",
            PartKind::PanelMountBoss => "panel_mount_boss",
            PartKind::ScrewTest => "screw_test",
        }
    }
}

/// A named sub-solid of a part.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Group name, unique within its part.
    pub name: &'static str,
    /// Group geometry.
    pub solid: Solid,
}

/// A named solid built by one assembler function.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    /// Which part this is.
    pub kind: PartKind,
    /// Named groups, combined by union in order.
    pub groups: Vec<Group>,
}

impl Part {
    pub(crate) fn new(kind: PartKind, groups: Vec<(&'static str, Solid)>) -> Self {
        Self {
            kind,
            groups: groups
                .into_iter()
                .map(|(name, solid)| Group { name, solid })
                .collect(),
        }
    }

    /// Geometry of the group called `name`.
    pub fn group(&self, name: &str) -> Option<&Solid> {
        self.groups.iter().find(|g| g.name == name).map(|g| &g.solid)
    }

    /// Union of all groups.
    pub fn into_solid(self) -> CsgResult<Solid> {
        union(self.groups.into_iter().map(|g| g.solid))
    }
}
