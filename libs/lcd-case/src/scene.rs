//! # Scene Composer
//!
//! Places each part into the shared assembly frame and combines the placed
//! parts with one of the named scene expressions.
//!
//! ## Assembly Frame
//!
//! The front panel defines the origin. With side margin `m`, panel depth
//! `D`, boss depth `Dm` and assembly clearance `c`:
//!
//! ```text
//! front_panel        (0, 0, 0)
//! lcd_stack          (m, c, c)
//! back_panel         (m, D - Dm + c, c)
//! panel_mount_boss   (m, D - Dm + c, c)
//! screw_pins         (m, Dm + c, c)
//! screw_test         (0, 0, 0)
//! ```

use std::fmt;
use std::str::FromStr;

use config::constants::DEFAULT_FACETS;
use glam::DVec3;
use scad_csg::{difference, render, union, Solid};
use tracing::info;

use crate::dimensions::Dimensions;
use crate::error::{CaseError, CaseResult};
use crate::parts::{
    back_panel, front_panel, lcd_stack, panel_mount_boss, screw_pins, screw_test, Part, PartKind,
};

// =============================================================================
// PLACED PARTS
// =============================================================================

/// All parts, each moved into the assembly frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedParts {
    /// Driver board and LCD layer.
    pub lcd_stack: Solid,
    /// Front frame.
    pub front_panel: Solid,
    /// Back plate and bosses.
    pub back_panel: Solid,
    /// Corner and mount pins.
    pub screw_pins: Solid,
    /// Stand.
    pub panel_mount_boss: Solid,
    /// Screw-hole measuring frame.
    pub screw_test: Solid,
}

/// Assembly-frame offset of a part.
pub fn placement(kind: PartKind, dims: &Dimensions) -> DVec3 {
    let m = dims.front_side_margin;
    let c = dims.assembly_clearance;
    let back = dims.panel_depth - dims.back_mount_depth + c;
    match kind {
        PartKind::FrontPanel | PartKind::ScrewTest => DVec3::ZERO,
        PartKind::LcdStack => DVec3::new(m, c, c),
        PartKind::BackPanel | PartKind::PanelMountBoss => DVec3::new(m, back, c),
        PartKind::ScrewPins => DVec3::new(m, dims.back_mount_depth + c, c),
    }
}

fn place(part: Part, dims: &Dimensions) -> CaseResult<Solid> {
    let offset = placement(part.kind, dims);
    let solid = part.into_solid()?;
    if offset == DVec3::ZERO {
        Ok(solid)
    } else {
        Ok(solid.translate(offset)?)
    }
}

impl PlacedParts {
    /// Validate `dims`, build every part and place it.
    pub fn build(dims: &Dimensions) -> CaseResult<Self> {
        dims.validate()?;
        Ok(Self {
            lcd_stack: place(lcd_stack(dims)?, dims)?,
            front_panel: place(front_panel(dims)?, dims)?,
            back_panel: place(back_panel(dims)?, dims)?,
            screw_pins: place(screw_pins(dims)?, dims)?,
            panel_mount_boss: place(panel_mount_boss(dims)?, dims)?,
            screw_test: place(screw_test(dims)?, dims)?,
        })
    }
}

// =============================================================================
// SCENE VARIANTS
// =============================================================================

/// A named boolean expression over the placed parts.
///
/// [`SceneVariant::PanelMountMinusPins`] is the production default; the
/// rest are the expressions used while iterating on the design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneVariant {
    /// `screw_test`
    ScrewTest,
    /// `lcd_stack + screw_test`
    LcdWithScrewTest,
    /// `lcd_stack + front_panel`
    LcdWithFrontPanel,
    /// `front_panel`
    FrontPanel,
    /// `lcd_stack + screw_pins`
    LcdWithScrewPins,
    /// `back_panel + screw_pins`
    BackPanelWithScrewPins,
    /// `front_panel + back_panel`
    FrontAndBackPanels,
    /// `lcd_stack + back_panel`
    LcdWithBackPanel,
    /// `lcd_stack + front_panel + back_panel + screw_pins`
    FullAssembly,
    /// `(front_panel + back_panel) - screw_pins`
    PanelsMinusPins,
    /// `back_panel - screw_pins`
    BackPanelMinusPins,
    /// `panel_mount_boss - screw_pins`
    #[default]
    PanelMountMinusPins,
    /// `front_panel - screw_pins`
    FrontPanelMinusPins,
    /// `(front_panel + back_panel + panel_mount_boss) - screw_pins`
    EnclosureMinusPins,
}

impl SceneVariant {
    /// Every variant, in design-iteration order.
    pub const ALL: [SceneVariant; 14] = [
        SceneVariant::ScrewTest,
        SceneVariant::LcdWithScrewTest,
        SceneVariant::LcdWithFrontPanel,
        SceneVariant::FrontPanel,
        SceneVariant::LcdWithScrewPins,
        SceneVariant::BackPanelWithScrewPins,
        SceneVariant::FrontAndBackPanels,
        SceneVariant::LcdWithBackPanel,
        SceneVariant::FullAssembly,
        SceneVariant::PanelsMinusPins,
        SceneVariant::BackPanelMinusPins,
        SceneVariant::PanelMountMinusPins,
        SceneVariant::FrontPanelMinusPins,
        SceneVariant::EnclosureMinusPins,
    ];

    /// The variant the binary always exports.
    pub const PRODUCTION: SceneVariant = SceneVariant::PanelMountMinusPins;

    /// Stable name, spelled as the expression it builds.
    pub fn name(self) -> &'static str {
        match self {
            SceneVariant::ScrewTest => "screw_test",
            SceneVariant::LcdWithScrewTest => "lcd_stack+screw_test",
            SceneVariant::LcdWithFrontPanel => "lcd_stack+front_panel",
            SceneVariant::FrontPanel => "front_panel",
            SceneVariant::LcdWithScrewPins => "lcd_stack+screw_pins",
            SceneVariant::BackPanelWithScrewPins => "back_panel+screw_pins",
            SceneVariant::FrontAndBackPanels => "front_panel+back_panel",
            SceneVariant::LcdWithBackPanel => "lcd_stack+back_panel",
            SceneVariant::FullAssembly => "lcd_stack+front_panel+back_panel+screw_pins",
            SceneVariant::PanelsMinusPins => "front_panel+back_panel-screw_pins",
            SceneVariant::BackPanelMinusPins => "back_panel-screw_pins",
            SceneVariant::PanelMountMinusPins => "panel_mount_boss-screw_pins",
            SceneVariant::FrontPanelMinusPins => "front_panel-screw_pins",
            SceneVariant::EnclosureMinusPins => {
                "front_panel+back_panel+panel_mount_boss-screw_pins"
            }
        }
    }

    /// Build this variant's expression from placed parts.
    ///
    /// Operands are cloned; `parts` is left untouched.
    pub fn compose(self, parts: &PlacedParts) -> CaseResult<Solid> {
        let p = parts.clone();
        let solid = match self {
            SceneVariant::ScrewTest => p.screw_test,
            SceneVariant::LcdWithScrewTest => union([p.lcd_stack, p.screw_test])?,
            SceneVariant::LcdWithFrontPanel => union([p.lcd_stack, p.front_panel])?,
            SceneVariant::FrontPanel => p.front_panel,
            SceneVariant::LcdWithScrewPins => union([p.lcd_stack, p.screw_pins])?,
            SceneVariant::BackPanelWithScrewPins => union([p.back_panel, p.screw_pins])?,
            SceneVariant::FrontAndBackPanels => union([p.front_panel, p.back_panel])?,
            SceneVariant::LcdWithBackPanel => union([p.lcd_stack, p.back_panel])?,
            SceneVariant::FullAssembly => union([
                union([p.lcd_stack, p.front_panel, p.back_panel])?,
                p.screw_pins,
            ])?,
            SceneVariant::PanelsMinusPins => {
                difference(union([p.front_panel, p.back_panel])?, p.screw_pins)
            }
            SceneVariant::BackPanelMinusPins => difference(p.back_panel, p.screw_pins),
            SceneVariant::PanelMountMinusPins => difference(p.panel_mount_boss, p.screw_pins),
            SceneVariant::FrontPanelMinusPins => difference(p.front_panel, p.screw_pins),
            SceneVariant::EnclosureMinusPins => difference(
                union([p.front_panel, p.back_panel, p.panel_mount_boss])?,
                p.screw_pins,
            ),
        };
        Ok(solid)
    }
}

impl fmt::Display for SceneVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneVariant {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneVariant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| CaseError::UnknownVariant(s.to_string()))
    }
}

// =============================================================================
// SCENE
// =============================================================================

/// Root solid plus the global facet count, ready for export.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Expression this scene was built from.
    pub variant: SceneVariant,
    /// Root of the solid tree.
    pub root: Solid,
    /// Global `$fn`.
    pub facets: u32,
}

impl Scene {
    /// Build `variant` from `dims` at the default facet count.
    ///
    /// ```rust
    /// use lcd_case::{Dimensions, Scene, SceneVariant};
    ///
    /// let scene = Scene::build(&Dimensions::default(), SceneVariant::FrontPanel).unwrap();
    /// assert_eq!(scene.facets, 32);
    /// ```
    pub fn build(dims: &Dimensions, variant: SceneVariant) -> CaseResult<Self> {
        let parts = PlacedParts::build(dims)?;
        let root = variant.compose(&parts)?;
        info!(
            variant = variant.name(),
            primitives = root.primitive_count(),
            "Composed scene"
        );
        Ok(Self {
            variant,
            root,
            facets: DEFAULT_FACETS,
        })
    }

    /// Build the production scene.
    pub fn production(dims: &Dimensions) -> CaseResult<Self> {
        Self::build(dims, SceneVariant::PRODUCTION)
    }

    /// Same scene with a different facet count.
    pub fn with_facets(self, facets: u32) -> Self {
        Self { facets, ..self }
    }

    /// OpenSCAD source for this scene.
    pub fn render(&self) -> String {
        render(&self.root, self.facets)
    }
}

// =============================================================================
// TESTS
// =============================================================================
