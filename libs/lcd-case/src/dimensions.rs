//! # Dimension Set
//!
//! The single immutable configuration object threaded into every part
//! builder. Defaults come from [`config::constants`]; [`Dimensions::validate`]
//! rejects any set whose derived lengths would leave the panel envelope.

use config::constants::*;

use crate::error::DimensionError;
use crate::parts::screw_pins::{BOTTOM_INSET, LEFT_INSET, RIGHT_INSET_TOP, TOP_INSET};

/// Measured physical dimensions of the LCD module and its case, in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Screw hole diameter of the LCD board.
    pub screw_hole_diameter: f64,
    /// Length of a screw pin.
    pub screw_pin_length: f64,

    /// Total width of the LCD module.
    pub panel_width: f64,
    /// Total height of the LCD module.
    pub panel_height: f64,
    /// Total depth of the LCD module.
    pub panel_depth: f64,
    /// Depth of the LCD layer.
    pub lcd_depth: f64,

    /// Front panel depth beyond the LCD layer.
    pub front_panel_lip: f64,
    /// Bezel above the visible area.
    pub front_top_clearance: f64,
    /// Bezel below the visible area.
    pub front_bottom_clearance: f64,
    /// Width of the frame stiles.
    pub front_side_margin: f64,
    /// Height of the frame rails.
    pub front_rail_height: f64,

    /// Back plate thickness.
    pub back_panel_depth: f64,
    /// Mounting boss depth.
    pub back_mount_depth: f64,
    /// Mounting boss diameter over the screw hole.
    pub back_mount_clearance: f64,
    /// Top band height.
    pub back_top_band_height: f64,
    /// Bottom band height.
    pub back_bottom_band_height: f64,
    /// Middle band width.
    pub back_middle_band_width: f64,

    /// Gap between assembled parts.
    pub assembly_clearance: f64,
    /// Inset of the panel-mount pins.
    pub mount_pin_inset: f64,
    /// Depth offset of the panel-mount pins.
    pub mount_pin_depth: f64,

    /// Stand radius.
    pub stand_radius: f64,
    /// Stand height.
    pub stand_height: f64,
    /// Stand screw clearance diameter.
    pub stand_screw_diameter: f64,
    /// Stand screw clearance length.
    pub stand_screw_length: f64,
    /// Stand screw setback behind the back plate.
    pub stand_screw_setback: f64,

    /// Border of the screw-hole measuring frame.
    pub screw_test_border: f64,
    /// Thickness of the screw-hole measuring frame.
    pub screw_test_thickness: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            screw_hole_diameter: SCREW_HOLE_DIAMETER,
            screw_pin_length: SCREW_PIN_LENGTH,
            panel_width: PANEL_WIDTH,
            panel_height: PANEL_HEIGHT,
            panel_depth: PANEL_DEPTH,
            lcd_depth: PANEL_LCD_DEPTH,
            front_panel_lip: FRONT_PANEL_LIP,
            front_top_clearance: FRONT_TOP_CLEARANCE,
            front_bottom_clearance: FRONT_BOTTOM_CLEARANCE,
            front_side_margin: FRONT_SIDE_MARGIN,
            front_rail_height: FRONT_RAIL_HEIGHT,
            back_panel_depth: BACK_PANEL_DEPTH,
            back_mount_depth: BACK_MOUNT_DEPTH,
            back_mount_clearance: BACK_MOUNT_CLEARANCE,
            back_top_band_height: BACK_TOP_BAND_HEIGHT,
            back_bottom_band_height: BACK_BOTTOM_BAND_HEIGHT,
            back_middle_band_width: BACK_MIDDLE_BAND_WIDTH,
            assembly_clearance: ASSEMBLY_CLEARANCE,
            mount_pin_inset: MOUNT_PIN_INSET,
            mount_pin_depth: MOUNT_PIN_DEPTH,
            stand_radius: STAND_RADIUS,
            stand_height: STAND_HEIGHT,
            stand_screw_diameter: STAND_SCREW_DIAMETER,
            stand_screw_length: STAND_SCREW_LENGTH,
            stand_screw_setback: STAND_SCREW_SETBACK,
            screw_test_border: SCREW_TEST_BORDER,
            screw_test_thickness: SCREW_TEST_THICKNESS,
        }
    }
}

impl Dimensions {
    // =========================================================================
    // DERIVED LENGTHS
    // =========================================================================

    /// Depth of the driver board behind the LCD layer.
    pub fn board_depth(&self) -> f64 {
        self.panel_depth - self.lcd_depth
    }

    /// Height of the LCD layer between the top and bottom bezels.
    pub fn lcd_height(&self) -> f64 {
        self.panel_height - self.front_top_clearance - self.front_bottom_clearance
    }

    /// Depth of the front panel frame.
    pub fn front_panel_depth(&self) -> f64 {
        self.lcd_depth + self.front_panel_lip
    }

    /// Width of the front panel including both stiles.
    pub fn outer_width(&self) -> f64 {
        self.panel_width + 2.0 * self.front_side_margin
    }

    /// Diameter of a back-panel mounting boss.
    pub fn back_mount_diameter(&self) -> f64 {
        self.screw_hole_diameter + self.back_mount_clearance
    }

    /// Height of the back plate's middle band.
    ///
    /// Top, middle and bottom bands sum to the panel height.
    pub fn back_middle_band_height(&self) -> f64 {
        self.panel_height - (self.back_bottom_band_height + self.back_top_band_height)
    }

    /// Radius of a screw pin.
    pub fn screw_radius(&self) -> f64 {
        self.screw_hole_diameter / 2.0
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Check that every length is positive and every derived size fits the
    /// panel envelope.
    ///
    /// ```rust
    /// use lcd_case::Dimensions;
    ///
    /// assert!(Dimensions::default().validate().is_ok());
    ///
    /// let flat = Dimensions { panel_depth: 0.0, ..Dimensions::default() };
    /// assert!(flat.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), DimensionError> {
        for (parameter, value) in self.measured() {
            if !(value.is_finite() && value > 0.0) {
                return Err(DimensionError::NonPositive { parameter, value });
            }
        }

        let d = self.screw_hole_diameter;
        check(
            "lcd_depth",
            clearly_positive(self.board_depth()),
            || format!("LCD layer must be thinner than the {} mm panel", self.panel_depth),
        )?;
        check("front_top_clearance", clearly_positive(self.lcd_height()), || {
            format!(
                "bezels of {} + {} mm leave no LCD area in a {} mm panel",
                self.front_top_clearance, self.front_bottom_clearance, self.panel_height
            )
        })?;
        check(
            "front_rail_height",
            at_most(self.front_rail_height * 2.0, self.panel_height),
            || format!("rails overlap in a {} mm panel", self.panel_height),
        )?;
        check(
            "back_top_band_height",
            clearly_positive(self.back_middle_band_height()),
            || {
                format!(
                    "bands of {} + {} mm leave no middle band in a {} mm panel",
                    self.back_top_band_height, self.back_bottom_band_height, self.panel_height
                )
            },
        )?;
        check(
            "back_middle_band_width",
            at_most(self.back_middle_band_width, self.panel_width),
            || format!("wider than the {} mm panel", self.panel_width),
        )?;
        check(
            "back_mount_clearance",
            at_most(
                self.back_mount_diameter() * 2.0,
                self.panel_width.min(self.panel_height),
            ),
            || format!("{} mm bosses overlap", self.back_mount_diameter()),
        )?;
        check(
            "screw_hole_diameter",
            self.panel_width - RIGHT_INSET_TOP - d > LEFT_INSET + d
                && self.panel_height - TOP_INSET - d > BOTTOM_INSET + d,
            || format!("{} mm corner pins overlap", d),
        )?;
        check(
            "mount_pin_inset",
            at_most(self.mount_pin_inset + d, self.back_middle_band_width)
                && at_most(self.mount_pin_inset + d, self.panel_height),
            || format!("{} mm inset places mount pins outside the panel", self.mount_pin_inset),
        )?;
        check(
            "stand_radius",
            at_most(self.stand_radius * 2.0, self.panel_width),
            || format!("stand is wider than the {} mm panel", self.panel_width),
        )?;
        check(
            "stand_screw_diameter",
            self.stand_screw_diameter < self.stand_radius * 2.0,
            || format!("screw hole does not fit a {} mm stand", self.stand_radius),
        )?;
        check(
            "screw_test_border",
            self.screw_test_border * 2.0 < self.panel_width.min(self.panel_height),
            || "measuring frame has no opening".to_string(),
        )?;
        Ok(())
    }

    fn measured(&self) -> [(&'static str, f64); 27] {
        [
            ("screw_hole_diameter", self.screw_hole_diameter),
            ("screw_pin_length", self.screw_pin_length),
            ("panel_width", self.panel_width),
            ("panel_height", self.panel_height),
            ("panel_depth", self.panel_depth),
            ("lcd_depth", self.lcd_depth),
            ("front_panel_lip", self.front_panel_lip),
            ("front_top_clearance", self.front_top_clearance),
            ("front_bottom_clearance", self.front_bottom_clearance),
            ("front_side_margin", self.front_side_margin),
            ("front_rail_height", self.front_rail_height),
            ("back_panel_depth", self.back_panel_depth),
            ("back_mount_depth", self.back_mount_depth),
            ("back_mount_clearance", self.back_mount_clearance),
            ("back_top_band_height", self.back_top_band_height),
            ("back_bottom_band_height", self.back_bottom_band_height),
            ("back_middle_band_width", self.back_middle_band_width),
            ("assembly_clearance", self.assembly_clearance),
            ("mount_pin_inset", self.mount_pin_inset),
            ("mount_pin_depth", self.mount_pin_depth),
            ("stand_radius", self.stand_radius),
            ("stand_height", self.stand_height),
            ("stand_screw_diameter", self.stand_screw_diameter),
            ("stand_screw_length", self.stand_screw_length),
            ("stand_screw_setback", self.stand_screw_setback),
            ("screw_test_border", self.screw_test_border),
            ("screw_test_thickness", self.screw_test_thickness),
        ]
    }
}

/// `value <= limit`, allowing for rounding in derived lengths.
fn at_most(value: f64, limit: f64) -> bool {
    value < limit || approx_equal(value, limit)
}

fn clearly_positive(value: f64) -> bool {
    value > 0.0 && !approx_zero(value)
}

fn check(
    parameter: &'static str,
    holds: bool,
    reason: impl FnOnce() -> String,
) -> Result<(), DimensionError> {
    if holds {
        Ok(())
    } else {
        Err(DimensionError::Inconsistent {
            parameter,
            reason: reason(),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Dimensions::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_derived_lengths() {
        let dims = Dimensions::default();
        assert_eq!(dims.board_depth(), 7.0);
        assert_eq!(dims.lcd_height(), 102.0);
        assert_eq!(dims.front_panel_depth(), 8.5);
        assert_eq!(dims.outer_width(), 175.0);
        assert_eq!(dims.back_mount_diameter(), 8.0);
        assert_eq!(dims.back_middle_band_height(), 59.0);
    }

    #[test]
    fn test_non_positive_names_parameter() {
        let dims = Dimensions {
            panel_height: -1.0,
            ..Dimensions::default()
        };
        assert_eq!(
            dims.validate(),
            Err(DimensionError::NonPositive {
                parameter: "panel_height",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_nan_is_rejected() {
        let dims = Dimensions {
            stand_height: f64::NAN,
            ..Dimensions::default()
        };
        match dims.validate() {
            Err(DimensionError::NonPositive { parameter, .. }) => {
                assert_eq!(parameter, "stand_height")
            }
            other => panic!("Expected NonPositive, got {:?}", other),
        }
    }

    #[test]
    fn test_lcd_deeper_than_panel_is_inconsistent() {
        let dims = Dimensions {
            lcd_depth: 14.5,
            ..Dimensions::default()
        };
        match dims.validate() {
            Err(DimensionError::Inconsistent { parameter, .. }) => assert_eq!(parameter, "lcd_depth"),
            other => panic!("Expected Inconsistent, got {:?}", other),
        }
    }

    #[test]
    fn test_bands_taller_than_panel_are_inconsistent() {
        let dims = Dimensions {
            back_bottom_band_height: 111.0,
            ..Dimensions::default()
        };
        match dims.validate() {
            Err(DimensionError::Inconsistent { parameter, reason }) => {
                assert_eq!(parameter, "back_top_band_height");
                assert!(reason.contains("111"));
            }
            other => panic!("Expected Inconsistent, got {:?}", other),
        }
    }

    #[test]
    fn test_middle_band_wider_than_panel_is_inconsistent() {
        let dims = Dimensions {
            back_middle_band_width: 170.0,
            ..Dimensions::default()
        };
        assert!(matches!(
            dims.validate(),
            Err(DimensionError::Inconsistent {
                parameter: "back_middle_band_width",
                ..
            })
        ));
    }

    #[test]
    fn test_each_envelope_check_names_its_parameter() {
        let base = Dimensions::default();
        let cases = [
            (
                "front_rail_height",
                Dimensions {
                    front_rail_height: 62.0,
                    ..base
                },
            ),
            (
                "back_mount_clearance",
                Dimensions {
                    back_mount_clearance: 60.0,
                    ..base
                },
            ),
            (
                "screw_hole_diameter",
                Dimensions {
                    screw_hole_diameter: 59.0,
                    back_mount_clearance: 0.5,
                    ..base
                },
            ),
            (
                "mount_pin_inset",
                Dimensions {
                    mount_pin_inset: 150.0,
                    ..base
                },
            ),
            (
                "stand_radius",
                Dimensions {
                    stand_radius: 83.0,
                    ..base
                },
            ),
            (
                "stand_screw_diameter",
                Dimensions {
                    stand_screw_diameter: 16.0,
                    ..base
                },
            ),
            (
                "screw_test_border",
                Dimensions {
                    screw_test_border: 62.0,
                    ..base
                },
            ),
        ];
        for (expected, dims) in cases {
            match dims.validate() {
                Err(DimensionError::Inconsistent { parameter, .. }) => {
                    assert_eq!(parameter, expected)
                }
                other => panic!("Expected Inconsistent {}, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_limits_within_tolerance_are_accepted() {
        let dims = Dimensions {
            back_middle_band_width: 165.0 + EPSILON / 2.0,
            stand_radius: 82.5,
            ..Dimensions::default()
        };
        assert_eq!(dims.validate(), Ok(()));
    }

    #[test]
    fn test_scaled_panel_stays_valid() {
        let dims = Dimensions {
            panel_width: 230.0,
            panel_height: 150.0,
            panel_depth: 16.0,
            ..Dimensions::default()
        };
        assert_eq!(dims.validate(), Ok(()));
        assert_eq!(
            dims.back_top_band_height
                + dims.back_middle_band_height()
                + dims.back_bottom_band_height,
            dims.panel_height
        );
    }
}
