//! # Configuration Constants
//!
//! Centralized constants for the display case. All physical dimensions were
//! measured on the 7" LCD module and its driver board; values are in
//! millimeters.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Rendering**: Export defaults (`$fn`, file extension)
//! - **Panel**: The LCD module envelope
//! - **Front / Back Panel**: Frame and back plate sizes
//! - **Mounting**: Screw pins, stand and assembly clearances

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Dimensions are sums and differences of decimal literals, so exact
/// equality is only expected where the arithmetic is exact. The dimension
/// envelope checks and the part geometry tests compare against this
/// tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// assert!((0.1 + 0.2 - 0.3_f64).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// RENDERING CONSTANTS
// =============================================================================

/// Default global facet count written as the `$fn` header.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FACETS;
///
/// let header = format!("$fn = {};", DEFAULT_FACETS);
/// assert_eq!(header, "$fn = 32;");
/// ```
pub const DEFAULT_FACETS: u32 = 32;

/// File extension of the exported scene.
pub const SCAD_EXTENSION: &str = "scad";

// =============================================================================
// PANEL CONSTANTS
// =============================================================================

/// Screw hole diameter of the LCD board (M3).
pub const SCREW_HOLE_DIAMETER: f64 = 3.0;

/// Screw pin length (M3x12).
pub const SCREW_PIN_LENGTH: f64 = 12.0;

/// Total width of the LCD module.
pub const PANEL_WIDTH: f64 = 165.0;

/// Total height of the LCD module.
pub const PANEL_HEIGHT: f64 = 123.0;

/// Total depth of the LCD module, glass to the back of the driver board.
pub const PANEL_DEPTH: f64 = 14.5;

/// Depth of the glass/LCD layer alone.
pub const PANEL_LCD_DEPTH: f64 = 7.5;

// =============================================================================
// FRONT PANEL CONSTANTS
// =============================================================================

/// Extra front panel depth beyond the LCD layer.
///
/// The front panel depth is `PANEL_LCD_DEPTH + FRONT_PANEL_LIP`.
pub const FRONT_PANEL_LIP: f64 = 1.0;

/// Bezel above the visible LCD area.
pub const FRONT_TOP_CLEARANCE: f64 = 9.0;

/// Bezel below the visible LCD area.
pub const FRONT_BOTTOM_CLEARANCE: f64 = 12.0;

/// Width of the left and right stiles.
pub const FRONT_SIDE_MARGIN: f64 = 5.0;

/// Height of the top and bottom rails.
pub const FRONT_RAIL_HEIGHT: f64 = 13.0;

// =============================================================================
// BACK PANEL CONSTANTS
// =============================================================================

/// Thickness of the back plate.
pub const BACK_PANEL_DEPTH: f64 = 2.0;

/// Depth of the back plate mounting bosses.
pub const BACK_MOUNT_DEPTH: f64 = 4.5;

/// Extra diameter of a mounting boss over the screw hole.
///
/// The boss diameter is `SCREW_HOLE_DIAMETER + BACK_MOUNT_CLEARANCE`.
pub const BACK_MOUNT_CLEARANCE: f64 = 5.0;

/// Height of the top band of the back plate.
pub const BACK_TOP_BAND_HEIGHT: f64 = 12.0;

/// Height of the bottom band of the back plate.
pub const BACK_BOTTOM_BAND_HEIGHT: f64 = 52.0;

/// Width of the narrower middle band of the back plate.
///
/// Leaves the connector side of the driver board uncovered.
pub const BACK_MIDDLE_BAND_WIDTH: f64 = 152.0;

// =============================================================================
// MOUNTING CONSTANTS
// =============================================================================

/// Gap between the parts of the assembly, in every direction.
pub const ASSEMBLY_CLEARANCE: f64 = 1.0;

/// Inset of the two panel-mount pins from their reference edge.
pub const MOUNT_PIN_INSET: f64 = 10.0;

/// Depth offset of the two panel-mount pins.
pub const MOUNT_PIN_DEPTH: f64 = 8.0;

/// Radius of the panel-mount stand.
pub const STAND_RADIUS: f64 = 8.0;

/// Height of the panel-mount stand.
pub const STAND_HEIGHT: f64 = 15.0;

/// Clearance hole diameter of the stand screw (M5).
pub const STAND_SCREW_DIAMETER: f64 = 6.0;

/// Length of the stand screw clearance hole (M5x8).
pub const STAND_SCREW_LENGTH: f64 = 8.0;

/// Setback of the stand screw behind the back plate.
pub const STAND_SCREW_SETBACK: f64 = 3.0;

// =============================================================================
// SCREW TEST FIXTURE CONSTANTS
// =============================================================================

/// Border width of the screw-hole measuring frame.
pub const SCREW_TEST_BORDER: f64 = 6.0;

/// Thickness of the screw-hole measuring frame.
pub const SCREW_TEST_THICKNESS: f64 = 0.2;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(165.0 - 2.2 - 3.0, 159.8));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-12));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
