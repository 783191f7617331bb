//! # Tests for Config Constants
//!
//! Unit tests verifying the measured defaults stay consistent with each
//! other and with the helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_below_measurement_resolution() {
    // Measurements are taken to 0.1 mm
    assert!(EPSILON < 1e-3);
}

// =============================================================================
// RENDERING TESTS
// =============================================================================

#[test]
fn test_default_facets() {
    assert_eq!(DEFAULT_FACETS, 32);
}

#[test]
fn test_scad_extension_has_no_dot() {
    assert!(!SCAD_EXTENSION.starts_with('.'));
}

// =============================================================================
// DIMENSION TESTS
// =============================================================================

#[test]
fn test_lcd_layer_fits_panel_depth() {
    assert!(PANEL_LCD_DEPTH < PANEL_DEPTH);
}

#[test]
fn test_front_clearances_leave_visible_area() {
    assert!(FRONT_TOP_CLEARANCE + FRONT_BOTTOM_CLEARANCE < PANEL_HEIGHT);
}

#[test]
fn test_back_bands_leave_middle_band() {
    let middle = PANEL_HEIGHT - (BACK_TOP_BAND_HEIGHT + BACK_BOTTOM_BAND_HEIGHT);
    assert_eq!(middle, 59.0);
}

#[test]
fn test_middle_band_narrower_than_panel() {
    assert!(BACK_MIDDLE_BAND_WIDTH < PANEL_WIDTH);
}

#[test]
fn test_stand_fits_panel_width() {
    assert!(STAND_RADIUS * 2.0 < PANEL_WIDTH);
    assert!(STAND_SCREW_DIAMETER < STAND_RADIUS * 2.0);
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
    assert!(!approx_equal(1.0, 1.0 - large_diff));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(0.1));
}
