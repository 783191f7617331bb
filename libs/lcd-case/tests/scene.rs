//! # Scene Composition Tests

use approx::assert_abs_diff_eq;
use lcd_case::{Dimensions, PlacedParts, Scene, SceneVariant};
use scad_csg::{difference, BooleanOperation, Primitive, Solid};

fn parts() -> PlacedParts {
    PlacedParts::build(&Dimensions::default()).unwrap()
}

#[test]
fn production_scene_is_boss_minus_pins() {
    let scene = Scene::production(&Dimensions::default()).unwrap();
    assert_eq!(scene.variant, SceneVariant::PanelMountMinusPins);
    match &scene.root {
        Solid::Boolean {
            operation: BooleanOperation::Difference,
            children,
        } => {
            let p = parts();
            assert_eq!(children.len(), 2);
            assert_eq!(children[0], p.panel_mount_boss);
            assert_eq!(children[1], p.screw_pins);
        }
        other => panic!("Expected difference, got {:?}", other),
    }
}

#[test]
fn production_scene_has_one_clearance_cylinder() {
    let scene = Scene::production(&Dimensions::default()).unwrap();
    let clearance = scene
        .root
        .placed_primitives()
        .into_iter()
        .filter(|p| p.primitive.diameter() == Some(6.0))
        .count();
    assert_eq!(clearance, 1);
}

#[test]
fn boss_is_centered_on_panel_in_assembly() {
    let dims = Dimensions::default();
    let stand = parts()
        .panel_mount_boss
        .placed_primitives()
        .into_iter()
        .find(|p| matches!(p.primitive, Primitive::Cylinder { radius1, .. } if radius1 == 8.0))
        .unwrap();
    assert_abs_diff_eq!(
        stand.origin().x,
        dims.front_side_margin + dims.panel_width / 2.0,
        epsilon = 1e-9
    );
}

#[test]
fn difference_is_not_commutative() {
    let p = parts();
    let boss_minus_pins = difference(p.panel_mount_boss.clone(), p.screw_pins.clone());
    let pins_minus_boss = difference(p.screw_pins, p.panel_mount_boss);
    assert_ne!(boss_minus_pins.bounds(), pins_minus_boss.bounds());
}

#[test]
fn every_variant_builds() {
    let dims = Dimensions::default();
    for variant in SceneVariant::ALL {
        let scene = Scene::build(&dims, variant).unwrap();
        assert!(scene.root.primitive_count() > 0, "{} is empty", variant);
        assert!(scene.root.bounds().is_some());
    }
}

#[test]
fn subtracting_variants_end_with_pins() {
    let p = parts();
    for variant in [
        SceneVariant::PanelsMinusPins,
        SceneVariant::BackPanelMinusPins,
        SceneVariant::PanelMountMinusPins,
        SceneVariant::FrontPanelMinusPins,
        SceneVariant::EnclosureMinusPins,
    ] {
        let root = variant.compose(&p).unwrap();
        assert_eq!(root.operation(), Some(BooleanOperation::Difference));
        assert_eq!(root.children().last().copied(), Some(&p.screw_pins));
    }
}

#[test]
fn full_assembly_fits_front_panel_footprint() {
    let dims = Dimensions::default();
    let root = SceneVariant::FullAssembly.compose(&parts()).unwrap();
    let bounds = root.bounds().unwrap();
    assert_abs_diff_eq!(bounds.min.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bounds.max.x, dims.outer_width(), epsilon = 1e-9);
    assert_abs_diff_eq!(bounds.min.z, 0.0, epsilon = 1e-9);
}

#[test]
fn union_variant_is_order_independent_in_extent() {
    let p = parts();
    let ab = scad_csg::union([p.front_panel.clone(), p.back_panel.clone()]).unwrap();
    let ba = scad_csg::union([p.back_panel.clone(), p.front_panel.clone()]).unwrap();
    assert_eq!(ab.bounds(), ba.bounds());
    assert_eq!(
        SceneVariant::FrontAndBackPanels.compose(&p).unwrap().bounds(),
        ab.bounds()
    );
}

#[test]
fn malformed_dimensions_fail_before_composition() {
    let dims = Dimensions {
        lcd_depth: 20.0,
        ..Dimensions::default()
    };
    let err = Scene::production(&dims).unwrap_err();
    assert!(err.to_string().contains("lcd_depth"));
}
