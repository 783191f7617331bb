//! # Placement
//!
//! World-space queries over a solid tree: flattening to placed primitives
//! and axis-aligned bounds. No meshing happens here; bounds come from the
//! transformed corners of each primitive's local box, which is exact for
//! axis-aligned and quarter-turn placements.

use glam::{DAffine3, DVec3};

use crate::solid::{BooleanOperation, Primitive, Solid};

// =============================================================================
// AXIS-ALIGNED BOUNDS
// =============================================================================

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb {
    /// Smallest box containing all `points`, `None` if empty.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Aabb { min: p, max: p },
                Some(b) => Aabb {
                    min: b.min.min(p),
                    max: b.max.max(p),
                },
            })
        })
    }

    /// Smallest box containing both boxes.
    pub fn merge(self, other: Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Extent along each axis.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Center point.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }
}

impl Primitive {
    /// Bounds in the primitive's own frame.
    pub fn local_bounds(&self) -> Aabb {
        match self {
            Primitive::Cube { size, center } => {
                let min = if *center { -*size * 0.5 } else { DVec3::ZERO };
                Aabb {
                    min,
                    max: min + *size,
                }
            }
            Primitive::Cylinder {
                height,
                radius1,
                radius2,
                center,
            } => {
                let r = radius1.max(*radius2);
                let z0 = if *center { -height / 2.0 } else { 0.0 };
                Aabb {
                    min: DVec3::new(-r, -r, z0),
                    max: DVec3::new(r, r, z0 + height),
                }
            }
        }
    }

    /// Bounds after applying `transform`.
    pub fn bounds_in(&self, transform: &DAffine3) -> Aabb {
        let local = self.local_bounds();
        let corners = (0..8).map(|i| {
            let pick = |bit: usize, lo: f64, hi: f64| if i & bit == 0 { lo } else { hi };
            transform.transform_point3(DVec3::new(
                pick(1, local.min.x, local.max.x),
                pick(2, local.min.y, local.max.y),
                pick(4, local.min.z, local.max.z),
            ))
        });
        // Eight corners are always present.
        Aabb::from_points(corners).unwrap_or(local)
    }
}

// =============================================================================
// PLACED PRIMITIVES
// =============================================================================

/// A primitive with its accumulated world transform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPrimitive {
    /// The leaf shape.
    pub primitive: Primitive,
    /// Local-to-world transform.
    pub transform: DAffine3,
    /// Innermost color tag, if any.
    pub color: Option<String>,
    /// Whether the primitive sits in a subtracted operand of a difference.
    pub subtracted: bool,
}

impl PlacedPrimitive {
    /// World-space position of the primitive's local origin.
    pub fn origin(&self) -> DVec3 {
        self.transform.translation
    }

    /// World-space bounds.
    pub fn bounds(&self) -> Aabb {
        self.primitive.bounds_in(&self.transform)
    }
}

fn rotation(angle: f64, axis: DVec3) -> DAffine3 {
    DAffine3::from_axis_angle(axis.normalize(), angle.to_radians())
}

impl Solid {
    /// Every primitive in the tree with its world transform, in tree order.
    pub fn placed_primitives(&self) -> Vec<PlacedPrimitive> {
        let mut out = Vec::new();
        collect(self, DAffine3::IDENTITY, None, false, &mut out);
        out
    }

    /// World-space bounds of the solid.
    ///
    /// For a difference this is the bounds of the first operand, which
    /// always contains the result.
    pub fn bounds(&self) -> Option<Aabb> {
        bounds_in(self, DAffine3::IDENTITY)
    }
}

fn collect(
    solid: &Solid,
    transform: DAffine3,
    color: Option<&str>,
    subtracted: bool,
    out: &mut Vec<PlacedPrimitive>,
) {
    match solid {
        Solid::Primitive(primitive) => out.push(PlacedPrimitive {
            primitive: primitive.clone(),
            transform,
            color: color.map(str::to_owned),
            subtracted,
        }),
        Solid::Translate { offset, child } => collect(
            child,
            transform * DAffine3::from_translation(*offset),
            color,
            subtracted,
            out,
        ),
        Solid::Rotate { angle, axis, child } => collect(
            child,
            transform * rotation(*angle, *axis),
            color,
            subtracted,
            out,
        ),
        Solid::Color { name, child } => collect(child, transform, Some(name), subtracted, out),
        Solid::Boolean {
            operation,
            children,
        } => {
            for (i, child) in children.iter().enumerate() {
                let removed = *operation == BooleanOperation::Difference && i > 0;
                collect(child, transform, color, subtracted || removed, out);
            }
        }
    }
}

fn bounds_in(solid: &Solid, transform: DAffine3) -> Option<Aabb> {
    match solid {
        Solid::Primitive(primitive) => Some(primitive.bounds_in(&transform)),
        Solid::Translate { offset, child } => {
            bounds_in(child, transform * DAffine3::from_translation(*offset))
        }
        Solid::Rotate { angle, axis, child } => {
            bounds_in(child, transform * rotation(*angle, *axis))
        }
        Solid::Color { child, .. } => bounds_in(child, transform),
        Solid::Boolean {
            operation: BooleanOperation::Union,
            children,
        } => children
            .iter()
            .filter_map(|c| bounds_in(c, transform))
            .reduce(Aabb::merge),
        Solid::Boolean {
            operation: BooleanOperation::Difference,
            children,
        } => children.first().and_then(|c| bounds_in(c, transform)),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cube, cylinder, difference, union};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cube_bounds_corner_origin() {
        let b = cube([2.0, 3.0, 4.0], false).unwrap().bounds().unwrap();
        assert_eq!(b.min, DVec3::ZERO);
        assert_eq!(b.max, DVec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_centered_cube_bounds() {
        let b = cube([2.0, 2.0, 2.0], true).unwrap().bounds().unwrap();
        assert_eq!(b.min, DVec3::splat(-1.0));
        assert_eq!(b.center(), DVec3::ZERO);
    }

    #[test]
    fn test_rotated_cylinder_runs_along_y() {
        let pin = cylinder(3.0, 12.0, false)
            .unwrap()
            .rotate(-90.0, [1.0, 0.0, 0.0])
            .unwrap();
        let b = pin.bounds().unwrap();
        assert_abs_diff_eq!(b.min.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max.y, 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.size().x, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.size().z, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_applies_before_translation() {
        let solid = cube([1.0, 2.0, 3.0], false)
            .unwrap()
            .rotate(90.0, [0.0, 0.0, 1.0])
            .unwrap()
            .translate([10.0, 0.0, 0.0])
            .unwrap();
        let b = solid.bounds().unwrap();
        // Rotating +90 about Z maps +Y onto -X before the shift.
        assert_abs_diff_eq!(b.min.x, 8.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max.x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max.y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_union_bounds_merge() {
        let a = cube([1.0, 1.0, 1.0], false).unwrap();
        let b = cube([1.0, 1.0, 1.0], false)
            .unwrap()
            .translate([4.0, 0.0, 0.0])
            .unwrap();
        let bounds = union([a, b]).unwrap().bounds().unwrap();
        assert_eq!(bounds.max.x, 5.0);
    }

    #[test]
    fn test_difference_bounds_follow_first_operand() {
        let big = cube([10.0, 10.0, 10.0], false).unwrap();
        let small = cube([1.0, 1.0, 1.0], false).unwrap();
        let a = difference(big.clone(), small.clone()).bounds().unwrap();
        let b = difference(small, big).bounds().unwrap();
        assert_ne!(a, b);
        assert_eq!(a.size(), DVec3::splat(10.0));
        assert_eq!(b.size(), DVec3::splat(1.0));
    }

    #[test]
    fn test_placed_primitives_track_color_and_subtraction() {
        let body = cube([4.0, 4.0, 4.0], false).unwrap().color("salmon");
        let hole = cylinder(1.0, 4.0, false)
            .unwrap()
            .color("red")
            .translate([2.0, 2.0, 0.0])
            .unwrap();
        let placed = difference(body, hole).placed_primitives();
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].color.as_deref(), Some("salmon"));
        assert!(!placed[0].subtracted);
        assert_eq!(placed[1].color.as_deref(), Some("red"));
        assert!(placed[1].subtracted);
        assert_eq!(placed[1].origin(), DVec3::new(2.0, 2.0, 0.0));
    }
}
