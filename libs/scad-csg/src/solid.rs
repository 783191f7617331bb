//! # Solid Tree
//!
//! Immutable CSG tree nodes. A [`Solid`] is either a primitive, a transform
//! wrapper around exactly one child, or a boolean operation over an ordered
//! list of children. Every builder consumes its operands and returns a new
//! node; nothing is mutated after construction.
//!
//! ## Evaluation Order
//!
//! Transforms nest child-to-root: in
//! `cube.rotate(-90.0, X)?.translate(v)` the rotation is applied in the
//! cube's local frame first and the translation moves the rotated result.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{CsgError, CsgResult};

// =============================================================================
// PRIMITIVES
// =============================================================================

/// A validated base shape.
///
/// Construct through [`crate::primitives`], which rejects non-positive sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Axis-aligned box.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cube(size = [x, y, z], center = false);
    /// ```
    Cube {
        /// Size as [x, y, z].
        size: DVec3,
        /// Whether centered at origin (otherwise corner at origin).
        center: bool,
    },

    /// Cylinder or truncated cone along +Z.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cylinder(h = 12, d = 3, center = false);
    /// cylinder(h = 15, r1 = 8, r2 = 6, center = false);
    /// ```
    Cylinder {
        /// Height along Z.
        height: f64,
        /// Bottom radius.
        radius1: f64,
        /// Top radius.
        radius2: f64,
        /// Whether centered along Z (otherwise base on the XY plane).
        center: bool,
    },
}

impl Primitive {
    /// Diameter of a straight cylinder, `None` for cones and cubes.
    pub fn diameter(&self) -> Option<f64> {
        match self {
            Primitive::Cylinder {
                radius1, radius2, ..
            } if radius1 == radius2 => Some(radius1 * 2.0),
            _ => None,
        }
    }
}

// =============================================================================
// SOLID
// =============================================================================

/// Boolean operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanOperation {
    /// Union of all children.
    Union,
    /// First child minus all following children.
    Difference,
}

impl BooleanOperation {
    /// OpenSCAD module name of the operation.
    pub fn name(self) -> &'static str {
        match self {
            BooleanOperation::Union => "union",
            BooleanOperation::Difference => "difference",
        }
    }
}

/// A node in the solid tree.
///
/// Children are exclusively owned by their parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Solid {
    /// Leaf shape.
    Primitive(Primitive),

    /// Translation of the child into the parent frame.
    Translate {
        /// Translation vector.
        offset: DVec3,
        /// Child solid.
        child: Box<Solid>,
    },

    /// Rotation of the child about an axis through the origin.
    Rotate {
        /// Angle in degrees, right-handed about `axis`.
        angle: f64,
        /// Rotation axis (non-zero, not necessarily unit length).
        axis: DVec3,
        /// Child solid.
        child: Box<Solid>,
    },

    /// Color tag. Carries no geometric effect.
    Color {
        /// Named color, e.g. `"purple"`.
        name: String,
        /// Child solid.
        child: Box<Solid>,
    },

    /// Boolean combination of an ordered list of children.
    Boolean {
        /// Operation kind.
        operation: BooleanOperation,
        /// Operands, in evaluation order.
        children: Vec<Solid>,
    },
}

impl From<Primitive> for Solid {
    fn from(primitive: Primitive) -> Self {
        Solid::Primitive(primitive)
    }
}

impl Solid {
    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Wrap in a translation.
    ///
    /// Fails if any component of the offset is not finite.
    ///
    /// ```rust
    /// use scad_csg::{cube, Solid};
    ///
    /// let moved = cube([1.0, 1.0, 1.0], false)
    ///     .unwrap()
    ///     .translate([5.0, 0.0, 0.0])
    ///     .unwrap();
    /// assert!(matches!(moved, Solid::Translate { .. }));
    /// assert!(moved.translate([f64::NAN, 0.0, 0.0]).is_err());
    /// ```
    pub fn translate(self, offset: impl Into<DVec3>) -> CsgResult<Solid> {
        let offset = offset.into();
        if !offset.is_finite() {
            return Err(CsgError::NonFinite { parameter: "offset" });
        }
        Ok(Solid::Translate {
            offset,
            child: Box::new(self),
        })
    }

    /// Wrap in a rotation of `angle` degrees about `axis`.
    ///
    /// Fails if the angle is not finite or the axis is zero or not finite.
    pub fn rotate(self, angle: f64, axis: impl Into<DVec3>) -> CsgResult<Solid> {
        let axis = axis.into();
        if !angle.is_finite() {
            return Err(CsgError::NonFinite { parameter: "angle" });
        }
        if !axis.is_finite() || axis.length_squared() == 0.0 {
            return Err(CsgError::InvalidAxis(axis.to_array()));
        }
        Ok(Solid::Rotate {
            angle,
            axis,
            child: Box::new(self),
        })
    }

    /// Wrap in a color tag.
    pub fn color(self, name: impl Into<String>) -> Solid {
        Solid::Color {
            name: name.into(),
            child: Box::new(self),
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Boolean operation of this node, if it is one.
    pub fn operation(&self) -> Option<BooleanOperation> {
        match self {
            Solid::Boolean { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Direct children of this node.
    pub fn children(&self) -> Vec<&Solid> {
        match self {
            Solid::Primitive(_) => Vec::new(),
            Solid::Translate { child, .. }
            | Solid::Rotate { child, .. }
            | Solid::Color { child, .. } => vec![child.as_ref()],
            Solid::Boolean { children, .. } => children.iter().collect(),
        }
    }

    /// Number of primitive leaves in the tree.
    pub fn primitive_count(&self) -> usize {
        match self {
            Solid::Primitive(_) => 1,
            other => other.children().iter().map(|c| c.primitive_count()).sum(),
        }
    }

    /// Copy of the tree with directly nested translations folded together
    /// and zero translations removed.
    ///
    /// Translating by `t` and then by `-t` normalizes to the untranslated
    /// solid.
    pub fn normalized(&self) -> Solid {
        self.normalized_under(DVec3::ZERO)
    }

    /// Normalize with `pending` still to be applied above this node.
    /// Offsets accumulate outermost first.
    fn normalized_under(&self, pending: DVec3) -> Solid {
        let base = match self {
            Solid::Translate { offset, child } => {
                return child.normalized_under(pending + *offset);
            }
            Solid::Primitive(p) => Solid::Primitive(p.clone()),
            Solid::Rotate { angle, axis, child } => Solid::Rotate {
                angle: *angle,
                axis: *axis,
                child: Box::new(child.normalized()),
            },
            Solid::Color { name, child } => Solid::Color {
                name: name.clone(),
                child: Box::new(child.normalized()),
            },
            Solid::Boolean {
                operation,
                children,
            } => Solid::Boolean {
                operation: *operation,
                children: children.iter().map(Solid::normalized).collect(),
            },
        };
        if pending == DVec3::ZERO {
            base
        } else {
            Solid::Translate {
                offset: pending,
                child: Box::new(base),
            }
        }
    }
}

// =============================================================================
// COMBINATORS
// =============================================================================

/// Union of the given solids, in order.
///
/// A single operand is returned unchanged.
///
/// ```rust
/// use scad_csg::{cube, union, BooleanOperation};
///
/// let a = cube([1.0, 1.0, 1.0], false).unwrap();
/// let b = cube([2.0, 2.0, 2.0], false).unwrap();
/// let both = union([a, b]).unwrap();
/// assert_eq!(both.operation(), Some(BooleanOperation::Union));
/// ```
pub fn union(solids: impl IntoIterator<Item = Solid>) -> CsgResult<Solid> {
    let mut children: Vec<Solid> = solids.into_iter().collect();
    match children.len() {
        0 => Err(CsgError::EmptyComposite { operation: "union" }),
        1 => Ok(children.remove(0)),
        _ => Ok(Solid::Boolean {
            operation: BooleanOperation::Union,
            children,
        }),
    }
}

/// `minuend` with `subtrahend` removed.
pub fn difference(minuend: Solid, subtrahend: Solid) -> Solid {
    Solid::Boolean {
        operation: BooleanOperation::Difference,
        children: vec![minuend, subtrahend],
    }
}
