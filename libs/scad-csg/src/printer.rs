//! # OpenSCAD Printer
//!
//! Serializes a solid tree to the OpenSCAD CSG language: a `$fn` header
//! followed by one nested statement. Pure formatting, no geometry.
//!
//! ```text
//! $fn = 32;
//!
//! difference() {
//! 	translate(v = [5, 11, 1]) {
//! 		cube(size = [10, 2, 4], center = false);
//! 	}
//! 	cylinder(h = 8, d = 6, center = false);
//! }
//! ```

use std::fmt;

use crate::solid::{Primitive, Solid};

/// Render `root` with a global facet count header.
///
/// The facet count only affects the header line.
///
/// ```rust
/// use scad_csg::{cube, render};
///
/// let text = render(&cube([1.0, 2.0, 3.0], false).unwrap(), 32);
/// assert!(text.starts_with("$fn = 32;"));
/// assert!(text.contains("cube(size = [1, 2, 3], center = false);"));
/// ```
pub fn render(root: &Solid, facets: u32) -> String {
    format!("{}\n\n{}", header(facets), Statement(root, 0))
}

/// The `$fn` header line.
pub fn header(facets: u32) -> String {
    format!("$fn = {};", facets)
}

/// Render `root` without a header.
pub fn print(root: &Solid) -> String {
    Statement(root, 0).to_string()
}

/// A solid printed at an indentation depth.
struct Statement<'a>(&'a Solid, usize);

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Statement(solid, depth) = *self;
        let indent = "\t".repeat(depth);
        match solid {
            Solid::Primitive(primitive) => writeln!(f, "{}{}", indent, Call(primitive)),
            Solid::Translate { offset, child } => {
                writeln!(f, "{}translate(v = {}) {{", indent, Vector(offset.to_array()))?;
                write!(f, "{}", Statement(child, depth + 1))?;
                writeln!(f, "{}}}", indent)
            }
            Solid::Rotate { angle, axis, child } => {
                writeln!(
                    f,
                    "{}rotate(a = {}, v = {}) {{",
                    indent,
                    Num(*angle),
                    Vector(axis.to_array())
                )?;
                write!(f, "{}", Statement(child, depth + 1))?;
                writeln!(f, "{}}}", indent)
            }
            Solid::Color { name, child } => {
                writeln!(f, "{}color(c = \"{}\") {{", indent, name)?;
                write!(f, "{}", Statement(child, depth + 1))?;
                writeln!(f, "{}}}", indent)
            }
            Solid::Boolean {
                operation,
                children,
            } => {
                writeln!(f, "{}{}() {{", indent, operation.name())?;
                for child in children {
                    write!(f, "{}", Statement(child, depth + 1))?;
                }
                writeln!(f, "{}}}", indent)
            }
        }
    }
}

struct Call<'a>(&'a Primitive);

impl fmt::Display for Call<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Primitive::Cube { size, center } => write!(
                f,
                "cube(size = {}, center = {});",
                Vector(size.to_array()),
                center
            ),
            Primitive::Cylinder {
                height,
                radius1,
                radius2,
                center,
            } if radius1 == radius2 => write!(
                f,
                "cylinder(h = {}, d = {}, center = {});",
                Num(*height),
                Num(radius1 * 2.0),
                center
            ),
            Primitive::Cylinder {
                height,
                radius1,
                radius2,
                center,
            } => write!(
                f,
                "cylinder(h = {}, r1 = {}, r2 = {}, center = {});",
                Num(*height),
                Num(*radius1),
                Num(*radius2),
                center
            ),
        }
    }
}

/// Number in OpenSCAD syntax; negative zero prints as `0`.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

struct Vector([f64; 3]);

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "[{}, {}, {}]", Num(x), Num(y), Num(z))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cone, cube, cylinder, difference, union};

    #[test]
    fn test_header_then_blank_line() {
        let text = render(&cube([1.0, 1.0, 1.0], false).unwrap(), 48);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("$fn = 48;"));
        assert_eq!(lines.next(), Some(""));
    }

    #[test]
    fn test_straight_cylinder_prints_diameter() {
        let text = print(&cylinder(6.0, 8.0, false).unwrap());
        assert_eq!(text, "cylinder(h = 8, d = 6, center = false);\n");
    }

    #[test]
    fn test_cone_prints_radii() {
        let text = print(&cone(8.0, 4.0, 15.0, true).unwrap());
        assert_eq!(text, "cylinder(h = 15, r1 = 8, r2 = 4, center = true);\n");
    }

    #[test]
    fn test_nested_transforms_indent() {
        let solid = cylinder(3.0, 12.0, false)
            .unwrap()
            .rotate(-90.0, [1.0, 0.0, 0.0])
            .unwrap()
            .translate([1.5, 0.0, 1.5])
            .unwrap()
            .color("purple");
        let expected = "color(c = \"purple\") {\n\
                        \ttranslate(v = [1.5, 0, 1.5]) {\n\
                        \t\trotate(a = -90, v = [1, 0, 0]) {\n\
                        \t\t\tcylinder(h = 12, d = 3, center = false);\n\
                        \t\t}\n\
                        \t}\n\
                        }\n";
        assert_eq!(print(&solid), expected);
    }

    #[test]
    fn test_boolean_blocks() {
        let a = cube([2.0, 2.0, 2.0], false).unwrap();
        let b = cube([1.0, 1.0, 1.0], false).unwrap();
        let c = cube([3.0, 1.0, 1.0], false).unwrap();
        let text = print(&difference(union([a, b]).unwrap(), c));
        assert!(text.starts_with("difference() {\n\tunion() {\n"));
        assert_eq!(text.matches("cube(").count(), 3);
        assert!(text.ends_with("\t}\n\tcube(size = [3, 1, 1], center = false);\n}\n"));
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        let solid = cube([1.0, 1.0, 1.0], false)
            .unwrap()
            .translate([-0.0, 0.0, 2.5])
            .unwrap();
        assert!(print(&solid).starts_with("translate(v = [0, 0, 2.5]) {"));
    }

    #[test]
    fn test_facets_change_only_header() {
        let solid = cylinder(3.0, 12.0, false).unwrap();
        let a = render(&solid, 32);
        let b = render(&solid, 96);
        assert_ne!(a, b);
        assert_eq!(a.lines().skip(1).collect::<Vec<_>>(), b.lines().skip(1).collect::<Vec<_>>());
    }
}
