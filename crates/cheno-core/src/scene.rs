//! The static logo scene: named groups of individually addressable shapes.
//!
//! The structure never changes at runtime. Fills are owned by the
//! [`Editor`](crate::Editor), which composites them over the scene's
//! default fill.

use std::fmt;

use crate::color::Color;

/// Transform shared by every path of the logo artwork.
const LOGO_TRANSFORM: &str = "translate(-22.53 -25.25)";

/// The SVG `viewBox` of a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    /// Minimum x.
    pub min_x: f64,
    /// Minimum y.
    pub min_y: f64,
    /// Width in user units.
    pub width: f64,
    /// Height in user units.
    pub height: f64,
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

/// The drawable geometry of a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Geometry {
    /// An SVG `<path>` with its `d` data and optional `transform`.
    Path {
        /// Path data.
        d: &'static str,
        /// Transform attribute, if any.
        transform: Option<&'static str>,
    },
    /// An SVG `<polygon>` with its `points` list.
    Polygon {
        /// Points attribute.
        points: &'static str,
    },
}

/// One addressable shape, tagged with its `data-child` identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    /// Child identifier (not unique within a group).
    pub child: &'static str,
    /// Geometry to draw.
    pub geometry: Geometry,
}

impl Shape {
    const fn path(child: &'static str, d: &'static str) -> Self {
        Self {
            child,
            geometry: Geometry::Path {
                d,
                transform: Some(LOGO_TRANSFORM),
            },
        }
    }

    const fn polygon(child: &'static str, points: &'static str) -> Self {
        Self {
            child,
            geometry: Geometry::Polygon { points },
        }
    }
}

/// A named container of shapes, tagged with `data-object`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Group name (e.g. `"Logotype"`).
    pub name: &'static str,
    /// Shapes in document order.
    pub shapes: Vec<Shape>,
}

/// Index-based address of a shape within a [`Scene`].
///
/// Indices rather than child identifiers, since identifiers repeat
/// (the logotype spells "Best Lodger" and contains two `e`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeRef {
    /// Index of the group in [`Scene::groups`].
    pub group: usize,
    /// Index of the shape within its group.
    pub shape: usize,
}

impl ShapeRef {
    /// Create a shape reference.
    #[must_use]
    pub const fn new(group: usize, shape: usize) -> Self {
        Self { group, shape }
    }
}

/// A static vector scene made of named groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Coordinate system of the scene.
    pub view_box: ViewBox,
    /// Fill a shape resolves to when nothing overrides it.
    pub default_fill: Color,
    /// Groups in document order.
    pub groups: Vec<Group>,
}

impl Scene {
    /// The "Best Lodger" logo: a `Logotype` group spelling the name and a
    /// `Pictogram` group with the house, roof, and eyes.
    #[must_use]
    pub fn logo() -> Self {
        Self {
            view_box: ViewBox {
                min_x: 0.0,
                min_y: 0.0,
                width: 200.08,
                height: 46.78,
            },
            default_fill: Color::BLACK,
            groups: vec![
                Group {
                    name: "Logotype",
                    shapes: vec![
                        Shape::path("B", "M79.82,44.52h3.5c2.85,0,4.53,1.06,4.53,3.38a3,3,0,0,1-2.45,3V51c2,.3,3.3,1.43,3.3,3.36,0,2.67-1.91,4.05-5.11,4.05H79.82Zm3.12,6.1c2.84,0,4-.91,4-2.68s-1.24-2.58-3.84-2.58H80.78v5.26Zm.4,7c2.81,0,4.4-1,4.4-3.21,0-2-1.57-2.93-4.4-2.93H80.78v6.14Z"),
                        Shape::path("e", "M93.73,53.37a5.06,5.06,0,0,1,5-5.33c2.76,0,4.51,1.78,4.51,4.69a5,5,0,0,1-.05.77h-9v-.79h8.64l-.39.37c0-2.87-1.49-4.24-3.65-4.24a4.2,4.2,0,0,0-4.11,4.5,4.24,4.24,0,0,0,4.42,4.52,5.73,5.73,0,0,0,3.38-1.09l.39.71A6.54,6.54,0,0,1,99,58.67,5.08,5.08,0,0,1,93.73,53.37Z"),
                        Shape::path("s", "M108.54,57.07l.49-.68a6.89,6.89,0,0,0,4.57,1.48c2.05,0,3.11-.93,3.11-2,0-.91-.36-1.65-3.56-2.29-2.55-.52-4-1.35-4-2.84s1.24-2.7,3.94-2.7a7,7,0,0,1,3.87,1.25l-.5.67A5.69,5.69,0,0,0,113,48.84c-2.2,0-2.9.89-2.9,1.84s1,1.61,3.32,2.08c3.48.74,4.26,1.55,4.26,3.05s-1.51,2.86-4.17,2.86A8.57,8.57,0,0,1,108.54,57.07Z"),
                        Shape::path("t", "M126.24,54.63V49.11h-3v-.73l3.07-.09.12-3.35h.79v3.35h5.36v.82h-5.36V54.7c0,2,.56,3.15,2.81,3.15a7,7,0,0,0,2.68-.52l.26.72a8,8,0,0,1-3.07.62C127.08,58.67,126.24,57,126.24,54.63Z"),
                        Shape::path("L", "M144.35,44.67h2V56.61h6.31v1.77h-8.3Z"),
                        Shape::path("o", "M156.94,53.28c0-3.42,2.3-5.38,4.87-5.38s4.87,2,4.87,5.38-2.29,5.35-4.87,5.35S156.94,56.67,156.94,53.28Zm7.7,0c0-2.2-1.1-3.67-2.83-3.67S159,51.08,159,53.28s1.1,3.64,2.83,3.64S164.64,55.47,164.64,53.28Z"),
                        Shape::path("d", "M170.94,53.28c0-3.33,2.1-5.38,4.36-5.38a3.88,3.88,0,0,1,2.82,1.25h0l-.09-1.8V43.54h2V58.38h-1.63l-.16-1.27h-.06a4.46,4.46,0,0,1-3.07,1.52C172.62,58.63,170.94,56.68,170.94,53.28Zm7.13,2.25V50.69a3.2,3.2,0,0,0-2.32-1c-1.52,0-2.77,1.38-2.77,3.62s1,3.63,2.62,3.63A3.21,3.21,0,0,0,178.07,55.53Z"),
                        Shape::path("g", "M185.15,60.22A2.71,2.71,0,0,1,186.73,58v-.08a1.89,1.89,0,0,1-1-1.7,2.53,2.53,0,0,1,1.17-1.92v-.08a3.27,3.27,0,0,1-1.23-2.65,3.68,3.68,0,0,1,3.93-3.67,4,4,0,0,1,1.49.25h4v1.63h-2.38a3,3,0,0,1,.72,1.87c0,2.23-1.7,3.49-3.85,3.49a4.26,4.26,0,0,1-1.57-.33,1.27,1.27,0,0,0-.68,1.06c0,.74.69,1.08,1.94,1.08h2.09c2.53,0,3.79.69,3.79,2.45,0,2-2.16,3.6-5.54,3.6C186.86,63,185.15,62,185.15,60.22Zm8.09-.49c0-.88-.71-1.12-2.1-1.12h-1.73a5.35,5.35,0,0,1-1.49-.16,1.78,1.78,0,0,0-1.1,1.52c0,1,1.07,1.59,3,1.59S193.24,60.69,193.24,59.73Zm-1.59-8.16a2.06,2.06,0,1,0-2.05,2.24A2.06,2.06,0,0,0,191.65,51.57Z"),
                        Shape::path("e", "M199.1,53.25a5.06,5.06,0,0,1,5-5.35c2.86,0,4.5,2,4.5,4.83a7.94,7.94,0,0,1-.09,1.13h-8.05V52.33h6.8l-.43.51c0-2.21-1-3.32-2.68-3.32s-3.11,1.32-3.11,3.73,1.5,3.75,3.6,3.75a5.18,5.18,0,0,0,2.86-.9l.7,1.32a6.75,6.75,0,0,1-3.81,1.21A5.07,5.07,0,0,1,199.1,53.25Z"),
                        Shape::path("r", "M214.56,48.15h1.65l.17,2.37h.05a5,5,0,0,1,4.26-2.62,4,4,0,0,1,1.92.42l-.44,1.77a4.75,4.75,0,0,0-1.79-.33c-1.4,0-2.75.75-3.83,2.82v5.8h-2Z"),
                    ],
                },
                Group {
                    name: "Pictogram",
                    shapes: vec![
                        Shape::path("B", "M50.16,46.59c-5.41,0-8.13,2.7-9.42,9.45H40.5c-4-10.47-18-7.88-18,6V72h39V61.22C61.53,52.08,56.57,46.59,50.16,46.59ZM39.53,70h-15V63.66C24.46,48,40.21,48.37,39.53,64Zm19,0h-17V62.86c0-18.26,17-17.92,17,0Z"),
                        Shape::polygon("L", "11.27 0 0 19.53 1.99 20.68 11.98 3.38 43.08 21.34 44.37 19.11 11.27 0"),
                        Shape::path("left-eye", "M35.48,64.89c-.65,0-1,.45-1,1.18v1.72a1.28,1.28,0,0,0,2,0V66.07A1,1,0,0,0,35.48,64.89Z"),
                        Shape::path("right-eye", "M54.52,64.89a1,1,0,0,0-1,1.18v1.72a1.28,1.28,0,0,0,2,0V66.07A1,1,0,0,0,54.52,64.89Z"),
                    ],
                },
            ],
        }
    }

    /// Look up a shape.
    #[must_use]
    pub fn shape(&self, at: ShapeRef) -> Option<&Shape> {
        self.groups.get(at.group)?.shapes.get(at.shape)
    }

    /// Look up the group containing a shape.
    #[must_use]
    pub fn group(&self, at: ShapeRef) -> Option<&Group> {
        self.groups.get(at.group)
    }

    /// Find the first shape with `child` inside the group named `group`.
    #[must_use]
    pub fn find(&self, group: &str, child: &str) -> Option<ShapeRef> {
        let (gi, g) = self
            .groups
            .iter()
            .enumerate()
            .find(|(_, g)| g.name == group)?;
        let si = g.shapes.iter().position(|s| s.child == child)?;
        Some(ShapeRef::new(gi, si))
    }

    /// Iterate over every shape with its address, in document order.
    pub fn shapes(&self) -> impl Iterator<Item = (ShapeRef, &Shape)> {
        self.groups.iter().enumerate().flat_map(|(gi, g)| {
            g.shapes
                .iter()
                .enumerate()
                .map(move |(si, s)| (ShapeRef::new(gi, si), s))
        })
    }

    /// Human-readable `"Group : child"` label, or `None` for a dangling
    /// reference.
    #[must_use]
    pub fn label(&self, at: ShapeRef) -> Option<String> {
        let group = self.group(at)?;
        let shape = self.shape(at)?;
        Some(format!("{} : {}", group.name, shape.child))
    }
}
