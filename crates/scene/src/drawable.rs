use fig_kernel::{BoundingBox2d, Camera, Point2d, Point3d};
use serde::{Deserialize, Serialize};

use crate::projected::{ProjectedDrawable, ProjectedShape};
use crate::style::{Color, SPHERE_GRADIENT, Style};

/// Default marker radius (world units).
pub const DEFAULT_MARKER_RADIUS: f64 = 0.03;

/// An isolated point drawn as a filled circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMarker {
    pub position: Point3d,
    pub color: Color,
    pub radius: f64,
}

impl PointMarker {
    pub fn new(position: Point3d, color: Color) -> Self {
        Self {
            position,
            color,
            radius: DEFAULT_MARKER_RADIUS,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn style(&self) -> Style {
        Style::solid(self.color, 1.0)
    }
}

/// An ordered point sequence: polyline, polygon or filled polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathShape {
    pub points: Vec<Point3d>,
    pub style: Style,
}

impl PathShape {
    pub fn new(points: Vec<Point3d>, style: Style) -> Self {
        Self { points, style }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replace the style with `f` applied to the current one.
    pub fn restyle(mut self, f: impl FnOnce(Style) -> Style) -> Self {
        self.style = f(self.style);
        self
    }
}

/// A sphere drawn as a gradient-filled circle.
///
/// The projected radius equals the world radius, which only holds for
/// parallel projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub center: Point3d,
    pub radius: f64,
    pub style: Style,
}

impl Disc {
    pub fn sphere(center: Point3d, radius: f64) -> Self {
        Self {
            center,
            radius,
            // the gradient stops carry the transparency
            style: Style::outline(Color::BLACK, 0.003)
                .with_gradient(SPHERE_GRADIENT)
                .with_fill_opacity(1.0),
        }
    }
}

/// An ordered collection of owned drawables. Order is draw order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Composite {
    children: Vec<Drawable>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: impl Into<Drawable>) {
        self.children.push(item.into());
    }

    pub fn with(mut self, item: impl Into<Drawable>) -> Self {
        self.push(item);
        self
    }

    pub fn children(&self) -> &[Drawable] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl FromIterator<Drawable> for Composite {
    fn from_iter<I: IntoIterator<Item = Drawable>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Drawable {
    Point(PointMarker),
    Path(PathShape),
    Disc(Disc),
    Composite(Composite),
}

impl Drawable {
    /// Project through `camera`, recursing depth-first into composites.
    pub fn project(&self, camera: &Camera) -> ProjectedDrawable {
        match self {
            Drawable::Point(marker) => {
                let position = camera.project(&marker.position);
                ProjectedDrawable {
                    bounds: position.is_finite().then(|| BoundingBox2d::from_point(position)),
                    shape: ProjectedShape::Point {
                        position,
                        radius: marker.radius,
                        style: marker.style(),
                    },
                }
            }
            Drawable::Path(path) => {
                let points: Vec<Point2d> = path.points.iter().map(|p| camera.project(p)).collect();
                ProjectedDrawable {
                    bounds: BoundingBox2d::from_points(&points),
                    shape: ProjectedShape::Path {
                        points,
                        style: path.style.clone(),
                    },
                }
            }
            Drawable::Disc(disc) => {
                let center = camera.project(&disc.center);
                let r = disc.radius;
                ProjectedDrawable {
                    bounds: Some(BoundingBox2d::new(
                        Point2d::new(center.x - r, center.y - r),
                        Point2d::new(center.x + r, center.y + r),
                    )),
                    shape: ProjectedShape::Disc {
                        center,
                        radius: r,
                        style: disc.style.clone(),
                    },
                }
            }
            Drawable::Composite(set) => ProjectedDrawable::composite(
                set.children.iter().map(|child| child.project(camera)).collect(),
            ),
        }
    }

    /// Number of non-composite drawables in this tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Drawable::Composite(set) => set.children.iter().map(Drawable::leaf_count).sum(),
            _ => 1,
        }
    }
}

impl From<PointMarker> for Drawable {
    fn from(value: PointMarker) -> Self {
        Drawable::Point(value)
    }
}

impl From<PathShape> for Drawable {
    fn from(value: PathShape) -> Self {
        Drawable::Path(value)
    }
}

impl From<Disc> for Drawable {
    fn from(value: Disc) -> Self {
        Drawable::Disc(value)
    }
}

impl From<Composite> for Drawable {
    fn from(value: Composite) -> Self {
        Drawable::Composite(value)
    }
}
