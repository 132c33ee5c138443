//! Camera-space representation of drawables.
//!
//! A [`ProjectedDrawable`] is produced by [`crate::Drawable::project`] and is
//! the only input the markup writer accepts, so nothing can be emitted
//! before it has been projected.

use fig_kernel::{BoundingBox2d, Point2d};

use crate::style::Style;

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectedShape {
    Point {
        position: Point2d,
        radius: f64,
        style: Style,
    },
    Path {
        points: Vec<Point2d>,
        style: Style,
    },
    Disc {
        center: Point2d,
        radius: f64,
        style: Style,
    },
    Composite(Vec<ProjectedDrawable>),
}

/// Projected geometry plus its camera-space bounding box.
///
/// `bounds` is `None` for empty paths, for markers at non-finite positions
/// and for composites without any bounded descendant.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedDrawable {
    pub bounds: Option<BoundingBox2d>,
    pub shape: ProjectedShape,
}

impl ProjectedDrawable {
    /// Union of the children's boxes; the first bounded child initialises it.
    pub fn composite(children: Vec<ProjectedDrawable>) -> Self {
        let bounds = children
            .iter()
            .filter_map(|c| c.bounds)
            .reduce(|acc, b| acc.union(&b));
        Self {
            bounds,
            shape: ProjectedShape::Composite(children),
        }
    }

    /// Visit every non-composite descendant in draw order.
    pub fn for_each_leaf<'a>(&'a self, f: &mut impl FnMut(&'a ProjectedDrawable)) {
        match &self.shape {
            ProjectedShape::Composite(children) => {
                for child in children {
                    child.for_each_leaf(f);
                }
            }
            _ => f(self),
        }
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        self.for_each_leaf(&mut |_| count += 1);
        count
    }

    pub fn style(&self) -> Option<&Style> {
        match &self.shape {
            ProjectedShape::Point { style, .. }
            | ProjectedShape::Path { style, .. }
            | ProjectedShape::Disc { style, .. } => Some(style),
            ProjectedShape::Composite(_) => None,
        }
    }

    /// Gradient identifiers referenced anywhere in the tree, in draw order.
    pub fn gradient_refs(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.for_each_leaf(&mut |leaf| {
            if let Some(id) = leaf.style().and_then(Style::gradient_ref) {
                ids.push(id);
            }
        });
        ids
    }
}
