use serde::{Deserialize, Serialize};

use super::point::Point2d;

/// Axis-aligned bounding box in camera space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2d {
    pub min: Point2d,
    pub max: Point2d,
}

impl BoundingBox2d {
    pub fn new(min: Point2d, max: Point2d) -> Self {
        Self { min, max }
    }

    /// Degenerate (zero-area) box at a single point.
    pub fn from_point(p: Point2d) -> Self {
        Self { min: p, max: p }
    }

    /// `None` for an empty slice; the first point initialises the box.
    pub fn from_points(points: &[Point2d]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bb = Self::from_point(*first);
        for p in rest {
            bb.expand_to_include(p);
        }
        Some(bb)
    }

    pub fn expand_to_include(&mut self, p: &Point2d) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2d::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2d::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    pub fn contains_point(&self, p: &Point2d) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn contains(&self, other: &Self) -> bool {
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Grow by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min: Point2d::new(self.min.x - margin, self.min.y - margin),
            max: Point2d::new(self.max.x + margin, self.max.y + margin),
        }
    }
}
