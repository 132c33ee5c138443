use std::f64::consts::PI;

use fig_kernel::{Point3d, Vec3};
use tracing::{debug, instrument};

use crate::drawable::{Composite, PathShape, PointMarker};
use crate::style::{Color, Style};

/// Outline width shared by ellipses and sector polygons.
pub const ELLIPSE_WIDTH: f64 = 0.006;

/// Centre of the tangent plane all sectors live in.
const SECTOR_CENTER: Point3d = Point3d::new(0.0, 0.0, 1.0);

fn ellipse_style() -> Style {
    Style::outline(Color::GREEN, ELLIPSE_WIDTH)
}

fn ellipse_point(center: Point3d, axis1: Vec3, axis2: Vec3, angle: f64) -> Point3d {
    center + axis1 * angle.cos() + axis2 * angle.sin()
}

/// `n` points at `center + cos(θ)·axis1 + sin(θ)·axis2`, `θ = 2πi/n`.
#[instrument(level = "debug")]
pub fn ellipse(n: usize, center: Point3d, axis1: Vec3, axis2: Vec3) -> PathShape {
    let points = (0..n)
        .map(|i| ellipse_point(center, axis1, axis2, 2.0 * PI * i as f64 / n as f64))
        .collect();
    PathShape::new(points, ellipse_style())
}

/// Arc-plus-chord sector of the ellipse with semi-axes `lon_x` (along X)
/// and `lon_y` (along Y), centred at `(0, 0, 1)`.
#[derive(Debug, Clone)]
pub struct EllipseSector {
    pub polygon: PathShape,
    /// Arc endpoint at `angle1`, where the chord starts.
    pub chord_start: PointMarker,
    /// Arc endpoint at `angle0`, where the chord ends.
    pub chord_end: PointMarker,
}

impl EllipseSector {
    /// Sweep `n` arc points from `angle0` towards `angle1`, then `n / 2`
    /// chord points from the `angle1` endpoint back towards `angle0`.
    #[instrument(level = "debug")]
    pub fn new(n: usize, lon_x: f64, lon_y: f64, angle0: f64, angle1: f64) -> Self {
        let axis1 = Vec3::new(lon_x, 0.0, 0.0);
        let axis2 = Vec3::new(0.0, lon_y, 0.0);

        let mut points: Vec<Point3d> = (0..n)
            .map(|i| {
                let angle = angle0 + (angle1 - angle0) * i as f64 / n as f64;
                ellipse_point(SECTOR_CENTER, axis1, axis2, angle)
            })
            .collect();

        let p0 = ellipse_point(SECTOR_CENTER, axis1, axis2, angle1);
        let p1 = ellipse_point(SECTOR_CENTER, axis1, axis2, angle0);
        let chord = n / 2;
        points.extend((0..chord).map(|i| p0.lerp(&p1, i as f64 / chord as f64)));

        Self {
            polygon: PathShape::new(points, ellipse_style()),
            chord_start: PointMarker::new(p0, Color::GREEN),
            chord_end: PointMarker::new(p1, Color::GREEN),
        }
    }

    /// The sector outline followed by its two endpoint markers.
    pub fn into_drawable(self) -> Composite {
        Composite::new()
            .with(self.polygon)
            .with(self.chord_start)
            .with(self.chord_end)
    }
}

/// Pie-slice sector: radius in, arc, radius out.
#[derive(Debug, Clone)]
pub struct RadialSector {
    pub polygon: PathShape,
    pub angle0: f64,
    pub angle1: f64,
    pub lon_x: f64,
    pub lon_y: f64,
    /// The `angle1` endpoint pushed onto the unit sphere, then out to the
    /// unit cylinder around Z at the same height.
    pub point0: Point3d,
    /// `point0` lifted to height 1.
    pub point1: Point3d,
}

impl RadialSector {
    pub const ANGLE0: f64 = 0.0;
    pub const ANGLE1: f64 = 0.35 * PI;

    #[instrument(level = "debug")]
    pub fn new(n: usize, lon_x: f64, lon_y: f64) -> Self {
        let (angle0, angle1) = (Self::ANGLE0, Self::ANGLE1);
        let axis1 = Vec3::new(lon_x, 0.0, 0.0);
        let axis2 = Vec3::new(0.0, lon_y, 0.0);
        let end0 = ellipse_point(SECTOR_CENTER, axis1, axis2, angle0);
        let end1 = ellipse_point(SECTOR_CENTER, axis1, axis2, angle1);
        let steps = n as f64;

        let mut points = Vec::with_capacity(3 * n);
        // centre (included) up to end0 (excluded)
        points.extend((0..n).map(|i| SECTOR_CENTER.lerp(&end0, i as f64 / steps)));
        // end0 (included) up to end1 (excluded)
        points.extend((0..n).map(|i| {
            let angle = angle0 + (angle1 - angle0) * i as f64 / steps;
            ellipse_point(SECTOR_CENTER, axis1, axis2, angle)
        }));
        // end1 (included) back to the centre (excluded)
        points.extend((1..=n).rev().map(|i| SECTOR_CENTER.lerp(&end1, i as f64 / steps)));

        let on_sphere = end1.on_unit_sphere().unwrap_or(end1);
        let r = on_sphere.x.hypot(on_sphere.y);
        let point0 = if r > 0.0 {
            Point3d::new(on_sphere.x / r, on_sphere.y / r, on_sphere.z)
        } else {
            on_sphere
        };
        let point1 = Point3d::new(point0.x, point0.y, 1.0);
        debug!(points = points.len(), ?point0, ?point1, "built radial sector");

        Self {
            polygon: PathShape::new(points, ellipse_style()),
            angle0,
            angle1,
            lon_x,
            lon_y,
            point0,
            point1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ellipse_points() {
        let e = ellipse(4, Point3d::new(0.0, 0.0, 1.0), Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(e.len(), 4);
        assert!(e.points[0].distance_to(&Point3d::new(2.0, 0.0, 1.0)) < 1e-12);
        assert!(e.points[1].distance_to(&Point3d::new(0.0, 1.0, 1.0)) < 1e-12);
        assert!(e.points[2].distance_to(&Point3d::new(-2.0, 0.0, 1.0)) < 1e-12);
        assert!(e.style.close_path);
        assert!(!e.style.draw_filled);
    }

    #[test]
    fn test_ellipse_sector_layout() {
        let angle0 = 0.6 * PI;
        let sector = EllipseSector::new(64, 0.6, 1.5, angle0, -angle0);
        assert_eq!(sector.polygon.len(), 64 + 32);
        // first arc point is at angle0, first chord point at angle1
        assert!(sector.polygon.points[0].distance_to(&sector.chord_end.position) < 1e-12);
        assert!(sector.polygon.points[64].distance_to(&sector.chord_start.position) < 1e-12);
        assert!(sector.chord_start.position.y < 0.0);
        assert_eq!(sector.into_drawable().len(), 3);
    }

    #[test]
    fn test_radial_sector_runs() {
        let n = 12;
        let sector = RadialSector::new(n, 0.8, 3.0);
        let pts = &sector.polygon.points;
        assert_eq!(pts.len(), 3 * n);
        // starts at the centre, never returns to it
        assert!(pts[0].distance_to(&SECTOR_CENTER) < 1e-12);
        assert!(pts[3 * n - 1].distance_to(&SECTOR_CENTER) > 1e-6);
        // arc starts at end0
        assert!(pts[n].distance_to(&Point3d::new(0.8, 0.0, 1.0)) < 1e-12);
        // radius runs stay in the plane z = 1
        assert!(pts.iter().all(|p| (p.z - 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_radial_sector_aux_points() {
        let sector = RadialSector::new(8, 0.8, 3.0);
        let p0 = sector.point0;
        assert_relative_eq!(p0.x.hypot(p0.y), 1.0, epsilon = 1e-12);
        assert!(p0.z > 0.0 && p0.z < 1.0);
        assert!((sector.point1.z - 1.0).abs() < 1e-12);
        assert!((sector.angle1 - 0.35 * PI).abs() < 1e-12);
    }
}
