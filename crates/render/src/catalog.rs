//! The ten built-in figures.
//!
//! Each recipe is plain data wiring builders together; all figures look at
//! the origin with world Y up.

use std::f64::consts::PI;

use fig_kernel::{Axis, Camera, Point3d, Vec3};
use fig_scene::builders::primitives::SEGMENT_WIDTH;
use fig_scene::builders::{
    EllipseSector, RadialSector, axes, axis_projector_segments, connector_segments, cylinder_point,
    cylinder_projection, cylinder_projection_with_sector, cylinder_wireframe, ellipse, extreme_vertical_segments,
    hemisphere, horizontal_plane_projection, joining_quads, segment, segment_between, spherical_projection,
    spherical_projection_clipped,
};
use fig_scene::style::{HEMISPHERE_GRADIENT, SPHERE_CAP_GRADIENT};
use fig_scene::{Color, Composite, Disc, PathShape, PointMarker, SceneError, Style};
use tracing::{debug, instrument};

use crate::error::RenderError;
use crate::figure::Figure;

pub const FIGURE_COUNT: i64 = 10;

const MARKER_GREEN: Color = Color::new(0.0, 0.7, 0.0);
const TANGENT_GREEN: Color = Color::new(0.0, 0.6, 0.0);
const CONNECTOR_STEP: usize = 4;

/// Short description of figure `n`.
pub fn title(n: i64) -> Option<&'static str> {
    Some(match n {
        1 => "hat box",
        2 => "cylinder parametrisation",
        3 => "cylinder with polar quads",
        4 => "parallel ellipse sector",
        5 => "radial ellipse sector",
        6 => "tangent ellipse supplement",
        7 => "projected solid angle: shape",
        8 => "projected solid angle: ellipse",
        9 => "projected solid angle: ellipse lune",
        10 => "projected solid angle: lune",
        _ => return None,
    })
}

/// Build figure `n` (1 to 10).
#[instrument]
pub fn build(n: i64) -> Result<Figure, RenderError> {
    let figure = match n {
        1 => hat_box()?,
        2 => cylinder_parametrisation()?,
        3 => cylinder_with_quads()?,
        4 => parallel_sector()?,
        5 => radial_sector()?,
        6 => tangent_supplement()?,
        7 => projected_solid_angle(Point3d::new(3.0, 3.0, 0.0), 2.2, true)?,
        8 => projected_solid_angle(Point3d::new(3.0, 3.5, 0.0), 3.0, true)?,
        9 => projected_solid_angle(Point3d::new(3.0, 1.0, 0.0), 5.0, true)?,
        10 => projected_solid_angle(Point3d::new(3.0, -1.0, 0.0), 5.0, false)?,
        _ => return Err(RenderError::UnknownFigure(n)),
    };
    debug!(title = ?title(n), leaves = figure.leaf_count(), "built figure");
    Ok(figure)
}

fn camera_at(observer: Point3d) -> Result<Camera, RenderError> {
    Ok(Camera::new(Point3d::ORIGIN, observer, Vec3::Y)?)
}

fn unit_sphere() -> Disc {
    Disc::sphere(Point3d::ORIGIN, 1.0)
}

/// Ellipse in the plane z = 1 centred on the Z axis.
fn tangent_ellipse(n: usize, lon_x: f64, lon_y: f64) -> PathShape {
    ellipse(n, Point3d::new(0.0, 0.0, 1.0), Vec3::X * lon_x, Vec3::Y * lon_y)
}

/// Red unit circle at z = 1: the front rim of the Z cylinder.
fn front_rim(n: usize) -> PathShape {
    tangent_ellipse(n, 1.0, 1.0).with_style(Style::outline(Color::RED, 0.015))
}

fn radial(p: Point3d) -> Point3d {
    p.on_unit_sphere().unwrap_or(p)
}

fn hat_box() -> Result<Figure, RenderError> {
    let camera = camera_at(Point3d::new(0.4, 0.5, 1.0))?;
    let flat = ellipse(64, Point3d::new(1.0, 1.3, 0.0), Vec3::new(0.0, 0.4, 0.0), Vec3::new(0.0, 0.0, 0.2));
    let on_sphere = spherical_projection(&flat);
    let on_cylinder = cylinder_projection(Axis::Y, &flat);

    let projectors = axis_projector_segments(CONNECTOR_STEP, &on_sphere, Axis::Y)?;
    let connectors = connector_segments(CONNECTOR_STEP, &on_sphere, &on_cylinder)?;

    let scene = Composite::new()
        .with(axes(0.010))
        .with(unit_sphere())
        .with(projectors)
        .with(on_sphere)
        .with(connectors)
        .with(on_cylinder)
        .with(cylinder_wireframe(&camera, Axis::Y));
    Ok(Figure::new(camera, scene))
}

fn cylinder_parametrisation() -> Result<Figure, RenderError> {
    let camera = camera_at(Point3d::new(0.9, 0.5, 1.0))?;
    let tangent = tangent_ellipse(64, 0.6, 1.5);

    let scene = Composite::new()
        .with(axes(0.010))
        .with(unit_sphere())
        .with(spherical_projection(&tangent))
        .with(cylinder_projection(Axis::Y, &tangent))
        .with(cylinder_wireframe(&camera, Axis::Y));
    Ok(Figure::new(camera, scene))
}

fn cylinder_with_quads() -> Result<Figure, RenderError> {
    let camera = camera_at(Point3d::new(1.3, 0.5, 1.0))?;
    let n = 128;
    let tangent = tangent_ellipse(n, 0.6, 1.5);
    let on_cylinder = cylinder_projection(Axis::Z, &tangent).restyle(Style::without_fill);
    let rim = front_rim(n);
    let quads = joining_quads(&on_cylinder, &rim)?;

    let scene = Composite::new()
        .with(axes(0.010))
        .with(unit_sphere())
        .with(spherical_projection(&tangent))
        .with(on_cylinder)
        .with(quads)
        .with(rim)
        .with(cylinder_wireframe(&camera, Axis::Z));
    Ok(Figure::new(camera, scene))
}

fn parallel_sector() -> Result<Figure, RenderError> {
    let camera = camera_at(Point3d::new(0.5, 0.5, 1.0))?;
    let full = tangent_ellipse(128, 0.6, 1.5);
    let sector = EllipseSector::new(64, 0.6, 1.5, 0.6 * PI, -0.6 * PI);

    let marker = |m: &PointMarker| -> Result<PointMarker, SceneError> {
        let mut p = cylinder_point(Axis::Y, m)?.with_radius(0.05);
        p.color = MARKER_GREEN;
        Ok(p)
    };
    let p0 = marker(&sector.chord_start)?;
    let p1 = marker(&sector.chord_end)?;
    let link = segment_between(&p0, &p1, 0.025);

    let scene = Composite::new()
        .with(axes(0.010))
        .with(cylinder_wireframe(&camera, Axis::Y))
        .with(spherical_projection(&full).restyle(Style::without_fill))
        .with(cylinder_projection(Axis::Y, &full).restyle(Style::without_fill))
        .with(unit_sphere())
        .with(spherical_projection(&sector.polygon))
        .with(cylinder_projection(Axis::Y, &sector.polygon))
        .with(p0)
        .with(p1)
        .with(link);
    Ok(Figure::new(camera, scene))
}

fn radial_sector() -> Result<Figure, RenderError> {
    let camera = camera_at(Point3d::new(0.7, 0.5, 1.0))?;
    let n = 256;
    let (lon_x, lon_y) = (0.8, 3.0);
    let full = tangent_ellipse(n, lon_x, lon_y);
    let sector = RadialSector::new(3 * n, lon_x, lon_y);

    let on_cylinder = cylinder_projection_with_sector(
        Axis::Z,
        &sector.polygon,
        sector.angle0,
        sector.angle1,
        sector.lon_x,
        sector.lon_y,
    );
    let p0 = PointMarker::new(sector.point0, MARKER_GREEN).with_radius(0.05);
    let p1 = PointMarker::new(sector.point1, MARKER_GREEN).with_radius(0.05);
    let link = segment_between(&p0, &p1, 0.025);

    let scene = Composite::new()
        .with(axes(0.010))
        .with(cylinder_wireframe(&camera, Axis::Z))
        .with(unit_sphere())
        .with(spherical_projection(&full).restyle(Style::without_fill))
        .with(cylinder_projection(Axis::Z, &full).restyle(Style::without_fill))
        .with(front_rim(n))
        .with(spherical_projection(&sector.polygon))
        .with(on_cylinder)
        .with(p0)
        .with(p1)
        .with(link);
    Ok(Figure::new(camera, scene))
}

fn tangent_supplement() -> Result<Figure, RenderError> {
    let camera = camera_at(Point3d::new(-0.6, 0.5, 1.0))?;
    // minor (X) and major (Y) semi-axes of the tangent ellipse
    let (bt, at) = (0.7, 1.3);
    let width = 0.008;
    let origin = Point3d::ORIGIN;
    let tangent = tangent_ellipse(256, bt, at).restyle(|s| s.with_line(TANGENT_GREEN, 0.015));

    let mark = |x: f64, y: f64| PointMarker::new(Point3d::new(x, y, 1.0), TANGENT_GREEN);
    let minor = segment_between(&mark(-bt, 0.0), &mark(bt, 0.0), width);
    let major = segment_between(&mark(0.0, -at), &mark(0.0, at), width);

    let x = 0.7 * bt;
    let y = at * (1.0 - x * x / (bt * bt)).sqrt();
    let (t0, tm, t1) = (mark(x, -y), mark(x, 0.0), mark(x, y));
    let chord = segment_between(&t0, &t1, width);
    let s0 = PointMarker::new(radial(t0.position), Color::BLUE);
    let s1 = PointMarker::new(radial(t1.position), Color::BLUE);

    let drop_to_axis = |p: Point3d| {
        segment(p, Point3d::new(0.0, p.y, 0.0)).restyle(|s| s.with_line(Color::gray(0.7), 0.004).dashed())
    };

    let scene = Composite::new()
        .with(axes(0.004))
        .with(unit_sphere())
        .with(tangent)
        .with(minor)
        .with(major)
        .with(chord)
        .with(segment(origin, tm.position))
        .with(segment(Point3d::new(0.0, 0.0, 1.0), tm.position).restyle(|s| s.with_line(Color::RED, SEGMENT_WIDTH)))
        .with(segment(origin, t0.position))
        .with(segment(origin, t1.position))
        .with(drop_to_axis(t1.position))
        .with(drop_to_axis(s1.position))
        .with(t0)
        .with(tm)
        .with(t1)
        .with(s0)
        .with(s1);
    Ok(Figure::new(camera, scene))
}

/// A disk facing the origin, its clipped spherical image (the projected
/// solid angle) and that cap flattened onto the horizontal plane.
fn projected_solid_angle(center: Point3d, radius: f64, projectors: bool) -> Result<Figure, RenderError> {
    let observer = Point3d::new(1.2, 0.6, 1.0);
    let camera = camera_at(observer)?;

    let c = center.to_vec3();
    let degenerate = || SceneError::DegenerateDirection { what: "disk centre" };
    let c_unit = c.normalized().ok_or_else(degenerate)?;
    let axis1 = c.cross(&Vec3::Y).normalized().ok_or_else(degenerate)?;
    let axis2 = axis1.cross(&c_unit).normalized().ok_or_else(degenerate)?;
    let disk = ellipse(256, center, axis1 * radius, axis2 * radius);

    let cap = spherical_projection_clipped(&disk)
        .restyle(|s| s.with_gradient(SPHERE_CAP_GRADIENT).with_fill_opacity(0.5));
    let shadow = horizontal_plane_projection(&cap, true);
    let outline = horizontal_plane_projection(&disk, false).restyle(|s| s.without_fill().dashed());

    let mut scene = Composite::new().with(outline);
    if projectors {
        scene.push(extreme_vertical_segments(&cap, &shadow, &camera)?);
    }
    scene.push(hemisphere(Point3d::ORIGIN, 1.0, observer.to_vec3())?);
    scene.push(cap);
    scene.push(shadow);

    Ok(Figure::new(camera, scene)
        .with_gradient(HEMISPHERE_GRADIENT)
        .with_gradient(SPHERE_CAP_GRADIENT))
}
