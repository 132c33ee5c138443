//! Property-based tests for projection and builder invariants using the `proptest` crate.

use std::f64::consts::PI;

use nalgebra::{Matrix2, Vector2};
use proptest::prelude::*;

use fig_kernel::{Axis, Camera, Point3d, Vec3};
use fig_scene::builders::{cylinder_projection, ellipse, joining_quads, spherical_projection};
use fig_scene::{Color, Composite, Drawable, PathShape, PointMarker, ProjectedDrawable, Style};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_point() -> impl Strategy<Value = Point3d> {
    (-10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0).prop_map(|(x, y, z)| Point3d::new(x, y, z))
}

/// Points kept away from the origin so every map is defined.
fn arb_offset_point() -> impl Strategy<Value = Point3d> {
    arb_point().prop_filter("too close to the origin", |p| p.to_vec3().length() > 1e-2)
}

fn arb_polygon() -> impl Strategy<Value = Vec<Point3d>> {
    prop::collection::vec(arb_point(), 0..40)
}

fn arb_axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
}

/// Observer positions that keep the Y up hint well away from the view axis.
fn arb_camera() -> impl Strategy<Value = Camera> {
    (-5.0f64..5.0, -3.0f64..3.0, -5.0f64..5.0)
        .prop_filter("view nearly vertical", |(x, _, z)| x.hypot(*z) > 0.5)
        .prop_map(|(x, y, z)| Camera::new(Point3d::ORIGIN, Point3d::new(x, y, z), Vec3::Y).unwrap())
}

fn polygon(points: Vec<Point3d>) -> PathShape {
    PathShape::new(points, Style::default())
}

fn arb_leaf() -> impl Strategy<Value = Drawable> {
    prop_oneof![
        arb_polygon().prop_map(|pts| Drawable::from(polygon(pts))),
        arb_point().prop_map(|p| Drawable::from(PointMarker::new(p, Color::RED))),
    ]
}

fn arb_drawable() -> impl Strategy<Value = Drawable> {
    arb_leaf().prop_recursive(3, 24, 5, |inner| {
        prop::collection::vec(inner, 0..5).prop_map(|children| Drawable::Composite(children.into_iter().collect()))
    })
}

const TOL: f64 = 1e-9;

/// Every leaf's box lies inside every ancestor's box.
fn boxes_nest(node: &ProjectedDrawable) -> bool {
    let mut ok = true;
    node.for_each_leaf(&mut |leaf| {
        if let (Some(outer), Some(inner)) = (node.bounds, leaf.bounds) {
            ok &= outer.contains(&inner);
        }
        if leaf.bounds.is_some() && node.bounds.is_none() {
            ok = false;
        }
    });
    ok
}

// ---------------------------------------------------------------------------
// 3. Projecting a polygon keeps its point count and order
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn polygon_projection_keeps_points(points in arb_polygon(), camera in arb_camera()) {
        let shape = polygon(points.clone());
        let projected = Drawable::from(shape).project(&camera);
        match projected.shape {
            fig_scene::ProjectedShape::Path { points: flat, .. } => {
                prop_assert_eq!(flat.len(), points.len());
                for (p, q) in points.iter().zip(&flat) {
                    prop_assert_eq!(camera.project(p), *q);
                }
            }
            other => prop_assert!(false, "unexpected shape {:?}", other),
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Bounding boxes: points inside their leaf, leaves inside composites
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn leaf_bounds_contain_projected_points(points in arb_polygon(), camera in arb_camera()) {
        let projected = Drawable::from(polygon(points.clone())).project(&camera);
        match projected.bounds {
            None => prop_assert!(points.is_empty()),
            Some(b) => {
                for p in &points {
                    prop_assert!(b.contains_point(&camera.project(p)));
                }
            }
        }
    }

    #[test]
    fn composite_bounds_contain_children(tree in arb_drawable(), camera in arb_camera()) {
        let projected = tree.project(&camera);
        prop_assert!(boxes_nest(&projected));
        prop_assert_eq!(projected.leaf_count(), tree.leaf_count());
    }
}

// ---------------------------------------------------------------------------
// 5. Ellipse points decompose back to (cos θ, sin θ) on the two axes
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn ellipse_points_recover_parameters(
        n in 3usize..100,
        center in arb_point(),
        a1 in arb_offset_point(),
        a2 in arb_offset_point(),
    ) {
        let (axis1, axis2) = (a1.to_vec3(), a2.to_vec3());
        prop_assume!(axis1.cross(&axis2).length() > 0.1 * axis1.length() * axis2.length());

        let gram = Matrix2::new(
            axis1.dot(&axis1), axis1.dot(&axis2),
            axis2.dot(&axis1), axis2.dot(&axis2),
        );
        let inverse = gram.try_inverse().unwrap();

        let shape = ellipse(n, center, axis1, axis2);
        prop_assert_eq!(shape.len(), n);
        for (i, p) in shape.points.iter().enumerate() {
            let d = *p - center;
            let coords = inverse * Vector2::new(axis1.dot(&d), axis2.dot(&d));
            let theta = 2.0 * PI * i as f64 / n as f64;
            prop_assert!((coords[0] - theta.cos()).abs() < 1e-6, "cos at {}: {}", i, coords[0]);
            prop_assert!((coords[1] - theta.sin()).abs() < 1e-6, "sin at {}: {}", i, coords[1]);
        }
    }
}

// ---------------------------------------------------------------------------
// 6. Spherical projection lands on the unit sphere and is idempotent
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn spherical_projection_is_idempotent(points in prop::collection::vec(arb_offset_point(), 0..40)) {
        let once = spherical_projection(&polygon(points.clone()));
        prop_assert_eq!(once.len(), points.len());
        for p in &once.points {
            prop_assert!((p.to_vec3().length() - 1.0).abs() < TOL);
        }
        let twice = spherical_projection(&once);
        for (a, b) in once.points.iter().zip(&twice.points) {
            prop_assert!(a.distance_to(b) < TOL);
        }
    }
}

// ---------------------------------------------------------------------------
// 7. Cylinder projection: unit distance to the axis, sphere height kept
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn cylinder_projection_has_unit_radius(
        axis in arb_axis(),
        points in prop::collection::vec(arb_offset_point(), 0..40),
    ) {
        let off_axis: Vec<Point3d> = points
            .into_iter()
            .filter(|p| {
                let (u, w) = axis.perpendicular(p);
                u.hypot(w) > 1e-3 * p.to_vec3().length()
            })
            .collect();
        let mapped = cylinder_projection(axis, &polygon(off_axis.clone()));
        prop_assert_eq!(mapped.len(), off_axis.len());
        for (src, dst) in off_axis.iter().zip(&mapped.points) {
            let (u, w) = axis.perpendicular(dst);
            prop_assert!((u.hypot(w) - 1.0).abs() < TOL);
            let height = axis.along(src) / src.to_vec3().length();
            prop_assert!((axis.along(dst) - height).abs() < TOL);
        }
    }
}

// ---------------------------------------------------------------------------
// 8. Joining quads: one per index pair, wrapping, in documented order
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn joining_quads_follow_index_pairs(
        pairs in prop::collection::vec((arb_point(), arb_point()), 1..30),
    ) {
        let (a, b): (Vec<Point3d>, Vec<Point3d>) = pairs.into_iter().unzip();
        let k = a.len();
        let quads = joining_quads(&polygon(a.clone()), &polygon(b.clone())).unwrap();
        prop_assert_eq!(quads.len(), k);
        for (i, child) in quads.children().iter().enumerate() {
            let j = (i + 1) % k;
            match child {
                Drawable::Path(q) => prop_assert_eq!(&q.points, &vec![a[i], a[j], b[j], b[i]]),
                other => prop_assert!(false, "unexpected drawable {:?}", other),
            }
        }
    }

    #[test]
    fn joining_quads_reject_mismatched_lengths(
        a in prop::collection::vec(arb_point(), 1..20),
        extra in 1usize..5,
    ) {
        let b: Vec<Point3d> = a.iter().cycle().take(a.len() + extra).copied().collect();
        prop_assert!(joining_quads(&polygon(a), &polygon(b)).is_err());
    }
}

#[test]
fn empty_composite_has_no_bounds() {
    let camera = Camera::new(Point3d::ORIGIN, Point3d::new(1.0, 1.0, 1.0), Vec3::Y).unwrap();
    let projected = Drawable::from(Composite::new()).project(&camera);
    assert!(projected.bounds.is_none());
}
