use fig_kernel::{Axis, Camera, Point3d};
use tracing::{debug, instrument};

use crate::builders::primitives::{quad, segment_along};
use crate::drawable::{Composite, Drawable, PathShape};
use crate::error::SceneError;
use crate::style::{Color, Style};

const CONNECTOR_COLOR: Color = Color::new(0.0, 0.7, 1.0);
const CONNECTOR_WIDTH: f64 = 0.0025;

fn same_length(a: &PathShape, b: &PathShape) -> Result<usize, SceneError> {
    if a.len() != b.len() {
        return Err(SceneError::PointCountMismatch {
            first: a.len(),
            second: b.len(),
        });
    }
    Ok(a.len())
}

fn check_step(step: usize) -> Result<(), SceneError> {
    if step == 0 {
        return Err(SceneError::InvalidStep);
    }
    Ok(())
}

fn connector(from: Point3d, to: Point3d) -> Drawable {
    segment_along(from, to - from, CONNECTOR_COLOR, CONNECTOR_WIDTH).into()
}

/// One quad per consecutive index pair of two equally long polygons,
/// including the wrap-around pair `(k-1, 0)`.
#[instrument(level = "debug", skip_all, fields(points = a.len()))]
pub fn joining_quads(a: &PathShape, b: &PathShape) -> Result<Composite, SceneError> {
    let k = same_length(a, b)?;
    let quads: Composite = (0..k)
        .map(|i| {
            let j = (i + 1) % k;
            Drawable::from(quad(a.points[i], a.points[j], b.points[i], b.points[j]))
        })
        .collect();
    debug!(quads = quads.len(), "built joining quads");
    Ok(quads)
}

/// A segment from `a[i]` to `b[i]` for every `step`-th index.
pub fn connector_segments(step: usize, a: &PathShape, b: &PathShape) -> Result<Composite, SceneError> {
    check_step(step)?;
    let k = same_length(a, b)?;
    Ok((0..k).step_by(step).map(|i| connector(a.points[i], b.points[i])).collect())
}

/// A segment from the foot on `axis` to the vertex, for every `step`-th vertex.
pub fn axis_projector_segments(step: usize, polygon: &PathShape, axis: Axis) -> Result<Composite, SceneError> {
    check_step(step)?;
    Ok(polygon
        .points
        .iter()
        .step_by(step)
        .map(|p| {
            let foot = Point3d::from_vec3(axis.unit() * axis.along(p));
            connector(foot, *p)
        })
        .collect())
}

/// Dashed segments from the leftmost and rightmost vertex of `a` (as seen
/// through `camera`) to the vertex of `b` with the same index.
#[instrument(level = "debug", skip_all, fields(points = a.len()))]
pub fn extreme_vertical_segments(a: &PathShape, b: &PathShape, camera: &Camera) -> Result<Composite, SceneError> {
    same_length(a, b)?;
    let screen_x: Vec<f64> = a.points.iter().map(|p| camera.project(p).x).collect();
    let extreme = |pick_max: bool| {
        screen_x
            .iter()
            .enumerate()
            .reduce(|best, cur| {
                let better = if pick_max { cur.1 > best.1 } else { cur.1 < best.1 };
                if better { cur } else { best }
            })
            .map(|(i, _)| i)
    };

    let style = Style::polyline(Color::gray(0.5), 0.004).dashed();
    let mut out = Composite::new();
    for i in [extreme(false), extreme(true)].into_iter().flatten() {
        out.push(PathShape::new(vec![a.points[i], b.points[i]], style.clone()));
    }
    Ok(out)
}
