//! Conversion of projected drawables into SVG nodes.
//!
//! Composites are flattened: every leaf becomes one sibling element in the
//! target group, in draw order.

use fig_kernel::Point2d;
use fig_scene::style::fmt_num;
use fig_scene::{ProjectedDrawable, ProjectedShape, Style};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Path};
use tracing::warn;

fn circle(center: Point2d, radius: f64, style: &Style) -> Option<Circle> {
    if !(center.is_finite() && radius.is_finite()) {
        warn!(?center, radius, "non-finite circle not written");
        return None;
    }
    Some(
        Circle::new()
            .set("cx", fmt_num(center.x))
            .set("cy", fmt_num(center.y))
            .set("r", fmt_num(radius))
            .set("style", style.to_string()),
    )
}

/// `M`/`L` path data through the finite points, closed with `Z` on request.
/// Returns `None` when no finite point remains.
pub fn path_data(points: &[Point2d], close: bool) -> Option<Data> {
    let mut finite = points.iter().filter(|p| {
        let ok = p.is_finite();
        if !ok {
            warn!(point = ?p, "non-finite coordinate not written");
        }
        ok
    });
    // `svg::Data` parameters are f32
    let first = finite.next()?;
    let data = finite.fold(Data::new().move_to((first.x as f32, first.y as f32)), |data, p| {
        data.line_to((p.x as f32, p.y as f32))
    });
    Some(if close { data.close() } else { data })
}

fn path(points: &[Point2d], style: &Style) -> Option<Path> {
    if points.is_empty() {
        warn!("attempting to draw an empty path, skipped");
        return None;
    }
    let Some(data) = path_data(points, style.close_path) else {
        warn!(points = points.len(), "path has no finite point, skipped");
        return None;
    };
    Some(
        Path::new()
            .set("stroke-linecap", "round")
            .set("stroke-linejoin", "round")
            .set("style", style.to_string())
            .set("d", data),
    )
}

/// Append the elements of `drawable` to `group`.
pub fn append(group: Group, drawable: &ProjectedDrawable) -> Group {
    match &drawable.shape {
        ProjectedShape::Point {
            position,
            radius,
            style,
        } => match circle(*position, *radius, style) {
            Some(c) => group.add(c),
            None => group,
        },
        ProjectedShape::Disc { center, radius, style } => match circle(*center, *radius, style) {
            Some(c) => group.add(c),
            None => group,
        },
        ProjectedShape::Path { points, style } => match path(points, style) {
            Some(p) => group.add(p),
            None => group,
        },
        ProjectedShape::Composite(children) => children.iter().fold(group, append),
    }
}
