//! Property-based tests for document framing using the `proptest` crate.

use proptest::prelude::*;

use fig_kernel::{BoundingBox2d, Point2d};
use fig_render::{RenderConfig, Viewport};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Boxes with a non-trivial horizontal extent.
fn arb_bounds() -> impl Strategy<Value = BoundingBox2d> {
    (-50.0f64..50.0, -50.0f64..50.0, 1e-2f64..40.0, 0.0f64..40.0).prop_map(|(x, y, w, h)| {
        BoundingBox2d::new(Point2d::new(x, y), Point2d::new(x + w, y + h))
    })
}

fn arb_config() -> impl Strategy<Value = RenderConfig> {
    (1.0f64..50.0, 0.0f64..0.2).prop_map(|(width_cm, margin_fraction)| RenderConfig {
        width_cm,
        margin_fraction,
    })
}

const TOL: f64 = 1e-9;

// ---------------------------------------------------------------------------
// 1. The view box holds the content plus an x-extent margin on every side
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn viewport_contains_margined_content(bounds in arb_bounds(), config in arb_config()) {
        prop_assume!(bounds.height() + 2.0 * config.margin_fraction * bounds.width() > 1e-9);
        let vp = Viewport::fit(&bounds, &config).unwrap();
        let margin = config.margin_fraction * bounds.width();
        prop_assert!((vp.min.x - (bounds.min.x - margin)).abs() < TOL);
        prop_assert!((vp.min.y - (bounds.min.y - margin)).abs() < TOL);
        prop_assert!((vp.width - (bounds.width() + 2.0 * margin)).abs() < TOL);
        prop_assert!((vp.height - (bounds.height() + 2.0 * margin)).abs() < TOL);
    }
}

// ---------------------------------------------------------------------------
// 2. Physical size keeps the aspect ratio of the view box
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn physical_size_keeps_aspect(bounds in arb_bounds(), config in arb_config()) {
        prop_assume!(bounds.height() > 1e-3);
        let vp = Viewport::fit(&bounds, &config).unwrap();
        prop_assert!((vp.width_cm - config.width_cm).abs() < TOL);
        let ratio = vp.height_cm / vp.width_cm;
        prop_assert!((ratio - vp.height / vp.width).abs() < 1e-9 * (1.0 + ratio));
    }
}

// ---------------------------------------------------------------------------
// 3. The flip transform swaps the bottom and top edges of the view box
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn flip_swaps_vertical_edges(bounds in arb_bounds()) {
        prop_assume!(bounds.height() > 1e-3);
        let vp = Viewport::fit(&bounds, &RenderConfig::tight()).unwrap();
        let transform = vp.flip_transform();
        let shift: f64 = transform
            .trim_start_matches("translate(0 ")
            .split(')')
            .next()
            .unwrap()
            .parse()
            .unwrap();
        // y' = shift - y maps min.y onto min.y + height and back
        let top = vp.min.y + vp.height;
        prop_assert!((shift - vp.min.y - top).abs() < 1e-5 * (1.0 + top.abs()));
    }
}
