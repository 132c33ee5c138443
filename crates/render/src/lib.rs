//! SVG output for figure scenes: gradient definitions, markup emission,
//! document layout and the built-in figure catalog.

pub mod catalog;
pub mod config;
pub mod error;
pub mod figure;
pub mod gradient;
pub mod svg_writer;

use std::path::Path;

pub use config::RenderConfig;
pub use error::RenderError;
pub use figure::{Figure, Viewport};
pub use gradient::{GradientRegistry, RadialGradientDef};

/// Build catalog figure `n` and write it to `path`.
///
/// Out-of-range selectors fail before anything is written.
pub fn render_figure(n: i64, path: &Path, config: &RenderConfig) -> Result<(), RenderError> {
    config.validate()?;
    let figure = catalog::build(n)?.with_config(*config);
    figure.render_to_file(path)
}
