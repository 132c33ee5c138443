use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("first argument is an out of range number ({0}), expected 1 to 10")]
    UnknownFigure(i64),
    #[error("first argument is not a number ({0})")]
    InvalidSelector(String),
    #[error("style references gradient `{0}` which is not registered with the figure")]
    UnknownGradient(String),
    #[error("scene has no bounded drawable")]
    EmptyScene,
    #[error("margined bounding box is degenerate ({width} x {height})")]
    DegenerateBounds { width: f64, height: f64 },
    #[error("invalid render configuration: {reason}")]
    InvalidConfig { reason: String },
    #[error("cannot parse configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("cannot write {}: {}", path.display(), source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Scene(#[from] fig_scene::SceneError),
    #[error(transparent)]
    Kernel(#[from] fig_kernel::KernelError),
}
