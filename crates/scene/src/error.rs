use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("polygons have different point counts: {first} vs {second}")]
    PointCountMismatch { first: usize, second: usize },
    #[error("connector step must be at least 1")]
    InvalidStep,
    #[error("direction {what} has no component usable for this construction")]
    DegenerateDirection { what: &'static str },
}
