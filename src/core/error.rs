use thiserror::Error;

/// Failures surfaced by the sketch. None of them stop the frame loop: the
/// affected element is skipped and logged.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("asset failed to load: {0}")]
    AssetLoadFailure(String),
    #[error("missing container element `{0}`")]
    MissingContainerElement(String),
    #[error("render backend: {0}")]
    Backend(String),
}

pub type SketchResult<T> = Result<T, SketchError>;
