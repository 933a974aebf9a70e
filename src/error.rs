use thiserror::Error;

/// Opaque failure raised by an external markup renderer.
///
/// The segmenter never interprets, wraps, or suppresses these; they travel
/// unmodified to the caller.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct RenderError(Box<dyn std::error::Error + Send + Sync + 'static>);

impl RenderError {
    pub fn new<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self(source.into())
    }
}

/// Errors that can occur when configuring or running a segmenter
#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("invalid header pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Render(#[from] RenderError),
}
