use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtError {
    /// Rejected before any rendering work begins.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Input that renders the pipeline's arithmetic meaningless, like a
    /// single-line polygon whose interpolation factor divides by zero.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// Directory creation or image save failure. Never retried; previously
    /// written images are left in place.
    #[error("persistence failure at {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ArtError {
    pub fn persistence<P, E>(path: P, source: E) -> Self
    where
        P: AsRef<Path>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Persistence {
            path: path.as_ref().to_path_buf(),
            source: Box::new(source),
        }
    }
}
