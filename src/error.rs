use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of the identicon pipeline.
///
/// Every stage before rasterization is a total function, so the only
/// runtime errors are I/O and encoding; `InsufficientData` guards against
/// a swapped-in hasher producing fewer bytes than a stage consumes.
#[derive(Debug, Error)]
pub enum IdenticonError {
    /// An upstream stage produced fewer bytes than a downstream stage
    /// requires. Integration error, not recoverable at runtime.
    #[error("stage requires at least {needed} digest bytes, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Filesystem failure while persisting the image or reading a config.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization failure for a config or trace file.
    #[error("failed to process JSON for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// PNG encoding failure propagated from the image library.
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
