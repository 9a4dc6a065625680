use std::path::PathBuf;

use thiserror::Error;

/// Error type for every fallible augmentation operation.
///
/// Nothing is recovered locally: the first error aborts the whole batch, so
/// every variant carries enough context (usually the offending path) to make
/// that abort diagnosable.
#[derive(Error, Debug)]
pub enum AugmentError {
    /// Listing the source directory failed (missing, unreadable, not a dir).
    #[error("failed to list source directory '{path}': {source}")]
    SourceDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The codec could not decode a file that passed the extension filter.
    /// Bad files are never silently skipped; the run stops here.
    #[error("failed to decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Encoding or writing an output image failed.
    #[error("failed to write image '{path}': {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Other filesystem errors (output directory creation and the like).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A brightness factor that is not finite and strictly positive.
    #[error("brightness factor must be finite and positive, got {0}")]
    InvalidFactor(f32),

    /// A job spec file that could not be read or parsed.
    #[error("job spec error: {0}")]
    Spec(String),
}
