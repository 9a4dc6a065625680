pub mod config;
pub mod error;
pub mod ops;
pub mod pipeline;

// Convenience re-exports
pub use config::JobSpec;
pub use error::AugmentError;
pub use ops::brightness::scale_samples;
pub use ops::flip::flip_horizontal;
pub use pipeline::RunSummary;
