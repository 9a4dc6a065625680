use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AugmentError;

/// Brightness factors applied when a job does not configure its own list.
pub const DEFAULT_FACTORS: [f32; 4] = [0.5, 0.8, 1.2, 1.5];

/// A fully serializable description of one augmentation job.
///
/// `JobSpec` can be saved to / loaded from JSON independently of any run,
/// making it possible to keep the job description next to the dataset it
/// augments and replay it later.
///
/// Fields:
/// - `source_dir` — flat directory holding the original images
/// - `output_dir` — where variants go; when absent each pipeline derives a
///                  subdirectory of `source_dir`
/// - `factors`    — ordered brightness factors (ignored by the flip pipeline)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSpec {
    pub source_dir: PathBuf,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default = "default_factors")]
    pub factors: Vec<f32>,
}

fn default_factors() -> Vec<f32> {
    DEFAULT_FACTORS.to_vec()
}

impl JobSpec {
    /// Creates a spec for `source_dir` with the default factor list and a
    /// derived output directory.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        JobSpec {
            source_dir: source_dir.into(),
            output_dir: None,
            factors: default_factors(),
        }
    }

    /// The effective output directory: the configured one, or
    /// `source_dir/<default_leaf>` when none was set.
    pub fn resolved_output_dir(&self, default_leaf: &str) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.source_dir.join(default_leaf))
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &Path) -> Result<(), AugmentError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| AugmentError::Spec(format!("{}: {e}", path.display())))
    }

    /// Deserializes a `JobSpec` from a JSON file.
    pub fn load_json(path: &Path) -> Result<JobSpec, AugmentError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| AugmentError::Spec(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn new_spec_uses_the_default_factors() {
        let spec = JobSpec::new("data/train");
        assert_eq!(spec.factors, vec![0.5, 0.8, 1.2, 1.5]);
        assert!(spec.output_dir.is_none());
    }

    #[test]
    fn output_dir_derives_from_the_source_when_unset() {
        let spec = JobSpec::new("data/train");
        assert_eq!(
            spec.resolved_output_dir("brightness_augmented"),
            PathBuf::from("data/train/brightness_augmented")
        );

        let mut spec = spec;
        spec.output_dir = Some(PathBuf::from("elsewhere"));
        assert_eq!(
            spec.resolved_output_dir("brightness_augmented"),
            PathBuf::from("elsewhere")
        );
    }

    #[test]
    fn json_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("job.json");

        let mut spec = JobSpec::new("data/train");
        spec.factors = vec![0.5, 1.5];
        spec.save_json(&path).unwrap();

        let loaded = JobSpec::load_json(&path).unwrap();
        assert_eq!(loaded.source_dir, spec.source_dir);
        assert_eq!(loaded.factors, spec.factors);
        assert_eq!(loaded.output_dir, None);
    }

    #[test]
    fn missing_factors_field_deserializes_to_the_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("job.json");
        std::fs::write(&path, r#"{ "source_dir": "data/train" }"#).unwrap();

        let loaded = JobSpec::load_json(&path).unwrap();
        assert_eq!(loaded.factors, vec![0.5, 0.8, 1.2, 1.5]);
    }

    #[test]
    fn malformed_json_is_a_spec_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("job.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JobSpec::load_json(&path).unwrap_err();
        assert!(matches!(err, AugmentError::Spec(_)));
    }
}
