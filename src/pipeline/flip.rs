//! Horizontal flip pipeline: one mirrored copy per image, keeping the
//! original filename in a separate output directory.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::AugmentError;
use crate::ops::flip::flip_horizontal;
use crate::pipeline::{is_supported_image, list_entries, RunSummary};

/// Runs the horizontal flip augmentation over `source_dir`, writing one
/// mirrored copy per qualifying image into `output_dir` under the same
/// filename.
///
/// A filename already processed earlier in the same run is skipped without
/// error. Directory listings do not normally repeat names, so the guard is
/// defensive, but its observable behavior (skip, count, no error) is part
/// of the contract.
pub fn run(source_dir: &Path, output_dir: &Path) -> Result<RunSummary, AugmentError> {
    fs::create_dir_all(output_dir)?;
    let names = list_entries(source_dir)?;
    flip_named(source_dir, output_dir, &names)
}

fn flip_named(
    source_dir: &Path,
    output_dir: &Path,
    names: &[String],
) -> Result<RunSummary, AugmentError> {
    // Owned by this run; never module-level state.
    let mut seen: HashSet<&str> = HashSet::new();
    let mut summary = RunSummary::default();

    for name in names {
        if !is_supported_image(name) {
            summary.skipped += 1;
            continue;
        }
        if !seen.insert(name.as_str()) {
            summary.skipped += 1;
            continue;
        }

        let path = source_dir.join(name);
        let decoded = image::open(&path).map_err(|e| AugmentError::Decode {
            path: path.clone(),
            source: e,
        })?;
        let mut rgb = decoded.to_rgb8();

        let width = rgb.width() as usize;
        flip_horizontal(&mut rgb, width, 3);

        let out_path = output_dir.join(name);
        rgb.save(&out_path).map_err(|e| AugmentError::Encode {
            path: out_path.clone(),
            source: e,
        })?;
        summary.written += 1;
        debug!("wrote {}", out_path.display());
    }

    Ok(summary)
}
