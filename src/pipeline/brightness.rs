//! Brightness pipeline: one brightened or darkened variant per configured
//! factor for every image in the source directory.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::AugmentError;
use crate::ops::brightness::scale_samples;
use crate::pipeline::{is_supported_image, list_entries, split_name, RunSummary};

/// Runs the brightness augmentation over `source_dir`, writing one variant
/// per `(image, factor)` pair into `output_dir`.
///
/// Variants are named `{stem}_brightness_{factor:.1}{ext}` and silently
/// overwrite any file already carrying that name. The output directory is
/// created if absent; running twice against the same destination is fine.
///
/// Every factor is validated up front, so an invalid list fails before any
/// file is touched. A decode or write failure aborts the run with the
/// offending path; files already written stay on disk.
pub fn run(
    source_dir: &Path,
    output_dir: &Path,
    factors: &[f32],
) -> Result<RunSummary, AugmentError> {
    for &factor in factors {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(AugmentError::InvalidFactor(factor));
        }
    }

    fs::create_dir_all(output_dir)?;

    let mut summary = RunSummary::default();
    for name in list_entries(source_dir)? {
        if !is_supported_image(&name) {
            summary.skipped += 1;
            continue;
        }

        let path = source_dir.join(&name);
        let decoded = image::open(&path).map_err(|e| AugmentError::Decode {
            path: path.clone(),
            source: e,
        })?;
        let rgb = decoded.to_rgb8();

        for &factor in factors {
            let mut variant = rgb.clone();
            scale_samples(&mut variant, factor);

            let out_path = output_dir.join(variant_name(&name, factor));
            variant.save(&out_path).map_err(|e| AugmentError::Encode {
                path: out_path.clone(),
                source: e,
            })?;
            summary.written += 1;
            debug!("wrote {}", out_path.display());
        }
    }

    info!(
        "brightness augmentation complete: {} file(s) written, {} entr(ies) skipped",
        summary.written, summary.skipped
    );
    Ok(summary)
}

/// Output filename for one variant: the factor suffix is always formatted
/// with exactly one digit after the decimal point.
fn variant_name(filename: &str, factor: f32) -> String {
    let (stem, ext) = split_name(filename);
    format!("{stem}_brightness_{factor:.1}{ext}")
}
