//! Runs both augmentation pipelines over a directory given on the command
//! line. Run with:
//!   cargo run --example augment_dir -- path/to/images

use std::path::PathBuf;

use augmentor::pipeline::{brightness, flip};
use augmentor::config::DEFAULT_FACTORS;

fn main() {
    let source: PathBuf = match std::env::args().nth(1) {
        Some(dir) => dir.into(),
        None => {
            eprintln!("usage: augment_dir <image-directory>");
            std::process::exit(2);
        }
    };

    let brightness_out = source.join("brightness_augmented");
    match brightness::run(&source, &brightness_out, &DEFAULT_FACTORS) {
        Ok(summary) => println!(
            "brightness: {} written, {} skipped -> {}",
            summary.written,
            summary.skipped,
            brightness_out.display()
        ),
        Err(e) => {
            eprintln!("brightness run failed: {e}");
            std::process::exit(1);
        }
    }

    let flip_out = source.join("flipped_h");
    match flip::run(&source, &flip_out) {
        Ok(summary) => println!(
            "flip: {} written, {} skipped -> {}",
            summary.written,
            summary.skipped,
            flip_out.display()
        ),
        Err(e) => {
            eprintln!("flip run failed: {e}");
            std::process::exit(1);
        }
    }
}
