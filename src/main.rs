//! Offline dataset augmentation CLI.
//!
//! Two batch pipelines over a flat directory of `.png`/`.jpg`/`.jpeg`
//! images:
//!   - `brightness` writes one brightened/darkened variant per factor
//!   - `flip` writes one horizontally mirrored copy per image
//!
//! All transformation logic lives in the library (src/lib.rs and its
//! modules); this binary only parses flags, sets up logging, and maps
//! errors to a nonzero exit status.

use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand};
use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use augmentor::config::JobSpec;
use augmentor::error::AugmentError;
use augmentor::pipeline::{self, RunSummary};

/// Offline dataset augmentation for image-classification training sets.
#[derive(Parser, Debug)]
#[command(name = "augmentor", version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write one brightened/darkened variant per factor for every image
    Brightness {
        /// Directory holding the original images
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output directory (default: <source>/brightness_augmented)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Comma-separated brightness factors (default: 0.5,0.8,1.2,1.5)
        #[arg(short, long, value_delimiter = ',')]
        factors: Option<Vec<f32>>,

        /// Load source/output/factors from a job spec JSON file;
        /// explicit flags win over the file
        #[arg(long)]
        job: Option<PathBuf>,

        /// Write the effective job spec to this path before running
        #[arg(long)]
        save_job: Option<PathBuf>,
    },

    /// Write one horizontally mirrored copy of every image
    Flip {
        /// Directory holding the original images
        #[arg(short, long)]
        source: PathBuf,

        /// Output directory (default: <source>/flipped_h)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = SimpleLogger::new().with_level(level).init();

    let result = match cli.command {
        Commands::Brightness {
            source,
            output,
            factors,
            job,
            save_job,
        } => run_brightness(source, output, factors, job, save_job),
        Commands::Flip { source, output } => {
            let output = output.unwrap_or_else(|| source.join("flipped_h"));
            pipeline::flip::run(&source, &output)
        }
    };

    if let Err(e) = result {
        error!("{e}");
        exit(1);
    }
}

fn run_brightness(
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    factors: Option<Vec<f32>>,
    job: Option<PathBuf>,
    save_job: Option<PathBuf>,
) -> Result<RunSummary, AugmentError> {
    let mut spec = match (&job, &source) {
        (Some(path), _) => JobSpec::load_json(path)?,
        (None, Some(source)) => JobSpec::new(source.clone()),
        (None, None) => {
            return Err(AugmentError::Spec(
                "either --source or --job is required".to_string(),
            ))
        }
    };

    if let Some(source) = source {
        spec.source_dir = source;
    }
    if let Some(output) = output {
        spec.output_dir = Some(output);
    }
    if let Some(factors) = factors {
        spec.factors = factors;
    }

    if let Some(path) = save_job {
        spec.save_json(&path)?;
    }

    let output_dir = spec.resolved_output_dir("brightness_augmented");
    pipeline::brightness::run(&spec.source_dir, &output_dir, &spec.factors)
}
