//! Batch scoring from the command line.
//!
//! A run is a fixed sequence of gates: arguments → input file → model →
//! scoring → output file. The first failing gate ends the run with a
//! [`CliError`]; nothing is written unless every earlier gate passed.

pub mod error;


pub use error::CliError;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Parser;
use tracing::{debug, info};

use crate::classifier::Predictor;
use crate::embedding::Encoder;
use crate::loader::{FetchPolicy, ModelPaths, load_scorer};
use crate::scoring::{HeadlineScorer, clean_headlines};

pub const USAGE: &str = "Usage: score_headlines <input_file> <source>\n\
                         Example: score_headlines todaysheadlines.txt nyt";

/// Raw command-line arguments. Both positionals are optional here so that
/// missing ones produce our own message and exit code.
#[derive(Debug, Parser)]
#[command(author, version, about = "Score headlines and write label,headline pairs")]
pub struct Args {
    /// Newline-delimited headline file
    pub input_file: Option<PathBuf>,

    /// Source tag used in the output file name (e.g. nyt)
    #[arg(allow_hyphen_values = true)]
    pub source: Option<String>,

    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Validated arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub input_path: PathBuf,
    pub source: String,
}

impl Invocation {
    /// Requires both arguments and a non-blank source (which is trimmed).
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let (Some(input_path), Some(source)) = (args.input_file, args.source) else {
            return Err(CliError::Usage);
        };

        let source = source.trim().to_string();
        if source.is_empty() {
            return Err(CliError::EmptySource);
        }

        Ok(Self { input_path, source })
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub count: usize,
}

/// Reads, trims and filters the headline file.
pub fn read_headlines(path: &Path) -> Result<Vec<String>, CliError> {
    if !path.exists() {
        return Err(CliError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|source| CliError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<&str> = raw.lines().collect();
    let headlines = clean_headlines(&lines);
    if headlines.is_empty() {
        return Err(CliError::NoHeadlines {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), count = headlines.len(), "Read headlines");
    Ok(headlines)
}

/// `headline_scores_<source>_<YYYY_MM_DD>.txt`
pub fn output_file_name(source: &str, date: NaiveDate) -> String {
    format!("headline_scores_{}_{}.txt", source, date.format("%Y_%m_%d"))
}

/// Output path inside `out_dir`; an empty `out_dir` yields the bare file name.
pub fn output_path(out_dir: &Path, source: &str, date: NaiveDate) -> PathBuf {
    out_dir.join(output_file_name(source, date))
}

/// Writes one `label,headline` line per pair.
pub fn write_scores(path: &Path, labels: &[String], headlines: &[String]) -> Result<(), CliError> {
    let write_failed = |source| CliError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(File::create(path).map_err(write_failed)?);
    for (label, headline) in labels.iter().zip(headlines) {
        writeln!(out, "{},{}", label, headline).map_err(write_failed)?;
    }
    out.flush().map_err(write_failed)?;

    Ok(())
}

/// Scores `headlines` with an already-built scorer and writes the output file.
pub fn score_and_write<E: Encoder, P: Predictor>(
    scorer: &HeadlineScorer<E, P>,
    headlines: &[String],
    output_path: &Path,
) -> Result<RunSummary, CliError> {
    let labels = scorer.score(headlines)?;
    write_scores(output_path, &labels, headlines)?;

    info!(path = %output_path.display(), count = labels.len(), "Wrote scores");
    Ok(RunSummary {
        output_path: output_path.to_path_buf(),
        count: labels.len(),
    })
}

/// Runs every gate in order, writing into `out_dir` (empty for the working
/// directory).
pub async fn run(
    invocation: &Invocation,
    paths: &ModelPaths,
    policy: FetchPolicy,
    out_dir: &Path,
    today: NaiveDate,
) -> Result<RunSummary, CliError> {
    let headlines = read_headlines(&invocation.input_path)?;
    let scorer = load_scorer(paths, policy).await?;
    let output_path = output_path(out_dir, &invocation.source, today);
    score_and_write(&scorer, &headlines, &output_path)
}
