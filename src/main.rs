//! `score_headlines <input_file> <source>`
//!
//! Writes `headline_scores_<source>_<YYYY_MM_DD>.txt` into the working
//! directory. Any failure prints a message and exits with status 1.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use headlines::cli::{self, Args, CliError, Invocation};
use headlines::config::CliConfig;
use headlines::loader::{FetchPolicy, ModelPaths};
use headlines::logging;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e}");
            ExitCode::from(1)
        }
    }
}

async fn run() -> Result<(), CliError> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return Ok(());
        }
        Err(_) => return Err(CliError::Usage),
    };
    let invocation = Invocation::from_args(args)?;

    let config = CliConfig::from_env();
    logging::init(&config.log_level);

    let paths = ModelPaths::resolve(config.models_dir.as_deref())?;
    let today = chrono::Local::now().date_naive();

    let summary = cli::run(
        &invocation,
        &paths,
        FetchPolicy::from_offline_flag(config.offline),
        Path::new(""),
        today,
    )
    .await?;

    println!(
        "Wrote {} scores to {}",
        summary.count,
        summary.output_path.display()
    );
    Ok(())
}
