mod board;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use crate::board::Board;
use crate::input::{DEFAULT_BASE_URL, RecordsClient};
use crate::pipeline::stage1_filter::run_stage1;
use crate::pipeline::stage4_report::{ReportFormat, ReportOptions, write_report};
use crate::report::ReportError;

#[derive(Debug, Parser)]
#[command(
    name = "results-board",
    version,
    about = "Fetch student test records and report overall scores with proficiency levels"
)]
struct Cli {
    /// Base URL of the student collection.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Write the report here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Color the level column (text format only).
    #[arg(long)]
    color: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("failed to write report: {0}")]
    Report(#[from] ReportError),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let board = match RecordsClient::new(cli.base_url.as_str()) {
        Ok(client) => load_board(&client).await,
        Err(err) => {
            error!("failed to build HTTP client: {err}");
            Board::Loading
        }
    };

    let options = ReportOptions {
        format: cli.format,
        color: cli.color,
        source: cli.base_url,
    };
    write_report(&board, &options, cli.out.as_deref())?;
    Ok(())
}

/// The single fetch of a run. Failures are logged and leave the board loading.
async fn load_board(client: &RecordsClient) -> Board {
    match client.fetch_records().await {
        Ok(parsed) => {
            let stage1 = run_stage1(parsed.records);
            let dropped = stage1.dropped + parsed.skipped;
            info!(
                "loaded {} student records ({} dropped)",
                stage1.admitted.len(),
                dropped
            );
            Board::ready(stage1.admitted)
        }
        Err(err) => {
            error!("could not load student records: {err}");
            Board::Loading
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/support.rs"]
mod test_support;

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
