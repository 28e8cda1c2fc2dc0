pub mod add;
pub mod calendar;
pub mod charts;
pub mod dashboard;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{level_filters::LevelFilter, warn};

use crate::{
    record::store::RecordStore,
    storage::blob_store::{BlobStore, FileBlobStore, RECORDS_KEY},
    utils::{
        dir::create_application_default_path,
        logging::{enable_logging, CLI_PREFIX},
    },
};

#[derive(Parser, Debug)]
#[command(name = "Shiftlog", version, long_about = None)]
#[command(about = "Work shift logging and earnings analytics", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Enable logging")]
    log: bool,
    #[arg(
        long,
        help = "Application directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Log a shift and its derived metrics")]
    Add {
        #[command(flatten)]
        command: add::AddCommand,
    },
    #[command(about = "Display totals and the revenue breakdown")]
    Dashboard {},
    #[command(about = "Display a month grid highlighting days that have records")]
    Calendar {
        #[command(flatten)]
        command: calendar::CalendarCommand,
    },
    #[command(about = "Display the stored details of a single day")]
    Day {
        #[command(flatten)]
        command: calendar::DayCommand,
    },
    #[command(about = "Print a chart series for the stats views")]
    Charts {
        #[command(flatten)]
        command: charts::ChartsCommand,
    },
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let app_dir = args.dir.map_or_else(create_application_default_path, Ok)?;

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(CLI_PREFIX, &app_dir, logging_level, args.log)?;

    let blob_store = FileBlobStore::new(app_dir.join("records"))?;

    match args.commands {
        Commands::Add { command } => add::process_add_command(command, &blob_store).await,
        Commands::Dashboard {} => dashboard::process_dashboard_command(&blob_store).await,
        Commands::Calendar { command } => {
            calendar::process_calendar_command(command, &blob_store).await
        }
        Commands::Day { command } => calendar::process_day_command(command, &blob_store).await,
        Commands::Charts { command } => charts::process_charts_command(command, &blob_store).await,
    }
}

/// Loads the whole record collection. Storage being unavailable or holding a
/// corrupt blob costs the history for this run, the command still operates
/// on an empty in-memory store.
pub(crate) async fn load_store(blob_store: &impl BlobStore) -> RecordStore {
    match blob_store.load(RECORDS_KEY).await {
        Ok(Some(blob)) => match RecordStore::from_blob(&blob) {
            Ok(store) => store,
            Err(e) => {
                warn!("Stored records are corrupted, starting empty: {e}");
                RecordStore::new()
            }
        },
        Ok(None) => RecordStore::new(),
        Err(e) => {
            warn!("Failed to load stored records, starting empty: {e}");
            RecordStore::new()
        }
    }
}

pub(crate) async fn save_store(blob_store: &impl BlobStore, store: &RecordStore) -> Result<()> {
    blob_store.save(RECORDS_KEY, &store.to_blob()?).await
}
