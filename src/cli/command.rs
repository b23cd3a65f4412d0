use clap::Subcommand;
use std::path::PathBuf;

use crate::cli::category_cmd::CategoryCmd;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Add a quote",
        long_about = "Add a quote to the local collection, then push it to the remote source and run one sync pass."
    )]
    Add {
        #[arg(long, value_name = "TEXT")]
        text: String,
        #[arg(long, value_name = "CATEGORY")]
        category: String,
        #[arg(
            long,
            default_value_t = false,
            help = "Only store locally, skip push and sync"
        )]
        offline: bool,
    },
    #[command(about = "List quotes, optionally filtered by category")]
    List {
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
    },
    #[command(about = "Print a random quote, optionally from one category")]
    Random {
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
    },
    #[command(about = "List known categories")]
    Categories,
    #[command(
        about = "Export the collection as JSON",
        long_about = "Write a pretty-printed JSON snapshot of the collection to FILE, or to stdout."
    )]
    Export {
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    #[command(
        about = "Import quotes from a JSON file",
        long_about = "Append every quote of a previously exported JSON array. A malformed file imports nothing."
    )]
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    #[command(about = "Run one sync pass against the remote source")]
    Sync,
    #[command(about = "Read or change the remembered category filter")]
    Category {
        #[command(subcommand)]
        cmd: CategoryCmd,
    },
}
