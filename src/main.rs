use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use ticklist::core::config::{self, CliOverrides};
use ticklist::tui;

#[derive(Parser)]
#[command(name = "ticklist", version, about = "A small terminal to-do list")]
struct Args {
    /// Directory holding the list (default: ~/.ticklist)
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Storage slot name; the list is kept in <data-dir>/<key>.json
    #[arg(short, long)]
    key: Option<String>,

    /// Keep the list in memory for this run only
    #[arg(long)]
    ephemeral: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to ticklist.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("ticklist.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        eprintln!("ticklist: {e}; using defaults");
        config::TicklistConfig::default()
    });

    let cli = CliOverrides {
        data_dir: args.data_dir,
        key: args.key,
        ephemeral: args.ephemeral,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Ticklist starting up (data_dir={}, key={}, ephemeral={})",
        resolved.data_dir.display(),
        resolved.key,
        resolved.ephemeral
    );

    tui::run(resolved)
}
