use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use todo_tui::ClockZone;
use todo_tui::core::config::{self, CliOverrides, TodoConfig};
use todo_tui::tui;

#[derive(Parser)]
#[command(name = "todo-tui", about = "Terminal client for a todo list backend")]
struct Args {
    /// Backend base URL (overrides TODO_API_URL and the config file)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Clock creation times are shown in
    #[arg(long, value_enum)]
    clock: Option<ClockZone>,

    /// Where to write the log
    #[arg(long, default_value = "todo-tui.log")]
    log_file: PathBuf,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The terminal belongs to the UI, so logs go to a file.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, using defaults", e);
        TodoConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            base_url: args.base_url.as_deref(),
            clock: args.clock,
        },
    );

    info!(
        "todo-tui starting up against {} (clock: {:?})",
        resolved.base_url, resolved.clock
    );

    tui::run(resolved)
}
