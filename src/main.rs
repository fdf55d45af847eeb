use api_explorer::core::config::{self, CliOverrides, ExplorerConfig};
use api_explorer::core::endpoint::EndpointKey;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "api-explorer", about = "Browse a local REST backend from the terminal")]
struct Args {
    /// Backend base URL, e.g. http://localhost:3001/api
    #[arg(short, long)]
    base_url: Option<String>,

    /// Tab to open on startup
    #[arg(short, long, value_enum)]
    tab: Option<EndpointKey>,

    /// Where to write the debug log
    #[arg(long, default_value = "api-explorer.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger; the terminal belongs to the UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Using default configuration: {}", e);
        ExplorerConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            tab: args.tab,
        },
    );

    log::info!(
        "API Explorer starting up against {} (tab: {})",
        resolved.base_url,
        resolved.default_tab
    );

    api_explorer::tui::run(resolved)
}
