use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use storefront::LogLevel;
use storefront::core::config;

#[derive(Parser)]
#[command(name = "storefront", about = "Terminal product catalog")]
struct Args {
    /// Path to a config file (defaults to ~/.storefront/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity for storefront.log
    #[arg(short, long, default_value_t, value_enum)]
    log_level: LogLevel,

    /// Window title shown in the title bar
    #[arg(short, long)]
    title: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to storefront.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("storefront.log") {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    log::info!("Storefront starting up (log level: {:?})", args.log_level);

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Ignoring config file: {}", e);
            config::StorefrontConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.title.as_deref());

    storefront::tui::run(resolved)
}
