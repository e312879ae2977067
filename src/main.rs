use clap::Parser;
use lyriclingo::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "lyriclingo", about = "Learn Korean from song lyrics")]
struct Args {
    /// Base URL of the lyrics service (e.g. http://localhost:3001/api)
    #[arg(long)]
    api_url: Option<String>,

    /// How long the analysis screen stays up before showing lyrics
    #[arg(long)]
    loading_delay_ms: Option<u64>,

    /// Log level for lyriclingo.log (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config();
    let cli = CliOverrides {
        api_url: args.api_url,
        loading_delay_ms: args.loading_delay_ms,
        log_level: args.log_level,
    };
    let resolved = config::resolve(file_config.as_ref().unwrap_or(&Default::default()), &cli);

    // Initialize file logger - writes to lyriclingo.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = resolved
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create("lyriclingo.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    if let Err(e) = &file_config {
        log::warn!("Using default config: {}", e);
    }
    log::info!("LyricLingo starting up against {}", resolved.api_url);

    lyriclingo::tui::run(resolved)
}
