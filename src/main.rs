use clap::Parser;
use farmer_rag::core::config;
use farmer_rag::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "farmer-rag", about = "Ask questions about your farm data")]
struct Args {
    /// Farm agent ask endpoint (overrides config file and FARMER_RAG_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Where to write the debug log
    #[arg(long, default_value = "farmer-rag.log")]
    log_file: String,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::FarmerRagConfig::default()
    });
    let resolved = config::resolve(&file_config, args.endpoint.as_deref());

    log::info!("Farmer Rag starting up with endpoint: {}", resolved.endpoint);

    tui::run(resolved)
}
