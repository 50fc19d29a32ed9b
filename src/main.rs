use std::path::PathBuf;

use clap::Parser;

use referrer_origins::config;
use referrer_origins::lifecycle;
use referrer_origins::observability;

#[derive(Parser)]
#[command(name = "referrer-origins")]
#[command(about = "Serve three origins for exercising browser Referrer-Policy behavior", long_about = None)]
struct Cli {
    /// Optional TOML configuration file; defaults reproduce ports 4020-4022.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = config::load_or_default(cli.config.as_deref())?;
    observability::init_logging(&config.observability);

    tracing::info!("referrer-origins v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        cert_path = %config.tls.cert_path,
        key_path = %config.tls.key_path,
        public_host = %config.origins.public_host,
        redirect_delay_ms = config.pages.redirect_delay_ms,
        "Configuration loaded"
    );

    if let Err(e) = lifecycle::run(config).await {
        tracing::error!(error = %e, "Fatal error");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
