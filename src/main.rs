use clap::Parser;
use proptrack::cli::{self, Cli};
use proptrack::config::{AppConfig, LoggingConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(&cli.config)?;
    if let Err(errors) = config.validate() {
        anyhow::bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }

    init_logging(&config.logging);
    debug!(config_dir = %cli.config.display(), "configuration loaded");

    cli::run(cli, &config).await
}

fn init_logging(logging: &LoggingConfig) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // Logs go to stderr so command output stays pipeable
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
