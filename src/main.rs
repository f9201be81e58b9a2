//! jenkkuber: application entry point.
//!
//! Parses CLI arguments, loads configuration, initializes tracing, builds the
//! router and runs the HTTP server until SIGINT/SIGTERM.

use clap::Parser;
use const_format::formatcp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jenkkuber::config::{
    AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_HTTP_ADDR, DEFAULT_LOG_FILTER,
};
use jenkkuber::http::start_server;
use jenkkuber::{create_router, Error};

const PORT_HELP: &str = formatcp!(
    "Listen port, overriding http.port from the config file (default address {})",
    DEFAULT_HTTP_ADDR
);

/// jenkkuber: a minimal greeting service
#[derive(Parser, Debug)]
#[command(name = "jenkkuber", version, about)]
struct Args {
    /// Path to configuration file (defaults apply if it does not exist)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "jenkkuber=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    #[arg(short, long, help = PORT_HELP)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let (text_layer, json_layer) = match config.logging.format {
        LogFormat::Text => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(text_layer)
        .with(json_layer)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!(
        config = %args.config,
        host = %config.http.host,
        port = config.http.port,
        log_format = ?config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_port_help_shows_default_addr() {
        let command = Args::command();
        let port = command
            .get_arguments()
            .find(|arg| arg.get_id() == "port")
            .unwrap();
        let help = port.get_help().unwrap().to_string();
        assert!(help.contains("0.0.0.0:8080"), "got {help}");
    }

    #[test]
    fn test_parse_defaults_and_port_override() {
        let args = Args::try_parse_from(["jenkkuber"]).unwrap();
        assert_eq!(args.config, DEFAULT_CONFIG_PATH);
        assert_eq!(args.port, None);

        let args = Args::try_parse_from(["jenkkuber", "--port", "9000"]).unwrap();
        assert_eq!(args.port, Some(9000));
    }
}
