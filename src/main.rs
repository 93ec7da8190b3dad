mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use hw_core::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "hwtracker=trace,hw_server=trace,hw_db=debug,hw_core=debug,tower_http=debug".to_string()
        } else {
            "hwtracker=debug,hw_server=debug,hw_db=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let mut config = Config::load_or_default(cli.config.as_deref());
            config.apply_env();
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            tracing::debug!("Server configuration: {:?}", config.server);

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(hw_server::start(config))?;
            Ok(())
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("hwtracker {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    let Some(path) = path else {
        println!("No config file given; defaults are used.");
        return Ok(());
    };

    let config = Config::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("Configuration is valid: {}", path.display());
    } else {
        println!("Configuration loaded with {} warning(s):", warnings.len());
        for warning in &warnings {
            println!("  - {warning}");
        }
    }
    Ok(())
}
