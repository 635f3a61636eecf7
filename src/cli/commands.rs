//! CLI command handlers

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::config::{ConfigLoader, paths};

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "depth", "display.tree")
        key: Option<String>,
        /// Source tree whose project config is merged in
        #[arg(long, short = 's')]
        source: Option<String>,
    },
    /// Set configuration value in the root config
    Set {
        /// Configuration key (e.g., "depth", "display.tree")
        key: String,
        /// Configuration value
        value: String,
    },
    /// List all configuration
    List {
        /// Source tree whose project config is merged in
        #[arg(long, short = 's')]
        source: Option<String>,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate {
        /// Source tree whose project config is validated too
        #[arg(long, short = 's')]
        source: Option<String>,
    },
}

/// Handle configuration subcommands
pub fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Get { key, source } => {
            // Load config (will use defaults if no file exists)
            let config =
                ConfigLoader::load(source.as_deref()).context("Failed to load configuration")?;

            if let Some(key) = key {
                let value = crate::config::get_config_value(&config, &key)?;
                println!("{}", value);
            } else {
                let yaml =
                    serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set { key, value } => {
            // Only the root file is written; project and env layers are left alone
            let root_path = paths::root_config_path();
            let mut config = if root_path.exists() {
                ConfigLoader::load_file(&root_path)?
            } else {
                ConfigLoader::load_defaults()
            };

            crate::config::set_config_value(&mut config, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;

            ConfigLoader::save_root(&config).context("Failed to save configuration")?;
            println!("Configuration saved");
        }
        ConfigSubcommand::List { source } => {
            let config =
                ConfigLoader::load(source.as_deref()).context("Failed to load configuration")?;

            let yaml =
                serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
            print!("{}", yaml);
        }
        ConfigSubcommand::Path => {
            let config_path = paths::root_config_path();
            println!("{}", config_path.display());
        }
        ConfigSubcommand::Validate { source } => match ConfigLoader::validate(source.as_deref()) {
            Ok(()) => {
                println!("Configuration is valid");
            }
            Err(e) => {
                eprintln!("Configuration validation failed: {:#}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
