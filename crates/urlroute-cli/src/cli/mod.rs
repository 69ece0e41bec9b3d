//! CLI for the urlroute URL builder.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlroute_core::config;

use commands::{run_build, run_config, run_parse, BuildArgs};

/// Top-level CLI for urlroute.
#[derive(Debug, Parser)]
#[command(name = "urlroute")]
#[command(about = "urlroute: turn internal application URLs into public URLs", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/urlroute/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve an internal URL (index.php?..., &...) into a public URL.
    Build {
        /// URL to resolve. Strings not starting with `index.php` or `&` are printed unchanged.
        url: String,
        /// Print the URL without HTML escaping (e.g. for a Location header).
        #[arg(long)]
        raw: bool,
        /// Security flag: 0 keeps the request scheme, 1 forces https, 2 forces http.
        #[arg(long, value_name = "N")]
        ssl: Option<i64>,
        /// Override the configured current request URL.
        #[arg(long, value_name = "URL")]
        request_uri: Option<String>,
    },

    /// Split a URI into its components and print them as JSON.
    Parse {
        /// URI reference (absolute, scheme-relative or relative).
        url: String,
    },

    /// Show the config file path and the effective configuration.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Build {
                url,
                raw,
                ssl,
                request_uri,
            } => run_build(
                &cfg,
                BuildArgs {
                    url,
                    raw,
                    ssl,
                    request_uri,
                },
            )?,
            CliCommand::Parse { url } => run_parse(&url)?,
            CliCommand::Config => run_config(&cfg, cli.config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
