//! `urlroute config` – show where configuration comes from and what it says.

use anyhow::Result;
use std::path::Path;
use urlroute_core::config::{self, RouteConfig};

pub fn run_config(cfg: &RouteConfig, explicit: Option<&Path>) -> Result<()> {
    match explicit {
        Some(path) => println!("# {}", path.display()),
        None => println!("# {}", config::config_path()?.display()),
    }
    print!("{}", toml_of(cfg)?);
    Ok(())
}

fn toml_of(cfg: &RouteConfig) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}
