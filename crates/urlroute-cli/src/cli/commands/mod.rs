//! CLI command handlers. Each command is in its own file.

mod build;
mod config;
mod parse;

pub use build::{run_build, BuildArgs};
pub use config::run_config;
pub use parse::run_parse;
