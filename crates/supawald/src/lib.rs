use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

mod commands;
mod config;
pub mod scaffold;
pub mod template;
mod texts;
mod utils;

use crate::config::ScaffoldConfig;

pub use crate::config::DEFAULT_TARGET_NAME;
pub use crate::scaffold::{Scaffolded, ScaffoldError, scaffold};
pub use crate::template::Template;

/// create-supawald - Scaffold a new Supawald project from the bundled template.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
  /// Name of the directory to create in the current working directory
  #[arg(default_value = DEFAULT_TARGET_NAME)]
  target: String,

  /// Copy this directory instead of the template bundled with the binary
  #[arg(long, value_name = "DIR")]
  template: Option<PathBuf>,
}

pub fn parse() -> Cli {
  Cli::parse()
}

pub fn run() -> Result<()> {
  let cli = parse();
  let cwd = std::env::current_dir().context("failed to resolve current directory")?;
  let cfg = ScaffoldConfig::from_cli(cwd, cli);
  commands::create::run(&cfg)
}
