use std::path::{Path, PathBuf};

use crate::Cli;
use crate::template::Template;

/// Directory name used when no target is given on the command line.
pub const DEFAULT_TARGET_NAME: &str = "supawald-app";

/// Everything a single scaffolding run needs, resolved from the CLI and the
/// process working directory.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
  cwd: PathBuf,
  target: String,
  template: Template,
}

impl ScaffoldConfig {
  pub fn new(cwd: impl Into<PathBuf>, target: impl Into<String>, template: Template) -> Self {
    Self {
      cwd: cwd.into(),
      target: target.into(),
      template,
    }
  }

  /// Relative `--template` paths are resolved against `cwd`.
  pub fn from_cli(cwd: PathBuf, cli: Cli) -> Self {
    let template = match cli.template {
      Some(dir) => Template::from_dir(cwd.join(dir)),
      None => Template::bundled(),
    };
    Self::new(cwd, cli.target, template)
  }

  pub fn cwd(&self) -> &Path {
    &self.cwd
  }

  pub fn target(&self) -> &str {
    &self.target
  }

  pub fn template(&self) -> &Template {
    &self.template
  }
}
