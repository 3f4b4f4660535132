use anyhow::Result;

use crate::config::ScaffoldConfig;
use crate::scaffold::scaffold;
use crate::texts;
use crate::{log_info, log_success};

pub fn run(cfg: &ScaffoldConfig) -> Result<()> {
  let target = cfg.target();
  scaffold(target, cfg.cwd(), cfg.template())?;

  log_success!("{}", texts::create::created(target));
  log_info!("{}", texts::create::cd_hint(target));
  log_info!("{}", texts::create::install_hint());
  Ok(())
}
