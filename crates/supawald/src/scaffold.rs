use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::log_warn;
use crate::template::{Entry, Template};
use crate::utils::name::validate_target_name;

#[derive(Debug, Error)]
pub enum ScaffoldError {
  #[error("Directory \"{name}\" already exists.")]
  AlreadyExists { name: String, path: PathBuf },
  #[error("Invalid project name \"{name}\": {reason}")]
  InvalidName { name: String, reason: &'static str },
  #[error("{}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl ScaffoldError {
  pub(crate) fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
    ScaffoldError::Io {
      path: path.as_ref().to_path_buf(),
      source,
    }
  }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffolded {
  pub dest: PathBuf,
  pub files: usize,
  pub dirs: usize,
}

/// Materialize `template` at `cwd/target`.
///
/// The destination is claimed with a single `create_dir`, which doubles as the
/// existence check: anything already at that path (file, directory, dangling
/// symlink) aborts the run before a single byte is written. If the copy fails
/// afterwards, the freshly claimed directory is removed again.
///
/// # Errors
/// - `InvalidName` if `target` is not a single plain path component
/// - `AlreadyExists` if the destination is already present
/// - `Io` for any failure reading the template or writing the copy
pub fn scaffold(
  target: &str,
  cwd: &Path,
  template: &Template,
) -> Result<Scaffolded, ScaffoldError> {
  validate_target_name(target)?;
  // Snapshot before claiming so a destination inside an on-disk template is
  // never copied into itself.
  let entries = template.entries()?;
  let dest = cwd.join(target);

  claim(target, &dest)?;
  debug!("claimed {}", dest.display());

  match populate(template, &entries, &dest) {
    Ok((files, dirs)) => {
      info!(
        "copied {files} files and {dirs} directories from {} to {}",
        template.describe(),
        dest.display()
      );
      Ok(Scaffolded { dest, files, dirs })
    }
    Err(err) => {
      if let Err(cleanup) = fs::remove_dir_all(&dest) {
        log_warn!("Could not remove partial copy at {}: {cleanup}", dest.display());
      }
      Err(err)
    }
  }
}

fn claim(target: &str, dest: &Path) -> Result<(), ScaffoldError> {
  match fs::create_dir(dest) {
    Ok(()) => Ok(()),
    Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Err(ScaffoldError::AlreadyExists {
      name: target.to_string(),
      path: dest.to_path_buf(),
    }),
    Err(err) => Err(ScaffoldError::io(dest, err)),
  }
}

fn populate(
  template: &Template,
  entries: &[Entry],
  dest: &Path,
) -> Result<(usize, usize), ScaffoldError> {
  let mut files = 0;
  let mut dirs = 0;
  for entry in entries {
    let target = dest.join(entry.path());
    match entry {
      Entry::Dir(_) => {
        fs::create_dir(&target).map_err(|e| ScaffoldError::io(&target, e))?;
        dirs += 1;
      }
      Entry::File(rel) => {
        template.write_file(rel, &target)?;
        debug!("wrote {}", target.display());
        files += 1;
      }
    }
  }
  Ok((files, dirs))
}
