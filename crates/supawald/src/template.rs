//! Sources for the project template that gets copied into a new destination.
//!
//! The default template is compiled into the binary from `template/` next to
//! this crate's manifest. A directory on disk can be used instead, which is
//! only ever opened for reading.

use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{Dir, DirEntry, include_dir};
use log::debug;

use crate::scaffold::ScaffoldError;
use crate::utils::copy::copy_file;

static BUNDLED: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/template");

#[derive(Debug, Clone)]
pub enum Template {
  /// Tree embedded at compile time.
  Embedded(&'static Dir<'static>),
  /// Tree read from disk at scaffold time.
  Directory(PathBuf),
}

/// A single node of a template tree, relative to the template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
  Dir(PathBuf),
  File(PathBuf),
}

impl Entry {
  pub fn path(&self) -> &Path {
    match self {
      Entry::Dir(p) | Entry::File(p) => p,
    }
  }
}

impl Template {
  #[must_use]
  pub fn bundled() -> Self {
    Template::Embedded(&BUNDLED)
  }

  pub fn from_dir(path: impl Into<PathBuf>) -> Self {
    Template::Directory(path.into())
  }

  /// Human readable origin, used in diagnostics.
  #[must_use]
  pub fn describe(&self) -> String {
    match self {
      Template::Embedded(_) => "bundled template".to_string(),
      Template::Directory(root) => root.display().to_string(),
    }
  }

  /// List the tree in pre-order: every directory precedes its contents and
  /// siblings are sorted by name.
  ///
  /// Symlinks inside an on-disk template are skipped.
  ///
  /// # Errors
  /// Returns `ScaffoldError::Io` if an on-disk template is missing, is not a
  /// directory, or cannot be read.
  pub fn entries(&self) -> Result<Vec<Entry>, ScaffoldError> {
    let mut out = Vec::new();
    match self {
      Template::Embedded(dir) => walk_embedded(dir, &mut out),
      Template::Directory(root) => {
        let meta = fs::metadata(root).map_err(|e| ScaffoldError::io(root, e))?;
        if !meta.is_dir() {
          return Err(ScaffoldError::io(
            root,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "template is not a directory"),
          ));
        }
        walk_disk(root, Path::new(""), &mut out)?;
      }
    }
    Ok(out)
  }

  /// Write the template file at `rel` to `dst`.
  pub(crate) fn write_file(&self, rel: &Path, dst: &Path) -> Result<(), ScaffoldError> {
    match self {
      Template::Embedded(dir) => {
        let file = dir.get_file(rel).ok_or_else(|| {
          ScaffoldError::io(
            rel,
            std::io::Error::new(std::io::ErrorKind::NotFound, "not part of the bundled template"),
          )
        })?;
        fs::write(dst, file.contents()).map_err(|e| ScaffoldError::io(dst, e))
      }
      Template::Directory(root) => copy_file(&root.join(rel), dst),
    }
  }
}

fn walk_embedded(dir: &Dir<'static>, out: &mut Vec<Entry>) {
  let mut children: Vec<&DirEntry<'static>> = dir.entries().iter().collect();
  children.sort_by(|a, b| a.path().cmp(b.path()));
  for child in children {
    match child {
      DirEntry::Dir(sub) => {
        out.push(Entry::Dir(sub.path().to_path_buf()));
        walk_embedded(sub, out);
      }
      DirEntry::File(file) => out.push(Entry::File(file.path().to_path_buf())),
    }
  }
}

fn walk_disk(root: &Path, rel: &Path, out: &mut Vec<Entry>) -> Result<(), ScaffoldError> {
  let dir = root.join(rel);
  let mut children = Vec::new();
  for entry in fs::read_dir(&dir).map_err(|e| ScaffoldError::io(&dir, e))? {
    let entry = entry.map_err(|e| ScaffoldError::io(&dir, e))?;
    let file_type = entry.file_type().map_err(|e| ScaffoldError::io(entry.path(), e))?;
    children.push((entry.file_name(), file_type));
  }
  children.sort_by(|a, b| a.0.cmp(&b.0));

  for (name, file_type) in children {
    let child = rel.join(&name);
    if file_type.is_dir() {
      out.push(Entry::Dir(child.clone()));
      walk_disk(root, &child, out)?;
    } else if file_type.is_file() {
      out.push(Entry::File(child));
    } else {
      debug!("skip non-regular template entry {}", child.display());
    }
  }
  Ok(())
}
