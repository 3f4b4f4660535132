#![allow(dead_code)]
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use assert_cmd::Command;
use tempfile::{Builder, TempDir};

pub const BIN: &str = "create-supawald";

/// Sandbox working directory for a single test.
#[derive(Debug)]
pub struct TestEnv {
  temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    let temp = Builder::new()
      .prefix("supawald-test-")
      .tempdir_in(tmp_root())
      .expect("temp dir");
    Self { temp }
  }

  pub fn run<F, R>(f: F) -> R
  where
    F: FnOnce(&TestEnv) -> R,
  {
    let env = TestEnv::new();
    f(&env)
  }

  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  /// `create-supawald` with the sandbox as working directory.
  pub fn bin_cmd(&self) -> Result<Command> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.current_dir(self.path());
    cmd.env_remove("RUST_LOG");
    Ok(cmd)
  }

  pub fn write_file(&self, rel: &str, contents: &str) -> Result<PathBuf> {
    let path = self.path().join(rel);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
  }

  /// Small on-disk template under `<sandbox>/<name>`.
  pub fn custom_template(&self, name: &str) -> Result<PathBuf> {
    self.write_file(&format!("{name}/package.json"), "{\"name\":\"custom\"}\n")?;
    self.write_file(&format!("{name}/src/main.ts"), "console.log(1);\n")?;
    self.write_file(&format!("{name}/scripts/setup.sh"), "#!/bin/sh\necho setup\n")?;
    std::fs::create_dir_all(self.path().join(name).join("empty"))?;
    Ok(self.path().join(name))
  }
}

/// The template compiled into the binary.
pub fn bundled_template_dir() -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("template")
}

/// Map of relative file path to contents; directories appear with a trailing `/`.
pub fn snapshot(root: &Path) -> Result<BTreeMap<String, Vec<u8>>> {
  let mut out = BTreeMap::new();
  collect(root, root, &mut out)?;
  Ok(out)
}

fn collect(root: &Path, dir: &Path, out: &mut BTreeMap<String, Vec<u8>>) -> Result<()> {
  for entry in std::fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
    let entry = entry?;
    let path = entry.path();
    let rel = path
      .strip_prefix(root)?
      .to_string_lossy()
      .replace('\\', "/");
    if entry.file_type()?.is_dir() {
      out.insert(format!("{rel}/"), Vec::new());
      collect(root, &path, out)?;
    } else {
      out.insert(rel, std::fs::read(&path)?);
    }
  }
  Ok(())
}

/// Returns a workspace-local temp root for tests under `./target/test-tmp` at the workspace root.
pub fn tmp_root() -> PathBuf {
  let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  // Walk two parents up: crates/supawald -> crates -> workspace root
  let workspace_root = manifest_dir
    .parent()
    .and_then(|p| p.parent())
    .unwrap_or(&manifest_dir)
    .to_path_buf();
  let root = workspace_root.join("target").join("test-tmp");
  let _ = std::fs::create_dir_all(&root);
  root
}
