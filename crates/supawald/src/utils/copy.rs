use std::fs;
use std::path::Path;

use reflink_copy::reflink_or_copy;

use crate::scaffold::ScaffoldError;

/// Copy a single file, keeping the source permissions.
///
/// `dst` must not exist yet; its parent must.
pub fn copy_file(src: &Path, dst: &Path) -> Result<(), ScaffoldError> {
  let meta = fs::metadata(src).map_err(|e| ScaffoldError::io(src, e))?;
  // Prefer reflink, fallback to regular copy automatically
  reflink_or_copy(src, dst).map_err(|e| ScaffoldError::io(src, e))?;
  fs::set_permissions(dst, meta.permissions()).map_err(|e| ScaffoldError::io(dst, e))
}
