use std::path::{Component, Path};

use crate::scaffold::ScaffoldError;

/// Accept only names that stay a direct child of the working directory.
///
/// Rejects empty names, `.` and `..`, absolute paths and anything containing
/// a path separator.
pub fn validate_target_name(name: &str) -> Result<(), ScaffoldError> {
  let invalid = |reason| ScaffoldError::InvalidName {
    name: name.to_string(),
    reason,
  };
  if name.trim().is_empty() {
    return Err(invalid("name must not be empty"));
  }
  if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
    return Err(invalid("name must not contain path separators"));
  }
  let mut components = Path::new(name).components();
  match (components.next(), components.next()) {
    (Some(Component::Normal(_)), None) => Ok(()),
    _ => Err(invalid("name must be a plain directory name")),
  }
}
