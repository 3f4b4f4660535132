use crate::utils::log::t;

pub fn created(target: &str) -> String {
  format!("✅ Supawald project created in \"{target}\"")
}

/// Hint for entering the new project; the name is shell-quoted when needed.
pub fn cd_hint(target: &str) -> String {
  format!("👉 {}", t::cmd(format!("cd {}", shell_words::quote(target))))
}

pub fn install_hint() -> String {
  format!("📦 Run {} to get started!", t::cmd("`npm install`"))
}
