mod atomic;

pub use atomic::atomic_write;

/// Name of the per-user folder holding config, data and logs.
pub const APP_FOLDER: &str = ".lostfound";

/// Environment variable overriding the per-user folder.
pub const HOME_ENV: &str = "LOSTFOUND_HOME";

/// Resolve the per-user folder (`~/.lostfound`).
///
/// If `LOSTFOUND_HOME` is set, that directory is used instead, which keeps
/// tests and CI away from the real user data.
#[must_use]
pub fn app_home() -> Option<std::path::PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.trim().is_empty() {
            return Some(std::path::PathBuf::from(home));
        }
    }
    dirs::home_dir().map(|h| h.join(APP_FOLDER))
}

/// Format a path for display, replacing home directory with ~/
#[must_use]
pub fn format_display_path(path: &str) -> String {
    replace_homedir::replace_homedir(path, "~")
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
