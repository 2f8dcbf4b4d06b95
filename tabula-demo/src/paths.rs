//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "tabula";
const APPLICATION: &str = "tabula-demo";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

const LATEST_LOG: &str = "latest.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Cache directory, where logs live.
///
/// - Linux: `$XDG_CACHE_HOME/tabula-demo` or `~/.cache/tabula-demo`
/// - macOS: `~/Library/Caches/dev.tabula.tabula-demo`
/// - Windows: `C:\Users\<User>\AppData\Local\tabula\tabula-demo\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of the log file for the current run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log under a timestamp and prune old archives.
///
/// Call before creating the new log file.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    rotate_logs_in(&cache);
}

fn rotate_logs_in(cache: &Path) {
    let latest = cache.join(LATEST_LOG);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = cache.join(format!("{timestamp}.log"));
        let _ = fs::rename(&latest, &archived);
    }

    cleanup_old_logs(cache, MAX_OLD_LOGS);
}

/// Remove the oldest archived logs beyond `keep`.
fn cleanup_old_logs(cache: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(cache) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first; the timestamped names sort the same way.
    logs.sort_by_key(|e| (e.metadata().and_then(|m| m.modified()).ok(), e.file_name()));

    if logs.len() > keep {
        for entry in logs.iter().take(logs.len() - keep) {
            let _ = fs::remove_file(entry.path());
        }
    }
}
