// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default configuration file locations.
//!
//! This module answers two questions about the host: where a configuration may keep
//! per-user data, and where the running application lives. Both are used only to
//! build the list of default file candidates; nothing here creates or writes files.

use directories::BaseDirs;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File name looked up inside the per-configuration and application directories.
pub const CONFIG_FILE_NAME: &str = "config.cfg";

/// Extension appended to the per-configuration directory path for the sibling file.
pub const CONFIG_FILE_EXTENSION: &str = ".cfg";

/// Returns the per-user data directory for `config_name`.
///
/// On Windows this is `%LOCALAPPDATA%\{name}` and on macOS
/// `~/Library/Application Support/{name}`. Elsewhere, or when the platform directory
/// does not exist, it falls back to a hidden directory in the home directory,
/// `~/.{name}`. Returns `None` only if no home directory can be determined.
///
/// # Examples
///
/// ```rust,no_run
/// use layercfg::adapters::locate::appdata_dir;
///
/// if let Some(dir) = appdata_dir("myconfig") {
///     println!("per-user settings live in {}", dir.display());
/// }
/// ```
pub fn appdata_dir(config_name: &str) -> Option<PathBuf> {
    let dirs = BaseDirs::new()?;
    let platform_dir = if cfg!(any(target_os = "windows", target_os = "macos")) {
        Some(dirs.data_local_dir())
    } else {
        None
    };

    match platform_dir {
        Some(base) if base.is_dir() => Some(base.join(config_name)),
        _ => Some(dirs.home_dir().join(hidden_name(config_name))),
    }
}

/// Returns the directory containing the running executable, if it can be determined.
pub fn application_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(Path::to_path_buf)
}

/// The default file candidates for `config_name`, in the order they are applied.
///
/// 1. `{appdata}.cfg` (a file next to the per-configuration directory)
/// 2. `{appdata}/config.cfg`
/// 3. `{application dir}/config.cfg`
///
/// Candidates whose base directory cannot be determined are left out.
pub fn default_candidates(config_name: &str) -> Vec<PathBuf> {
    candidates_from(appdata_dir(config_name), application_dir())
}

fn candidates_from(appdata: Option<PathBuf>, app_dir: Option<PathBuf>) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(3);
    if let Some(dir) = appdata {
        let mut sibling: OsString = dir.clone().into_os_string();
        sibling.push(CONFIG_FILE_EXTENSION);
        candidates.push(PathBuf::from(sibling));
        candidates.push(dir.join(CONFIG_FILE_NAME));
    }
    if let Some(dir) = app_dir {
        candidates.push(dir.join(CONFIG_FILE_NAME));
    }
    candidates
}

fn hidden_name(config_name: &str) -> String {
    format!(".{}", config_name.trim_start_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_order() {
        let candidates = candidates_from(
            Some(PathBuf::from("/home/u/.myconfig")),
            Some(PathBuf::from("/opt/app")),
        );
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/home/u/.myconfig.cfg"),
                PathBuf::from("/home/u/.myconfig/config.cfg"),
                PathBuf::from("/opt/app/config.cfg"),
            ]
        );
    }

    #[test]
    fn test_unknown_application_dir_drops_candidate() {
        let candidates = candidates_from(Some(PathBuf::from("/home/u/.x")), None);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_no_locations() {
        assert!(candidates_from(None, None).is_empty());
    }

    #[test]
    fn test_hidden_name() {
        assert_eq!(hidden_name("myconfig"), ".myconfig");
        assert_eq!(hidden_name(".myconfig"), ".myconfig");
    }

    #[test]
    fn test_default_candidates_mention_config_name() {
        let candidates = default_candidates("layercfgprobe");
        for candidate in candidates.iter().take(2) {
            assert!(candidate.to_string_lossy().contains("layercfgprobe"));
        }
    }
}
