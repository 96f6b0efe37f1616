//! Process environment resolution
//!
//! Resolves the temp directory, home directory and executable search path
//! once at startup. Every lookup here is best-effort: a missing or invalid
//! value produces a warning and a safe default, never an error.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::PlatformFamily;

/// Environment derived once at process start, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessEnvironment {
    pub platform: PlatformFamily,
    pub temp_dir: PathBuf,
    pub home_dir: PathBuf,
    pub search_path: Vec<PathBuf>,
}

static ENVIRONMENT: Lazy<ProcessEnvironment> = Lazy::new(ProcessEnvironment::resolve);

/// The process-wide environment, resolved on first access.
pub fn process_environment() -> &'static ProcessEnvironment {
    &ENVIRONMENT
}

impl ProcessEnvironment {
    /// Resolve from the real process environment.
    pub fn resolve() -> Self {
        Self::resolve_with(
            PlatformFamily::current(),
            &|key| std::env::var_os(key),
            os_home_dir(),
        )
    }

    /// Resolve with an injectable variable lookup and OS home fallback.
    ///
    /// `lookup` stands in for `std::env::var_os`; `fallback_home` is what
    /// the OS reports as the user's home when the HOME variable is unset.
    pub(crate) fn resolve_with(
        platform: PlatformFamily,
        lookup: &dyn Fn(&str) -> Option<OsString>,
        fallback_home: Option<PathBuf>,
    ) -> Self {
        let temp_dir = resolve_temp(platform, lookup);
        let home_dir = resolve_home(platform, lookup, fallback_home, &temp_dir);
        let search_path = resolve_search_path(platform, lookup);

        ProcessEnvironment {
            platform,
            temp_dir,
            home_dir,
            search_path,
        }
    }
}

fn resolve_temp(platform: PlatformFamily, lookup: &dyn Fn(&str) -> Option<OsString>) -> PathBuf {
    if let Some(tmp) = lookup("TMP") {
        return PathBuf::from(tmp);
    }

    if platform == PlatformFamily::Windows {
        tracing::warn!("TMP variable not set");
        windows_root(lookup).join("temp")
    } else {
        PathBuf::from("/tmp")
    }
}

fn resolve_home(
    platform: PlatformFamily,
    lookup: &dyn Fn(&str) -> Option<OsString>,
    fallback_home: Option<PathBuf>,
    temp_dir: &Path,
) -> PathBuf {
    let home = match lookup("HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            if matches!(platform, PlatformFamily::Linux | PlatformFamily::MacOs) {
                tracing::warn!("HOME variable not set");
            }
            match fallback_home {
                Some(home) => home,
                None => {
                    tracing::warn!("no home directory reported by the OS");
                    temp_dir.to_path_buf()
                }
            }
        }
    };

    if home.exists() {
        home
    } else {
        tracing::warn!(home = %home.display(), "home directory does not exist");
        temp_dir.to_path_buf()
    }
}

fn resolve_search_path(
    platform: PlatformFamily,
    lookup: &dyn Fn(&str) -> Option<OsString>,
) -> Vec<PathBuf> {
    match lookup("PATH") {
        Some(path) => std::env::split_paths(&path).collect(),
        None => {
            tracing::warn!("PATH variable not set");
            match platform {
                PlatformFamily::MacOs => vec![
                    PathBuf::from("/opt/local/bin"),
                    PathBuf::from("/usr/local/bin"),
                    PathBuf::from("/usr/bin"),
                    PathBuf::from("/bin"),
                ],
                PlatformFamily::Windows => {
                    let windir = windows_root(lookup);
                    vec![windir.join("system32"), windir]
                }
                _ => vec![
                    PathBuf::from("/usr/local/bin"),
                    PathBuf::from("/usr/bin"),
                    PathBuf::from("/bin"),
                ],
            }
        }
    }
}

fn windows_root(lookup: &dyn Fn(&str) -> Option<OsString>) -> PathBuf {
    match lookup("WINDIR") {
        Some(windir) => PathBuf::from(windir),
        None => {
            tracing::warn!("WINDIR variable not set");
            PathBuf::from(r"C:\Windows")
        }
    }
}

/// Get the user's home directory as the OS reports it.
///
/// Uses the `home` crate on macOS, falls back to the directories crate
/// otherwise. Both respect $HOME and handle sudo/passwd edge cases.
fn os_home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        home::home_dir()
    }
    #[cfg(not(target_os = "macos"))]
    {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(vars: &'a HashMap<&'a str, OsString>) -> impl Fn(&str) -> Option<OsString> + 'a {
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_temp_defaults_to_tmp_on_unix() {
        let vars = HashMap::new();
        let env = ProcessEnvironment::resolve_with(
            PlatformFamily::Linux,
            &lookup_from(&vars),
            Some(PathBuf::from("/tmp")),
        );
        assert_eq!(env.temp_dir, PathBuf::from("/tmp"));
    }

    #[test]
    fn test_temp_defaults_under_windir_on_windows() {
        let mut vars = HashMap::new();
        vars.insert("WINDIR", OsString::from(r"C:\Win"));
        let env = ProcessEnvironment::resolve_with(
            PlatformFamily::Windows,
            &lookup_from(&vars),
            None,
        );
        assert_eq!(env.temp_dir, PathBuf::from(r"C:\Win").join("temp"));
    }

    #[test]
    fn test_missing_home_dir_falls_back_to_temp() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("no-such-user");

        let mut vars = HashMap::new();
        vars.insert("TMP", temp.path().as_os_str().to_os_string());
        vars.insert("HOME", missing.into_os_string());

        let env =
            ProcessEnvironment::resolve_with(PlatformFamily::Linux, &lookup_from(&vars), None);
        assert_eq!(env.home_dir, env.temp_dir);
    }

    #[test]
    fn test_unset_home_uses_os_fallback_when_it_exists() {
        let temp = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();

        let mut vars = HashMap::new();
        vars.insert("TMP", temp.path().as_os_str().to_os_string());

        let env = ProcessEnvironment::resolve_with(
            PlatformFamily::Linux,
            &lookup_from(&vars),
            Some(home.path().to_path_buf()),
        );
        assert_eq!(env.home_dir, home.path());
    }

    #[test]
    fn test_search_path_splits_on_platform_separator() {
        let joined =
            std::env::join_paths([PathBuf::from("/usr/bin"), PathBuf::from("/bin")]).unwrap();

        let mut vars = HashMap::new();
        vars.insert("PATH", joined);
        vars.insert("HOME", OsString::from("/"));
        vars.insert("TMP", OsString::from("/tmp"));

        let env =
            ProcessEnvironment::resolve_with(PlatformFamily::Linux, &lookup_from(&vars), None);
        assert_eq!(
            env.search_path,
            vec![PathBuf::from("/usr/bin"), PathBuf::from("/bin")]
        );
    }

    #[test]
    fn test_unset_search_path_uses_macos_fallback() {
        let mut vars = HashMap::new();
        vars.insert("HOME", OsString::from("/"));
        vars.insert("TMP", OsString::from("/tmp"));

        let env =
            ProcessEnvironment::resolve_with(PlatformFamily::MacOs, &lookup_from(&vars), None);
        assert_eq!(
            env.search_path,
            vec![
                PathBuf::from("/opt/local/bin"),
                PathBuf::from("/usr/local/bin"),
                PathBuf::from("/usr/bin"),
                PathBuf::from("/bin"),
            ]
        );
    }
}
