//! Themed icon lookup
//!
//! Resolves icon names against the user's icon theme, falling back to the
//! resources bundled with the app. Lookup never fails: a theme miss just
//! means the bundled icon is used.

pub mod actions;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tauri::{image::Image, AppHandle, Manager};

use crate::error::{PatchgridError, Result};
use crate::platform::ProcessEnvironment;

/// Where a requested icon was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "path", rename_all = "lowercase")]
pub enum IconSource {
    /// An icon file from the user's theme.
    Theme(PathBuf),
    /// A bundled resource, relative to the app's resource directory.
    Bundled(String),
}

impl IconSource {
    /// Load the icon into an image usable by menus and buttons.
    pub fn load(&self, app: &AppHandle) -> Result<Image<'static>> {
        let path = match self {
            Self::Theme(path) => path.clone(),
            Self::Bundled(relative) => app
                .path()
                .resource_dir()
                .map_err(|e| PatchgridError::platform(format!("no resource dir: {e}")))?
                .join(relative),
        };
        Image::from_path(&path).map_err(PatchgridError::Tauri)
    }
}

/// Looks up icons by name and pixel size.
pub struct IconResolver {
    theme: String,
    roots: Vec<PathBuf>,
}

impl IconResolver {
    pub fn new(theme: impl Into<String>, roots: Vec<PathBuf>) -> Self {
        Self {
            theme: theme.into(),
            roots,
        }
    }

    /// Resolver over the standard icon roots for this process.
    pub fn from_environment(env: &ProcessEnvironment) -> Self {
        Self::new(
            "hicolor",
            vec![
                env.home_dir.join(".icons"),
                PathBuf::from("/usr/local/share/icons"),
                PathBuf::from("/usr/share/icons"),
            ],
        )
    }

    /// Resolve an icon name at the given pixel size.
    ///
    /// Scans the theme's `{size}x{size}` directories (including one level
    /// of context subdirectories such as `actions/`) under each root. A
    /// miss falls back to the bundled `icons/{size}x{size}/{name}.png`.
    pub fn resolve(&self, name: &str, size: u32) -> IconSource {
        let sized = format!("{size}x{size}");
        for root in &self.roots {
            let dir = root.join(&self.theme).join(&sized);
            if let Some(path) = find_icon_in(&dir, name) {
                return IconSource::Theme(path);
            }
        }
        IconSource::Bundled(format!("icons/{sized}/{name}.png"))
    }
}

fn find_icon_in(dir: &Path, name: &str) -> Option<PathBuf> {
    let file_name = format!("{name}.png");

    let direct = dir.join(&file_name);
    if direct.is_file() {
        return Some(direct);
    }

    // Context subdirectories: actions/, places/, status/, ...
    for entry in dir.read_dir().ok()?.flatten() {
        let candidate = entry.path().join(&file_name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fake_theme(root: &Path, theme: &str, sized: &str, context: &str, name: &str) -> PathBuf {
        let dir = root.join(theme).join(sized).join(context);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{name}.png"));
        fs::write(&path, b"png").unwrap();
        path
    }

    #[test]
    fn test_resolve_finds_theme_icon_in_context_dir() {
        let root = tempfile::tempdir().unwrap();
        let path = fake_theme(root.path(), "oxygen", "16x16", "actions", "media-playback-start");

        let resolver = IconResolver::new("oxygen", vec![root.path().to_path_buf()]);
        assert_eq!(
            resolver.resolve("media-playback-start", 16),
            IconSource::Theme(path)
        );
    }

    #[test]
    fn test_resolve_prefers_direct_hit() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("oxygen/22x22");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("view-refresh.png");
        fs::write(&path, b"png").unwrap();

        let resolver = IconResolver::new("oxygen", vec![root.path().to_path_buf()]);
        assert_eq!(resolver.resolve("view-refresh", 22), IconSource::Theme(path));
    }

    #[test]
    fn test_resolve_miss_falls_back_to_bundled() {
        let root = tempfile::tempdir().unwrap();
        let resolver = IconResolver::new("oxygen", vec![root.path().to_path_buf()]);
        assert_eq!(
            resolver.resolve("zoom-in", 16),
            IconSource::Bundled("icons/16x16/zoom-in.png".to_string())
        );
    }

    #[test]
    fn test_resolve_ignores_wrong_size() {
        let root = tempfile::tempdir().unwrap();
        fake_theme(root.path(), "oxygen", "16x16", "actions", "zoom-out");

        let resolver = IconResolver::new("oxygen", vec![root.path().to_path_buf()]);
        assert_eq!(
            resolver.resolve("zoom-out", 32),
            IconSource::Bundled("icons/32x32/zoom-out.png".to_string())
        );
    }
}
