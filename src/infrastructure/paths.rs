//! Filesystem locations.
//!
//! Resolves the directory the gallery writes its trace file to, and expands
//! `~` in user-supplied paths.

use std::path::PathBuf;

/// Returns the default data directory.
///
/// Resolution order: `$XDG_DATA_HOME/gallerist`, then
/// `$HOME/.local/share/gallerist`, then `<tmp>/gallerist`.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join("gallerist");
    }
    if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".local").join("share").join("gallerist");
    }
    std::env::temp_dir().join("gallerist")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or a missing `$HOME`, are returned unchanged.
///
/// # Examples
///
/// ```
/// use gallerist::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/srv/fixtures"), std::path::PathBuf::from("/srv/fixtures"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = std::env::var_os("HOME").filter(|v| !v.is_empty());
    match (path, home) {
        ("~", Some(home)) => PathBuf::from(home),
        (p, Some(home)) if p.starts_with("~/") => PathBuf::from(home).join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_untouched() {
        assert_eq!(expand_tilde("/data/photos"), PathBuf::from("/data/photos"));
        assert_eq!(expand_tilde("relative/dir"), PathBuf::from("relative/dir"));
    }

    #[test]
    fn data_dir_ends_with_crate_name() {
        assert!(default_data_dir().ends_with("gallerist"));
    }
}
