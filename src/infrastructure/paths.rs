//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is visible under `/host`, which
//! points at the working directory Zellij was started from (usually `~`).

use std::path::PathBuf;

/// Sandbox mount point for the host filesystem.
const HOST_ROOT: &str = "/host";

/// Returns the data directory used for Booklist trace files.
///
/// Inside the sandbox this is `/host/.local/share/zellij/booklist`, which is
/// `~/.local/share/zellij/booklist` on the host when Zellij was started from
/// the home directory. The OTLP trace file and its rotated backups live here.
///
/// # Examples
///
/// ```
/// use booklist::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/booklist"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("booklist")
}

/// Expands tilde paths to use the `/host` prefix.
///
/// # Examples
///
/// ```
/// use booklist::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/books.json"), "/host/books.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/srv/books.json"), "/srv/books.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_ROOT, 1)
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

/// Resolves a configured catalog path to a path readable from the sandbox.
///
/// Tilde paths are expanded, relative paths are anchored at `/host`, and
/// absolute paths are kept as given.
///
/// # Parameters
///
/// * `path` - The `catalog_path` plugin option; surrounding whitespace and a
///   leading `./` are ignored
///
/// # Returns
///
/// An absolute sandbox path. The file is not checked for existence; a missing
/// catalog surfaces later as a failed load.
///
/// # Examples
///
/// ```
/// use booklist::infrastructure::resolve_catalog_path;
/// use std::path::PathBuf;
///
/// assert_eq!(resolve_catalog_path("books.json"), PathBuf::from("/host/books.json"));
/// assert_eq!(resolve_catalog_path("~/data/books.json"), PathBuf::from("/host/data/books.json"));
/// assert_eq!(resolve_catalog_path("/data/books.json"), PathBuf::from("/data/books.json"));
/// ```
#[must_use]
pub fn resolve_catalog_path(path: &str) -> PathBuf {
    let expanded = expand_tilde(path.trim());
    if expanded.starts_with('/') {
        PathBuf::from(expanded)
    } else {
        PathBuf::from(HOST_ROOT).join(expanded.trim_start_matches("./"))
    }
}
