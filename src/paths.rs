//! Path normalization between coverage-report paths and diff-relative paths.
//!
//! Coverage tools record absolute paths (often Windows-style), while a
//! unified diff names files relative to the repository root. The coverage
//! document is assumed to live somewhere inside that root, so the segments
//! it shares with each recorded path are stripped off.
//!
//! Everything here is pure path computation: no filesystem access.

use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

/// Resolve `.` and `..` segments lexically, without following symlinks.
///
/// `..` at the root is dropped; leading `..` of a relative path is kept.
pub fn collapse_dot_segments(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(Component::ParentDir),
            },
            other => out.push(other),
        }
    }
    out
}

/// Longest common prefix of two paths, compared segment by segment on the
/// host's path separator.
///
/// ```
/// # use diffcov::paths::common_root;
/// # if cfg!(unix) {
/// assert_eq!(common_root("/x/y/z.xml", "/x/y/report.xml"), "/x/y");
/// # }
/// ```
pub fn common_root(first: &str, second: &str) -> String {
    common_root_with(first, second, MAIN_SEPARATOR)
}

/// Same as [`common_root`], with an explicit separator.
pub fn common_root_with(first: &str, second: &str, separator: char) -> String {
    let shared: Vec<&str> = first
        .split(separator)
        .zip(second.split(separator))
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a)
        .collect();

    shared.join(&separator.to_string())
}

/// Strip `root` and the separator that follows it from `path`, then
/// normalize the remainder to forward slashes.
///
/// An empty root (nothing shared) only loses a leading separator, if any.
/// A root that spans the entire path yields an empty string.
pub fn strip_root(path: &str, root: &str) -> String {
    let rest = path.strip_prefix(root).unwrap_or(path);
    let relative = rest.strip_prefix(['/', '\\']).unwrap_or(rest);

    normalize_separators(relative)
}

/// Normalize a file path to use forward slashes.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
