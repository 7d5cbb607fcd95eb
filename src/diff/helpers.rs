//! Helper functions for diff parsing.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Hunk header: "@@ -old[,len] +new[,len] @@ optional context".
///
/// The new side is captured loosely (`\S+`) so that a header with a
/// garbled range is recognized as a hunk and rejected, instead of being
/// skipped as an unrelated line.
static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -\S+ \+(\S+) @@").expect("hunk header pattern is valid")
});

/// Parse the path from a "+++ b/<path>" file header.
///
/// Returns `None` for any other line, including "+++ /dev/null".
pub(super) fn parse_file_header(line: &str) -> Option<&str> {
    line.strip_prefix("+++ b/").filter(|path| !path.is_empty())
}

/// Return the raw new-side range of a hunk header ("30,3" or "30").
pub(super) fn hunk_new_side(line: &str) -> Option<&str> {
    HUNK_HEADER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse a new-side range into the line numbers it covers.
///
/// Format: "start" (one line) or "start,count" (`count` lines, possibly 0).
/// Returns `None` for any other shape, for a range that would overflow, or
/// for a range that starts before line 1 while covering lines.
pub(super) fn parse_new_range(range: &str) -> Option<Range<u32>> {
    let (start, count) = match range.split_once(',') {
        Some((start, count)) => (parse_number(start)?, parse_number(count)?),
        None => (parse_number(range)?, 1),
    };

    if count == 0 {
        return Some(start..start);
    }
    if start == 0 {
        return None;
    }

    let end = start.checked_add(count)?;
    Some(start..end)
}

/// Strict decimal parse: digits only, no sign.
fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Whether `path` ends with the tracked source extension.
///
/// `extension` is given without a leading dot ("cs"); the match is a plain
/// case-sensitive suffix check on ".cs".
pub(super) fn has_extension(path: &str, extension: &str) -> bool {
    path.strip_suffix(extension).is_some_and(|stem| stem.ends_with('.'))
}
