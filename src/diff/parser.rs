//! Core diff parsing logic.

use crate::error::{DiffCovError, Result};
use crate::model::{LineKey, NewLineSet};

use super::helpers::{has_extension, hunk_new_side, parse_file_header, parse_new_range};

/// Extract every new-side line from a unified diff.
///
/// Only hunk headers are consulted: the `+new,count` range of each hunk
/// under a tracked file contributes `count` lines starting at `new`. Hunk
/// bodies are not read, and a header's range includes its context lines,
/// so the diff must be generated without context (`git diff -U0`).
///
/// # Arguments
///
/// * `diff_text` - Raw unified diff text
/// * `extension` - Tracked source extension without a leading dot
///
/// # Returns
///
/// * `Ok(NewLineSet)` - New lines in diff order, deduplicated
/// * `Err(DiffCovError::MalformedHunk)` - A hunk's new-side range is neither
///   `start` nor `start,count`
pub fn extract_new_lines(diff_text: &str, extension: &str) -> Result<NewLineSet> {
    let mut result = NewLineSet::new();
    let mut visited_file: Option<&str> = None;

    for (index, line) in diff_text.lines().enumerate() {
        if let Some(path) = parse_file_header(line) {
            visited_file = has_extension(path, extension).then_some(path);
            if visited_file.is_none() {
                tracing::debug!(path, "skipping untracked file");
            }
            continue;
        }

        let Some(file) = visited_file else {
            continue;
        };

        if let Some(range) = hunk_new_side(line) {
            let lines = parse_new_range(range).ok_or_else(|| DiffCovError::MalformedHunk {
                line_number: index + 1,
                line: line.to_string(),
            })?;

            for line_number in lines {
                result.insert(LineKey::new(file, line_number));
            }
        }
    }

    tracing::debug!(count = result.len(), "extracted new lines from diff");
    Ok(result)
}
