//! Coverage document parsing.

use crate::error::{DiffCovError, Result};
use crate::model::{CoverageMap, LineKey};
use crate::paths::{common_root, strip_root};
use roxmltree::{Document, Node};

/// Build the coverage map from a coverage document.
///
/// Each child of the root element is a file element with a `path`
/// attribute; each of its children is a line element with `lineNumber` and
/// `covered` attributes. File paths are made diff-relative by stripping
/// the root they share with `document_path`.
///
/// Line elements whose attributes are missing or do not parse are skipped.
///
/// # Returns
///
/// * `Ok(CoverageMap)` - Covered flag per instrumented line, in document order
/// * `Err(DiffCovError::CoverageParse)` - Not well-formed XML, or a file
///   element without a `path`
/// * `Err(DiffCovError::DuplicateCoverageKey)` - A (file, line) pair appears twice
pub fn extract_coverage(document: &str, document_path: &str) -> Result<CoverageMap> {
    let doc = Document::parse(document).map_err(|e| DiffCovError::CoverageParse(e.to_string()))?;

    let mut result = CoverageMap::new();
    let mut skipped = 0usize;

    for file in child_elements(doc.root_element()) {
        let path = file.attribute("path").ok_or_else(|| {
            DiffCovError::CoverageParse(format!(
                "<{}> element at byte {} has no 'path' attribute",
                file.tag_name().name(),
                file.range().start
            ))
        })?;

        let root = common_root(path, document_path);
        let file_name = strip_root(path, &root);

        for line in child_elements(file) {
            let Some((line_number, covered)) = parse_line(line) else {
                skipped += 1;
                continue;
            };

            let key = LineKey::new(file_name.as_str(), line_number);
            if result.contains_key(&key) {
                return Err(DiffCovError::DuplicateCoverageKey {
                    file: key.file_name,
                    line: key.line_number,
                });
            }
            result.insert(key, covered);
        }
    }

    tracing::debug!(
        count = result.len(),
        skipped,
        "extracted line coverage from report"
    );
    Ok(result)
}

fn child_elements<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(Node::is_element)
}

/// Read the `lineNumber` and `covered` attributes of a line element.
fn parse_line(line: Node<'_, '_>) -> Option<(u32, bool)> {
    let line_number = line.attribute("lineNumber")?.trim().parse().ok()?;
    let covered = parse_bool(line.attribute("covered")?)?;
    Some((line_number, covered))
}

/// Parse a boolean literal, accepting any letter case ("True", "false").
pub(super) fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
