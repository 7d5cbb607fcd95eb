//! Line-level data shared by the diff parser, the coverage parser and the
//! reconciler.

use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// One physical source line in one file.
///
/// `file_name` is diff-relative with forward slashes; `line_number` is
/// 1-based. Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineKey {
    pub file_name: String,
    pub line_number: u32,
}

impl LineKey {
    pub fn new(file_name: impl Into<String>, line_number: u32) -> Self {
        Self {
            file_name: file_name.into(),
            line_number,
        }
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name, self.line_number)
    }
}

/// Every line the diff introduces on its new side, in the order the diff
/// names them.
pub type NewLineSet = IndexSet<LineKey>;

/// Covered flag for every instrumented line of the coverage report, in
/// document order.
pub type CoverageMap = IndexMap<LineKey, bool>;

/// A single row of the per-line report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageEntry {
    pub file_name: String,
    pub line_number: u32,
    pub covered: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_keys_compare_exactly() {
        assert_eq!(LineKey::new("src/a.cs", 1), LineKey::new("src/a.cs", 1));
        assert_ne!(LineKey::new("src/a.cs", 1), LineKey::new("src/A.cs", 1));
        assert_ne!(LineKey::new("src/a.cs", 1), LineKey::new("src/a.cs", 2));
    }

    #[test]
    fn line_key_display() {
        assert_eq!(LineKey::new("Core/Program.cs", 42).to_string(), "Core/Program.cs:42");
    }

    #[test]
    fn new_line_set_keeps_first_insertion_order() {
        let mut set = NewLineSet::new();
        set.insert(LineKey::new("b.cs", 2));
        set.insert(LineKey::new("a.cs", 1));
        set.insert(LineKey::new("b.cs", 2));

        let order: Vec<_> = set.iter().map(|k| k.to_string()).collect();
        assert_eq!(order, vec!["b.cs:2", "a.cs:1"]);
    }
}
