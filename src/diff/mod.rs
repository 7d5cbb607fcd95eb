//! Unified-diff parsing for diffcov.
//!
//! Extracts the lines a change introduces, as (file, line) pairs on the new
//! side of the diff. The parsing is deterministic and supports:
//! - `+++ b/<path>` file headers, filtered by the tracked source extension
//! - `@@ -a,b +c,d @@` hunk headers in both `c` and `c,d` forms
//! - Pure deletions (`+c,0`), which contribute no lines
//!
//! Renames and deletions get no special handling.

mod helpers;
mod parser;


pub use parser::extract_new_lines;
