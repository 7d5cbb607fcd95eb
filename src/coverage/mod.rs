//! Coverage report parsing for diffcov.
//!
//! Reads a flat per-file/per-line coverage document, such as the generic
//! test coverage format:
//!
//! ```xml
//! <coverage version="1">
//!   <file path="C:\work\repo\Core\Program.cs">
//!     <lineToCover lineNumber="12" covered="true"/>
//!     <lineToCover lineNumber="13" covered="false"/>
//!   </file>
//! </coverage>
//! ```
//!
//! Element names are not checked; only the nesting and the attributes matter.

mod parser;


pub use parser::extract_coverage;
