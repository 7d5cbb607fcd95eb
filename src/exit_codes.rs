//! Exit code constants for the diffcov CLI.
//!
//! - 0: Success
//! - 1: User error (missing or unreadable inputs, bad config, report write failure)
//! - 2: Coverage of new lines is below the `--fail-under` threshold
//! - 3: Input format failure (malformed diff hunk, bad coverage document)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable inputs, invalid config.
pub const USER_ERROR: i32 = 1;

/// Threshold failure: diff coverage is below the requested minimum.
pub const THRESHOLD_FAILURE: i32 = 2;

/// Input format failure: the diff or coverage document is structurally broken.
pub const INPUT_FAILURE: i32 = 3;
