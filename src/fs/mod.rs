//! Filesystem utilities for diffcov.
//!
//! The report artifact is replaced atomically so that a failed run never
//! leaves a truncated report behind.

pub mod atomic;

pub use atomic::atomic_write;
