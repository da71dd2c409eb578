//! # Tweetline Core
//!
//! Core library for Tweetline - input handling for a tweet-analysis pipeline.
//!
//! This crate provides the pipeline's input stage and post-run housekeeping,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **input**: Username filter list and user relation loaders
//! - **sanitize**: Null-byte remediation via an external script
//! - **results**: Report manifest and results-directory collection
//! - **fs**: Filesystem helpers for moving report files
//!
//! The downstream analysis that consumes the loaded structures lives outside
//! this repository.

pub mod error;
pub mod fs;
pub mod input;
pub mod results;
pub mod sanitize;

pub use error::{PipelineError, Result};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
