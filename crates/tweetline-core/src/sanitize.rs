//! Null-byte remediation for the raw input file.
//!
//! The raw tweet export can contain null bytes that break downstream parsing.
//! Stripping them is delegated to an external shell script which reads the
//! raw input file and writes the sanitized copy as a side effect. This module
//! only launches the script and verifies it delivered: the launch, the exit
//! status, and the presence of the sanitized output are all checked.

use std::path::Path;
use std::process::Command;

use crate::error::{PipelineError, Result};

/// Run the remediation script and verify it produced the sanitized file.
///
/// The script is invoked as `sh <script>` from `work_dir` and is expected to
/// write `output` (relative to `work_dir`). The call blocks until the script
/// exits; there is no timeout.
///
/// # Errors
///
/// Returns [`PipelineError::Sanitize`] if the script cannot be launched,
/// exits with a non-zero status, or does not produce the output file.
pub fn run_sanitizer(work_dir: &Path, script: &str, output: &str) -> Result<()> {
    let status = Command::new("sh")
        .arg(script)
        .current_dir(work_dir)
        .status()
        .map_err(|err| {
            PipelineError::Sanitize(format!("failed to launch {}: {}", script, err))
        })?;

    if !status.success() {
        return Err(PipelineError::Sanitize(format!(
            "{} exited with {}",
            script, status
        )));
    }

    if !work_dir.join(output).exists() {
        return Err(PipelineError::Sanitize(format!(
            "{} did not produce {}",
            script, output
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_sanitizer_success() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("tweets.csv"), "a\0b\n").unwrap();
        fs::write(
            dir.path().join("strip.sh"),
            "#!/bin/sh\ntr -d '\\000' < tweets.csv > tweets_FIXED.csv\n",
        )
        .unwrap();

        run_sanitizer(dir.path(), "strip.sh", "tweets_FIXED.csv").unwrap();

        let sanitized = fs::read_to_string(dir.path().join("tweets_FIXED.csv")).unwrap();
        assert_eq!(sanitized, "ab\n");
    }

    #[test]
    fn test_sanitizer_nonzero_exit() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("strip.sh"), "#!/bin/sh\nexit 1\n").unwrap();

        let err = run_sanitizer(dir.path(), "strip.sh", "tweets_FIXED.csv").unwrap_err();
        assert!(matches!(err, PipelineError::Sanitize(_)));
    }

    #[test]
    fn test_sanitizer_missing_output() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("strip.sh"), "#!/bin/sh\nexit 0\n").unwrap();

        let err = run_sanitizer(dir.path(), "strip.sh", "tweets_FIXED.csv").unwrap_err();
        match err {
            PipelineError::Sanitize(message) => {
                assert!(message.contains("did not produce"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_sanitizer_missing_script() {
        let dir = tempdir().unwrap();

        // `sh missing.sh` exits non-zero rather than failing to launch.
        let err = run_sanitizer(dir.path(), "missing.sh", "tweets_FIXED.csv").unwrap_err();
        assert!(matches!(err, PipelineError::Sanitize(_)));
    }
}
