//! Pipeline configuration.
//!
//! The file layout the pipeline operates on is read from an optional
//! `tweetline.toml` in the working directory. Every field defaults to the
//! conventional name, so a missing config file reproduces the stock layout.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

/// Config file name looked up in the working directory when `--config` is
/// not given.
pub const DEFAULT_CONFIG_FILE: &str = "tweetline.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub input: InputSection,
    pub sanitizer: SanitizerSection,
    pub results: ResultsSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSection {
    /// Raw tweet export read by the sanitizer script
    pub raw: String,

    /// Sanitized copy the sanitizer script writes and the analysis reads
    pub sanitized: String,

    /// Optional username allow-list
    pub filter_file: String,

    /// Optional per-user relation data
    pub relations_file: String,
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            raw: "tweets.csv".to_string(),
            sanitized: "tweets_FIXED.csv".to_string(),
            filter_file: "cluster_usernames.csv".to_string(),
            relations_file: "user_relations.csv".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerSection {
    /// Shell script that strips null bytes from the raw input
    pub script: String,
}

impl Default for SanitizerSection {
    fn default() -> Self {
        Self {
            script: "remove_null_byte.sh".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsSection {
    /// Directory the report files are collected into
    pub directory: String,
}

impl Default for ResultsSection {
    fn default() -> Self {
        Self {
            directory: "RESULTS".to_string(),
        }
    }
}

/// Resolve the configuration for this run.
///
/// An explicit `--config` path must exist and parse; without one, a
/// `tweetline.toml` in the working directory is used when present, and the
/// defaults otherwise.
pub fn load(work_dir: &Path, explicit: Option<&str>) -> anyhow::Result<PipelineConfig> {
    match explicit {
        Some(path) => read_config(Path::new(path)),
        None => {
            let default = work_dir.join(DEFAULT_CONFIG_FILE);
            if default.exists() {
                read_config(&default)
            } else {
                debug!("no {} found, using the stock layout", DEFAULT_CONFIG_FILE);
                Ok(PipelineConfig::default())
            }
        }
    }
}

pub fn read_config(path: &Path) -> anyhow::Result<PipelineConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}
