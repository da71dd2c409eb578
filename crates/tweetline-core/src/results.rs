//! Post-run report collection.
//!
//! After the analysis stage has written its report files into the working
//! directory, collection removes the sanitized input file, recreates the
//! results directory, and moves every report listed in [`REPORT_MANIFEST`]
//! into it.
//!
//! The manifest distinguishes reports the analysis stage always produces
//! (missing one aborts collection) from reports it only produces for some
//! runs (missing one is skipped). Collection aborted partway leaves the moves
//! already made in place; nothing is rolled back.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::error::{PipelineError, Result};
use crate::fs::move_file;

/// One entry in the report manifest.
#[derive(Debug, Clone, Copy)]
pub struct ReportFile {
    /// File name in the working directory
    pub name: &'static str,

    /// Whether the analysis stage always produces this file
    pub required: bool,
}

/// Every report file the analysis stage can produce, in collection order.
pub const REPORT_MANIFEST: &[ReportFile] = &[
    ReportFile { name: "dates.csv", required: true },
    ReportFile { name: "mentions.csv", required: true },
    ReportFile { name: "hashtags.csv", required: true },
    ReportFile { name: "hashtags_without_accents.csv", required: true },
    ReportFile { name: "locations.csv", required: true },
    ReportFile { name: "top_urls.csv", required: true },
    ReportFile { name: "top_words.csv", required: true },
    ReportFile { name: "top_tweets.csv", required: true },
    ReportFile { name: "users_by_date.csv", required: true },
    ReportFile { name: "users_activity.csv", required: true },
    ReportFile { name: "hashtags_network.csv", required: true },
    ReportFile { name: "hashtags_network_without_accents.csv", required: true },
    ReportFile { name: "tweets_with_links.csv", required: true },
    ReportFile { name: "tweets_without_RTs.csv", required: true },
    ReportFile { name: "tweets_of_a_specific_hashtag.csv", required: true },
    ReportFile { name: "tweets_without_hashtags.csv", required: true },
    ReportFile { name: "user_influence.csv", required: true },
    ReportFile { name: "words_per_period.csv", required: false },
    ReportFile { name: "tweets_filtered_media.csv", required: false },
    ReportFile { name: "tweets_filtered_no_media.csv", required: false },
    ReportFile { name: "top_words_wordle.txt", required: true },
    ReportFile { name: "top_hashtags_wordle.txt", required: true },
    ReportFile { name: "top_hashtags_without_accents_wordle.txt", required: true },
];

/// Collect the generated report files into the results directory.
///
/// Steps, in order:
///
/// 1. Remove the sanitized input file (`sanitized_input`, relative to
///    `work_dir`). A missing file is an error.
/// 2. Remove a pre-existing results directory recursively; "not found" counts
///    as success.
/// 3. Create the results directory.
/// 4. Move every manifest entry from `work_dir` into the results directory.
///    A missing required file returns [`PipelineError::MissingReport`] and
///    leaves earlier moves in place; a missing optional file is skipped.
///
/// # Errors
///
/// Returns `MissingReport` for an absent required report and `Io` for any
/// filesystem failure.
pub fn collect_reports(work_dir: &Path, results_dir: &str, sanitized_input: &str) -> Result<()> {
    fs::remove_file(work_dir.join(sanitized_input))?;

    let destination = work_dir.join(results_dir);
    match fs::remove_dir_all(&destination) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }
    fs::create_dir(&destination)?;

    for report in REPORT_MANIFEST {
        let source = work_dir.join(report.name);
        if !source.exists() {
            if report.required {
                return Err(PipelineError::MissingReport(report.name.to_string()));
            }
            debug!("optional report {} not produced, skipping", report.name);
            continue;
        }
        move_file(&source, &destination.join(report.name))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    const SANITIZED: &str = "tweets_FIXED.csv";

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    fn write_reports(dir: &Path, include_optional: bool) {
        touch(dir, SANITIZED);
        for report in REPORT_MANIFEST {
            if report.required || include_optional {
                touch(dir, report.name);
            }
        }
    }

    #[test]
    fn test_collects_required_without_optional() {
        let dir = tempdir().unwrap();
        write_reports(dir.path(), false);

        collect_reports(dir.path(), "RESULTS", SANITIZED).unwrap();

        let results = dir.path().join("RESULTS");
        for report in REPORT_MANIFEST {
            assert_eq!(
                results.join(report.name).exists(),
                report.required,
                "{}",
                report.name
            );
            assert!(!dir.path().join(report.name).exists());
        }
        assert!(!dir.path().join(SANITIZED).exists());
    }

    #[test]
    fn test_collects_optional_when_present() {
        let dir = tempdir().unwrap();
        write_reports(dir.path(), true);

        collect_reports(dir.path(), "RESULTS", SANITIZED).unwrap();

        let results = dir.path().join("RESULTS");
        for report in REPORT_MANIFEST {
            assert!(results.join(report.name).exists(), "{}", report.name);
        }
    }

    #[test]
    fn test_missing_required_report_aborts() {
        let dir = tempdir().unwrap();
        write_reports(dir.path(), false);
        fs::remove_file(dir.path().join("locations.csv")).unwrap();

        let err = collect_reports(dir.path(), "RESULTS", SANITIZED).unwrap_err();
        match err {
            PipelineError::MissingReport(name) => assert_eq!(name, "locations.csv"),
            other => panic!("unexpected error: {other:?}"),
        }

        // Earlier moves stay in place: collection does not roll back.
        let results = dir.path().join("RESULTS");
        assert!(results.join("dates.csv").exists());
        assert!(!results.join("top_urls.csv").exists());
    }

    #[test]
    fn test_missing_sanitized_input_is_an_error() {
        let dir = tempdir().unwrap();
        write_reports(dir.path(), false);
        fs::remove_file(dir.path().join(SANITIZED)).unwrap();

        assert!(matches!(
            collect_reports(dir.path(), "RESULTS", SANITIZED),
            Err(PipelineError::Io(_))
        ));
    }

    #[test]
    fn test_rerun_replaces_previous_results() {
        let dir = tempdir().unwrap();
        write_reports(dir.path(), true);
        collect_reports(dir.path(), "RESULTS", SANITIZED).unwrap();

        // Second run with only the required reports regenerated.
        write_reports(dir.path(), false);
        collect_reports(dir.path(), "RESULTS", SANITIZED).unwrap();

        let results = dir.path().join("RESULTS");
        for report in REPORT_MANIFEST {
            assert_eq!(
                results.join(report.name).exists(),
                report.required,
                "{}",
                report.name
            );
        }
    }

    #[test]
    fn test_manifest_matches_expected_counts() {
        let required = REPORT_MANIFEST.iter().filter(|r| r.required).count();
        let optional = REPORT_MANIFEST.iter().filter(|r| !r.required).count();
        assert_eq!(required, 20);
        assert_eq!(optional, 3);
    }
}
