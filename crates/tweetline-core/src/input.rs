//! Loaders for the optional pipeline input files.
//!
//! Two delimited files feed the analysis stage:
//!
//! - a username filter list (`cluster_usernames.csv` by convention): when
//!   present, downstream analysis restricts itself to the usernames it lists;
//! - a user relation file (`user_relations.csv` by convention): per-username
//!   follower and friend counts used to weight or annotate the analysis.
//!
//! Both files are UTF-8 text with `|` as the field delimiter, `"` as the
//! quote character, and a single header row. Both are optional: a missing or
//! unreadable file yields an empty collection, never an error. A relation
//! record with too few fields is the one read failure that reaches the
//! caller, as [`PipelineError::MalformedRow`].

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use log::debug;

use crate::error::{PipelineError, Result};

/// Field delimiter used by all pipeline input files.
pub const INPUT_DELIMITER: u8 = b'|';

/// Quote character used by all pipeline input files.
pub const INPUT_QUOTE: u8 = b'"';

/// Default number of words in the word timeline when `--words` is not given.
pub const DEFAULT_TIMELINE_WORDS: i64 = 10;

/// Follower and friend counts for a single user.
///
/// Counts are kept verbatim as read from the relation file; no numeric
/// parsing or validation is performed at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRelations {
    /// Follower count, literal string form
    pub followers_count: String,

    /// Friend count, literal string form
    pub friends_count: String,
}

fn reader_for(file: File) -> csv::Reader<File> {
    csv::ReaderBuilder::new()
        .delimiter(INPUT_DELIMITER)
        .quote(INPUT_QUOTE)
        .has_headers(true)
        .flexible(true)
        .from_reader(file)
}

/// Load the username filter list.
///
/// Returns the first field of every data row, lowercased, in file order.
/// Duplicates are kept and whitespace is not trimmed. A missing, empty, or
/// unreadable file yields an empty vector; no error is surfaced.
pub fn load_filter_list(path: &Path) -> Vec<String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            debug!("no filter list at {}: {}", path.display(), err);
            return Vec::new();
        }
    };

    let mut usernames = Vec::new();
    for record in reader_for(file).records() {
        match record {
            Ok(record) => {
                if let Some(field) = record.get(0) {
                    usernames.push(field.to_lowercase());
                }
            }
            Err(err) => {
                // Undecodable content is treated like an unreadable file.
                debug!("discarding filter list {}: {}", path.display(), err);
                return Vec::new();
            }
        }
    }
    usernames
}

/// Load the user relation map.
///
/// Each data row maps its first field (username, case preserved) to the
/// second and third fields as [`UserRelations`]. A later row with a duplicate
/// username overwrites the earlier one.
///
/// A missing or unreadable file yields an empty map. A row with fewer than
/// three fields returns [`PipelineError::MalformedRow`] instead: corrupt data
/// in a file that opened cleanly is reported rather than dropped.
pub fn load_user_relations(path: &Path) -> Result<HashMap<String, UserRelations>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            debug!("no relation file at {}: {}", path.display(), err);
            return Ok(HashMap::new());
        }
    };

    let mut relations = HashMap::new();
    for record in reader_for(file).records() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                debug!("discarding relation file {}: {}", path.display(), err);
                return Ok(HashMap::new());
            }
        };

        if record.len() < 3 {
            return Err(PipelineError::MalformedRow {
                path: path.to_path_buf(),
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: 3,
                found: record.len(),
            });
        }

        relations.insert(
            record[0].to_string(),
            UserRelations {
                followers_count: record[1].to_string(),
                friends_count: record[2].to_string(),
            },
        );
    }
    Ok(relations)
}
