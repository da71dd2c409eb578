//! Run summary output in text and JSON form.

use serde_json::json;

/// What the prepare stage loaded, reported to the user before the analysis
/// stage takes over.
pub struct RunSummary {
    pub number_of_words: i64,
    pub usernames_loaded: usize,
    pub relations_loaded: usize,
}

pub fn summary_json(summary: &RunSummary) -> serde_json::Value {
    json!({
        "number_of_words": summary.number_of_words,
        "usernames_loaded": summary.usernames_loaded,
        "relations_loaded": summary.relations_loaded,
    })
}

pub fn print_summary(summary: &RunSummary) {
    println!("Word timeline length: {}", summary.number_of_words);
    println!("Filter usernames loaded: {}", summary.usernames_loaded);
    println!("User relations loaded: {}", summary.relations_loaded);
}
