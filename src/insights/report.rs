use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Summary returned when there is nothing to aggregate.
pub const NO_ENTRIES_SUMMARY: &str = "No entries to analyze";

/// Result of aggregating a set of entries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub summary: String,
    /// Occurrences of each tag across user and model tag lists
    #[serde(rename = "tagFrequencies")]
    pub tag_frequencies: HashMap<String, u64>,
}

impl Report {
    pub fn empty() -> Self {
        Self {
            summary: NO_ENTRIES_SUMMARY.to_string(),
            tag_frequencies: HashMap::new(),
        }
    }

    /// The `limit` most frequent tags, by count descending then tag
    /// ascending.
    pub fn top_tags(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut tags: Vec<(&str, u64)> = self
            .tag_frequencies
            .iter()
            .map(|(tag, count)| (tag.as_str(), *count))
            .collect();
        tags.sort_by(|(tag_a, count_a), (tag_b, count_b)| {
            count_b.cmp(count_a).then_with(|| tag_a.cmp(tag_b))
        });
        tags.truncate(limit);
        tags
    }
}
