use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::timestamp::{day_span, parse_timestamp};
use crate::entry::VoiceEntry;

#[derive(Debug, Clone, Copy)]
struct TagCount {
    count: u64,
    /// Position of the tag among distinct tags, in order of first appearance
    first_seen: usize,
}

/// Tag occurrence counts, remembering the order tags were first seen.
#[derive(Debug, Clone, Default)]
pub(crate) struct TagFrequencies {
    counts: HashMap<String, TagCount>,
}

impl TagFrequencies {
    pub fn record(&mut self, tag: &str) {
        if let Some(existing) = self.counts.get_mut(tag) {
            existing.count += 1;
            return;
        }
        let first_seen = self.counts.len();
        self.counts.insert(
            tag.to_string(),
            TagCount {
                count: 1,
                first_seen,
            },
        );
    }

    #[cfg(test)]
    pub fn get(&self, tag: &str) -> Option<u64> {
        self.counts.get(tag).map(|c| c.count)
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// The tag with the highest count. Among equal counts the tag seen first
    /// wins.
    pub fn most_common(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .max_by(|(_, a), (_, b)| {
                a.count
                    .cmp(&b.count)
                    .then_with(|| b.first_seen.cmp(&a.first_seen))
            })
            .map(|(tag, c)| (tag.as_str(), c.count))
    }

    pub fn to_counts(&self) -> HashMap<String, u64> {
        self.counts
            .iter()
            .map(|(tag, c)| (tag.clone(), c.count))
            .collect()
    }
}

/// Counters accumulated over a pass on a set of entries.
#[derive(Debug, Clone, Default)]
pub(crate) struct EntryStats {
    pub total_entries: usize,
    pub tags: TagFrequencies,
    /// Entries per detected language code
    pub languages: HashMap<String, u64>,
    /// Entries per category label
    pub categories: HashMap<String, u64>,
    pub entries_with_audio: u64,
    pub entries_with_embedding: u64,
    emotion_score_sum: f64,
    emotion_score_count: u64,
    earliest: Option<DateTime<Utc>>,
    latest: Option<DateTime<Utc>>,
}

impl EntryStats {
    pub fn from_entries(entries: &[VoiceEntry]) -> Self {
        let mut stats = Self::default();
        for entry in entries {
            stats.record(entry);
        }
        stats
    }

    pub fn record(&mut self, entry: &VoiceEntry) {
        self.total_entries += 1;

        for tag in entry.tags() {
            self.tags.record(tag);
        }

        if let Some(language) = entry.language() {
            *self.languages.entry(language.to_string()).or_default() += 1;
        }

        if let Some(category) = entry.category() {
            *self.categories.entry(category.to_string()).or_default() += 1;
        }

        if let Some(score) = entry.emotion_score_score {
            self.emotion_score_sum += score;
            self.emotion_score_count += 1;
        }

        if entry.has_audio() {
            self.entries_with_audio += 1;
        }

        if entry.has_embedding() {
            self.entries_with_embedding += 1;
        }

        if let Some(raw) = entry.created_at.as_deref() {
            match parse_timestamp(raw) {
                Some(created_at) => self.observe_date(created_at),
                None => debug!(
                    "Ignoring unparseable created_at {:?} on entry {:?}",
                    raw, entry.id
                ),
            }
        }
    }

    fn observe_date(&mut self, date: DateTime<Utc>) {
        if self.earliest.map_or(true, |earliest| date < earliest) {
            self.earliest = Some(date);
        }
        if self.latest.map_or(true, |latest| date > latest) {
            self.latest = Some(date);
        }
    }

    pub fn average_emotion_score(&self) -> Option<f64> {
        if self.emotion_score_count == 0 {
            return None;
        }
        Some(self.emotion_score_sum / self.emotion_score_count as f64)
    }

    /// Earliest and latest valid creation timestamps, if any were seen.
    pub fn date_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.earliest.zip(self.latest)
    }

    pub fn day_span(&self) -> Option<u64> {
        self.date_range()
            .map(|(earliest, latest)| day_span(earliest, latest))
    }
}
