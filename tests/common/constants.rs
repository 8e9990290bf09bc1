//! Shared constants for end-to-end tests
//!
//! When the mock entries change, update only this file.
#![allow(dead_code)]

/// Number of entries returned by `mock_voice_entries`
pub const MOCK_ENTRY_COUNT: usize = 5;

/// Tag carried by every mock entry
pub const REFLECTION_TAG: &str = "reflection";

/// Tag present in three mock entries, always as a model tag
pub const POSITIVE_TAG: &str = "positive";

/// Number of distinct tags across the mock entries
pub const MOCK_UNIQUE_TAGS: usize = 6;

/// Full summary produced for the mock entries
pub const MOCK_SUMMARY: &str = "Analyzed 5 entries with 6 unique tags \
     (most common: \"reflection\" - 5 occurrences), 2 language(s), 3 categories, \
     average emotion score: 0.50, 2 with audio, 2 with embeddings, spanning 9 days";

pub const NO_ENTRIES: &str = "No entries to analyze";
