//! Voice Insights Library
//!
//! Summarizes collections of voice journal entries into tag frequencies and a
//! one-line textual report. The modules are exposed for the binary and for
//! end-to-end tests.

pub mod config;
pub mod entry;
pub mod insights;
pub mod output;

// Re-export commonly used types for convenience
pub use entry::{
    load_entries, load_entries_from_reader, load_entries_from_str, EntryLoadError, VoiceEntry,
};
pub use insights::{aggregate, Report, NO_ENTRIES_SUMMARY};
