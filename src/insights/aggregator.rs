use tracing::debug;

use super::report::Report;
use super::stats::EntryStats;
use super::summary::render_summary;
use crate::entry::VoiceEntry;

/// Aggregates entries into tag frequencies and a one-line summary.
///
/// `None` and an empty slice both yield [`Report::empty`]. The input is only
/// read, malformed fields are treated as absent, and the same input always
/// yields the same report.
pub fn aggregate(entries: Option<&[VoiceEntry]>) -> Report {
    let entries = match entries {
        Some(entries) if !entries.is_empty() => entries,
        _ => return Report::empty(),
    };

    let stats = EntryStats::from_entries(entries);
    debug!(
        "Aggregated {} entries: {} unique tags, {} languages, {} categories",
        stats.total_entries,
        stats.tags.len(),
        stats.languages.len(),
        stats.categories.len()
    );

    Report {
        summary: render_summary(&stats),
        tag_frequencies: stats.tags.to_counts(),
    }
}
