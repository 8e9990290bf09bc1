use super::stats::EntryStats;

/// Renders the one-line summary for a non-empty set of entries.
///
/// Clauses are appended in a fixed order and only when there is something to
/// report for them.
pub(crate) fn render_summary(stats: &EntryStats) -> String {
    let mut summary = format!("Analyzed {} entries", stats.total_entries);

    if let Some((tag, count)) = stats.tags.most_common() {
        summary.push_str(&format!(
            " with {} unique tags (most common: \"{}\" - {} occurrences)",
            stats.tags.len(),
            tag,
            count
        ));
    }

    if !stats.languages.is_empty() {
        summary.push_str(&format!(", {} language(s)", stats.languages.len()));
    }

    if !stats.categories.is_empty() {
        summary.push_str(&format!(", {} categories", stats.categories.len()));
    }

    if let Some(average) = stats.average_emotion_score() {
        summary.push_str(&format!(", average emotion score: {:.2}", average));
    }

    if stats.entries_with_audio > 0 {
        summary.push_str(&format!(", {} with audio", stats.entries_with_audio));
    }

    if stats.entries_with_embedding > 0 {
        summary.push_str(&format!(
            ", {} with embeddings",
            stats.entries_with_embedding
        ));
    }

    if let Some(days) = stats.day_span() {
        summary.push_str(&format!(", spanning {} days", days));
    }

    summary
}
