//! Test fixture creation for entry exports
#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;
use voice_insights::VoiceEntry;

pub fn tags(values: &[&str]) -> Option<Vec<Option<String>>> {
    Some(values.iter().map(|v| Some(v.to_string())).collect())
}

/// A bare entry with the identity fields filled in, like the app exports them.
pub fn entry(id: &str, created_at: &str) -> VoiceEntry {
    VoiceEntry {
        id: Some(id.to_string()),
        user_id: Some("test".to_string()),
        transcript_raw: Some("test".to_string()),
        transcript_user: Some("test".to_string()),
        tags_model: Some(vec![]),
        tags_user: Some(vec![]),
        created_at: Some(created_at.to_string()),
        updated_at: Some(created_at.to_string()),
        ..Default::default()
    }
}

/// Five journal entries covering every summary clause.
///
/// Every entry carries the "reflection" user tag. The fourth entry has an
/// unparseable date and no language, category or score; the fifth has a
/// zero score, an empty audio url and a date-only timestamp.
pub fn mock_voice_entries() -> Vec<VoiceEntry> {
    vec![
        VoiceEntry {
            tags_user: tags(&["reflection", "gratitude"]),
            tags_model: tags(&["positive"]),
            language_detected: Some("en".to_string()),
            language_rendered: Some("en".to_string()),
            category: Some("journal".to_string()),
            emotion_score_score: Some(0.75),
            audio_url: Some("https://example.com/audio/mock-1.mp3".to_string()),
            embedding: Some(vec![Some(0.1), Some(0.2)]),
            ..entry("mock-1", "2024-03-01T08:00:00Z")
        },
        VoiceEntry {
            tags_user: tags(&["reflection", "work"]),
            tags_model: tags(&["stress"]),
            language_detected: Some("en".to_string()),
            category: Some("work".to_string()),
            emotion_score_score: Some(0.25),
            embedding: Some(vec![]),
            ..entry("mock-2", "2024-03-02T21:15:00Z")
        },
        VoiceEntry {
            tags_user: tags(&["reflection"]),
            tags_model: tags(&["family", "positive"]),
            language_detected: Some("it".to_string()),
            category: Some("personal".to_string()),
            emotion_score_score: Some(1.0),
            audio_url: Some("https://example.com/audio/mock-3.mp3".to_string()),
            embedding: Some(vec![Some(0.3)]),
            ..entry("mock-3", "2024-03-05T10:00:00Z")
        },
        VoiceEntry {
            tags_user: tags(&["reflection", "work"]),
            tags_model: None,
            ..entry("mock-4", "not a date")
        },
        VoiceEntry {
            tags_user: tags(&["reflection", ""]),
            tags_model: tags(&["positive"]),
            language_detected: Some("en".to_string()),
            category: Some("journal".to_string()),
            emotion_score_score: Some(0.0),
            audio_url: Some(String::new()),
            ..entry("mock-5", "2024-03-10")
        },
    ]
}

/// Writes `contents` to a temporary file that lives as long as the handle.
pub fn write_temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

pub fn write_entries_file(entries: &[VoiceEntry]) -> NamedTempFile {
    let json = serde_json::to_string(entries).expect("Failed to serialize entries");
    write_temp_file(&json)
}
