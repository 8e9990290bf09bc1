//! Voice entry data model

use serde::{Deserialize, Serialize};

use super::lenient;

/// A single voice journal entry as exported by the journaling app.
///
/// Every field is optional: exports routinely omit fields or carry values of
/// the wrong type, and those are read as absent rather than rejected.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VoiceEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub user_id: Option<String>,
    /// Location of the recorded audio, if it was kept
    #[serde(default, deserialize_with = "lenient::string")]
    pub audio_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub transcript_raw: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub transcript_user: Option<String>,
    /// Language code detected from the audio, e.g. "en"
    #[serde(default, deserialize_with = "lenient::string")]
    pub language_detected: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub language_rendered: Option<String>,
    /// Tags assigned by the tagging model
    #[serde(default, deserialize_with = "lenient::tag_list")]
    pub tags_model: Option<Vec<Option<String>>>,
    /// Tags assigned by the user
    #[serde(default, deserialize_with = "lenient::tag_list")]
    pub tags_user: Option<Vec<Option<String>>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub updated_at: Option<String>,
    /// Emotion score, nominally in [0, 1]
    #[serde(default, deserialize_with = "lenient::number")]
    pub emotion_score_score: Option<f64>,
    /// Embedding vector; non-numeric components are kept as empty slots
    #[serde(default, deserialize_with = "lenient::vector")]
    pub embedding: Option<Vec<Option<f64>>>,
}

impl VoiceEntry {
    /// Non-empty tags of this entry, user tags first, then model tags.
    /// A tag present in both lists is yielded twice.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        let user = self.tags_user.iter().flatten();
        let model = self.tags_model.iter().flatten();
        user.chain(model)
            .filter_map(|tag| tag.as_deref())
            .filter(|tag| !tag.is_empty())
    }

    pub fn language(&self) -> Option<&str> {
        non_empty(&self.language_detected)
    }

    pub fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    pub fn has_audio(&self) -> bool {
        non_empty(&self.audio_url).is_some()
    }

    pub fn has_embedding(&self) -> bool {
        self.embedding.as_ref().is_some_and(|e| !e.is_empty())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
