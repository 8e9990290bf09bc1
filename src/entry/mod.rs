mod lenient;
mod load;
mod models;

pub use load::{load_entries, load_entries_from_reader, load_entries_from_str, EntryLoadError};
pub use models::VoiceEntry;
