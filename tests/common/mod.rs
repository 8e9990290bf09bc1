//! Common test infrastructure
//!
//! Shared fixtures for the end-to-end tests. Tests should only import from
//! this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{mock_voice_entries, MOCK_ENTRY_COUNT};
//!
//! #[test]
//! fn test_mock_entries() {
//!     assert_eq!(mock_voice_entries().len(), MOCK_ENTRY_COUNT);
//! }
//! ```

mod constants;
mod fixtures;

// Public API - this is what tests import
pub use constants::*;
#[allow(unused_imports)]
pub use fixtures::{entry, mock_voice_entries, tags, write_entries_file, write_temp_file};
