//! Entry insights.
//!
//! The aggregation is a pure function over a slice of entries: it reads each
//! entry once, accumulates counters and renders them into a [`Report`].

mod aggregator;
mod report;
mod stats;
mod summary;
mod timestamp;

pub use aggregator::aggregate;
pub use report::{Report, NO_ENTRIES_SUMMARY};
