//! # Ban Log Queries
//!
//! The ban log is an append-only sequence of [`BanRecord`]; append order
//! is chronological under normal operation but `timestamp` is what
//! queries sort by.

use super::entities::BanRecord;

/// The `limit` newest records by `timestamp`, newest first.
///
/// A `limit` larger than the log returns the whole log; an empty log
/// returns an empty vec. Ties keep append order (stable sort).
pub fn recent(records: &[BanRecord], limit: usize) -> Vec<BanRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(limit);
    sorted
}
