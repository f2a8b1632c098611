use crate::error::FetchError;
use chrono::{DateTime, Local};

/// One timestamped lux sample.  Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    value:     f64,
    timestamp: DateTime<Local>,
}

impl Reading {
    pub fn new(value: f64, timestamp: DateTime<Local>) -> Self {
        Self { value, timestamp }
    }

    /// A reading captured right now.
    pub fn now(value: f64) -> Self {
        Self::new(value, Local::now())
    }

    /// Measured illuminance in lux.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Moment the fetch that produced this reading completed.
    #[inline]
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

/// Outcome of one fetch, tagged with the sequence number allocated when the
/// request was issued.  Lets the state owner detect out-of-order completions.
#[derive(Debug, Clone)]
pub struct Sample {
    pub seq:    u64,
    pub result: Result<Reading, FetchError>,
}
