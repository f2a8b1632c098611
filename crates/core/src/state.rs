use crate::{
    category::{classify, gauge_fraction, Category},
    reading::Sample,
    window::WindowStore,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How completions that arrive out of issuance order are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderingPolicy {
    /// Discard a completion whose request was issued before the last applied one.
    #[default]
    DropStale,
    /// Push every successful completion; whichever finishes last is "latest".
    LatestWins,
}

/// What [`AppState::apply`] did with a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Pushed,
    Stale,
    Failed,
}

/// Display-session state.  Owned by one context and mutated only there.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Recent readings for the chart.
    pub window: WindowStore,
    /// Value shown on the gauge; `0.0` until the first reading arrives.
    pub current: f64,
    policy:        OrderingPolicy,
    last_applied:  Option<u64>,
    failures:      u64,
    stale_dropped: u64,
}

impl AppState {
    pub fn new(capacity: usize, policy: OrderingPolicy) -> Self {
        Self {
            window: WindowStore::new(capacity),
            current: 0.0,
            policy,
            last_applied: None,
            failures: 0,
            stale_dropped: 0,
        }
    }

    /// Fold one fetch outcome into the state.
    ///
    /// Failures leave the window and gauge untouched and never advance the
    /// applied sequence number.
    pub fn apply(&mut self, sample: Sample) -> Applied {
        let reading = match sample.result {
            Ok(reading) => reading,
            Err(_) => {
                self.failures += 1;
                return Applied::Failed;
            }
        };

        if self.policy == OrderingPolicy::DropStale
            && self.last_applied.is_some_and(|last| sample.seq <= last)
        {
            debug!(
                seq = sample.seq,
                last = ?self.last_applied,
                "dropping out-of-order reading"
            );
            self.stale_dropped += 1;
            return Applied::Stale;
        }

        self.last_applied = Some(self.last_applied.map_or(sample.seq, |l| l.max(sample.seq)));
        self.current = reading.value();
        self.window.push(reading);
        Applied::Pushed
    }

    /// Category of the value currently on the gauge.
    pub fn category(&self) -> Category {
        classify(self.current)
    }

    /// Gauge fill fraction of the current value.
    pub fn fraction(&self) -> f64 {
        gauge_fraction(self.current)
    }

    pub fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: OrderingPolicy) {
        self.policy = policy;
    }

    /// Highest sequence number pushed so far.
    pub fn last_applied(&self) -> Option<u64> {
        self.last_applied
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn stale_dropped(&self) -> u64 {
        self.stale_dropped
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::window::DEFAULT_CAPACITY, OrderingPolicy::default())
    }
}
