use lux_core::{AppState, Applied, Sample};
use tracing::{debug, warn};

/// Fold a fetch outcome into `state` and log what happened.
///
/// Must be called from the context that owns `state`.
pub fn record(state: &mut AppState, sample: Sample) -> Applied {
    let seq   = sample.seq;
    let error = sample.result.as_ref().err().cloned();

    let applied = state.apply(sample);
    match applied {
        Applied::Pushed => debug!(seq, lux = state.current, "reading applied"),
        Applied::Stale  => debug!(seq, "stale reading dropped"),
        Applied::Failed => {
            if let Some(e) = error {
                warn!(seq, "no reading this tick: {e}");
            }
        }
    }
    applied
}
