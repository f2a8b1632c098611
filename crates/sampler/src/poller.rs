use crate::Sampler;
use lux_core::Sample;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::info;

/// Spawn a background Tokio task that issues a fetch every `interval` and
/// forwards each outcome through the returned channel.
///
/// Every tick spawns an independent fetch: a slow request never delays the
/// next one, and completions may arrive out of issuance order.  The task stops
/// once the receiver is dropped.
pub fn spawn_poller(sampler: Sampler, interval: Duration) -> mpsc::Receiver<Sample> {
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        info!("Polling {} every {} ms", sampler.url(), interval.as_millis());

        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if tx.is_closed() {
                break; // all receivers dropped
            }

            let fetch = sampler.sample();
            let tx = tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(fetch.await).await;
            });
        }
    });

    rx
}
