//! Window-less mode: poll the sensor and log every applied reading.

use crate::session::record;
use lux_config::{default_path, load_or_default};
use lux_core::{AppState, Applied, Result, Sample};
use lux_sampler::{spawn_poller, Sampler};
use std::future::Future;
use tokio::sync::mpsc;
use tracing::info;

/// Run until Ctrl-C.
pub fn run_headless() -> Result<()> {
    let config = load_or_default(default_path());
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async move {
        let mut state = AppState::new(config.window.capacity, config.sampler.ordering);
        let rx = spawn_poller(Sampler::new(), config.sampler.interval());

        let ctrl_c = async {
            let _ = tokio::signal::ctrl_c().await;
        };
        drive(rx, &mut state, ctrl_c).await;

        info!(
            failures = state.failures(),
            stale = state.stale_dropped(),
            "session finished"
        );
    });

    Ok(())
}

/// Fold samples into `state` until `shutdown` resolves or the channel closes.
async fn drive(
    mut rx: mpsc::Receiver<Sample>,
    state: &mut AppState,
    shutdown: impl Future<Output = ()>,
) {
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            sample = rx.recv() => {
                let Some(sample) = sample else { break };
                if record(state, sample) == Applied::Pushed {
                    info!(
                        lux = state.current,
                        category = %state.category(),
                        window = state.window.len(),
                        "reading"
                    );
                }
            }
            () = &mut shutdown => {
                info!("Interrupted; shutting down");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_core::{FetchError, Reading};
    use std::time::Duration;

    fn ok(seq: u64, value: f64) -> Sample {
        Sample { seq, result: Ok(Reading::now(value)) }
    }

    #[tokio::test]
    async fn folds_samples_until_channel_closes() {
        let (tx, rx) = mpsc::channel(8);
        tx.send(ok(0, 10.0)).await.unwrap();
        tx.send(Sample { seq: 1, result: Err(FetchError::Network("refused".into())) })
            .await
            .unwrap();
        tx.send(ok(2, 600.0)).await.unwrap();
        drop(tx);

        let mut state = AppState::default();
        drive(rx, &mut state, std::future::pending()).await;

        assert_eq!(state.window.len(), 2);
        assert_eq!(state.current, 600.0);
        assert_eq!(state.failures(), 1);
    }

    #[tokio::test]
    async fn one_shutdown_signal_outlives_many_samples() {
        let (tx, rx) = mpsc::channel(8);
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();

        let feeder = tokio::spawn(async move {
            for seq in 0..5 {
                tx.send(ok(seq, seq as f64)).await.unwrap();
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
            let _ = stop_tx.send(());
            // Keep the channel open so only the shutdown signal can end the loop.
            tokio::time::sleep(Duration::from_secs(60)).await;
            drop(tx);
        });

        let mut state = AppState::default();
        let shutdown = async {
            let _ = stop_rx.await;
        };
        tokio::time::timeout(Duration::from_secs(5), drive(rx, &mut state, shutdown))
            .await
            .expect("loop ended on shutdown");
        feeder.abort();

        assert_eq!(state.window.len(), 5);
        assert_eq!(state.last_applied(), Some(4));
    }
}
