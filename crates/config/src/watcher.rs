use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Editors often emit several events per save; collapse bursts inside this window.
const SETTLE: Duration = Duration::from_millis(250);

/// Spawn a background task that watches `path` and signals once per burst of
/// writes through the returned channel.
///
/// The parent directory is watched rather than the file itself so the watch
/// survives editors that save by rename, and a config created after startup
/// is still picked up.  The task ends at the first change after the receiver
/// is dropped.
pub fn spawn_watcher(path: impl AsRef<Path>) -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(watch_loop(path.as_ref().to_path_buf(), tx));
    rx
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

    let Some(dir) = path.parent().map(Path::to_path_buf) else {
        error!("Config path '{}' has no parent directory", path.display());
        return;
    };

    let (event_tx, mut event_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = event_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        warn!("Not watching '{}' for config changes: {e}", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = event_rx.recv().await {
        let event = match event {
            Ok(e) => e,
            Err(e) => {
                warn!("Watcher error: {e}");
                continue;
            }
        };

        let touches_config = event.paths.iter().any(|p| p == &path);
        if !touches_config || !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
            continue;
        }

        tokio::time::sleep(SETTLE).await;
        while event_rx.try_recv().is_ok() {}

        debug!("Config file changed");
        if tx.send(()).await.is_err() {
            break; // receiver dropped
        }
    }
}
