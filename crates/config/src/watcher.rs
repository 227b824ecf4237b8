use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Watches the dashboard config file and sends a notification on every change.
///
/// The parent directory is watched rather than the file itself: editors that
/// save by writing a temp file and renaming it over the original would
/// otherwise detach the watch after the first save.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// let (_watcher, mut rx) = dial_config::ConfigWatcher::spawn("/home/user/.config/dials/dials.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed, reloading");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path`.
    /// Returns the watcher handle and a receiver that fires on every detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `true` when a filesystem event touches the config file.
fn touches(event: &notify::Event, path: &Path) -> bool {
    use notify::EventKind::*;
    matches!(event.kind, Modify(_) | Create(_))
        && event.paths.iter().any(|p| p.file_name() == path.file_name())
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    let Some(dir) = path.parent().map(Path::to_path_buf) else {
        error!("Config path '{}' has no parent directory", path.display());
        return;
    };

    let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
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
        warn!("Failed to watch '{}': {e}; live reload disabled", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) if touches(&e, &path) => {
                // A full channel already has a pending reload queued.
                if let Err(mpsc::error::TrySendError::Closed(_)) = tx.try_send(()) {
                    break; // receiver dropped
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}
