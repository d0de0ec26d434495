use super::{config_error::ConfigError, overrides::Overrides};
use crate::{error, info, param::ParamGroup};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
    time::{Duration, SystemTime},
};
use tokio_util::sync::CancellationToken;

/// How often the file's modification time is checked.
pub const POLL_PERIOD: Duration = Duration::from_secs(1);

/// Applies an override file to a group on start and after every modification.
pub struct ConfigWatcher {
    path: PathBuf,
    group: Arc<ParamGroup>,
    modified: Option<SystemTime>,
}

impl ConfigWatcher {
    pub fn new(path: impl Into<PathBuf>, group: Arc<ParamGroup>) -> Self {
        Self { path: path.into(), group, modified: None }
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Re-applies the file if it changed since the last call. Returns whether it was applied.
    ///
    /// A missing file is not an error; it is picked up once it appears.
    ///
    /// # Errors
    /// [`ConfigError`] if the file exists but cannot be read or parsed. The failed version is
    /// not retried until the file changes again.
    pub async fn poll(&mut self) -> Result<bool, ConfigError> {
        let modified = match tokio::fs::metadata(&self.path).await {
            Ok(meta) => meta.modified()?,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e.into()),
        };
        if self.modified == Some(modified) {
            return Ok(false);
        }
        self.modified = Some(modified);

        let text = tokio::fs::read_to_string(&self.path).await?;
        let overrides = Overrides::parse(&text)?;
        let applied = overrides.apply(&self.group);
        info!("Applied {applied} of {} overrides from {}", overrides.len(), self.path.display());
        Ok(true)
    }

    /// Polls every [`POLL_PERIOD`] until `cancel` fires.
    pub async fn run(mut self, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(POLL_PERIOD);
        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                _ = interval.tick() => {
                    if let Err(e) = self.poll().await {
                        error!("{}: {e}", self.path.display());
                    }
                }
            }
        }
    }
}
