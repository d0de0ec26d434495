#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod filter;
mod geodesy;
mod logger;
mod metrics;
mod mirror;
mod param;
mod servo;
mod telemetry;
#[cfg(test)]
mod test_util;
mod tracking;

use crate::config::ConfigWatcher;
use crate::metrics::render_metrics;
use crate::mirror::Mirror;
use crate::param::{DEFAULT_LISTEN_CAPACITY, ParamGroup, SystemClock};
use crate::servo::{PwmOutput, SysfsPwm};
use crate::telemetry::{Message, RoverParams, Telemetry};
use crate::tracking::{LogAnnouncer, Tracker};
use std::{env, path::PathBuf, sync::Arc, time::Duration};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

const GROUP_NAME: &str = "roverpoint";
const DEFAULT_CONFIG: &str = "roverpoint.ron";
const METRICS_PERIOD: Duration = Duration::from_secs(5);

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let config_path = env::var("ROVERPOINT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG.to_string());
    let chip = env::var("ROVERPOINT_PWM_CHIP").map_or(0, |v| {
        v.parse().unwrap_or_else(|_| {
            warn!("ROVERPOINT_PWM_CHIP={v} is not a chip index, using pwmchip0");
            0
        })
    });

    let group = Arc::new(ParamGroup::new(GROUP_NAME, Arc::new(SystemClock)));
    let telemetry = Telemetry::new(RoverParams::new(&group));
    let pwm: Arc<dyn PwmOutput> = Arc::new(SysfsPwm::new(chip));
    let tracker = Tracker::new(Arc::clone(&group), telemetry.clone(), &pwm, Arc::new(LogAnnouncer));

    let cancel = CancellationToken::new();
    let mut watcher = ConfigWatcher::new(&config_path, Arc::clone(&group));
    if let Err(e) = watcher.poll().await {
        error!("{config_path}: {e}");
    }
    let mut tasks = vec![tokio::spawn(watcher.run(cancel.clone()))];
    spawn_telemetry_feed(telemetry);
    if let Ok(device) = env::var("ROVERPOINT_DEVICE") {
        tasks.push(spawn_mirror(Mirror::new(&device, Arc::clone(&group)), &group, cancel.clone()));
    }
    if let Ok(path) = env::var("ROVERPOINT_METRICS") {
        tasks.push(spawn_metrics(PathBuf::from(path), Arc::clone(&group), cancel.clone()));
    }

    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, shutting down");
        }
        ctrl_c_cancel.cancel();
    });

    info!("roverpoint {} on pwmchip{chip}", env!("CARGO_PKG_VERSION"));
    tracker.run(cancel.clone()).await;
    cancel.cancel();
    for task in tasks {
        if let Err(e) = task.await {
            error!("Task failed: {e}");
        }
    }
}

/// Feeds RON encoded telemetry messages from stdin, one per line.
///
/// Runs on a plain thread: a blocked stdin read must not hold up runtime shutdown.
fn spawn_telemetry_feed(telemetry: Telemetry) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    error!("Reading telemetry failed: {e}");
                    return;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match ron::from_str::<Message>(&line) {
                Ok(message) => telemetry.handle(message),
                Err(e) => warn!("Unreadable telemetry message {line:?}: {e}"),
            }
        }
        log!("Telemetry input closed");
    });
}

/// Runs the publish side of the mirror. There is no broker connection, messages are traced.
fn spawn_mirror(mut mirror: Mirror, group: &Arc<ParamGroup>, cancel: CancellationToken) -> JoinHandle<()> {
    let mut rx = group.listen(DEFAULT_LISTEN_CAPACITY);
    let group = Arc::clone(group);
    info!("Mirroring parameters under {}", mirror.prefix());
    tokio::spawn(async move {
        loop {
            let id = tokio::select! {
                () = cancel.cancelled() => break,
                id = rx.recv() => id,
            };
            let Some(param) = id.and_then(|id| group.get(id)) else { break };
            for (topic, payload) in mirror.publish(&param) {
                event!("{topic} {payload}");
            }
        }
    })
}

/// Writes the metrics text file periodically, for a node exporter style textfile collector.
fn spawn_metrics(path: PathBuf, group: Arc<ParamGroup>, cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(METRICS_PERIOD);
        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                _ = interval.tick() => {
                    if let Err(e) = tokio::fs::write(&path, render_metrics(&group)).await {
                        warn!("Writing metrics to {} failed: {e}", path.display());
                    }
                }
            }
        }
    })
}
