use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use sentinel_logging::{sentinel_error, sentinel_info, sentinel_warn};

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::probe::ReachabilityProbe;
use crate::submissions::count_submissions;
use crate::{MonitorEvent, PollError};

#[derive(Debug, Clone)]
pub struct MonitorSettings {
    /// The page whose submissions table is watched; the monitor fetches
    /// this page's own URL each cycle.
    pub page_url: String,
    pub probe_url: String,
    pub poll_interval: Duration,
    pub fetch: FetchSettings,
}

impl MonitorSettings {
    pub fn for_page(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            probe_url: "https://www.google.com".to_string(),
            poll_interval: Duration::from_secs(30),
            fetch: FetchSettings::default(),
        }
    }
}

enum MonitorCommand {
    Stop,
}

/// Handle to the polling loop: one check immediately, then one per
/// interval, until `stop()` is called or every handle is dropped.
#[derive(Clone)]
pub struct MonitorHandle {
    cmd_tx: tokio::sync::mpsc::UnboundedSender<MonitorCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<MonitorEvent>>>,
}

impl MonitorHandle {
    pub fn start(settings: MonitorSettings) -> Self {
        let (cmd_tx, cmd_rx) = tokio::sync::mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || run_monitor_thread(settings, cmd_rx, event_tx));

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    /// Requests loop shutdown; takes effect before the next check.
    pub fn stop(&self) {
        let _ = self.cmd_tx.send(MonitorCommand::Stop);
    }

    pub fn try_recv(&self) -> Option<MonitorEvent> {
        let rx = self.event_rx.lock().ok()?;
        rx.try_recv().ok()
    }
}

fn run_monitor_thread(
    settings: MonitorSettings,
    mut cmd_rx: tokio::sync::mpsc::UnboundedReceiver<MonitorCommand>,
    event_tx: mpsc::Sender<MonitorEvent>,
) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            sentinel_error!("monitor runtime failed to start: {}", err);
            return;
        }
    };

    runtime.block_on(async move {
        let probe =
            match ReachabilityProbe::new(&settings.probe_url, settings.fetch.request_timeout) {
                Ok(probe) => probe,
                Err(err) => {
                    sentinel_error!("monitor probe setup failed: {}", err);
                    return;
                }
            };
        let fetcher = match ReqwestFetcher::new(settings.fetch.clone()) {
            Ok(fetcher) => fetcher,
            Err(err) => {
                sentinel_error!("monitor fetcher setup failed: {}", err);
                return;
            }
        };

        sentinel_info!(
            "submission monitoring started for {} (interval {:?})",
            settings.page_url,
            settings.poll_interval
        );

        // The first tick completes immediately, so the first check runs
        // right at start.
        let mut interval = tokio::time::interval(settings.poll_interval);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Some(event) = run_cycle(&probe, &fetcher, &settings.page_url).await {
                        if event_tx.send(event).is_err() {
                            break;
                        }
                    }
                }
                command = cmd_rx.recv() => {
                    match command {
                        Some(MonitorCommand::Stop) | None => {
                            sentinel_info!("submission monitoring stopped");
                            break;
                        }
                    }
                }
            }
        }
    });
}

async fn run_cycle(
    probe: &ReachabilityProbe,
    fetcher: &dyn Fetcher,
    page_url: &str,
) -> Option<MonitorEvent> {
    if !probe.check().await {
        sentinel_warn!("no internet connection during submission check; skipping cycle");
        return None;
    }

    match poll_submissions(fetcher, page_url).await {
        Ok(count) => Some(MonitorEvent::ObservedCount { count }),
        Err(err) => {
            sentinel_warn!("submission check failed: {}", err);
            Some(MonitorEvent::CycleFailed {
                reason: err.to_string(),
            })
        }
    }
}

/// One poll: fetch the page's own URL and count its submissions table.
pub async fn poll_submissions(fetcher: &dyn Fetcher, url: &str) -> Result<u64, PollError> {
    let html = fetcher.fetch(url).await?;
    count_submissions(&html)
}
