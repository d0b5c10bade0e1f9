use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use sentinel_core::{Effect, Msg};
use sentinel_engine::{
    FetchSettings, HostBridge, MonitorEvent, MonitorHandle, NotificationPayload, ReachabilityProbe,
};
use sentinel_logging::{sentinel_error, sentinel_info};

use crate::config::AppConfig;

/// Executes controller effects against the engine: the startup probe, the
/// navigation timer, the monitor loop, and the host bridge.
pub struct EffectRunner {
    config: AppConfig,
    msg_tx: mpsc::Sender<Msg>,
    bridge: Box<dyn HostBridge>,
    monitor: Option<MonitorHandle>,
}

impl EffectRunner {
    pub fn new(config: AppConfig, msg_tx: mpsc::Sender<Msg>, bridge: Box<dyn HostBridge>) -> Self {
        Self {
            config,
            msg_tx,
            bridge,
            monitor: None,
        }
    }

    pub fn run(&mut self, effect: Effect) {
        match effect {
            Effect::CheckConnectivity => self.spawn_probe(),
            Effect::StartPolling => self.start_monitor(),
            Effect::ScheduleNavigation { delay } => self.schedule_navigation(delay),
            Effect::PostNotification { title, message } => {
                let payload = NotificationPayload::new(title, message);
                match payload.to_json() {
                    Ok(json) => self.bridge.post_message(&json),
                    Err(err) => sentinel_error!("Failed to encode bridge payload: {}", err),
                }
            }
            // UI-facing effects are handled by the shell before they reach
            // the runner.
            Effect::Navigate { .. } | Effect::PresentError { .. } => {}
        }
    }

    fn spawn_probe(&self) {
        let probe_url = self.config.probe_url.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || {
            let msg = match probe_blocking(&probe_url) {
                Some(reachable) => Msg::ConnectivityChecked { reachable },
                None => Msg::EntryFaulted,
            };
            let _ = msg_tx.send(msg);
        });
    }

    fn schedule_navigation(&self, delay: Duration) {
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            let _ = msg_tx.send(Msg::NavigateDue);
        });
    }

    fn start_monitor(&mut self) {
        if self.monitor.is_some() {
            return;
        }
        let handle = MonitorHandle::start(self.config.monitor_settings());
        self.spawn_event_loop(handle.clone());
        self.monitor = Some(handle);
    }

    fn spawn_event_loop(&self, monitor: MonitorHandle) {
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            if let Some(event) = monitor.try_recv() {
                let msg = match event {
                    MonitorEvent::ObservedCount { count } => Msg::PollCompleted { count },
                    MonitorEvent::CycleFailed { reason } => Msg::PollFailed { reason },
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

impl Drop for EffectRunner {
    fn drop(&mut self) {
        if let Some(monitor) = &self.monitor {
            sentinel_info!("Stopping submission monitor");
            monitor.stop();
        }
    }
}

/// One-shot probe for callers without a runtime. `None` means the probe
/// could not be run at all, as opposed to the network being unreachable.
fn probe_blocking(probe_url: &str) -> Option<bool> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .ok()?;
    let probe =
        ReachabilityProbe::new(probe_url, FetchSettings::default().request_timeout).ok()?;
    Some(runtime.block_on(probe.check()))
}
