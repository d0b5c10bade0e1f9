use std::time::Duration;

use crate::view_model::ControllerView;
use crate::PageLocation;

/// Where the controller navigates when the current page is not the
/// submissions page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSettings {
    pub destination_url: String,
    pub navigation_delay: Duration,
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            destination_url: "https://youtu.be/".to_string(),
            navigation_delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Monitoring,
    Redirecting,
    Failed(String),
}

/// Owned controller state. The submission counter lives here instead of in
/// a process-wide global, and monitor start is a one-shot transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerState {
    location: PageLocation,
    route: RouteSettings,
    phase: Phase,
    monitor_started: bool,
    last_submission_count: Option<u64>,
    last_poll_error: Option<String>,
    dirty: bool,
}

impl ControllerState {
    pub fn new(location: PageLocation, route: RouteSettings) -> Self {
        Self {
            location,
            route,
            phase: Phase::Loading,
            monitor_started: false,
            last_submission_count: None,
            last_poll_error: None,
            dirty: false,
        }
    }

    pub fn location(&self) -> &PageLocation {
        &self.location
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn monitor_started(&self) -> bool {
        self.monitor_started
    }

    pub fn last_submission_count(&self) -> Option<u64> {
        self.last_submission_count
    }

    pub fn navigation_delay(&self) -> Duration {
        self.route.navigation_delay
    }

    /// Destination for the startup router. Both flag values currently
    /// resolve to the same URL; the flag stays an input until the intended
    /// split is confirmed.
    pub fn destination_url(&self, _startup: bool) -> &str {
        &self.route.destination_url
    }

    pub fn view(&self) -> ControllerView {
        ControllerView {
            phase: self.phase.clone(),
            last_submission_count: self.last_submission_count,
            last_poll_error: self.last_poll_error.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render-worthy change happened since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn begin_monitoring(&mut self) {
        self.phase = Phase::Monitoring;
        self.monitor_started = true;
        self.dirty = true;
    }

    pub(crate) fn begin_redirect(&mut self) {
        self.phase = Phase::Redirecting;
        self.dirty = true;
    }

    pub(crate) fn fail(&mut self, message: &str) {
        self.phase = Phase::Failed(message.to_string());
        self.dirty = true;
    }

    pub(crate) fn record_submission_count(&mut self, count: u64) {
        self.last_submission_count = Some(count);
        self.last_poll_error = None;
        self.dirty = true;
    }

    pub(crate) fn note_poll_failure(&mut self, reason: String) {
        self.last_poll_error = Some(reason);
        self.dirty = true;
    }
}
