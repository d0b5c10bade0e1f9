use crate::{ControllerState, Effect, Msg, Phase};

pub const NOTIFICATION_TITLE: &str = "New Submission";
pub const NO_CONNECTION_MESSAGE: &str = "No Internet Connection";
pub const ENTRY_FAULT_MESSAGE: &str = "Connection Check Failed";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ControllerState, msg: Msg) -> (ControllerState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageReady => {
            if *state.phase() != Phase::Loading {
                return (state, Vec::new());
            }
            vec![Effect::CheckConnectivity]
        }
        Msg::ConnectivityChecked { reachable } => {
            if *state.phase() != Phase::Loading {
                return (state, Vec::new());
            }
            if !reachable {
                state.fail(NO_CONNECTION_MESSAGE);
                vec![Effect::PresentError {
                    message: NO_CONNECTION_MESSAGE.to_string(),
                }]
            } else if state.location().is_submissions_page() {
                start_monitor(&mut state)
            } else {
                state.begin_redirect();
                vec![Effect::ScheduleNavigation {
                    delay: state.navigation_delay(),
                }]
            }
        }
        Msg::WindowLoaded => {
            // Second entry event. It may only re-attempt a monitor start
            // after the probe has confirmed connectivity; while still
            // `Loading` the first start belongs to `ConnectivityChecked`.
            if !matches!(state.phase(), Phase::Monitoring | Phase::Redirecting) {
                return (state, Vec::new());
            }
            if state.location().is_submissions_page() {
                start_monitor(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::EntryFaulted => {
            state.fail(ENTRY_FAULT_MESSAGE);
            vec![Effect::PresentError {
                message: ENTRY_FAULT_MESSAGE.to_string(),
            }]
        }
        Msg::NavigateDue => {
            if *state.phase() != Phase::Redirecting {
                return (state, Vec::new());
            }
            let startup = state.location().startup_flag();
            vec![Effect::Navigate {
                url: state.destination_url(startup).to_string(),
            }]
        }
        Msg::PollCompleted { count } => {
            let effects = match state.last_submission_count() {
                // Strict growth over a known baseline is the only case
                // that notifies.
                Some(previous) if count > previous => {
                    let delta = count - previous;
                    vec![Effect::PostNotification {
                        title: NOTIFICATION_TITLE.to_string(),
                        message: format!("{delta} new submission(s) received!"),
                    }]
                }
                _ => Vec::new(),
            };
            state.record_submission_count(count);
            effects
        }
        Msg::PollFailed { reason } => {
            state.note_poll_failure(reason);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_monitor(state: &mut ControllerState) -> Vec<Effect> {
    if state.monitor_started() {
        return Vec::new();
    }
    state.begin_monitoring();
    vec![Effect::StartPolling]
}
