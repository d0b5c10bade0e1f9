use std::sync::Once;
use std::time::Duration;

use sentinel_core::{
    update, ControllerState, Effect, Msg, PageLocation, Phase, RouteSettings, NO_CONNECTION_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(sentinel_logging::initialize_for_tests);
}

fn submissions_state() -> ControllerState {
    let location =
        PageLocation::parse("https://host.example/forms/submissions.php", "submissions.php")
            .expect("valid url");
    ControllerState::new(location, RouteSettings::default())
}

fn landing_state(url: &str) -> ControllerState {
    let location = PageLocation::parse(url, "submissions.php").expect("valid url");
    ControllerState::new(location, RouteSettings::default())
}

fn enter_monitoring(state: ControllerState) -> ControllerState {
    let (state, _) = update(state, Msg::PageReady);
    let (state, effects) = update(state, Msg::ConnectivityChecked { reachable: true });
    assert_eq!(effects, vec![Effect::StartPolling]);
    state
}

#[test]
fn page_ready_checks_connectivity() {
    init_logging();
    let state = submissions_state();

    let (state, effects) = update(state, Msg::PageReady);

    assert_eq!(effects, vec![Effect::CheckConnectivity]);
    assert_eq!(*state.phase(), Phase::Loading);
}

#[test]
fn probe_failure_presents_error_and_stops_everything() {
    init_logging();
    let state = landing_state("https://host.example/index.html");
    let (state, _) = update(state, Msg::PageReady);

    let (mut state, effects) = update(state, Msg::ConnectivityChecked { reachable: false });

    assert_eq!(
        effects,
        vec![Effect::PresentError {
            message: NO_CONNECTION_MESSAGE.to_string(),
        }]
    );
    assert_eq!(*state.phase(), Phase::Failed(NO_CONNECTION_MESSAGE.to_string()));
    assert!(state.consume_dirty());

    // Nothing else may start after a terminal connectivity failure.
    let (state, effects) = update(state, Msg::WindowLoaded);
    assert!(effects.is_empty());
    let (_state, effects) = update(state, Msg::NavigateDue);
    assert!(effects.is_empty());
}

#[test]
fn landing_page_schedules_navigation_then_navigates() {
    init_logging();
    let state = landing_state("https://host.example/index.html");
    let (state, _) = update(state, Msg::PageReady);

    let (state, effects) = update(state, Msg::ConnectivityChecked { reachable: true });
    assert_eq!(
        effects,
        vec![Effect::ScheduleNavigation {
            delay: Duration::from_secs(1),
        }]
    );
    assert_eq!(*state.phase(), Phase::Redirecting);

    let (_state, effects) = update(state, Msg::NavigateDue);
    assert_eq!(
        effects,
        vec![Effect::Navigate {
            url: "https://youtu.be/".to_string(),
        }]
    );
}

#[test]
fn startup_flag_does_not_change_destination() {
    init_logging();
    for url in [
        "https://host.example/index.html?startup=true",
        "https://host.example/index.html?startup=false",
        "https://host.example/index.html",
    ] {
        let state = landing_state(url);
        let (state, _) = update(state, Msg::PageReady);
        let (state, _) = update(state, Msg::ConnectivityChecked { reachable: true });
        let (_state, effects) = update(state, Msg::NavigateDue);
        assert_eq!(
            effects,
            vec![Effect::Navigate {
                url: "https://youtu.be/".to_string(),
            }],
            "destination must not depend on the startup flag ({url})"
        );
    }
}

#[test]
fn submissions_page_starts_polling_exactly_once() {
    init_logging();
    let state = submissions_state();
    let (state, _) = update(state, Msg::PageReady);

    let (state, effects) = update(state, Msg::ConnectivityChecked { reachable: true });
    assert_eq!(effects, vec![Effect::StartPolling]);
    assert_eq!(*state.phase(), Phase::Monitoring);
    assert!(state.monitor_started());

    // The window-load entry fires too; the start guard absorbs it.
    let (state, effects) = update(state, Msg::WindowLoaded);
    assert!(effects.is_empty());
    assert_eq!(*state.phase(), Phase::Monitoring);
}

#[test]
fn offline_submissions_page_never_starts_polling() {
    init_logging();
    let state = submissions_state();

    // Both entry events fire before the async probe resolves.
    let (state, effects) = update(state, Msg::PageReady);
    assert_eq!(effects, vec![Effect::CheckConnectivity]);
    let (state, effects) = update(state, Msg::WindowLoaded);
    assert!(
        effects.is_empty(),
        "polling must not start before connectivity is confirmed: {effects:?}"
    );
    assert_eq!(*state.phase(), Phase::Loading);

    let (state, effects) = update(state, Msg::ConnectivityChecked { reachable: false });
    assert_eq!(
        effects,
        vec![Effect::PresentError {
            message: NO_CONNECTION_MESSAGE.to_string(),
        }]
    );
    assert_eq!(*state.phase(), Phase::Failed(NO_CONNECTION_MESSAGE.to_string()));
    assert!(!state.monitor_started());
}

#[test]
fn window_loaded_before_probe_result_starts_polling_once() {
    init_logging();
    let state = submissions_state();
    let (state, _) = update(state, Msg::PageReady);
    let (state, early) = update(state, Msg::WindowLoaded);
    assert!(early.is_empty());

    let (state, effects) = update(state, Msg::ConnectivityChecked { reachable: true });
    assert_eq!(effects, vec![Effect::StartPolling]);

    let (_state, late) = update(state, Msg::WindowLoaded);
    assert!(late.is_empty());
}

#[test]
fn first_poll_records_baseline_without_notifying() {
    init_logging();
    let state = enter_monitoring(submissions_state());

    let (state, effects) = update(state, Msg::PollCompleted { count: 5 });

    assert!(effects.is_empty());
    assert_eq!(state.last_submission_count(), Some(5));
}

#[test]
fn growth_notifies_once_with_delta_message() {
    init_logging();
    let state = enter_monitoring(submissions_state());
    let (state, _) = update(state, Msg::PollCompleted { count: 5 });

    let (state, effects) = update(state, Msg::PollCompleted { count: 8 });

    assert_eq!(
        effects,
        vec![Effect::PostNotification {
            title: "New Submission".to_string(),
            message: "3 new submission(s) received!".to_string(),
        }]
    );
    assert_eq!(state.last_submission_count(), Some(8));
}

#[test]
fn equal_or_shrinking_count_updates_silently() {
    init_logging();
    let state = enter_monitoring(submissions_state());
    let (state, _) = update(state, Msg::PollCompleted { count: 8 });

    let (state, effects) = update(state, Msg::PollCompleted { count: 8 });
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::PollCompleted { count: 2 });
    assert!(effects.is_empty());
    assert_eq!(state.last_submission_count(), Some(2));
}

#[test]
fn poll_failure_preserves_count_and_notifies_nothing() {
    init_logging();
    let state = enter_monitoring(submissions_state());
    let (state, _) = update(state, Msg::PollCompleted { count: 5 });

    let (state, effects) = update(
        state,
        Msg::PollFailed {
            reason: "no table in document".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.last_submission_count(), Some(5));
    assert_eq!(
        state.view().last_poll_error.as_deref(),
        Some("no table in document")
    );
}

#[test]
fn double_start_yields_one_notification_per_increase() {
    init_logging();
    let state = submissions_state();
    let (state, _) = update(state, Msg::PageReady);
    let (state, first) = update(state, Msg::ConnectivityChecked { reachable: true });
    let (state, second) = update(state, Msg::WindowLoaded);
    assert_eq!(first.len() + second.len(), 1);

    let (state, _) = update(state, Msg::PollCompleted { count: 5 });
    let (_state, effects) = update(state, Msg::PollCompleted { count: 8 });

    let notifications = effects
        .iter()
        .filter(|effect| matches!(effect, Effect::PostNotification { .. }))
        .count();
    assert_eq!(notifications, 1);
}

#[test]
fn entry_fault_presents_generic_message() {
    init_logging();
    let state = landing_state("https://host.example/index.html");
    let (state, _) = update(state, Msg::PageReady);

    let (state, effects) = update(state, Msg::EntryFaulted);

    assert_eq!(
        effects,
        vec![Effect::PresentError {
            message: "Connection Check Failed".to_string(),
        }]
    );
    assert_eq!(
        state.view().error_message(),
        Some("Connection Check Failed")
    );
}
