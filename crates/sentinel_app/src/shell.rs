use std::sync::mpsc;

use anyhow::Context;
use sentinel_core::{update, ControllerState, Effect, Msg, PageLocation, Phase};
use sentinel_logging::{sentinel_error, sentinel_info};

use crate::config::AppConfig;
use crate::desktop::{self, DesktopBridge};
use crate::effects::EffectRunner;

/// Headless controller loop: one channel of messages, one owner of the
/// state, effects executed by the runner. Returns after a navigation or a
/// terminal connectivity failure; monitoring runs until the process ends.
pub fn run(config: AppConfig, startup: bool) -> anyhow::Result<()> {
    let page_url = config
        .page_url_with_startup(startup)
        .context("invalid page_url in config")?;
    let location = PageLocation::parse(&page_url, &config.submissions_marker)
        .context("invalid page_url in config")?;
    let mut state = ControllerState::new(location, config.route_settings());

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut runner = EffectRunner::new(config, msg_tx.clone(), Box::new(DesktopBridge));

    sentinel_info!("Page controller started for {}", page_url);

    // Both host entry events fire on load; the controller's one-shot start
    // guard absorbs the duplicate.
    let _ = msg_tx.send(Msg::PageReady);
    let _ = msg_tx.send(Msg::WindowLoaded);

    loop {
        let msg = msg_rx.recv().context("message channel closed")?;
        let (next, effects) = update(state, msg);
        state = next;

        if state.consume_dirty() {
            log_status(&state);
        }

        for effect in effects {
            match effect {
                Effect::Navigate { url } => {
                    sentinel_info!("Navigating to {}", url);
                    return Ok(());
                }
                Effect::PresentError { message } => {
                    sentinel_error!("{}", message);
                    desktop::show("Connection Error", &message);
                    anyhow::bail!("{message}");
                }
                other => runner.run(other),
            }
        }
    }
}

fn log_status(state: &ControllerState) {
    let view = state.view();
    match &view.phase {
        Phase::Loading => {}
        Phase::Monitoring => {
            if let Some(reason) = &view.last_poll_error {
                sentinel_info!("Monitoring; last cycle failed: {}", reason);
            } else {
                sentinel_info!(
                    "Monitoring; submissions observed: {:?}",
                    view.last_submission_count
                );
            }
        }
        Phase::Redirecting => sentinel_info!("Not the submissions page; navigation scheduled"),
        Phase::Failed(message) => sentinel_error!("Controller failed: {}", message),
    }
}
