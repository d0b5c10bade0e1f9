use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the startup reachability probe.
    CheckConnectivity,
    /// Start the submission monitor loop.
    StartPolling,
    /// Arm a one-shot timer; fires back as `Msg::NavigateDue`.
    ScheduleNavigation { delay: Duration },
    /// Navigate the hosting page to `url`.
    Navigate { url: String },
    /// Surface a terminal error to the user.
    PresentError { message: String },
    /// Post one notification through the host bridge.
    PostNotification { title: String, message: String },
}
