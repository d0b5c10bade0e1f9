#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Initial page entry (content-ready event).
    PageReady,
    /// Late page entry (window-load event); may duplicate `PageReady`.
    WindowLoaded,
    /// Result of the startup reachability probe.
    ConnectivityChecked { reachable: bool },
    /// The shell's entry sequence itself failed.
    EntryFaulted,
    /// The scheduled navigation delay elapsed.
    NavigateDue,
    /// A poll cycle observed a submission count.
    PollCompleted { count: u64 },
    /// A poll cycle failed to fetch or parse the page.
    PollFailed { reason: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
