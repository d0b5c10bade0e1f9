//! Sentinel engine: reachability probe, submission polling, host bridge.
mod bridge;
mod fetch;
mod monitor;
mod probe;
mod submissions;
mod types;

pub use bridge::{ChannelBridge, HostBridge, NotificationBody, NotificationPayload};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use monitor::{poll_submissions, MonitorHandle, MonitorSettings};
pub use probe::ReachabilityProbe;
pub use submissions::count_submissions;
pub use types::{MonitorEvent, PollError};
