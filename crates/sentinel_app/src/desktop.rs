use notify_rust::Notification;
use sentinel_engine::{HostBridge, NotificationPayload};
use sentinel_logging::sentinel_warn;

/// Host bridge backed by the desktop notification service. Decodes the
/// wire payload the way the hosting environment's IPC handler does.
pub struct DesktopBridge;

impl HostBridge for DesktopBridge {
    fn post_message(&self, payload: &str) {
        let decoded = match NotificationPayload::from_json(payload) {
            Ok(decoded) => decoded,
            Err(err) => {
                sentinel_warn!("Malformed bridge payload: {}", err);
                return;
            }
        };
        show(&decoded.notification.title, &decoded.notification.message);
    }
}

/// Raises one desktop notification; failures are logged, never fatal.
pub fn show(title: &str, message: &str) {
    if let Err(err) = Notification::new().summary(title).body(message).show() {
        sentinel_warn!("Desktop notification failed: {}", err);
    }
}
