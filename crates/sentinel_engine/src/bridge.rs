use serde::{Deserialize, Serialize};

/// Wire shape expected by the hosting environment:
/// `{"notification":{"title":...,"message":...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub notification: NotificationBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationBody {
    pub title: String,
    pub message: String,
}

impl NotificationPayload {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification: NotificationBody {
                title: title.into(),
                message: message.into(),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}

/// Outbound message channel supplied by the hosting environment.
pub trait HostBridge: Send + Sync {
    fn post_message(&self, payload: &str);
}

/// Bridge that forwards payloads over an mpsc channel. Used by the shell's
/// event loop and by tests.
pub struct ChannelBridge {
    tx: std::sync::mpsc::Sender<String>,
}

impl ChannelBridge {
    pub fn new(tx: std::sync::mpsc::Sender<String>) -> Self {
        Self { tx }
    }
}

impl HostBridge for ChannelBridge {
    fn post_message(&self, payload: &str) {
        let _ = self.tx.send(payload.to_string());
    }
}
