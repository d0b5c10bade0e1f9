use std::fs;
use std::path::Path;
use std::time::Duration;

use sentinel_core::RouteSettings;
use sentinel_engine::MonitorSettings;
use sentinel_logging::{sentinel_info, sentinel_warn};
use serde::{Deserialize, Serialize};

/// Controller configuration, read from a RON file next to the binary.
/// Every field has a default matching the original hard-coded values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The page the controller is loaded for.
    pub page_url: String,
    /// Where the startup router navigates from non-submissions pages.
    pub destination_url: String,
    /// Well-known endpoint for the reachability probe.
    pub probe_url: String,
    /// Path fragment that marks a URL as the submissions page.
    pub submissions_marker: String,
    pub poll_interval_secs: u64,
    pub navigation_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_url: "https://youtu.be/".to_string(),
            destination_url: "https://youtu.be/".to_string(),
            probe_url: "https://www.google.com".to_string(),
            submissions_marker: "submissions.php".to_string(),
            poll_interval_secs: 30,
            navigation_delay_ms: 1000,
        }
    }
}

impl AppConfig {
    pub fn route_settings(&self) -> RouteSettings {
        RouteSettings {
            destination_url: self.destination_url.clone(),
            navigation_delay: Duration::from_millis(self.navigation_delay_ms),
        }
    }

    pub fn monitor_settings(&self) -> MonitorSettings {
        let mut settings = MonitorSettings::for_page(self.page_url.clone());
        settings.probe_url = self.probe_url.clone();
        settings.poll_interval = Duration::from_secs(self.poll_interval_secs);
        settings
    }

    /// The effective page URL. A `--startup` launch is surfaced to the
    /// controller the same way the hosting environment does it: as a
    /// `startup=true` query parameter on the page URL.
    pub fn page_url_with_startup(&self, startup: bool) -> Result<String, url::ParseError> {
        let mut parsed = url::Url::parse(&self.page_url)?;
        if startup {
            parsed.query_pairs_mut().append_pair("startup", "true");
        }
        Ok(parsed.into())
    }
}

pub fn load(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            sentinel_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            sentinel_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            sentinel_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}
