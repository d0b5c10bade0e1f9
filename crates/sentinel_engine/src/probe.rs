use std::time::Duration;

use reqwest::header::CACHE_CONTROL;
use sentinel_logging::sentinel_debug;

use crate::PollError;

/// Best-effort reachability check against a well-known endpoint.
///
/// The probe resolves to a plain bool and never errors: any response at
/// all, whatever its status, counts as reachable; only a transport failure
/// counts as unreachable. There is no retry.
#[derive(Debug, Clone)]
pub struct ReachabilityProbe {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl ReachabilityProbe {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, PollError> {
        let endpoint = reqwest::Url::parse(endpoint)
            .map_err(|err| PollError::InvalidUrl(err.to_string()))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PollError::Fetch(err.to_string()))?;
        Ok(Self { client, endpoint })
    }

    pub async fn check(&self) -> bool {
        let result = self
            .client
            .get(self.endpoint.clone())
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await;
        match result {
            Ok(_) => true,
            Err(err) => {
                sentinel_debug!("reachability probe failed: {}", err);
                false
            }
        }
    }
}
