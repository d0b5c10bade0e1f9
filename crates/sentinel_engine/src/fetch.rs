use std::time::Duration;

use crate::PollError;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, PollError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, PollError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| PollError::Fetch(err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    /// Fetches the page body as text. The status line is not consulted:
    /// whatever body the server returns is handed to the parser.
    async fn fetch(&self, url: &str) -> Result<String, PollError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| PollError::InvalidUrl(err.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(PollError::TooLarge {
                    max_bytes: self.settings.max_bytes,
                    actual: Some(content_len),
                });
            }
        }

        let text = response.text().await.map_err(map_reqwest_error)?;
        let byte_len = text.len() as u64;
        if byte_len > self.settings.max_bytes {
            return Err(PollError::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(byte_len),
            });
        }

        Ok(text)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> PollError {
    if err.is_timeout() {
        return PollError::Timeout;
    }
    PollError::Fetch(err.to_string())
}
