use url::Url;

/// The page the controller was loaded for, fixed for the lifetime of one
/// controller state (a reload constructs a fresh state).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    url: Url,
    submissions_marker: String,
}

impl PageLocation {
    pub fn parse(url: &str, submissions_marker: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(url)?,
            submissions_marker: submissions_marker.to_string(),
        })
    }

    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// Substring match against the full URL, the same recognition rule the
    /// hosting environment uses.
    pub fn is_submissions_page(&self) -> bool {
        self.url.as_str().contains(&self.submissions_marker)
    }

    /// The `startup` query flag. Only the exact value `true` counts.
    pub fn startup_flag(&self) -> bool {
        self.url
            .query_pairs()
            .any(|(key, value)| key == "startup" && value == "true")
    }
}
