use std::env;

/// Base URL used when `POKETEAM_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url =
            env::var("POKETEAM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn teams_url(&self) -> String {
        format!("{}/teams", self.base_url)
    }

    pub fn team_url(&self, team_id: &str) -> String {
        format!("{}/teams/{}", self.base_url, team_id)
    }
}
