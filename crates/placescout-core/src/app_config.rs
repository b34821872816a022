#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub places_api_key: String,
    pub places_base_url: String,
    pub api_timeout_secs: u64,
    pub website_timeout_secs: u64,
    pub page_delay_ms: u64,
    pub detail_delay_ms: u64,
    pub email_delay_ms: u64,
    pub user_agent: String,
    pub accept_language: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("places_api_key", &"[redacted]")
            .field("places_base_url", &self.places_base_url)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("website_timeout_secs", &self.website_timeout_secs)
            .field("page_delay_ms", &self.page_delay_ms)
            .field("detail_delay_ms", &self.detail_delay_ms)
            .field("email_delay_ms", &self.email_delay_ms)
            .field("user_agent", &self.user_agent)
            .field("accept_language", &self.accept_language)
            .finish()
    }
}
