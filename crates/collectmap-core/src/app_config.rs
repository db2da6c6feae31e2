/// Runtime configuration for the dashboard, read once at startup.
#[derive(Clone)]
pub struct AppConfig {
    /// Base URL of the remote collection service, without a trailing slash.
    pub collector_base_url: String,
    /// Secret for the external mapping capability. Required; never logged.
    pub maps_api_key: String,
    /// Region passed to the transactions endpoint (`state` query parameter).
    pub region: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Optional weight bounds forwarded to the transactions endpoint.
    pub min_weight: Option<f64>,
    pub max_weight: Option<f64>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("collector_base_url", &self.collector_base_url)
            .field("maps_api_key", &"[redacted]")
            .field("region", &self.region)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("min_weight", &self.min_weight)
            .field("max_weight", &self.max_weight)
            .finish()
    }
}
