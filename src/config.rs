use once_cell::sync::Lazy;
use std::time::Duration;

pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Fixed storefront endpoints and pacing constants.
#[derive(Debug, Clone)]
pub struct Config {
    /// Scheme + host, no trailing slash. Detail links are appended to it verbatim.
    pub storefront_origin: String,
    pub search_path: String,
    pub search_category: String,
    /// One request may start per period.
    pub pacing_period: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storefront_origin: "https://play.google.com".to_string(),
            search_path: "/store/search".to_string(),
            search_category: "apps".to_string(),
            pacing_period: Duration::from_secs(1),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("storefront_rater/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    pub fn search_endpoint(&self) -> String {
        format!("{}{}", self.storefront_origin, self.search_path)
    }

    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.storefront_origin, path)
    }

    /// Like [`Config::absolute_url`] but empty when there is no path, for the report.
    pub fn detail_url(&self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        self.absolute_url(path)
    }
}
