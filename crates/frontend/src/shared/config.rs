use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Gateway origin without a trailing slash
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Auto-dismiss delay of notifications
    pub notification_ms: u32,
    pub report_page_size: usize,
    pub stock_page_size: usize,
    pub lookup_page_size: usize,
    pub dashboard_page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// First day counted by the summary widgets
    pub stats_from: NaiveDate,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://robo-rec.com".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_ms: 3000,
            report_page_size: 10,
            stock_page_size: 10,
            lookup_page_size: 5,
            dashboard_page_size: 5,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            stats_from: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap_or_default(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://robo-rec.com"

[ui]
notification_ms = 3000
report_page_size = 10
stock_page_size = 10
lookup_page_size = 5
dashboard_page_size = 5

[dashboard]
stats_from = "2025-07-01"
"#;

/// Parse a configuration document; `api_base` replaces `api.base_url` when set
pub fn load_config(source: &str, api_base: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(source)?;
    if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
        config.api.base_url = base.to_string();
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    Ok(config)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    match load_config(DEFAULT_CONFIG, option_env!("STOCKROOM_API_BASE")) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid embedded configuration, using defaults: {}", e);
            AppConfig::default()
        }
    }
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(DEFAULT_CONFIG, None);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.ui.report_page_size, 10);
        assert_eq!(config.ui.lookup_page_size, 5);
    }

    #[test]
    fn test_api_base_override() {
        let config = load_config(DEFAULT_CONFIG, Some("http://localhost:8000/")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");

        let config = load_config(DEFAULT_CONFIG, Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "https://robo-rec.com");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = load_config("[ui]\nnotification_ms = 5000\n", None).unwrap();
        assert_eq!(config.ui.notification_ms, 5000);
        assert_eq!(config.ui.stock_page_size, 10);
        assert_eq!(
            config.dashboard.stats_from,
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
        );
    }
}
