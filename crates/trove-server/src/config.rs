use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub data_path: PathBuf,
    pub max_body_bytes: usize,
    pub stats_watch_interval: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/items.json"),
            max_body_bytes: 16 * 1024,
            stats_watch_interval: Duration::from_secs(2),
        }
    }
}

pub fn validate_startup_config(api: &ApiConfig) -> Result<(), String> {
    if api.max_body_bytes == 0 {
        return Err("max_body_bytes must be > 0".to_string());
    }
    if api.stats_watch_interval.is_zero() {
        return Err("stats_watch_interval must be > 0".to_string());
    }
    if api.data_path.as_os_str().is_empty() {
        return Err("data_path must not be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_validation() {
        validate_startup_config(&ApiConfig::default()).expect("default config valid");
    }

    #[test]
    fn zero_body_limit_is_rejected() {
        let cfg = ApiConfig {
            max_body_bytes: 0,
            ..ApiConfig::default()
        };
        let err = validate_startup_config(&cfg).expect_err("zero body limit");
        assert!(err.contains("max_body_bytes"));
    }

    #[test]
    fn zero_watch_interval_is_rejected() {
        let cfg = ApiConfig {
            stats_watch_interval: Duration::ZERO,
            ..ApiConfig::default()
        };
        let err = validate_startup_config(&cfg).expect_err("zero interval");
        assert!(err.contains("stats_watch_interval"));
    }
}
