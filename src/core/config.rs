//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::performance::PerformanceMode;
use crate::core::settings::ClientSettings;

pub const GA_MEASUREMENT_ID_VAR: &str = "ROSELLE_GA_MEASUREMENT_ID";
pub const PERFORMANCE_MODE_VAR: &str = "ROSELLE_PERFORMANCE_MODE";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Google Analytics measurement id
    /// Example: G-XXXXXXXXXX
    pub ga_measurement_id: Option<String>,

    /// Forced performance tier (`low` or `high`); unset lets each browser decide
    pub performance_mode: Option<PerformanceMode>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    ///
    /// Blank values count as unset. An unrecognized performance mode is
    /// ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let performance_mode = read(PERFORMANCE_MODE_VAR).and_then(|raw| {
            raw.parse::<PerformanceMode>()
                .inspect_err(|err| tracing::warn!("Ignoring {PERFORMANCE_MODE_VAR}: {err}"))
                .ok()
        });

        Self {
            ga_measurement_id: read(GA_MEASUREMENT_ID_VAR),
            performance_mode,
        }
    }

    /// Check if analytics is configured
    pub fn has_analytics(&self) -> bool {
        self.ga_measurement_id.is_some()
    }

    /// The subset of configuration the browser is allowed to see
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            analytics_id: self.ga_measurement_id.clone(),
            performance_mode: self.performance_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    // ========================================================================
    // Lookup Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup_from(&[
            (GA_MEASUREMENT_ID_VAR, "G-ROSELLE1"),
            (PERFORMANCE_MODE_VAR, "low"),
        ]));

        assert_eq!(config.ga_measurement_id.as_deref(), Some("G-ROSELLE1"));
        assert_eq!(config.performance_mode, Some(PerformanceMode::Low));
        assert!(config.has_analytics());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config, Config::default());
        assert!(!config.has_analytics());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = Config::from_lookup(lookup_from(&[
            (GA_MEASUREMENT_ID_VAR, "   "),
            (PERFORMANCE_MODE_VAR, ""),
        ]));

        assert!(config.ga_measurement_id.is_none());
        assert!(config.performance_mode.is_none());
    }

    #[test]
    fn test_values_are_trimmed() {
        let config = Config::from_lookup(lookup_from(&[
            (GA_MEASUREMENT_ID_VAR, " G-ROSELLE1\n"),
            (PERFORMANCE_MODE_VAR, " HIGH "),
        ]));

        assert_eq!(config.ga_measurement_id.as_deref(), Some("G-ROSELLE1"));
        assert_eq!(config.performance_mode, Some(PerformanceMode::High));
    }

    #[test]
    fn test_unknown_performance_mode_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[(PERFORMANCE_MODE_VAR, "turbo")]));
        assert!(config.performance_mode.is_none());
    }

    #[test]
    fn test_client_settings_mirror_config() {
        let config = Config {
            ga_measurement_id: Some("G-ROSELLE1".to_string()),
            performance_mode: Some(PerformanceMode::High),
        };
        let settings = config.client_settings();

        assert_eq!(settings.analytics_id.as_deref(), Some("G-ROSELLE1"));
        assert_eq!(settings.performance_mode, Some(PerformanceMode::High));
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();
        let _ = config.has_analytics();
    }

    #[test]
    fn test_config_debug() {
        let config = Config {
            ga_measurement_id: Some("G-ROSELLE1".to_string()),
            performance_mode: None,
        };

        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("ga_measurement_id"));
        assert!(debug_str.contains("G-ROSELLE1"));
    }
}
