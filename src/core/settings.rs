//! Settings handed from the server to the browser
//!
//! The server renders them as a JSON script block inside the HTML shell; the
//! client reads that block once on mount.

use serde::{Deserialize, Serialize};

use crate::core::performance::PerformanceMode;

/// DOM id of the embedded settings block
pub const SETTINGS_ELEMENT_ID: &str = "roselle-settings";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSettings {
    /// gtag measurement id; analytics stay off when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
    /// Forces a performance tier instead of probing the device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_mode: Option<PerformanceMode>,
}

impl ClientSettings {
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// JSON safe to place inside a `<script>` element
    pub fn to_script_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_string())
            .replace("</", "<\\/")
    }

    pub fn analytics_enabled(&self) -> bool {
        self.analytics_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_serialize_to_empty_object() {
        assert_eq!(ClientSettings::default().to_script_json(), "{}");
    }

    #[test]
    fn test_settings_keys() {
        let settings = ClientSettings {
            analytics_id: Some("G-ROSELLE1".to_string()),
            performance_mode: Some(PerformanceMode::Low),
        };
        assert_eq!(
            settings.to_script_json(),
            r#"{"analyticsId":"G-ROSELLE1","performanceMode":"low"}"#
        );
        assert_eq!(
            ClientSettings::from_json(&settings.to_script_json()),
            Some(settings)
        );
    }

    #[test]
    fn test_script_json_cannot_close_the_element() {
        let settings = ClientSettings {
            analytics_id: Some("</script><script>".to_string()),
            performance_mode: None,
        };
        assert!(!settings.to_script_json().contains("</script>"));
    }

    #[test]
    fn test_blank_analytics_id_is_disabled() {
        let settings = ClientSettings {
            analytics_id: Some(String::new()),
            performance_mode: None,
        };
        assert!(!settings.analytics_enabled());
        assert!(!ClientSettings::default().analytics_enabled());
    }
}
