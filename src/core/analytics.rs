//! Analytics events and page-level tracking state
//!
//! Events mirror the gtag calls the site makes. Parameters never carry form
//! contents; a signup is counted, not identified.

use std::collections::BTreeSet;

use serde_json::{Value, json};

use crate::core::waitlist::Field;

/// Scroll milestones reported once per page view, in percent
pub const SCROLL_MILESTONES: [u8; 4] = [25, 50, 75, 100];

const GTAG_SCRIPT_BASE: &str = "https://www.googletagmanager.com/gtag/js";

/// Loader URL for the given measurement id
pub fn gtag_script_url(measurement_id: &str) -> String {
    format!("{GTAG_SCRIPT_BASE}?id={measurement_id}")
}

/// Parameters for the `config` command that records a page view
pub fn page_view_params(page_path: &str) -> Value {
    json!({ "page_path": page_path })
}

/// A custom event sent with `gtag('event', name, params)`
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsEvent {
    WaitlistSignup,
    FormInteraction { field: Field },
    ScrollDepth { percent: u8 },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::WaitlistSignup => "waitlist_signup",
            AnalyticsEvent::FormInteraction { .. } => "form_interaction",
            AnalyticsEvent::ScrollDepth { .. } => "scroll_depth",
        }
    }

    pub fn params(&self) -> Value {
        match self {
            AnalyticsEvent::WaitlistSignup => json!({
                "event_category": "engagement",
                "event_label": "waitlist",
                "value": 1,
            }),
            AnalyticsEvent::FormInteraction { field } => json!({
                "event_category": "engagement",
                "event_label": field.as_str(),
            }),
            AnalyticsEvent::ScrollDepth { percent } => json!({
                "event_category": "engagement",
                "event_label": format!("{percent}%"),
                "value": percent,
            }),
        }
    }
}

/// How far down the page the viewport bottom has reached, 0..=100
pub fn scroll_percent(scroll_top: f64, viewport_height: f64, document_height: f64) -> f64 {
    if document_height <= 0.0 {
        return 0.0;
    }
    let seen = (scroll_top + viewport_height) / document_height * 100.0;
    seen.clamp(0.0, 100.0)
}

/// Emits each scroll milestone at most once
#[derive(Debug, Clone, Default)]
pub struct ScrollDepthTracker {
    reached: BTreeSet<u8>,
}

impl ScrollDepthTracker {
    /// Record a scroll position and return events for newly crossed milestones
    pub fn observe(&mut self, percent: f64) -> Vec<AnalyticsEvent> {
        SCROLL_MILESTONES
            .into_iter()
            .filter(|milestone| percent >= f64::from(*milestone))
            .filter(|milestone| self.reached.insert(*milestone))
            .map(|percent| AnalyticsEvent::ScrollDepth { percent })
            .collect()
    }

    pub fn deepest(&self) -> Option<u8> {
        self.reached.last().copied()
    }
}

/// Emits one interaction event per form field
#[derive(Debug, Clone, Default)]
pub struct InteractionLog {
    seen: BTreeSet<Field>,
}

impl InteractionLog {
    pub fn record(&mut self, field: Field) -> Option<AnalyticsEvent> {
        self.seen
            .insert(field)
            .then_some(AnalyticsEvent::FormInteraction { field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_url() {
        assert_eq!(
            gtag_script_url("G-ROSELLE1"),
            "https://www.googletagmanager.com/gtag/js?id=G-ROSELLE1"
        );
    }

    #[test]
    fn test_signup_event_has_no_personal_data() {
        let event = AnalyticsEvent::WaitlistSignup;
        assert_eq!(event.name(), "waitlist_signup");
        assert_eq!(
            event.params(),
            json!({"event_category": "engagement", "event_label": "waitlist", "value": 1})
        );
    }

    #[test]
    fn test_form_interaction_label() {
        let event = AnalyticsEvent::FormInteraction {
            field: Field::PhoneNumber,
        };
        assert_eq!(event.params()["event_label"], "phoneNumber");
    }

    #[test]
    fn test_scroll_depth_params() {
        let params = AnalyticsEvent::ScrollDepth { percent: 75 }.params();
        assert_eq!(params["event_label"], "75%");
        assert_eq!(params["value"], 75);
    }

    #[test]
    fn test_scroll_percent_clamps() {
        assert_eq!(scroll_percent(0.0, 500.0, 1000.0), 50.0);
        assert_eq!(scroll_percent(900.0, 500.0, 1000.0), 100.0);
        assert_eq!(scroll_percent(0.0, 500.0, 0.0), 0.0);
    }

    #[test]
    fn test_milestones_fire_once() {
        let mut tracker = ScrollDepthTracker::default();

        let first = tracker.observe(60.0);
        assert_eq!(
            first,
            vec![
                AnalyticsEvent::ScrollDepth { percent: 25 },
                AnalyticsEvent::ScrollDepth { percent: 50 },
            ]
        );
        assert!(tracker.observe(55.0).is_empty());
        assert_eq!(tracker.observe(100.0).len(), 2);
        assert_eq!(tracker.deepest(), Some(100));
    }

    #[test]
    fn test_interaction_log_dedupes() {
        let mut log = InteractionLog::default();
        assert!(log.record(Field::Email).is_some());
        assert!(log.record(Field::Email).is_none());
        assert!(log.record(Field::Name).is_some());
    }
}
