//! Accessibility preferences
//!
//! Four independent switches persisted as one JSON record. Every change is
//! applied to the page immediately and the whole record is rewritten, so the
//! stored copy always matches what the visitor sees.

use serde::{Deserialize, Serialize};

/// Local storage key holding the serialized preferences
pub const STORAGE_KEY: &str = "roselle-accessibility";

/// One accessibility switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessibilityFlag {
    HighContrast,
    LargeText,
    ReducedMotion,
    ScreenReader,
}

impl AccessibilityFlag {
    pub const ALL: [AccessibilityFlag; 4] = [
        AccessibilityFlag::HighContrast,
        AccessibilityFlag::LargeText,
        AccessibilityFlag::ReducedMotion,
        AccessibilityFlag::ScreenReader,
    ];

    /// Class toggled on the document element
    pub fn css_class(&self) -> &'static str {
        match self {
            AccessibilityFlag::HighContrast => "high-contrast",
            AccessibilityFlag::LargeText => "large-text",
            AccessibilityFlag::ReducedMotion => "reduce-motion",
            AccessibilityFlag::ScreenReader => "screen-reader",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AccessibilityFlag::HighContrast => "High Contrast",
            AccessibilityFlag::LargeText => "Large Text",
            AccessibilityFlag::ReducedMotion => "Reduced Motion",
            AccessibilityFlag::ScreenReader => "Screen Reader Mode",
        }
    }
}

/// Persisted accessibility record
///
/// Keys are camelCase to stay compatible with records written by earlier
/// versions of the site. Missing keys read as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilityPreferences {
    pub high_contrast: bool,
    pub large_text: bool,
    pub reduced_motion: bool,
    pub screen_reader: bool,
}

impl AccessibilityPreferences {
    pub fn get(&self, flag: AccessibilityFlag) -> bool {
        match flag {
            AccessibilityFlag::HighContrast => self.high_contrast,
            AccessibilityFlag::LargeText => self.large_text,
            AccessibilityFlag::ReducedMotion => self.reduced_motion,
            AccessibilityFlag::ScreenReader => self.screen_reader,
        }
    }

    pub fn set(&mut self, flag: AccessibilityFlag, enabled: bool) {
        match flag {
            AccessibilityFlag::HighContrast => self.high_contrast = enabled,
            AccessibilityFlag::LargeText => self.large_text = enabled,
            AccessibilityFlag::ReducedMotion => self.reduced_motion = enabled,
            AccessibilityFlag::ScreenReader => self.screen_reader = enabled,
        }
    }

    /// Flip `flag`, returning its new value
    pub fn toggle(&mut self, flag: AccessibilityFlag) -> bool {
        let enabled = !self.get(flag);
        self.set(flag, enabled);
        enabled
    }

    /// Parse a stored record; anything unreadable yields `None`
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Mirror every flag onto `target`
    pub fn apply<T: PresentationTarget + ?Sized>(&self, target: &mut T) {
        for flag in AccessibilityFlag::ALL {
            target.set_class(flag.css_class(), self.get(flag));
        }
    }
}

/// Key-value storage for the preferences record
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Where presentation classes are applied (the document element in a browser)
pub trait PresentationTarget {
    fn set_class(&mut self, class: &str, enabled: bool);
}

/// Read the stored preferences, falling back to defaults
pub fn load_preferences<S: PreferenceStore + ?Sized>(store: &S) -> AccessibilityPreferences {
    store
        .read(STORAGE_KEY)
        .and_then(|raw| AccessibilityPreferences::from_json(&raw))
        .unwrap_or_default()
}

pub fn save_preferences<S: PreferenceStore + ?Sized>(store: &S, prefs: &AccessibilityPreferences) {
    store.write(STORAGE_KEY, &prefs.to_json());
}

/// Load, apply and return the stored preferences (page mount)
pub fn restore_preferences<S, T>(store: &S, target: &mut T) -> AccessibilityPreferences
where
    S: PreferenceStore + ?Sized,
    T: PresentationTarget + ?Sized,
{
    let prefs = load_preferences(store);
    prefs.apply(target);
    prefs
}

/// Flip `flag`, apply the result and rewrite the stored record
pub fn toggle_preference<S, T>(
    prefs: &mut AccessibilityPreferences,
    flag: AccessibilityFlag,
    store: &S,
    target: &mut T,
) -> bool
where
    S: PreferenceStore + ?Sized,
    T: PresentationTarget + ?Sized,
{
    let enabled = prefs.toggle(flag);
    target.set_class(flag.css_class(), enabled);
    save_preferences(store, prefs);
    enabled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{ClassList, MemoryStore};

    #[test]
    fn test_default_is_all_off() {
        let prefs = AccessibilityPreferences::default();
        assert!(AccessibilityFlag::ALL.iter().all(|flag| !prefs.get(*flag)));
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut prefs = AccessibilityPreferences::default();
        assert!(prefs.toggle(AccessibilityFlag::LargeText));
        assert!(!prefs.toggle(AccessibilityFlag::LargeText));
        assert_eq!(prefs, AccessibilityPreferences::default());
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let prefs = AccessibilityPreferences {
            high_contrast: true,
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::from_str(&prefs.to_json()).unwrap();
        assert_eq!(json["highContrast"], true);
        assert_eq!(json["reducedMotion"], false);
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let prefs = AccessibilityPreferences::from_json(r#"{"largeText":true}"#).unwrap();
        assert!(prefs.large_text);
        assert!(!prefs.high_contrast);
    }

    #[test]
    fn test_corrupt_record_loads_defaults() {
        let store = MemoryStore::default();
        store.write(STORAGE_KEY, "{not json");
        assert_eq!(load_preferences(&store), AccessibilityPreferences::default());
    }

    #[test]
    fn test_toggle_preference_applies_and_persists() {
        let store = MemoryStore::default();
        let mut classes = ClassList::default();
        let mut prefs = AccessibilityPreferences::default();

        toggle_preference(&mut prefs, AccessibilityFlag::ReducedMotion, &store, &mut classes);

        assert!(classes.contains("reduce-motion"));
        let stored = store.read(STORAGE_KEY).unwrap();
        assert!(AccessibilityPreferences::from_json(&stored).unwrap().reduced_motion);
    }

    #[test]
    fn test_apply_removes_cleared_flags() {
        let mut classes = ClassList::default();
        classes.set_class("large-text", true);

        AccessibilityPreferences::default().apply(&mut classes);
        assert!(!classes.contains("large-text"));
    }
}
