//! Accessibility context and floating preferences panel
//!
//! Provides:
//! - AccessibilityContext for reactive preference state
//! - LocalStorage persistence through [`BrowserStorage`]
//! - Presentation classes on the document element through [`DocumentClasses`]

use leptos::prelude::*;

use crate::core::accessibility::{
    AccessibilityFlag, AccessibilityPreferences, PreferenceStore, PresentationTarget,
    restore_preferences, toggle_preference,
};
use crate::core::content::ACCESSIBILITY_EMAIL;
use crate::ui::common::BaseModal;
use crate::ui::icon::{Icon, icons};

/// Browser local storage; every failure degrades to "nothing stored"
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let stored = web_sys::window()
                .and_then(|window| window.local_storage().ok().flatten())
                .map(|storage| storage.set_item(key, value).is_ok());
            if stored != Some(true) {
                leptos::logging::warn!("Could not persist accessibility preferences");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Class list of the `<html>` element
pub struct DocumentClasses;

impl PresentationTarget for DocumentClasses {
    fn set_class(&mut self, class: &str, enabled: bool) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(html) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
            {
                let class_list = html.class_list();
                let result = if enabled {
                    class_list.add_1(class)
                } else {
                    class_list.remove_1(class)
                };
                if let Err(err) = result {
                    leptos::logging::warn!("Could not update document class {class}: {err:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (class, enabled);
        }
    }
}

/// Accessibility preferences shared across the page
#[derive(Clone, Copy)]
pub struct AccessibilityContext {
    pub preferences: RwSignal<AccessibilityPreferences>,
    /// Whether the panel is showing
    pub panel_open: RwSignal<bool>,
}

impl AccessibilityContext {
    pub fn is_enabled(&self, flag: AccessibilityFlag) -> bool {
        self.preferences.with(|prefs| prefs.get(flag))
    }

    /// Flip one preference, apply it to the document and persist the record
    pub fn toggle(&self, flag: AccessibilityFlag) {
        self.preferences.update(|prefs| {
            toggle_preference(prefs, flag, &BrowserStorage, &mut DocumentClasses);
        });
    }

    pub fn reduced_motion(&self) -> Signal<bool> {
        let preferences = self.preferences;
        Signal::derive(move || preferences.with(|prefs| prefs.reduced_motion))
    }
}

/// Provide accessibility context to the application
pub fn provide_accessibility_context() -> AccessibilityContext {
    let ctx = AccessibilityContext {
        preferences: RwSignal::new(AccessibilityPreferences::default()),
        panel_open: RwSignal::new(false),
    };

    // Storage is only readable after mount; reading it during render would
    // break hydration.
    Effect::new(move |_| {
        let restored = restore_preferences(&BrowserStorage, &mut DocumentClasses);
        ctx.preferences.set(restored);
    });

    provide_context(ctx);

    ctx
}

/// Use accessibility context from anywhere in the component tree
pub fn use_accessibility_context() -> AccessibilityContext {
    expect_context::<AccessibilityContext>()
}

/// Floating button plus the preferences dialog
#[component]
pub fn AccessibilityPanel() -> impl IntoView {
    let ctx = use_accessibility_context();
    let is_open = Signal::derive(move || ctx.panel_open.get());
    let close = Callback::new(move |_| ctx.panel_open.set(false));

    view! {
        <button
            type="button"
            class="a11y-trigger"
            on:click=move |_| ctx.panel_open.update(|open| *open = !*open)
            aria-label="Accessibility options"
            aria-expanded=move || ctx.panel_open.get().to_string()
        >
            <Icon name=icons::ACCESSIBILITY class="icon"/>
        </button>

        <BaseModal
            title="Accessibility Options"
            subtitle="Adjust the page to suit how you browse."
            is_open=is_open
            on_close=close
            max_width="modal-sm"
        >
            <div class="a11y-options">
                {AccessibilityFlag::ALL.into_iter().map(|flag| {
                    view! { <PreferenceToggle flag=flag/> }
                }).collect_view()}
            </div>
            <p class="a11y-footnote">
                "Need help? Contact us at "
                <a href=format!("mailto:{ACCESSIBILITY_EMAIL}")>{ACCESSIBILITY_EMAIL}</a>
            </p>
        </BaseModal>
    }
}

#[component]
fn PreferenceToggle(flag: AccessibilityFlag) -> impl IntoView {
    let ctx = use_accessibility_context();
    let enabled = move || ctx.is_enabled(flag);

    view! {
        <button
            type="button"
            role="switch"
            class="a11y-toggle"
            class:a11y-toggle-on=enabled
            aria-checked=move || enabled().to_string()
            on:click=move |_| ctx.toggle(flag)
        >
            <span class="a11y-toggle-label">{flag.display_name()}</span>
            <span class="a11y-switch" aria-hidden="true">
                <span class="a11y-switch-knob"></span>
            </span>
        </button>
    }
}
