//! Performance context
//!
//! Probes the device once after mount and exposes a reactive
//! [`PerformanceProfile`] that decorative components read to size themselves.

use leptos::prelude::*;

use crate::core::performance::{PerformanceMode, PerformanceProfile};
use crate::ui::accessibility::use_accessibility_context;

#[cfg(feature = "hydrate")]
use crate::core::performance::DeviceSignals;

#[cfg(feature = "hydrate")]
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Clone, Copy)]
pub struct PerformanceContext {
    pub mode: RwSignal<PerformanceMode>,
    /// Operating system asks for reduced motion
    pub system_reduced_motion: RwSignal<bool>,
    pub profile: Memo<PerformanceProfile>,
}

/// Read whatever device hints the browser exposes
#[cfg(feature = "hydrate")]
fn probe_device() -> DeviceSignals {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return DeviceSignals::default();
    };
    let navigator = window.navigator();
    let get = |target: &JsValue, key: &str| {
        Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    };

    let connection = get(navigator.as_ref(), "connection");
    let memory = window
        .performance()
        .and_then(|performance| get(performance.as_ref(), "memory"));
    let cores = navigator.hardware_concurrency();

    DeviceSignals {
        effective_type: connection
            .as_ref()
            .and_then(|c| get(c, "effectiveType"))
            .and_then(|v| v.as_string()),
        downlink_mbps: connection
            .as_ref()
            .and_then(|c| get(c, "downlink"))
            .and_then(|v| v.as_f64()),
        heap_limit_bytes: memory
            .as_ref()
            .and_then(|m| get(m, "jsHeapSizeLimit"))
            .and_then(|v| v.as_f64()),
        hardware_concurrency: (cores > 0.0).then_some(cores as u32),
    }
}

#[cfg(feature = "hydrate")]
fn system_prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Provide the performance context; `forced` skips the device probe
pub fn provide_performance_context(forced: Option<PerformanceMode>) -> PerformanceContext {
    let accessibility = use_accessibility_context();
    let preference_reduced = accessibility.reduced_motion();

    let mode = RwSignal::new(forced.unwrap_or_default());
    let system_reduced_motion = RwSignal::new(false);

    let profile = Memo::new(move |_| {
        let reduce_motion = system_reduced_motion.get() || preference_reduced.get();
        PerformanceProfile::new(mode.get(), reduce_motion)
    });

    let ctx = PerformanceContext {
        mode,
        system_reduced_motion,
        profile,
    };

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            let detected = match forced {
                Some(mode) => mode,
                None => {
                    let signals = probe_device();
                    let detected = signals.mode();
                    leptos::logging::log!(
                        "Device score {} -> {} performance mode",
                        signals.score(),
                        detected.as_str()
                    );
                    detected
                }
            };
            mode.set(detected);
            system_reduced_motion.set(system_prefers_reduced_motion());
        });

        // Mirror the tier onto <html data-performance-mode="...">
        Effect::new(move |_| {
            let current = mode.get();
            if let Some(html) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
            {
                if let Err(err) = html.set_attribute("data-performance-mode", current.as_str()) {
                    leptos::logging::warn!("Could not mark performance mode: {err:?}");
                }
            }
        });
    }

    provide_context(ctx);

    ctx
}

pub fn use_performance_context() -> PerformanceContext {
    expect_context::<PerformanceContext>()
}

/// Current profile as a signal
pub fn use_performance_profile() -> Memo<PerformanceProfile> {
    use_performance_context().profile
}
