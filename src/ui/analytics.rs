//! Analytics context: gtag loader plus typed event dispatch
//!
//! Nothing is loaded or sent unless the server configured a measurement id.
//! Load failures are logged and never retried.

use leptos::prelude::*;

use crate::core::analytics::{AnalyticsEvent, InteractionLog, ScrollDepthTracker};
use crate::core::settings::ClientSettings;
use crate::core::waitlist::Field;

#[derive(Clone, Copy)]
pub struct AnalyticsContext {
    measurement_id: StoredValue<Option<String>>,
    scroll: StoredValue<ScrollDepthTracker>,
    interactions: StoredValue<InteractionLog>,
}

impl AnalyticsContext {
    pub fn is_enabled(&self) -> bool {
        self.measurement_id.with_value(Option::is_some)
    }

    pub fn track(&self, event: AnalyticsEvent) {
        if self.is_enabled() {
            send_event(&event);
        }
    }

    /// First interaction with `field` during this page view
    pub fn field_interaction(&self, field: Field) {
        let mut event = None;
        self.interactions.update_value(|log| event = log.record(field));
        if let Some(event) = event {
            self.track(event);
        }
    }

    pub fn waitlist_signup(&self) {
        self.track(AnalyticsEvent::WaitlistSignup);
    }

    pub fn scrolled_to(&self, percent: f64) {
        let mut events = Vec::new();
        self.scroll.update_value(|tracker| events = tracker.observe(percent));
        for event in events {
            self.track(event);
        }
    }
}

#[cfg(feature = "hydrate")]
fn send_event(event: &AnalyticsEvent) {
    use js_sys::{Function, Reflect};
    use serde::Serialize;
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(gtag) = Reflect::get(&window, &JsValue::from_str("gtag"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
    else {
        return;
    };
    let params = match event
        .params()
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
    {
        Ok(params) => params,
        Err(err) => {
            leptos::logging::warn!("Could not encode {} params: {err}", event.name());
            return;
        }
    };
    if let Err(err) = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(event.name()),
        &params,
    ) {
        leptos::logging::warn!("gtag call failed: {err:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
fn send_event(_event: &AnalyticsEvent) {}

/// Insert the gtag loader and bootstrap snippet into `<head>`
#[cfg(feature = "hydrate")]
fn install_gtag(measurement_id: &str) -> Result<(), wasm_bindgen::JsValue> {
    use crate::core::analytics::{gtag_script_url, page_view_params};
    use wasm_bindgen::{JsCast, JsValue};

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("no <head>"))?;
    let path = document
        .location()
        .and_then(|location| location.pathname().ok())
        .unwrap_or_else(|| "/".to_string());

    let loader = document
        .create_element("script")?
        .dyn_into::<web_sys::HtmlScriptElement>()?;
    loader.set_async(true);
    loader.set_src(&gtag_script_url(measurement_id));
    let onerror = wasm_bindgen::closure::Closure::once_into_js(|| {
        leptos::logging::warn!("Analytics script failed to load");
    });
    loader.set_onerror(Some(onerror.unchecked_ref()));
    head.append_child(&loader)?;

    let id_literal = serde_json::to_string(measurement_id).unwrap_or_default();
    let bootstrap = format!(
        "window.dataLayer = window.dataLayer || [];\
         function gtag(){{dataLayer.push(arguments);}}\
         gtag('js', new Date());\
         gtag('config', {id_literal}, {params});",
        params = page_view_params(&path)
    );
    let inline = document.create_element("script")?;
    inline.set_text_content(Some(&bootstrap));
    head.append_child(&inline)?;

    Ok(())
}

/// Provide the analytics context and start tracking scroll depth
pub fn provide_analytics_context(settings: &ClientSettings) -> AnalyticsContext {
    let measurement_id = settings
        .analytics_enabled()
        .then(|| settings.analytics_id.clone())
        .flatten();

    let ctx = AnalyticsContext {
        measurement_id: StoredValue::new(measurement_id),
        scroll: StoredValue::new(ScrollDepthTracker::default()),
        interactions: StoredValue::new(InteractionLog::default()),
    };

    #[cfg(feature = "hydrate")]
    {
        use crate::core::analytics::scroll_percent;
        use leptos::ev::scroll;

        Effect::new(move |_| {
            if let Some(id) = ctx.measurement_id.get_value() {
                match install_gtag(&id) {
                    Ok(()) => leptos::logging::log!("Analytics enabled for {id}"),
                    Err(err) => leptos::logging::warn!("Analytics not installed: {err:?}"),
                }
            }
        });

        let handle = window_event_listener(scroll, move |_| {
            if !ctx.is_enabled() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            let scroll_top = window.scroll_y().unwrap_or(0.0);
            let viewport = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            let document_height = window
                .document()
                .and_then(|document| document.document_element())
                .map(|html| f64::from(html.scroll_height()))
                .unwrap_or(0.0);
            ctx.scrolled_to(scroll_percent(scroll_top, viewport, document_height));
        });
        on_cleanup(move || drop(handle));
    }

    provide_context(ctx);

    ctx
}

pub fn use_analytics_context() -> AnalyticsContext {
    expect_context::<AnalyticsContext>()
}
