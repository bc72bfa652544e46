//! Waitlist forms
//!
//! Both forms share [`WaitlistController`], a thin reactive wrapper around
//! [`WaitlistFlow`] that runs [`run_submission`] in the background and reports
//! interaction analytics.

mod popup;
mod section;

pub use popup::WaitlistPopup;
pub use section::WaitlistSection;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::waitlist::{
    Field, FieldValue, FlowCell, FlowPhase, SimulatedSubmission, SubmissionState, WaitlistError,
    WaitlistFlow, WaitlistForm, run_submission,
};
use crate::ui::analytics::{AnalyticsContext, use_analytics_context};

/// Reactive handle on one form's flow
pub struct WaitlistController<F: WaitlistForm> {
    flow: RwSignal<WaitlistFlow<F>>,
    analytics: AnalyticsContext,
    /// No backend exists yet; every form submits to the simulated one
    service: SimulatedSubmission,
}

impl<F: WaitlistForm> Clone for WaitlistController<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: WaitlistForm> Copy for WaitlistController<F> {}

impl<F: WaitlistForm> WaitlistController<F> {
    pub fn new() -> Self {
        Self {
            flow: RwSignal::new(WaitlistFlow::new()),
            analytics: use_analytics_context(),
            service: SimulatedSubmission::default(),
        }
    }

    /// Read the form without cloning it
    pub fn with_form<T>(&self, f: impl FnOnce(&F) -> T) -> T {
        self.flow.with(|flow| f(flow.form()))
    }

    /// Text or select value of `field` as shown in its input
    pub fn text(&self, field: Field) -> Signal<String> {
        let flow = self.flow;
        Signal::derive(move || {
            flow.with(|flow| match flow.form().value(field) {
                FieldValue::Text(text) => text.to_string(),
                FieldValue::Choice(choice) => choice.unwrap_or_default().to_string(),
                _ => String::new(),
            })
        })
    }

    pub fn error(&self, field: Field) -> Signal<Option<String>> {
        let flow = self.flow;
        Signal::derive(move || flow.with(|flow| flow.errors().message(field)))
    }

    pub fn phase(&self) -> Signal<FlowPhase> {
        let flow = self.flow;
        Signal::derive(move || flow.with(WaitlistFlow::phase))
    }

    pub fn submitting(&self) -> Signal<bool> {
        let phase = self.phase();
        Signal::derive(move || phase.get() == FlowPhase::Submitting)
    }

    pub fn succeeded(&self) -> Signal<bool> {
        let phase = self.phase();
        Signal::derive(move || phase.get() == FlowPhase::Success)
    }

    pub fn locked(&self) -> Signal<bool> {
        let flow = self.flow;
        Signal::derive(move || flow.with(WaitlistFlow::is_locked))
    }

    /// Input handler for a text or select field
    pub fn on_input(&self, field: Field) -> Callback<String> {
        let flow = self.flow;
        Callback::new(move |value: String| flow.update(|flow| flow.update_field(field, value)))
    }

    pub fn on_flag(&self, field: Field) -> Callback<bool> {
        let flow = self.flow;
        Callback::new(move |value: bool| flow.update(|flow| flow.set_flag(field, value)))
    }

    pub fn on_toggle(&self, field: Field) -> Callback<&'static str> {
        let flow = self.flow;
        let analytics = self.analytics;
        Callback::new(move |option: &'static str| {
            flow.update(|flow| {
                flow.toggle_multi_select(field, option);
            });
            analytics.field_interaction(field);
        })
    }

    /// Focus handler that reports the first interaction with `field`
    pub fn on_focus(&self, field: Field) -> Callback<()> {
        let analytics = self.analytics;
        Callback::new(move |_| analytics.field_interaction(field))
    }

    /// Leave the success card early
    pub fn dismiss(&self) {
        self.flow.update(|flow| {
            if let SubmissionState::Success(receipt) = flow.state() {
                flow.dismiss_success(receipt.ticket);
            }
        });
    }

    pub fn reset(&self) {
        self.flow.update(WaitlistFlow::reset);
    }

    /// Validate and submit in the background
    ///
    /// `on_dismissed` runs when the success card times out, unless the form
    /// was reset or resubmitted in the meantime.
    pub fn submit(&self, on_dismissed: Option<Callback<()>>) {
        let flow = self.flow;
        let analytics = self.analytics;
        let service = self.service;

        spawn_local(async move {
            let result = run_submission::<F, _, _>(
                &flow,
                &service,
                |_| analytics.waitlist_signup(),
                || {
                    if let Some(callback) = on_dismissed {
                        callback.run(());
                    }
                },
            )
            .await;

            match result {
                Ok(_) => {}
                Err(WaitlistError::Invalid(errors)) => {
                    leptos::logging::log!("Waitlist form has {} invalid field(s)", errors.len());
                }
                Err(err) => leptos::logging::warn!("Waitlist submit ignored: {err}"),
            }
        });
    }
}

impl<F: WaitlistForm> FlowCell<F> for RwSignal<WaitlistFlow<F>> {
    fn with_flow<T>(&self, f: impl FnOnce(&mut WaitlistFlow<F>) -> T) -> Option<T> {
        self.try_update(f)
    }
}

impl<F: WaitlistForm> Default for WaitlistController<F> {
    fn default() -> Self {
        Self::new()
    }
}
