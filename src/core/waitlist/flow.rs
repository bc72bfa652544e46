//! Waitlist submission state machine
//!
//! ```text
//! Idle ──submit (valid)──▶ Submitting ──accepted──▶ Success ──dismiss──▶ Idle
//!   │                          │
//!   └─submit (invalid)─▶ Idle + annotations ◀──rejected──┘
//! ```
//!
//! [`WaitlistFlow::begin_submit`] hands out a [`PendingSubmission`], the
//! service is awaited outside the flow, and [`WaitlistFlow::complete_submit`]
//! applies the result. [`run_submission`] strings the whole lifecycle
//! together, including the success display timeout, over any [`FlowCell`].
//! Tickets tie each result and each success timer to the attempt that
//! produced it.

use std::cell::RefCell;

use super::fields::Field;
use super::forms::WaitlistForm;
use super::service::{SubmissionAccepted, SubmissionService, pause};
use super::validation::{ValidationError, ValidationErrors, validate};

/// Proof of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub ticket: u64,
}

/// Internal lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting {
        ticket: u64,
    },
    Success(SubmissionReceipt),
}

/// What the form should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    Idle,
    /// Idle with at least one field annotated
    ValidationFailed,
    Submitting,
    Success,
}

/// Why a submit attempt or completion was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WaitlistError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error("a submission is already in progress")]
    Busy,
    #[error("submission {0} was superseded")]
    Superseded(u64),
    #[error("the form is no longer mounted")]
    Detached,
}

/// A validated snapshot waiting for the service
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission<F> {
    pub ticket: u64,
    pub form: F,
}

/// Form data plus lifecycle for one waitlist form on the page
#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistFlow<F> {
    form: F,
    errors: ValidationErrors,
    state: SubmissionState,
    next_ticket: u64,
}

impl<F: WaitlistForm> Default for WaitlistFlow<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: WaitlistForm> WaitlistFlow<F> {
    pub fn new() -> Self {
        Self {
            form: F::default(),
            errors: ValidationErrors::new(),
            state: SubmissionState::Idle,
            next_ticket: 1,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn phase(&self) -> FlowPhase {
        match self.state {
            SubmissionState::Idle if self.errors.is_empty() => FlowPhase::Idle,
            SubmissionState::Idle => FlowPhase::ValidationFailed,
            SubmissionState::Submitting { .. } => FlowPhase::Submitting,
            SubmissionState::Success(_) => FlowPhase::Success,
        }
    }

    /// Inputs are disabled while submitting or showing success
    pub fn is_locked(&self) -> bool {
        !matches!(self.state, SubmissionState::Idle)
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.update_field(field, value.into());
        self.errors.remove(field);
    }

    pub fn set_flag(&mut self, field: Field, value: bool) {
        self.form.set_flag(field, value);
        self.errors.remove(field);
    }

    /// Returns whether `option` is selected after the toggle
    pub fn toggle_multi_select(&mut self, field: Field, option: &str) -> bool {
        let selected = self.form.toggle_option(field, option);
        self.errors.remove(field);
        selected
    }

    /// Validate and move to `Submitting`
    ///
    /// On invalid input every failing field is annotated and the flow stays
    /// idle; the caller must not contact the service.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission<F>, WaitlistError> {
        if self.is_locked() {
            return Err(WaitlistError::Busy);
        }

        if let Err(errors) = validate(&self.form) {
            self.errors = errors.clone();
            return Err(WaitlistError::Invalid(errors));
        }

        self.errors.clear();
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.state = SubmissionState::Submitting { ticket };

        Ok(PendingSubmission {
            ticket,
            form: self.form.clone(),
        })
    }

    /// Apply the service's answer for `ticket`
    pub fn complete_submit(
        &mut self,
        ticket: u64,
        outcome: Result<SubmissionAccepted, ValidationErrors>,
    ) -> Result<SubmissionReceipt, WaitlistError> {
        if self.state != (SubmissionState::Submitting { ticket }) {
            return Err(WaitlistError::Superseded(ticket));
        }

        match outcome {
            Ok(SubmissionAccepted) => {
                let receipt = SubmissionReceipt { ticket };
                self.state = SubmissionState::Success(receipt);
                if F::VARIANT.clears_on_success() {
                    self.form = F::default();
                }
                Ok(receipt)
            }
            Err(errors) => {
                self.state = SubmissionState::Idle;
                self.errors = errors.clone();
                Err(WaitlistError::Invalid(errors))
            }
        }
    }

    /// Leave the success view if it still belongs to `ticket`
    pub fn dismiss_success(&mut self, ticket: u64) -> bool {
        match self.state {
            SubmissionState::Success(receipt) if receipt.ticket == ticket => {
                self.state = SubmissionState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drop all input and return to a fresh idle form
    ///
    /// An in-flight submission becomes stale and its result is discarded.
    pub fn reset(&mut self) {
        self.form = F::default();
        self.errors.clear();
        self.state = SubmissionState::Idle;
    }

    /// Validate, call `service`, and apply the result in one step
    pub async fn submit<S>(&mut self, service: &S) -> Result<SubmissionReceipt, WaitlistError>
    where
        S: SubmissionService<F>,
    {
        let pending = self.begin_submit()?;
        let outcome = service.submit(&pending.form).await;
        self.complete_submit(pending.ticket, outcome)
    }
}

/// Shared, interior-mutable home of a flow
///
/// The lifecycle spans several awaits, so it cannot hold `&mut WaitlistFlow`;
/// it borrows the flow briefly for each step instead. `None` means the owner
/// is gone (an unmounted component).
pub trait FlowCell<F: WaitlistForm> {
    fn with_flow<T>(&self, f: impl FnOnce(&mut WaitlistFlow<F>) -> T) -> Option<T>;
}

impl<F: WaitlistForm> FlowCell<F> for RefCell<WaitlistFlow<F>> {
    fn with_flow<T>(&self, f: impl FnOnce(&mut WaitlistFlow<F>) -> T) -> Option<T> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Submit, show the success card for the variant's display time, then dismiss it
///
/// `on_accepted` runs once the service accepts. `on_dismissed` runs only if
/// the timeout dismissed this very success; a reset or a newer submission in
/// the meantime leaves it uncalled.
pub async fn run_submission<F, C, S>(
    flow: &C,
    service: &S,
    on_accepted: impl FnOnce(SubmissionReceipt),
    on_dismissed: impl FnOnce(),
) -> Result<SubmissionReceipt, WaitlistError>
where
    F: WaitlistForm,
    C: FlowCell<F> + ?Sized,
    S: SubmissionService<F> + ?Sized,
{
    let pending = flow
        .with_flow(WaitlistFlow::begin_submit)
        .ok_or(WaitlistError::Detached)??;

    let outcome = service.submit(&pending.form).await;
    let receipt = flow
        .with_flow(|flow| flow.complete_submit(pending.ticket, outcome))
        .ok_or(WaitlistError::Detached)??;
    on_accepted(receipt);

    pause(F::VARIANT.success_display()).await;
    if flow
        .with_flow(|flow| flow.dismiss_success(receipt.ticket))
        .unwrap_or(false)
    {
        on_dismissed();
    }

    Ok(receipt)
}
