//! Waitlist signup: form variants, validation rules, and the submission flow

mod fields;
mod flow;
mod forms;
mod service;
mod validation;

pub use fields::{AgeGroup, Factor, Field, Gender, Interest, Rating, ScaleKind};
pub use flow::{
    FlowCell, FlowPhase, PendingSubmission, SubmissionReceipt, SubmissionState, WaitlistError,
    WaitlistFlow, run_submission,
};
pub use forms::{
    ExtendedSignup, FieldValue, FormVariant, INLINE_SUCCESS_DISPLAY, POPUP_SUCCESS_DISPLAY,
    QuickSignup, WaitlistForm,
};
pub use service::{
    SIMULATED_LATENCY, SimulatedSubmission, SubmissionAccepted, SubmissionService, pause,
};
pub use validation::{FieldRules, Pattern, Rule, ValidationError, ValidationErrors, validate};
