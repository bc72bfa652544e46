//! Declarative validation rules for waitlist forms
//!
//! Each form declares an ordered list of [`FieldRules`]. Validation walks every
//! field and keeps the first failing rule per field, so the user sees one
//! message next to each input.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::fields::Field;
use super::forms::{FieldValue, WaitlistForm};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern compiles"));

/// Named input patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Email,
    /// Loose international number: optional `+`, no leading zero, up to 16 digits
    Phone,
}

impl Pattern {
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Pattern::Email => EMAIL_PATTERN.is_match(value),
            Pattern::Phone => PHONE_PATTERN.is_match(value),
        }
    }
}

/// A single validation rule with its user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text must be non-blank, a choice must be made
    Required(&'static str),
    /// Non-blank text must match the pattern as typed, surrounding spaces included
    Matches(Pattern, &'static str),
    /// A multi-select must hold at least one option
    AtLeastOne(&'static str),
}

impl Rule {
    fn check(&self, value: &FieldValue<'_>) -> Result<(), ValidationError> {
        match (*self, value) {
            (Rule::Required(message), FieldValue::Text(text)) if text.trim().is_empty() => {
                Err(ValidationError::Required(message))
            }
            (Rule::Required(message), FieldValue::Choice(None)) => {
                Err(ValidationError::Required(message))
            }
            (Rule::Matches(pattern, message), FieldValue::Text(text))
                if !text.trim().is_empty() && !pattern.is_match(text) =>
            {
                Err(ValidationError::Pattern(message))
            }
            (Rule::AtLeastOne(message), FieldValue::Selection(0)) => {
                Err(ValidationError::NothingSelected(message))
            }
            _ => Ok(()),
        }
    }
}

/// Ordered rules for one field
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: Field,
    pub rules: &'static [Rule],
}

impl FieldRules {
    pub const fn new(field: Field, rules: &'static [Rule]) -> Self {
        Self { field, rules }
    }

    pub fn is_required(&self) -> bool {
        self.rules
            .iter()
            .any(|rule| matches!(rule, Rule::Required(_) | Rule::AtLeastOne(_)))
    }
}

/// A failed rule on one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0}")]
    Required(&'static str),
    #[error("{0}")]
    Pattern(&'static str),
    #[error("{0}")]
    NothingSelected(&'static str),
}

/// Per-field validation annotations
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) need attention", .0.len())]
pub struct ValidationErrors(BTreeMap<Field, ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) -> Option<ValidationError> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// Message to render next to `field`, if it failed
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Check every declared rule of `form`
pub fn validate<F: WaitlistForm>(form: &F) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for field_rules in F::rules() {
        let value = form.value(field_rules.field);
        if let Some(error) = field_rules
            .rules
            .iter()
            .find_map(|rule| rule.check(&value).err())
        {
            errors.insert(field_rules.field, error);
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
