//! The two waitlist form variants
//!
//! [`QuickSignup`] is the inline name + email form in the waitlist section.
//! [`ExtendedSignup`] is the survey-style popup. Both implement
//! [`WaitlistForm`], so the same flow, validation and submission service
//! drive either one.

use std::collections::BTreeSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::fields::{AgeGroup, Factor, Field, Gender, Interest, Rating, ScaleKind};
use super::validation::{FieldRules, Pattern, Rule};

/// How long the inline form shows its success card before resetting
pub const INLINE_SUCCESS_DISPLAY: Duration = Duration::from_millis(5000);

/// How long the popup shows its success card before closing itself
pub const POPUP_SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);

/// Where a form is rendered, which decides what happens after success
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    /// Embedded in the page; clears and returns to idle so another email can join
    Inline,
    /// Modal survey; closes itself after the success card
    Popup,
}

impl FormVariant {
    pub fn success_display(&self) -> Duration {
        match self {
            FormVariant::Inline => INLINE_SUCCESS_DISPLAY,
            FormVariant::Popup => POPUP_SUCCESS_DISPLAY,
        }
    }

    /// Whether the fields are wiped as soon as the submission succeeds
    pub fn clears_on_success(&self) -> bool {
        matches!(self, FormVariant::Inline)
    }
}

/// Read-only view of one field's current value, as seen by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Choice(Option<&'static str>),
    /// Number of selected options in a multi-select
    Selection(usize),
    Flag(bool),
    /// The field is not part of this form
    Absent,
}

/// Field storage and rule declarations for one form variant
pub trait WaitlistForm: Clone + Default + PartialEq + Send + Sync + 'static {
    const VARIANT: FormVariant;

    /// Rules in display order
    fn rules() -> &'static [FieldRules];

    fn value(&self, field: Field) -> FieldValue<'_>;

    /// Set a text or single-select field. Unknown fields are ignored and
    /// unrecognised select values leave the field unset.
    fn update_field(&mut self, field: Field, value: String);

    /// Set a checkbox field
    fn set_flag(&mut self, _field: Field, _value: bool) {}

    /// Flip `option` in a multi-select; returns whether the option is now selected
    fn toggle_option(&mut self, _field: Field, _option: &str) -> bool {
        false
    }

    fn is_required(field: Field) -> bool {
        Self::rules()
            .iter()
            .any(|rules| rules.field == field && rules.is_required())
    }
}

/// Inline two-field signup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickSignup {
    pub name: String,
    pub email: String,
}

static QUICK_SIGNUP_RULES: [FieldRules; 2] = [
    FieldRules::new(Field::Name, &[Rule::Required("Name is required")]),
    FieldRules::new(
        Field::Email,
        &[
            Rule::Required("Email is required"),
            Rule::Matches(Pattern::Email, "Invalid email address"),
        ],
    ),
];

impl WaitlistForm for QuickSignup {
    const VARIANT: FormVariant = FormVariant::Inline;

    fn rules() -> &'static [FieldRules] {
        &QUICK_SIGNUP_RULES
    }

    fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Name => FieldValue::Text(&self.name),
            Field::Email => FieldValue::Text(&self.email),
            _ => FieldValue::Absent,
        }
    }

    fn update_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            _ => {}
        }
    }
}

/// Popup survey signup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedSignup {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub age_group: Option<AgeGroup>,
    pub gender: Option<Gender>,
    pub city: String,
    pub interests: BTreeSet<Interest>,
    pub interest_level: Option<Rating>,
    pub purchase_likelihood: Option<Rating>,
    pub factors: BTreeSet<Factor>,
    pub motivators: String,
    pub notifications: bool,
}

static EXTENDED_SIGNUP_RULES: [FieldRules; 11] = [
    FieldRules::new(Field::FirstName, &[Rule::Required("First name is required")]),
    FieldRules::new(Field::LastName, &[]),
    FieldRules::new(
        Field::PhoneNumber,
        &[
            Rule::Required("Phone number is required"),
            Rule::Matches(Pattern::Phone, "Please enter a valid phone number"),
        ],
    ),
    FieldRules::new(Field::AgeGroup, &[Rule::Required("Age group is required")]),
    FieldRules::new(Field::Gender, &[Rule::Required("Gender is required")]),
    FieldRules::new(Field::City, &[Rule::Required("City/Area is required")]),
    FieldRules::new(
        Field::Interests,
        &[Rule::AtLeastOne("Please select at least one interest")],
    ),
    FieldRules::new(
        Field::InterestLevel,
        &[Rule::Required("Please select your interest level")],
    ),
    FieldRules::new(
        Field::PurchaseLikelihood,
        &[Rule::Required("Please select your purchase likelihood")],
    ),
    FieldRules::new(
        Field::Factors,
        &[Rule::AtLeastOne("Please select at least one factor")],
    ),
    FieldRules::new(
        Field::Motivators,
        &[Rule::Required("Please tell us what would motivate you")],
    ),
];

impl ExtendedSignup {
    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    pub fn has_factor(&self, factor: Factor) -> bool {
        self.factors.contains(&factor)
    }
}

/// Flip membership of `item` in `set`, returning whether it is now present
fn toggle_member<T: Ord>(set: &mut BTreeSet<T>, item: T) -> bool {
    if set.remove(&item) {
        false
    } else {
        set.insert(item);
        true
    }
}

impl WaitlistForm for ExtendedSignup {
    const VARIANT: FormVariant = FormVariant::Popup;

    fn rules() -> &'static [FieldRules] {
        &EXTENDED_SIGNUP_RULES
    }

    fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::FirstName => FieldValue::Text(&self.first_name),
            Field::LastName => FieldValue::Text(&self.last_name),
            Field::PhoneNumber => FieldValue::Text(&self.phone_number),
            Field::AgeGroup => FieldValue::Choice(self.age_group.map(|g| g.as_str())),
            Field::Gender => FieldValue::Choice(self.gender.map(|g| g.as_str())),
            Field::City => FieldValue::Text(&self.city),
            Field::Interests => FieldValue::Selection(self.interests.len()),
            Field::InterestLevel => {
                FieldValue::Choice(self.interest_level.map(|r| r.label(ScaleKind::Interest)))
            }
            Field::PurchaseLikelihood => FieldValue::Choice(
                self.purchase_likelihood
                    .map(|r| r.label(ScaleKind::Likelihood)),
            ),
            Field::Factors => FieldValue::Selection(self.factors.len()),
            Field::Motivators => FieldValue::Text(&self.motivators),
            Field::Notifications => FieldValue::Flag(self.notifications),
            Field::Name | Field::Email => FieldValue::Absent,
        }
    }

    fn update_field(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::PhoneNumber => self.phone_number = value,
            Field::AgeGroup => self.age_group = AgeGroup::from_value(&value),
            Field::Gender => self.gender = Gender::from_value(&value),
            Field::City => self.city = value,
            Field::InterestLevel => {
                self.interest_level = Rating::parse(ScaleKind::Interest, &value)
            }
            Field::PurchaseLikelihood => {
                self.purchase_likelihood = Rating::parse(ScaleKind::Likelihood, &value)
            }
            Field::Motivators => self.motivators = value,
            _ => {}
        }
    }

    fn set_flag(&mut self, field: Field, value: bool) {
        if field == Field::Notifications {
            self.notifications = value;
        }
    }

    fn toggle_option(&mut self, field: Field, option: &str) -> bool {
        match field {
            Field::Interests => Interest::from_label(option)
                .map(|interest| toggle_member(&mut self.interests, interest))
                .unwrap_or(false),
            Field::Factors => Factor::from_label(option)
                .map(|factor| toggle_member(&mut self.factors, factor))
                .unwrap_or(false),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_signup_ignores_foreign_fields() {
        let mut form = QuickSignup::default();
        form.update_field(Field::City, "Austin".to_string());
        assert_eq!(form, QuickSignup::default());
        assert_eq!(form.value(Field::City), FieldValue::Absent);
    }

    #[test]
    fn test_extended_select_parsing() {
        let mut form = ExtendedSignup::default();
        form.update_field(Field::AgeGroup, "25-34".to_string());
        form.update_field(Field::Gender, "other".to_string());
        assert_eq!(form.age_group, Some(AgeGroup::From25To34));
        assert_eq!(form.gender, Some(Gender::Other));

        // "Please Select" posts an empty value
        form.update_field(Field::AgeGroup, String::new());
        assert_eq!(form.age_group, None);
    }

    #[test]
    fn test_extended_scale_answers() {
        let mut form = ExtendedSignup::default();
        form.update_field(Field::InterestLevel, "Very".to_string());
        form.update_field(Field::PurchaseLikelihood, "2".to_string());
        assert_eq!(form.interest_level.map(|r| r.value()), Some(4));
        assert_eq!(
            form.value(Field::PurchaseLikelihood),
            FieldValue::Choice(Some("Unlikely"))
        );
    }

    #[test]
    fn test_toggle_option_flips_membership() {
        let mut form = ExtendedSignup::default();
        assert!(form.toggle_option(Field::Factors, "Price"));
        assert!(form.has_factor(Factor::Price));
        assert!(!form.toggle_option(Field::Factors, "Price"));
        assert!(form.factors.is_empty());
    }

    #[test]
    fn test_toggle_unknown_option_is_ignored() {
        let mut form = ExtendedSignup::default();
        assert!(!form.toggle_option(Field::Interests, "Candles"));
        assert!(!form.toggle_option(Field::City, "Flowers"));
        assert!(form.interests.is_empty());
    }

    #[test]
    fn test_required_fields() {
        assert!(QuickSignup::is_required(Field::Email));
        assert!(ExtendedSignup::is_required(Field::Interests));
        assert!(!ExtendedSignup::is_required(Field::LastName));
        assert!(!ExtendedSignup::is_required(Field::Notifications));
    }

    #[test]
    fn test_variant_policies() {
        assert_eq!(QuickSignup::VARIANT.success_display(), Duration::from_secs(5));
        assert_eq!(ExtendedSignup::VARIANT.success_display(), Duration::from_secs(3));
        assert!(FormVariant::Inline.clears_on_success());
        assert!(!FormVariant::Popup.clears_on_success());
    }

    #[test]
    fn test_extended_signup_serializes_camel_case() {
        let mut form = ExtendedSignup::default();
        form.update_field(Field::FirstName, "Ada".to_string());
        form.update_field(Field::AgeGroup, "55+".to_string());
        form.toggle_option(Field::Interests, "Flowers");

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["ageGroup"], "55+");
        assert_eq!(json["interests"][0], "Flowers");
    }
}
