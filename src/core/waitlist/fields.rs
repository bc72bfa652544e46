//! Field identifiers and the fixed option lists used by the waitlist forms

use serde::{Deserialize, Serialize};

/// Every field that can appear on a waitlist form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    FirstName,
    LastName,
    PhoneNumber,
    AgeGroup,
    Gender,
    City,
    Interests,
    InterestLevel,
    PurchaseLikelihood,
    Factors,
    Motivators,
    Notifications,
}

impl Field {
    /// Stable identifier, also used as the analytics event label
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::PhoneNumber => "phoneNumber",
            Field::AgeGroup => "ageGroup",
            Field::Gender => "gender",
            Field::City => "city",
            Field::Interests => "interests",
            Field::InterestLevel => "interestLevel",
            Field::PurchaseLikelihood => "purchaseLikelihood",
            Field::Factors => "factors",
            Field::Motivators => "motivators",
            Field::Notifications => "notifications",
        }
    }

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Email Address",
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::PhoneNumber => "Phone Number",
            Field::AgeGroup => "Age Group",
            Field::Gender => "Gender",
            Field::City => "City/Area",
            Field::Interests => "Which of these categories interest you the most? (Select all that apply)",
            Field::InterestLevel => "How interested are you in products like these?",
            Field::PurchaseLikelihood => {
                "If these products were available today, how likely are you to buy?"
            }
            Field::Factors => "What factors matter most to you when purchasing? (Select all that apply)",
            Field::Motivators => "What would make you more likely to buy these products?",
            Field::Notifications => {
                "Yes, notify me when Roselle launches! I want to be the first to know."
            }
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age bracket on the extended form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-24")]
    From18To24,
    #[serde(rename = "25-34")]
    From25To34,
    #[serde(rename = "35-44")]
    From35To44,
    #[serde(rename = "45-54")]
    From45To54,
    #[serde(rename = "55+")]
    Over55,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::From18To24,
        AgeGroup::From25To34,
        AgeGroup::From35To44,
        AgeGroup::From45To54,
        AgeGroup::Over55,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::From18To24 => "18-24",
            AgeGroup::From25To34 => "25-34",
            AgeGroup::From35To44 => "35-44",
            AgeGroup::From45To54 => "45-54",
            AgeGroup::Over55 => "55+",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

/// Gender options on the extended form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Female,
    Male,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Female,
        Gender::Male,
        Gender::Other,
        Gender::PreferNotToSay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer-not-to-say",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

/// Product categories a visitor can be interested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Interest {
    Flowers,
    WeddingDecor,
    PersonalizedMirrorDesign,
    FlowersDecor,
}

impl Interest {
    pub const ALL: [Interest; 4] = [
        Interest::Flowers,
        Interest::WeddingDecor,
        Interest::PersonalizedMirrorDesign,
        Interest::FlowersDecor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Interest::Flowers => "Flowers",
            Interest::WeddingDecor => "Wedding Decor",
            Interest::PersonalizedMirrorDesign => "Personalized Mirror Design",
            Interest::FlowersDecor => "Flowers Decor",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.label() == label)
    }
}

/// Purchase-influencing factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Factor {
    Quality,
    Price,
    Design,
    Brand,
    Sustainability,
    CustomerService,
}

impl Factor {
    pub const ALL: [Factor; 6] = [
        Factor::Quality,
        Factor::Price,
        Factor::Design,
        Factor::Brand,
        Factor::Sustainability,
        Factor::CustomerService,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Factor::Quality => "Quality",
            Factor::Price => "Price",
            Factor::Design => "Design",
            Factor::Brand => "Brand",
            Factor::Sustainability => "Sustainability",
            Factor::CustomerService => "Customer Service",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }
}

/// Which five-point scale an ordinal answer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    /// "Not at all" .. "Extremely"
    Interest,
    /// "Very Unlikely" .. "Very Likely"
    Likelihood,
}

impl ScaleKind {
    pub fn labels(&self) -> [&'static str; 5] {
        match self {
            ScaleKind::Interest => ["Not at all", "Slightly", "Moderately", "Very", "Extremely"],
            ScaleKind::Likelihood => [
                "Very Unlikely",
                "Unlikely",
                "Maybe",
                "Likely",
                "Very Likely",
            ],
        }
    }
}

/// A 1-based answer on a five-point ordinal scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Parse either the numeric position or the option label of `scale`
    pub fn parse(scale: ScaleKind, value: &str) -> Option<Self> {
        if let Ok(position) = value.parse::<u8>() {
            return Self::new(position);
        }
        scale
            .labels()
            .iter()
            .position(|label| *label == value)
            .and_then(|index| Self::new(index as u8 + 1))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self, scale: ScaleKind) -> &'static str {
        scale.labels()[usize::from(self.0 - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_group_round_trips_through_value() {
        for group in AgeGroup::ALL {
            assert_eq!(AgeGroup::from_value(group.as_str()), Some(group));
        }
        assert_eq!(AgeGroup::from_value(""), None);
        assert_eq!(AgeGroup::from_value("65+"), None);
    }

    #[test]
    fn test_gender_from_value() {
        assert_eq!(Gender::from_value("prefer-not-to-say"), Some(Gender::PreferNotToSay));
        assert_eq!(Gender::from_value("Female"), None);
    }

    #[test]
    fn test_interest_and_factor_labels() {
        assert_eq!(Interest::from_label("Wedding Decor"), Some(Interest::WeddingDecor));
        assert_eq!(Factor::from_label("Customer Service"), Some(Factor::CustomerService));
        assert_eq!(Interest::from_label("Candles"), None);
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert_eq!(Rating::new(3).map(|r| r.value()), Some(3));
    }

    #[test]
    fn test_rating_parse_by_label_or_position() {
        let by_label = Rating::parse(ScaleKind::Likelihood, "Likely").unwrap();
        assert_eq!(by_label.value(), 4);
        assert_eq!(by_label.label(ScaleKind::Likelihood), "Likely");

        let by_position = Rating::parse(ScaleKind::Interest, "5").unwrap();
        assert_eq!(by_position.label(ScaleKind::Interest), "Extremely");

        assert!(Rating::parse(ScaleKind::Interest, "Somewhat").is_none());
    }

    #[test]
    fn test_field_serializes_camel_case() {
        let json = serde_json::to_string(&Field::PurchaseLikelihood).unwrap();
        assert_eq!(json, "\"purchaseLikelihood\"");
        assert_eq!(Field::PhoneNumber.to_string(), "phoneNumber");
    }
}
