use crate::core::FieldId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which dependent field the form collects after the interest selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Asks for a destination country once abroad interest is "Yes".
    #[default]
    Destination,
    /// Always asks for an event name.
    Event,
}

impl FormVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            FormVariant::Destination => "destination",
            FormVariant::Event => "event",
        }
    }

    pub fn fields(self) -> &'static [FieldId] {
        match self {
            FormVariant::Destination => &[
                FieldId::Name,
                FieldId::Email,
                FieldId::Phone,
                FieldId::AbroadInterest,
                FieldId::Country,
            ],
            FormVariant::Event => &[
                FieldId::Name,
                FieldId::Email,
                FieldId::Phone,
                FieldId::AbroadInterest,
                FieldId::EventName,
            ],
        }
    }

    pub fn has_field(self, field: FieldId) -> bool {
        self.fields().contains(&field)
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form variant `{0}` (expected `destination` or `event`)")]
pub struct UnknownVariant(pub String);

impl FromStr for FormVariant {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "destination" | "a" => Ok(FormVariant::Destination),
            "event" | "b" => Ok(FormVariant::Event),
            _ => Err(UnknownVariant(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbroadInterest {
    Yes,
    No,
}

impl AbroadInterest {
    pub const ALL: [AbroadInterest; 2] = [AbroadInterest::Yes, AbroadInterest::No];

    pub fn as_str(self) -> &'static str {
        match self {
            AbroadInterest::Yes => "Yes",
            AbroadInterest::No => "No",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Country {
    Germany,
    Uk,
    Ireland,
    Spain,
    Italy,
    Netherlands,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::Germany,
        Country::Uk,
        Country::Ireland,
        Country::Spain,
        Country::Italy,
        Country::Netherlands,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Country::Germany => "Germany",
            Country::Uk => "UK",
            Country::Ireland => "Ireland",
            Country::Spain => "Spain",
            Country::Italy => "Italy",
            Country::Netherlands => "Netherlands",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.as_str() == value)
    }
}

/// Current value of every field. Selectors hold `None` while unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub abroad_interest: Option<AbroadInterest>,
    pub country: Option<Country>,
    pub event_name: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display form of a field; unset selectors read as an empty string.
    pub fn value(&self, field: FieldId) -> String {
        match field {
            FieldId::Name => self.name.clone(),
            FieldId::Email => self.email.clone(),
            FieldId::Phone => self.phone.clone(),
            FieldId::AbroadInterest => self
                .abroad_interest
                .map(AbroadInterest::as_str)
                .unwrap_or("")
                .to_string(),
            FieldId::Country => self
                .country
                .map(Country::as_str)
                .unwrap_or("")
                .to_string(),
            FieldId::EventName => self.event_name.clone(),
        }
    }

    /// Stores `value` into `field`. Selector values that do not name an
    /// option leave the selector unset.
    pub fn set_value(&mut self, field: FieldId, value: &str) {
        match field {
            FieldId::Name => self.name = value.to_string(),
            FieldId::Email => self.email = value.to_string(),
            FieldId::Phone => self.phone = value.to_string(),
            FieldId::AbroadInterest => {
                self.abroad_interest = AbroadInterest::parse(value);
                if self.abroad_interest == Some(AbroadInterest::No) {
                    self.country = None;
                }
            }
            FieldId::Country => self.country = Country::parse(value),
            FieldId::EventName => self.event_name = value.to_string(),
        }
    }

    pub fn wants_country(&self) -> bool {
        self.abroad_interest == Some(AbroadInterest::Yes)
    }
}

#[cfg(test)]
mod tests {
    use super::{AbroadInterest, Country, FormState, FormVariant};
    use crate::core::FieldId;

    #[test]
    fn interest_no_clears_country() {
        let mut state = FormState::new();
        state.set_value(FieldId::AbroadInterest, "Yes");
        state.set_value(FieldId::Country, "Germany");
        assert_eq!(state.country, Some(Country::Germany));

        state.set_value(FieldId::AbroadInterest, "No");
        assert_eq!(state.abroad_interest, Some(AbroadInterest::No));
        assert_eq!(state.country, None);
        assert_eq!(state.value(FieldId::Country), "");
    }

    #[test]
    fn unknown_selector_value_stays_unset() {
        let mut state = FormState::new();
        state.set_value(FieldId::Country, "France");
        assert_eq!(state.country, None);
        state.set_value(FieldId::AbroadInterest, "maybe");
        assert_eq!(state.abroad_interest, None);
    }

    #[test]
    fn variant_parses_from_names_and_letters() {
        assert_eq!("event".parse::<FormVariant>(), Ok(FormVariant::Event));
        assert_eq!("A".parse::<FormVariant>(), Ok(FormVariant::Destination));
        assert!("country".parse::<FormVariant>().is_err());
    }

    #[test]
    fn variants_carry_exactly_one_dependent_field() {
        assert!(FormVariant::Destination.has_field(FieldId::Country));
        assert!(!FormVariant::Destination.has_field(FieldId::EventName));
        assert!(FormVariant::Event.has_field(FieldId::EventName));
        assert!(!FormVariant::Event.has_field(FieldId::Country));
    }
}
