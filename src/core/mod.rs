pub mod action_bindings;
pub mod app;
pub mod controller;
pub mod error;
pub mod error_state;
pub mod event;
pub mod event_queue;
pub mod form_engine;
pub mod form_event;
pub mod form_state;
pub mod notice;
pub mod reducer;
pub mod state;
pub mod validation;

use crate::core::error::FormError;
use std::fmt;
use std::str::FromStr;

/// Every field the registration form knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    AbroadInterest,
    Country,
    EventName,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::AbroadInterest,
        FieldId::Country,
        FieldId::EventName,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::AbroadInterest => "abroad_interest",
            FieldId::Country => "country",
            FieldId::EventName => "event_name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Full Name",
            FieldId::Email => "Email Address",
            FieldId::Phone => "Enter phone number",
            FieldId::AbroadInterest => "Interested in Abroad Study?",
            FieldId::Country => "Select Country",
            FieldId::EventName => "Event Name",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| FormError::UnknownField(value.to_string()))
    }
}
