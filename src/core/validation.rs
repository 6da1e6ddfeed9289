use crate::core::FieldId;
use crate::core::error_state::ErrorState;
use crate::core::form_state::{FormState, FormVariant};
use crate::input::validators::{self, Validator};

pub const NAME_REQUIRED: &str = "Full name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_REQUIRED: &str = "Email address is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Please enter a valid phone number";
pub const INTEREST_REQUIRED: &str = "Please select an option";
pub const COUNTRY_REQUIRED: &str = "Please select a country";
pub const EVENT_NAME_REQUIRED: &str = "Event name is required";

/// Decides from sibling values whether a rule applies at all.
pub type Condition = fn(&FormState) -> bool;

pub struct FieldRule {
    pub field: FieldId,
    validators: Vec<Validator>,
    condition: Option<Condition>,
}

impl FieldRule {
    pub fn new(field: FieldId) -> Self {
        Self {
            field,
            validators: Vec::new(),
            condition: None,
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn only_when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn check(&self, value: &str, state: &FormState) -> Option<String> {
        if let Some(condition) = self.condition {
            if !condition(state) {
                return None;
            }
        }
        validators::run_validators(&self.validators, value).err()
    }
}

/// The validation rules of one form variant, in display order.
pub struct RuleSet {
    variant: FormVariant,
    rules: Vec<FieldRule>,
}

impl RuleSet {
    pub fn for_variant(variant: FormVariant) -> Self {
        let mut rules = vec![
            FieldRule::new(FieldId::Name)
                .with_validator(validators::required(NAME_REQUIRED))
                .with_validator(validators::min_trimmed_length(2, NAME_TOO_SHORT)),
            FieldRule::new(FieldId::Email)
                .with_validator(validators::required(EMAIL_REQUIRED))
                .with_validator(validators::email(EMAIL_INVALID)),
            FieldRule::new(FieldId::Phone)
                .with_validator(validators::required(PHONE_REQUIRED))
                .with_validator(validators::phone(PHONE_INVALID)),
            FieldRule::new(FieldId::AbroadInterest)
                .with_validator(validators::required(INTEREST_REQUIRED)),
        ];

        match variant {
            FormVariant::Destination => rules.push(
                FieldRule::new(FieldId::Country)
                    .with_validator(validators::required(COUNTRY_REQUIRED))
                    .only_when(FormState::wants_country),
            ),
            FormVariant::Event => rules.push(
                FieldRule::new(FieldId::EventName)
                    .with_validator(validators::required(EVENT_NAME_REQUIRED)),
            ),
        }

        Self { variant, rules }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    /// Checks `value` as the candidate content of `field`, reading siblings
    /// from `state`. Fields outside the variant never report errors.
    pub fn validate(&self, field: FieldId, value: &str, state: &FormState) -> Option<String> {
        self.rules
            .iter()
            .find(|rule| rule.field == field)
            .and_then(|rule| rule.check(value, state))
    }

    pub fn validate_field(&self, field: FieldId, state: &FormState) -> Option<String> {
        self.validate(field, &state.value(field), state)
    }

    pub fn validate_all(&self, state: &FormState) -> ErrorState {
        let mut errors = ErrorState::new();
        for rule in &self.rules {
            errors.set(rule.field, rule.check(&state.value(rule.field), state));
        }
        errors
    }
}
