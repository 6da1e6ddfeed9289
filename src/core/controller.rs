//! The registration form controller.
//!
//! Owns the field values and the per-field error slots of one form. Edits
//! revalidate only the edited field; a submit attempt revalidates every field
//! of the variant and decides on that fresh result.

use crate::core::FieldId;
use crate::core::error::FormError;
use crate::core::error_state::ErrorState;
use crate::core::form_state::{FormState, FormVariant};
use crate::core::notice::Notice;
use crate::core::validation::RuleSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values were kept; `errors` lists every failing field.
    Rejected { notice: Notice, errors: ErrorState },
    /// Values and errors were reset to the initial empty state.
    Accepted { notice: Notice },
}

impl SubmitOutcome {
    pub fn notice(&self) -> &Notice {
        match self {
            SubmitOutcome::Rejected { notice, .. } | SubmitOutcome::Accepted { notice } => notice,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

pub struct RegistrationForm {
    rules: RuleSet,
    state: FormState,
    errors: ErrorState,
    logo_path: Option<PathBuf>,
}

impl RegistrationForm {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            rules: RuleSet::for_variant(variant),
            state: FormState::new(),
            errors: ErrorState::new(),
            logo_path: None,
        }
    }

    pub fn with_logo(mut self, path: impl Into<PathBuf>) -> Self {
        self.logo_path = Some(path.into());
        self
    }

    pub fn variant(&self) -> FormVariant {
        self.rules.variant()
    }

    pub fn logo_path(&self) -> Option<&Path> {
        self.logo_path.as_deref()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn value(&self, field: FieldId) -> String {
        self.state.value(field)
    }

    /// Fields currently shown, in display order.
    pub fn visible_fields(&self) -> Vec<FieldId> {
        self.variant()
            .fields()
            .iter()
            .copied()
            .filter(|field| *field != FieldId::Country || self.state.wants_country())
            .collect()
    }

    pub fn set_field(&mut self, field: FieldId, value: &str) -> Result<(), FormError> {
        let variant = self.variant();
        if !variant.has_field(field) {
            return Err(FormError::FieldNotInVariant { field, variant });
        }

        // Selectors store the parsed option, so validate what was kept.
        self.state.set_value(field, value);
        let error = self.rules.validate_field(field, &self.state);
        debug!(%field, valid = error.is_none(), "field updated");
        self.errors.set(field, error);
        Ok(())
    }

    pub fn set_field_by_name(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field: FieldId = name.parse()?;
        self.set_field(field, value)
    }

    /// Validates `value` as the content of `field` against the current
    /// sibling values. Does not touch the error slots.
    pub fn validate_field(&self, field: FieldId, value: &str) -> Option<String> {
        self.rules.validate(field, value, &self.state)
    }

    pub fn is_valid(&self) -> bool {
        self.rules.validate_all(&self.state).is_empty()
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = self.rules.validate_all(&self.state);

        if !self.errors.is_empty() {
            info!(
                variant = %self.variant(),
                failing = self.errors.len(),
                "registration rejected"
            );
            return SubmitOutcome::Rejected {
                notice: Notice::rejected(),
                errors: self.errors.clone(),
            };
        }

        info!(variant = %self.variant(), "registration submitted");
        self.reset();
        SubmitOutcome::Accepted {
            notice: Notice::submitted(),
        }
    }

    pub fn reset(&mut self) {
        self.state = FormState::new();
        self.errors.clear();
    }
}
