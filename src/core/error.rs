use crate::core::FieldId;
use crate::core::form_state::FormVariant;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{field}` is not part of the {variant} form")]
    FieldNotInVariant { field: FieldId, variant: FormVariant },
}
