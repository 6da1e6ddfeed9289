use crate::core::FieldId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    InputChanged {
        field: FieldId,
        value: String,
    },
    FocusChanged {
        from: Option<FieldId>,
        to: Option<FieldId>,
    },
    SubmitRequested,
}
