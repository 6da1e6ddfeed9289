#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Destructive,
}

/// Transient message shown after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn rejected() -> Self {
        Self {
            kind: NoticeKind::Destructive,
            title: "Validation Error".to_string(),
            description: "Please fix all errors before submitting".to_string(),
        }
    }

    pub fn submitted() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Registration Successful!".to_string(),
            description: "Your registration has been submitted successfully.".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}
