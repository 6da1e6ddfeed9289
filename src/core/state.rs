use crate::core::controller::RegistrationForm;
use crate::core::form_engine::FormEngine;
use crate::core::notice::Notice;

pub struct AppState {
    pub form: RegistrationForm,
    pub engine: FormEngine,
    pub notice: Option<Notice>,
    pub should_exit: bool,
}

impl AppState {
    pub fn new(form: RegistrationForm) -> Self {
        let engine = FormEngine::new(form.variant(), form.visible_fields());
        Self {
            form,
            engine,
            notice: None,
            should_exit: false,
        }
    }
}
