use crate::core::FieldId;
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    Submit,
}

/// Keys an input wants to see before the global bindings do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputCaps {
    pub capture_ctrl_backspace: bool,
    pub capture_ctrl_delete: bool,
    pub capture_ctrl_left: bool,
    pub capture_ctrl_right: bool,
}

impl InputCaps {
    pub fn captures_key(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if !modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match code {
            KeyCode::Backspace => self.capture_ctrl_backspace,
            KeyCode::Delete => self.capture_ctrl_delete,
            KeyCode::Left => self.capture_ctrl_left,
            KeyCode::Right => self.capture_ctrl_right,
            _ => false,
        }
    }
}

pub trait Input: Send {
    fn id(&self) -> FieldId;
    fn label(&self) -> &str;
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    fn clear(&mut self);

    fn is_focused(&self) -> bool;
    fn set_focused(&mut self, focused: bool);

    fn capabilities(&self) -> InputCaps {
        InputCaps::default()
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult;

    fn render_content(&self, theme: &Theme) -> Vec<Span>;

    /// Display column of the cursor inside the rendered content, if the
    /// input shows a cursor at all.
    fn cursor_offset_in_content(&self) -> Option<usize> {
        None
    }

    fn delete_word(&mut self) {}
    fn delete_word_forward(&mut self) {}
}

pub struct InputBase {
    pub id: FieldId,
    pub label: String,
    pub placeholder: String,
    pub focused: bool,
}

impl InputBase {
    pub fn new(id: FieldId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            placeholder: String::new(),
            focused: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}
