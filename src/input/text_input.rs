use crate::core::FieldId;
use crate::input::{Input, InputBase, InputCaps, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthChar;

pub struct TextInput {
    base: InputBase,
    value: String,
    cursor_pos: usize,
}

impl TextInput {
    pub fn new(id: FieldId, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            value: String::new(),
            cursor_pos: 0,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.base = self.base.with_placeholder(placeholder);
        self
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn handle_char(&mut self, ch: char) {
        let byte_pos = self.byte_index(self.cursor_pos);
        self.value.insert(byte_pos, ch);
        self.cursor_pos += 1;
    }

    fn handle_backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let byte_pos = self.byte_index(self.cursor_pos - 1);
        self.value.remove(byte_pos);
        self.cursor_pos -= 1;
    }

    fn handle_delete(&mut self) {
        if self.cursor_pos >= self.value.chars().count() {
            return;
        }
        let byte_pos = self.byte_index(self.cursor_pos);
        self.value.remove(byte_pos);
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@')
    }

    fn word_start_before(&self, from: usize) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = from;
        while pos > 0 && Self::is_separator(chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !Self::is_separator(chars[pos - 1]) {
            pos -= 1;
        }
        pos
    }

    fn word_end_after(&self, from: usize) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = from;
        while pos < chars.len() && Self::is_separator(chars[pos]) {
            pos += 1;
        }
        while pos < chars.len() && !Self::is_separator(chars[pos]) {
            pos += 1;
        }
        pos
    }

    fn remove_chars(&mut self, start: usize, end: usize) {
        let from = self.byte_index(start);
        let to = self.byte_index(end);
        self.value.replace_range(from..to, "");
    }
}

impl Input for TextInput {
    fn id(&self) -> FieldId {
        self.base.id
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor_pos = self.value.chars().count();
    }

    fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
    }

    fn capabilities(&self) -> InputCaps {
        InputCaps {
            capture_ctrl_backspace: true,
            capture_ctrl_delete: true,
            capture_ctrl_left: true,
            capture_ctrl_right: true,
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Char(ch) if !ctrl => {
                self.handle_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace if ctrl => {
                self.delete_word();
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.handle_backspace();
                KeyResult::Handled
            }
            KeyCode::Delete if ctrl => {
                self.delete_word_forward();
                KeyResult::Handled
            }
            KeyCode::Delete => {
                self.handle_delete();
                KeyResult::Handled
            }
            KeyCode::Left => {
                self.cursor_pos = if ctrl {
                    self.word_start_before(self.cursor_pos)
                } else {
                    self.cursor_pos.saturating_sub(1)
                };
                KeyResult::Handled
            }
            KeyCode::Right => {
                let len = self.value.chars().count();
                self.cursor_pos = if ctrl {
                    self.word_end_after(self.cursor_pos)
                } else {
                    (self.cursor_pos + 1).min(len)
                };
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.value.chars().count();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        if self.value.is_empty() {
            return vec![Span::styled(&self.base.placeholder, theme.placeholder)];
        }
        vec![Span::new(&self.value)]
    }

    fn cursor_offset_in_content(&self) -> Option<usize> {
        Some(
            self.value
                .chars()
                .take(self.cursor_pos)
                .map(|c| c.width().unwrap_or(0))
                .sum(),
        )
    }

    fn delete_word(&mut self) {
        let start = self.word_start_before(self.cursor_pos);
        self.remove_chars(start, self.cursor_pos);
        self.cursor_pos = start;
    }

    fn delete_word_forward(&mut self) {
        let end = self.word_end_after(self.cursor_pos);
        self.remove_chars(self.cursor_pos, end);
    }
}

#[cfg(test)]
mod tests {
    use super::TextInput;
    use crate::core::FieldId;
    use crate::input::{Input, KeyResult};
    use crate::terminal::{KeyCode, KeyModifiers};

    fn type_str(input: &mut TextInput, text: &str) {
        for ch in text.chars() {
            input.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut input = TextInput::new(FieldId::Name, "Full Name");
        type_str(&mut input, "Ada");
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        type_str(&mut input, "Lady ");
        assert_eq!(input.value(), "Lady Ada");
        assert_eq!(input.cursor_pos(), 5);
    }

    #[test]
    fn backspace_and_delete_handle_multibyte() {
        let mut input = TextInput::new(FieldId::Name, "Full Name");
        type_str(&mut input, "Zoë!");
        input.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        input.handle_key(KeyCode::Left, KeyModifiers::NONE);
        input.handle_key(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(input.value(), "Zo");
    }

    #[test]
    fn word_deletion_stops_at_separators() {
        let mut input = TextInput::new(FieldId::Email, "Email Address");
        type_str(&mut input, "asha@example.in");
        input.delete_word();
        assert_eq!(input.value(), "asha@example.");
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        input.delete_word_forward();
        assert_eq!(input.value(), "@example.");
    }

    #[test]
    fn enter_requests_submit() {
        let mut input = TextInput::new(FieldId::Phone, "Phone");
        assert_eq!(
            input.handle_key(KeyCode::Enter, KeyModifiers::NONE),
            KeyResult::Submit
        );
        assert_eq!(
            input.handle_key(KeyCode::Char('s'), KeyModifiers::CONTROL),
            KeyResult::NotHandled
        );
        assert_eq!(input.value(), "");
    }

    #[test]
    fn cursor_offset_uses_display_width() {
        let mut input = TextInput::new(FieldId::Name, "Full Name");
        type_str(&mut input, "李a");
        assert_eq!(input.cursor_offset_in_content(), Some(3));
    }
}
