use crate::core::FieldId;
use crate::input::{Input, InputBase, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;

/// A fixed list of options that starts with nothing selected.
pub struct SelectInput {
    base: InputBase,
    options: Vec<String>,
    selected: Option<usize>,
}

impl SelectInput {
    pub fn new<I, S>(id: FieldId, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base: InputBase::new(id, label),
            options: options.into_iter().map(Into::into).collect(),
            selected: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.base = self.base.with_placeholder(placeholder);
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    fn current_option(&self) -> Option<&str> {
        self.selected
            .and_then(|idx| self.options.get(idx))
            .map(String::as_str)
    }

    fn select_prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        self.selected = Some(match self.selected {
            Some(idx) => (idx + len - 1) % len,
            None => len - 1,
        });
    }

    fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1) % len,
            None => 0,
        });
    }

    /// Jumps to the next option starting with `ch`, cycling among matches.
    fn select_by_initial(&mut self, ch: char) -> bool {
        let len = self.options.len();
        let start = self.selected.map(|idx| idx + 1).unwrap_or(0);
        let found = (0..len).map(|step| (start + step) % len).find(|&idx| {
            self.options[idx]
                .chars()
                .next()
                .is_some_and(|first| first.eq_ignore_ascii_case(&ch))
        });
        if found.is_some() {
            self.selected = found;
        }
        found.is_some()
    }
}

impl Input for SelectInput {
    fn id(&self) -> FieldId {
        self.base.id
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        self.current_option().unwrap_or("").to_string()
    }

    fn set_value(&mut self, value: &str) {
        self.selected = self.options.iter().position(|opt| opt == value);
    }

    fn clear(&mut self) {
        self.selected = None;
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Left | KeyCode::Up => {
                self.select_prev();
                KeyResult::Handled
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                self.select_next();
                KeyResult::Handled
            }
            KeyCode::Char(ch) if !modifiers.contains(KeyModifiers::CONTROL) => {
                if self.select_by_initial(ch) {
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        let text = match self.current_option() {
            Some(option) => Span::new(option),
            None => Span::styled(&self.base.placeholder, theme.placeholder),
        };
        if !self.base.focused {
            return vec![text];
        }
        vec![
            Span::styled("‹ ", theme.hint),
            text,
            Span::styled(" ›", theme.hint),
        ]
    }
}
