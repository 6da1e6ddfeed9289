use crate::core::notice::NoticeKind;
use crate::core::state::AppState;
use crate::ui::frame::{Frame, Line};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

const FOCUS_MARKER: &str = "› ";
const BLUR_MARKER: &str = "  ";
const HINT: &str = "Tab/Shift+Tab: move  ←/→ or letter: choose  Enter: next/submit  Ctrl+S: submit  Esc: quit";

/// Builds the frame for the current form state. Pure; drawing happens in
/// the pipeline.
pub struct Renderer<'a> {
    theme: &'a Theme,
    title: &'a str,
}

impl<'a> Renderer<'a> {
    pub fn new(theme: &'a Theme, title: &'a str) -> Self {
        Self { theme, title }
    }

    pub fn render(&self, state: &AppState) -> Frame {
        let mut frame = Frame::new();

        if let Some(logo) = state.form.logo_path() {
            frame.push(Line::from_spans([Span::styled(
                format!("[{}]", logo.display()),
                self.theme.logo,
            )]));
        }
        frame.push(Line::from_spans([Span::styled(self.title, self.theme.title)]));
        frame.push(Line::new());

        let focused = state.engine.focused_id();
        for field in state.engine.visible() {
            let Some(input) = state.engine.input(*field) else {
                continue;
            };
            let is_focused = focused == Some(*field);

            let marker = if is_focused { FOCUS_MARKER } else { BLUR_MARKER };
            let label_style = if is_focused {
                self.theme.focused
            } else {
                self.theme.label
            };
            let prefix = format!("{}{}: ", marker, input.label());

            let mut line = Line::new();
            line.push(Span::styled(&prefix, label_style));
            for span in input.render_content(self.theme) {
                line.push(span);
            }

            if is_focused {
                if let Some(offset) = input.cursor_offset_in_content() {
                    frame.set_cursor(prefix.width() + offset, frame.len());
                }
            }
            frame.push(line);

            if let Some(error) = state.form.error(*field) {
                frame.push(Line::from_spans([Span::styled(
                    format!("    ! {}", error),
                    self.theme.error,
                )]));
            }
        }

        frame.push(Line::new());
        frame.push(Line::from_spans([Span::styled(
            format!("{}[ Submit ]", BLUR_MARKER),
            self.theme.button,
        )]));
        frame.push(Line::from_spans([Span::styled(HINT, self.theme.hint)]));

        if let Some(notice) = &state.notice {
            let style = match notice.kind {
                NoticeKind::Success => self.theme.success,
                NoticeKind::Destructive => self.theme.destructive,
            };
            frame.push(Line::new());
            frame.push(Line::from_spans([
                Span::styled(format!("{}: ", notice.title), style),
                Span::new(&notice.description),
            ]));
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::Renderer;
    use crate::core::FieldId;
    use crate::core::controller::RegistrationForm;
    use crate::core::event::Action;
    use crate::core::form_state::FormVariant;
    use crate::core::reducer::Reducer;
    use crate::core::state::AppState;
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::ui::theme::Theme;
    use std::time::Duration;

    fn render(state: &AppState) -> Vec<String> {
        let theme = Theme::default_theme();
        Renderer::new(&theme, "Student Registration Form")
            .render(state)
            .plain_lines()
    }

    #[test]
    fn empty_destination_form_hides_country() {
        let state = AppState::new(
            RegistrationForm::new(FormVariant::Destination).with_logo("assets/logo.png"),
        );
        let lines = render(&state);

        assert_eq!(lines[0], "[assets/logo.png]");
        assert_eq!(lines[1], "Student Registration Form");
        assert_eq!(lines[3], "› Full Name: Full Name");
        assert!(lines.iter().any(|l| l == "  Interested in Abroad Study?: Select an option"));
        assert!(!lines.iter().any(|l| l.contains("Select Country")));
        assert!(lines.iter().any(|l| l == "  [ Submit ]"));
    }

    #[test]
    fn errors_and_notice_are_shown_after_rejected_submit() {
        let mut state = AppState::new(RegistrationForm::new(FormVariant::Event));
        Reducer::reduce(&mut state, Action::Submit, Duration::from_secs(3));
        let lines = render(&state);

        assert!(lines.iter().any(|l| l == "    ! Full name is required"));
        assert!(lines.iter().any(|l| l == "    ! Event name is required"));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Validation Error: Please fix all errors before submitting")
        );
    }

    #[test]
    fn cursor_sits_after_typed_text() {
        let mut state = AppState::new(RegistrationForm::new(FormVariant::Destination));
        for ch in "Jo".chars() {
            Reducer::reduce(
                &mut state,
                Action::InputKey(KeyEvent::plain(KeyCode::Char(ch))),
                Duration::from_secs(3),
            );
        }
        let theme = Theme::default_theme();
        let frame = Renderer::new(&theme, "Form").render(&state);
        let prefix = "› Full Name: ".chars().count();
        assert_eq!(frame.cursor(), Some(((prefix + 2) as u16, 2)));
        assert_eq!(state.engine.focused_id(), Some(FieldId::Name));
    }

    #[test]
    fn focused_select_shows_arrows() {
        let mut state = AppState::new(RegistrationForm::new(FormVariant::Destination));
        Reducer::reduce(&mut state, Action::PrevInput, Duration::from_secs(3));
        let lines = render(&state);
        assert!(lines
            .iter()
            .any(|l| l == "› Interested in Abroad Study?: ‹ Select an option ›"));
    }
}
