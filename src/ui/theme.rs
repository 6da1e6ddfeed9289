use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub logo: Style,
    pub label: Style,
    pub hint: Style,
    pub error: Style,
    pub placeholder: Style,
    pub focused: Style,
    pub button: Style,
    pub success: Style,
    pub destructive: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().with_bold(),
            logo: Style::new().with_color(Color::Cyan),
            label: Style::new(),
            hint: Style::new().with_color(Color::DarkGrey),
            error: Style::new().with_color(Color::Red),
            placeholder: Style::new().with_color(Color::DarkGrey),
            focused: Style::new().with_bold().with_color(Color::Cyan),
            button: Style::new().with_bold(),
            success: Style::new().with_color(Color::Green).with_bold(),
            destructive: Style::new().with_color(Color::Red).with_bold(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
