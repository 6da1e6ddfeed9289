use crate::terminal::terminal_event::TerminalEvent;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::ui::frame::Line;
use crate::ui::style::{Color, Style};
use crossterm::event::{self as ct, Event, KeyEventKind};
use crossterm::style::{Attribute, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

/// Raw-mode stdout plus the last known cursor position. The render pipeline
/// relies on the cached position to find its region after scrolling.
pub struct Terminal {
    stdout: Stdout,
    cursor: Pos,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (x, y) = cursor::position()?;
        Ok(Self {
            stdout: io::stdout(),
            cursor: Pos { x, y },
        })
    }

    pub fn writer_mut(&mut self) -> &mut Stdout {
        &mut self.stdout
    }

    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    pub fn exit_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    pub fn set_line_wrap(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(self.stdout, terminal::EnableLineWrap)
        } else {
            execute!(self.stdout, terminal::DisableLineWrap)
        }
    }

    pub fn cursor_position(&self) -> Pos {
        self.cursor
    }

    pub fn refresh_cursor_position(&mut self) -> io::Result<()> {
        let (x, y) = cursor::position()?;
        self.cursor = Pos { x, y };
        Ok(())
    }

    pub fn poll(&self, timeout: Duration) -> io::Result<bool> {
        ct::poll(timeout)
    }

    /// Blocks until a key press or resize arrives; releases, repeats and
    /// mouse events are skipped.
    pub fn read_event(&mut self) -> io::Result<TerminalEvent> {
        loop {
            match ct::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(TerminalEvent::Key(map_key_event(key)));
                }
                Event::Resize(width, height) => {
                    return Ok(TerminalEvent::Resize { width, height });
                }
                _ => {}
            }
        }
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Hide)
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Show)
    }

    pub fn clear_from_cursor_down(&mut self) -> io::Result<()> {
        execute!(self.stdout, terminal::Clear(terminal::ClearType::FromCursorDown))
    }

    pub fn queue_move_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(x, y))?;
        self.cursor = Pos { x, y };
        Ok(())
    }

    pub fn queue_clear_line(&mut self) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(terminal::ClearType::CurrentLine))
    }

    pub fn render_line(&mut self, line: &Line) -> io::Result<()> {
        for span in line.spans() {
            let styled = apply_style(&mut self.stdout, *span.style())?;
            write!(self.stdout, "{}", span.text())?;
            if styled {
                queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

/// Queues the escape codes for `style`. Returns whether anything was set.
fn apply_style(out: &mut Stdout, style: Style) -> io::Result<bool> {
    let mut styled = false;
    if let Some(fg) = style.color() {
        queue!(out, SetForegroundColor(map_color(fg)))?;
        styled = true;
    }
    if let Some(bg) = style.background() {
        queue!(out, SetBackgroundColor(map_color(bg)))?;
        styled = true;
    }
    for (enabled, attribute) in [
        (style.bold(), Attribute::Bold),
        (style.dim(), Attribute::Dim),
        (style.underline(), Attribute::Underlined),
    ] {
        if enabled {
            queue!(out, SetAttribute(attribute))?;
            styled = true;
        }
    }
    Ok(styled)
}

fn map_color(color: Color) -> crossterm::style::Color {
    use crossterm::style::Color as Ct;
    match color {
        Color::Black => Ct::Black,
        Color::DarkGrey => Ct::DarkGrey,
        Color::Red => Ct::Red,
        Color::Green => Ct::Green,
        Color::Yellow => Ct::Yellow,
        Color::Blue => Ct::Blue,
        Color::Magenta => Ct::Magenta,
        Color::Cyan => Ct::Cyan,
        Color::White => Ct::White,
    }
}

fn map_key_event(event: ct::KeyEvent) -> KeyEvent {
    KeyEvent::new(map_key_code(event.code), map_key_modifiers(event.modifiers))
}

fn map_key_code(code: ct::KeyCode) -> KeyCode {
    match code {
        ct::KeyCode::Char(ch) => KeyCode::Char(ch),
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::BackTab => KeyCode::BackTab,
        ct::KeyCode::Delete => KeyCode::Delete,
        _ => KeyCode::Other,
    }
}

fn map_key_modifiers(modifiers: ct::KeyModifiers) -> KeyModifiers {
    [
        (ct::KeyModifiers::SHIFT, KeyModifiers::SHIFT),
        (ct::KeyModifiers::CONTROL, KeyModifiers::CONTROL),
        (ct::KeyModifiers::ALT, KeyModifiers::ALT),
    ]
    .into_iter()
    .filter(|(from, _)| modifiers.contains(*from))
    .fold(KeyModifiers::NONE, |acc, (_, to)| acc | to)
}

#[cfg(test)]
mod tests {
    use super::{map_key_code, map_key_event, map_key_modifiers};
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
    use crossterm::event as ct;

    #[test]
    fn maps_ctrl_s() {
        let event = ct::KeyEvent::new(ct::KeyCode::Char('s'), ct::KeyModifiers::CONTROL);
        assert_eq!(map_key_event(event), KeyEvent::ctrl(KeyCode::Char('s')));
    }

    #[test]
    fn combines_modifiers() {
        let mapped = map_key_modifiers(ct::KeyModifiers::SHIFT | ct::KeyModifiers::CONTROL);
        assert!(mapped.contains(KeyModifiers::SHIFT));
        assert!(mapped.contains(KeyModifiers::CONTROL));
        assert!(!mapped.contains(KeyModifiers::ALT));
        assert_eq!(map_key_modifiers(ct::KeyModifiers::NONE), KeyModifiers::NONE);
    }

    #[test]
    fn unsupported_keys_map_to_other() {
        assert_eq!(map_key_code(ct::KeyCode::F(5)), KeyCode::Other);
        assert_eq!(map_key_code(ct::KeyCode::BackTab), KeyCode::BackTab);
    }
}
