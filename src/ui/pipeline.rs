use crate::terminal::Terminal;
use crate::ui::frame::{Frame, Line};
use std::io::{self, Write};

struct RenderRegion {
    start_row: u16,
    line_count: usize,
}

/// Draws frames into a region that starts at the cursor position of the
/// first draw and grows downward as needed.
pub struct RenderPipeline {
    region: Option<RenderRegion>,
}

impl RenderPipeline {
    pub fn new() -> Self {
        Self { region: None }
    }

    pub fn draw(&mut self, terminal: &mut Terminal, frame: &Frame) -> io::Result<()> {
        let lines = frame.lines();
        let start = self.ensure_region(terminal, lines.len())?;

        for (idx, line) in lines.iter().enumerate() {
            self.draw_line_at(terminal, start + idx as u16, line)?;
        }
        self.clear_extra_lines(terminal, start, lines.len())?;

        match frame.cursor() {
            Some((col, row)) => {
                terminal.queue_move_cursor(col, start + row)?;
                terminal.show_cursor()?;
            }
            None => terminal.hide_cursor()?,
        }

        terminal.flush()
    }

    pub fn move_to_end(&self, terminal: &mut Terminal) -> io::Result<()> {
        if let Some(region) = &self.region {
            let end_row = region.start_row + region.line_count as u16;
            terminal.queue_move_cursor(0, end_row)?;
            terminal.flush()?;
        }
        Ok(())
    }

    fn ensure_region(&mut self, terminal: &mut Terminal, line_count: usize) -> io::Result<u16> {
        if let Some(region) = &mut self.region {
            if line_count > region.line_count {
                let extra = line_count - region.line_count;
                let end_row = region.start_row + region.line_count as u16;
                terminal.queue_move_cursor(0, end_row)?;
                for _ in 0..extra {
                    writeln!(terminal.writer_mut())?;
                }
                terminal.flush()?;

                // Writing past the bottom scrolls the screen up.
                terminal.refresh_cursor_position()?;
                let bottom = terminal.cursor_position().y;
                region.start_row = bottom.saturating_sub(line_count as u16);
                region.line_count = line_count;
            }
            return Ok(region.start_row);
        }

        terminal.refresh_cursor_position()?;
        let pos = terminal.cursor_position();
        terminal.queue_move_cursor(0, pos.y)?;

        for _ in 0..line_count {
            writeln!(terminal.writer_mut())?;
        }
        terminal.flush()?;

        terminal.refresh_cursor_position()?;
        let pos = terminal.cursor_position();
        let start = pos.y.saturating_sub(line_count as u16);

        self.region = Some(RenderRegion {
            start_row: start,
            line_count,
        });

        Ok(start)
    }

    fn clear_extra_lines(
        &mut self,
        terminal: &mut Terminal,
        start: u16,
        current_len: usize,
    ) -> io::Result<()> {
        let Some(region) = &self.region else {
            return Ok(());
        };

        for idx in current_len..region.line_count {
            terminal.queue_move_cursor(0, start + idx as u16)?;
            terminal.queue_clear_line()?;
        }
        Ok(())
    }

    fn draw_line_at(&self, terminal: &mut Terminal, row: u16, line: &Line) -> io::Result<()> {
        terminal.queue_move_cursor(0, row)?;
        terminal.queue_clear_line()?;
        terminal.render_line(line)
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new()
    }
}
