use anyhow::{Context, Result};
use clap::Parser;
use registration_form::app::App;
use registration_form::cli::Cli;
use registration_form::logging;
use registration_form::terminal::Terminal;
use registration_form::terminal_event::TerminalEvent;
use std::io;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config().context("failed to load configuration")?;
    let _log_guard = logging::init(cli.log_file.as_deref(), &config.log_level)?;
    info!(variant = %config.variant, "starting registration form");

    let app = App::new(config.build_form(), config.app_options());

    let mut terminal = Terminal::new().context("failed to open terminal")?;
    terminal.enter_raw_mode()?;
    run_then_restore(
        &mut terminal,
        |terminal| {
            terminal.set_line_wrap(false)?;
            event_loop(terminal, app)
        },
        restore,
    )?;
    Ok(())
}

/// Runs `body`, then `restore` whatever `body` returned. The body's error
/// wins over the restore error.
fn run_then_restore<T>(
    target: &mut T,
    body: impl FnOnce(&mut T) -> io::Result<()>,
    restore: impl FnOnce(&mut T) -> io::Result<()>,
) -> io::Result<()> {
    let result = body(target);
    let restored = restore(target);

    if let Err(e) = &result {
        error!(error = %e, "event loop failed");
    }
    result.and(restored)
}

fn event_loop(terminal: &mut Terminal, mut app: App) -> io::Result<()> {
    let mut render_requested = true;

    loop {
        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key_event) => {
                    app.handle_key(key_event);
                }
                TerminalEvent::Resize { .. } => {
                    render_requested = true;
                }
            }
        }

        if app.tick() {
            render_requested = true;
        }

        if app.should_exit() {
            break;
        }

        if render_requested {
            app.render(terminal)?;
            render_requested = false;
        }
    }

    app.pipeline.move_to_end(terminal)?;
    terminal.clear_from_cursor_down()?;
    Ok(())
}

fn restore(terminal: &mut Terminal) -> io::Result<()> {
    terminal.show_cursor()?;
    terminal.set_line_wrap(true)?;
    terminal.exit_raw_mode()
}
