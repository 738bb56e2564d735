//! Draw the default banner in the terminal.
//!
//! Click a dot to toggle it, `q` or `Esc` to quit. Run with
//! `RUST_LOG=debug` to see lifecycle logging on stderr.

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{
    poll, read, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};

use spark_matrix::display::{Display, DisplayOptions};
use spark_matrix::interaction::EventHandlers;
use spark_matrix::surface::TerminalSurface;

type TerminalDisplay = Display<TerminalSurface>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = DisplayOptions::new()
        .canvas(TerminalSurface::stdout().with_origin(2, 1))
        .events(EventHandlers::new().on_click(|cell| {
            cell.toggle();
            false
        }));
    let mut display = TerminalDisplay::new(options)?;

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture, Clear(ClearType::All))?;

    let result = run(&mut display);

    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run(display: &mut TerminalDisplay) -> Result<(), Box<dyn std::error::Error>> {
    display.init()?;
    present(display)?;

    loop {
        if !poll(Duration::from_millis(50))? {
            if display.tick(Duration::from_millis(50)) {
                present(display)?;
            }
            continue;
        }

        match read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                let pointer = display
                    .surface()
                    .and_then(|surface| surface.translate_mouse(mouse));
                if let Some(pointer) = pointer {
                    display.dispatch(pointer);
                    display.refresh()?;
                    present(display)?;
                }
            }
            _ => {}
        }
    }
}

fn present(display: &mut TerminalDisplay) -> io::Result<()> {
    match display.surface_mut() {
        Some(surface) => surface.present(),
        None => Ok(()),
    }
}
