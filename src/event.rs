use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::app::{App, AppEvent};

/// How often the terminal color scheme is re-checked.
const TICK_RATE: Duration = Duration::from_millis(500);

/// Waits up to `timeout` for a key press and maps it to an `AppEvent`.
/// Ctrl+C is folded into `q`.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(AppEvent::KeyPress(KeyCode::Char('q'))));
            }
            Ok(Some(AppEvent::KeyPress(key.code)))
        }
        _ => Ok(None),
    }
}

/// Runs the main event loop until the app stops.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    let mut last_tick = Instant::now();

    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if let Some(event) = poll(timeout)? {
            app.update(event);
        }
        if last_tick.elapsed() >= TICK_RATE {
            app.update(AppEvent::Tick);
            last_tick = Instant::now();
        }
    }
    Ok(())
}
