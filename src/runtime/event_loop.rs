use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::player::Launcher;
use crate::ui;

/// Main terminal event loop: handles input and UI drawing, and keeps the
/// playing indicator in sync with the player. Returns `Ok(())` when the user
/// quits.
pub fn run<R: Rng, L: Launcher>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<R, L>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick();
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one key press to `app`. Returns true when the user asked to quit.
fn handle_key_event<R: Rng, L: Launcher>(key: KeyEvent, app: &mut App<R, L>) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('p') | KeyCode::Char(' ') => app.play_fragment(),
        KeyCode::Char(c @ '1'..='4') => app.answer(c as usize - '1' as usize),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Enter => app.answer_selected(),
        KeyCode::Char('n') => app.continue_game(),
        _ => {}
    }
    false
}
