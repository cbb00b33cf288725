use std::env;
use std::path::Path;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::library::scan;
use crate::player::{CommandLauncher, FragmentPlayer};
use crate::quiz::QuizSession;

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init(&settings.logging);

    let dir = env::args().nth(1).unwrap_or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| "Music".to_string())
    });

    println!("Loading library from {dir}...");
    let tracks = scan(Path::new(&dir), &settings.library);

    // The only fatal condition: without four tracks there is no game to play.
    let session = match QuizSession::new(tracks, StdRng::from_os_rng()) {
        Ok(session) => session,
        Err(e) => {
            log::error!("cannot start a game from {dir}: {e}");
            eprintln!("tunequiz: {e} in {dir}");
            std::process::exit(1);
        }
    };

    let player = FragmentPlayer::new(CommandLauncher::new(settings.player.clone()));
    let mut app = App::new(session, player);
    app.set_current_dir(dir);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    app.stop_playback();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if run_result.is_ok() {
        println!(
            "Final score: {}/{}",
            app.session.score(),
            crate::quiz::ROUNDS
        );
    }
    run_result
}
