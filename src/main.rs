//! PROBE - a word deduction game against three computer players
//!
//! Hide a word. Ask for letters. Crack theirs first.

mod app;
mod config;
mod game;
mod stats;
mod tui;

use app::App;
use config::Settings;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game::Tier;
use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tui::Tui;

/// How long to wait for input before letting the computer players move
const TICK_RATE: Duration = Duration::from_millis(50);

fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings::from_env()?;
    if settings.log_level != log::LevelFilter::Off {
        match config::init_logging(settings.log_level) {
            Ok(path) => log::info!("logging to {}", path.display()),
            Err(e) => eprintln!("logging disabled: {}", e),
        }
    }

    let dictionary = settings.load_dictionary()?;
    log::info!(
        "{} words loaded ({} common, {} medium, {} rare)",
        dictionary.word_count(),
        dictionary.words_by_tier(Tier::Common).len(),
        dictionary.words_by_tier(Tier::Medium).len(),
        dictionary.words_by_tier(Tier::Rare).len()
    );
    if let Some(seed) = settings.seed {
        log::info!("seeded session: {}", seed);
    }

    let mut app = App::new(
        Arc::new(dictionary),
        settings.difficulty,
        settings.rng(0),
        settings.rng(1),
    );

    let mut terminal = Tui::new()?;
    terminal.enter()?;

    loop {
        terminal.draw(|frame| tui::render(frame, &app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key);
                }
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    log::info!(
        "session over: {} played, {} won",
        app.stats.games_played,
        app.stats.games_won
    );
    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('?') => app.toggle_rules(),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => app.on_char(c),
        KeyCode::Esc => app.on_escape(),
        KeyCode::Enter => app.on_enter(),
        KeyCode::Backspace => app.on_backspace(),
        KeyCode::Tab => app.on_tab(),
        KeyCode::Left => app.on_left(),
        KeyCode::Right => app.on_right(),
        KeyCode::Up => app.on_up(),
        KeyCode::Down => app.on_down(),
        _ => {}
    }
}
