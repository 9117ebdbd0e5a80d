use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use skybird::assets::{AssetProvider, GameAssets};
use skybird::audio::{cue_for, AudioPlayer, TerminalBell};
use skybird::constants::TICK_INTERVAL_MS;
use skybird::game::{process_events, process_tick, GameSession, SessionOutcome};
use skybird::highscores::HighScoreStore;
use skybird::input::{map_key, poll_events, InputEvent};
use skybird::ui;
use std::io;
use std::time::{Duration, Instant};

enum Screen {
    Title,
    Playing,
    GameOver { score: u32 },
}

/// A single blocking keypress for the menu screens, mapped to a simulation
/// event if it is one of ours.
fn wait_menu_key() -> io::Result<Option<InputEvent>> {
    if event::poll(Duration::from_millis(50))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(map_key(key.code));
            }
        }
    }
    Ok(None)
}

fn main() -> io::Result<()> {
    // Explicit context instead of globals: assets, the high-score store and
    // the audio sink are built once and handed to whoever needs them.
    let provider = AssetProvider::new("assets");
    let assets = GameAssets::load(&provider);
    let store = HighScoreStore::new()?;
    let mut highscores = store.load();
    let audio = TerminalBell;
    let mut rng = rand::thread_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut screen = Screen::Title;
    let mut session: Option<GameSession> = None;

    loop {
        match screen {
            Screen::Title => {
                terminal.draw(|f| {
                    let area = f.size();
                    ui::screens::render_title(f, area, &highscores);
                })?;
                match wait_menu_key()? {
                    Some(InputEvent::Jump) => {
                        session = Some(GameSession::new(&assets));
                        screen = Screen::Playing;
                    }
                    Some(InputEvent::Quit) => break,
                    None => {}
                }
            }

            Screen::Playing => {
                let tick_start = Instant::now();
                let mut outcome = None;

                if let Some(active) = session.as_mut() {
                    let inputs = poll_events()?;
                    for event in process_events(active, &inputs) {
                        audio.play(cue_for(&event));
                    }
                    for event in process_tick(active, &mut rng) {
                        audio.play(cue_for(&event));
                    }

                    terminal.draw(|f| {
                        let area = f.size();
                        ui::scene::render_session(f, area, active, &assets);
                    })?;
                    outcome = active.outcome();
                }

                match outcome {
                    Some(SessionOutcome::Completed { score }) => {
                        highscores.record(score);
                        // A failed write should not take down the
                        // end-of-run screen.
                        let _ = store.save(&highscores);
                        session = None;
                        screen = Screen::GameOver { score };
                    }
                    Some(SessionOutcome::Aborted) => break,
                    None => {
                        // Hold the fixed 60 Hz tick rate.
                        let elapsed = tick_start.elapsed();
                        if let Some(remaining) =
                            Duration::from_millis(TICK_INTERVAL_MS).checked_sub(elapsed)
                        {
                            std::thread::sleep(remaining);
                        }
                    }
                }
            }

            Screen::GameOver { score } => {
                terminal.draw(|f| {
                    let area = f.size();
                    ui::screens::render_game_over(f, area, score, &highscores);
                })?;
                match wait_menu_key()? {
                    Some(InputEvent::Jump) => {
                        session = Some(GameSession::new(&assets));
                        screen = Screen::Playing;
                    }
                    Some(InputEvent::Quit) => break,
                    None => {}
                }
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
