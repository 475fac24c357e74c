mod assets;
mod config;
mod game;
mod input;
mod ui;

use assets::audio::SoundCue;
use assets::Assets;
use config::GameConfig;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game::{process_input, process_tick, Game, GameEvent, PlayerInput};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("flapjack {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flapjack - a terminal bird with a coin habit\n");
                println!("Usage: flapjack\n");
                println!("Controls:");
                println!("  Space / left click  Flap (confirms on menus)");
                println!("  Enter               Confirm on menus");
                println!("  q / Esc / Ctrl-C    Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'flapjack --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Load assets before entering raw mode so warnings stay readable.
    let assets = Assets::load();

    let config = GameConfig::default();
    let mut game = Game::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_interval = Duration::from_millis(config.tick_interval_ms());
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, &game, &assets.bird_art))?;

        // Wait for input, but never past the next tick.
        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) => match input::map_key(key_event) {
                    PlayerInput::Quit => break,
                    other => process_input(&mut game, other),
                },
                Event::Mouse(mouse_event) => {
                    if input::map_mouse(mouse_event) == PlayerInput::Primary {
                        process_input(&mut game, PlayerInput::Primary);
                    }
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_interval {
            process_tick(&mut game, &mut rand::thread_rng());
            for event in game.take_events() {
                let cue = match event {
                    GameEvent::Flapped => SoundCue::Flap,
                    GameEvent::CoinCollected => SoundCue::Coin,
                    GameEvent::LifeLost => SoundCue::Hit,
                };
                assets.play(cue);
            }
            last_tick = Instant::now();
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Goodbye!");

    Ok(())
}
