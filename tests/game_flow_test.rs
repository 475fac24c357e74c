//! Integration test: full game flow
//!
//! Drives the game the way the main loop does, with inputs between ticks
//! and transitions applied at tick boundaries, and checks the menu,
//! playing, and game-over screens end to end: lives draining on contact,
//! grace periods, pipe passes and coin pickups feeding the score, and the
//! final summary snapshot.

use flapjack::config::GameConfig;
use flapjack::game::screen::Screen;
use flapjack::game::{process_input, process_tick, Game, GameEvent, PlayerInput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(1234)
}

/// Default tuning with a pinned gap position and coin chance, so runs
/// play out the same way every time.
fn config_with(gap_y: f64, coin_chance: f64) -> GameConfig {
    GameConfig {
        gap_min_y: gap_y,
        gap_max_y: gap_y,
        coin_spawn_chance: coin_chance,
        ..GameConfig::default()
    }
}

/// A game ticked into the playing screen.
fn playing_game(config: GameConfig, rng: &mut ChaCha8Rng) -> Game {
    let mut game = Game::new(config);
    process_input(&mut game, PlayerInput::Primary);
    process_tick(&mut game, rng);
    assert!(matches!(game.screen, Screen::Playing(_)), "round started");
    game
}

/// Flap whenever the bird sinks past its start height. This holds it in a
/// fixed 30-tick hover cycle between y=240.5 and y=300.5.
fn autopilot(game: &mut Game) {
    let should_flap = match &game.screen {
        Screen::Playing(round) => round.bird.y > game.config.bird_start_y,
        _ => false,
    };
    if should_flap {
        process_input(game, PlayerInput::Primary);
    }
}

/// Run ticks with nobody at the controls, collecting every event raised.
fn run_ticks(game: &mut Game, rng: &mut ChaCha8Rng, ticks: u32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..ticks {
        process_tick(game, rng);
        events.extend(game.take_events());
    }
    events
}

/// Run ticks with the autopilot flapping, collecting every event raised.
fn hover_ticks(game: &mut Game, rng: &mut ChaCha8Rng, ticks: u32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..ticks {
        autopilot(game);
        process_tick(game, rng);
        events.extend(game.take_events());
    }
    events
}

fn count(events: &[GameEvent], wanted: GameEvent) -> usize {
    events.iter().filter(|event| **event == wanted).count()
}

// =============================================================================
// Screen transitions
// =============================================================================

#[test]
fn test_menu_idles_until_confirmed() {
    let mut game = Game::new(GameConfig::default());
    let mut rng = rng();

    let events = run_ticks(&mut game, &mut rng, 50);
    assert!(events.is_empty(), "nothing simulates at the menu");
    assert!(matches!(game.screen, Screen::Menu));

    // Input registers immediately, the screen swap waits for the next tick.
    process_input(&mut game, PlayerInput::Confirm);
    assert!(matches!(game.screen, Screen::Menu));
    process_tick(&mut game, &mut rng);
    assert!(matches!(game.screen, Screen::Playing(_)));
}

#[test]
fn test_free_fall_run_burns_three_lives_on_the_floor() {
    let mut rng = rng();
    let mut game = playing_game(GameConfig::default(), &mut rng);

    // Nobody flaps: the bird rides the floor until its lives run out. Two
    // crashes grant grace and a restart position; the third ends the run.
    let events = run_ticks(&mut game, &mut rng, 400);

    assert_eq!(count(&events, GameEvent::LifeLost), 3);
    assert_eq!(count(&events, GameEvent::Flapped), 0);
    assert_eq!(count(&events, GameEvent::CoinCollected), 0);

    match &game.screen {
        Screen::GameOver(summary) => {
            assert_eq!(summary.score, 0, "no pipe ever reached the bird");
            assert_eq!(summary.coins_collected, 0);
        }
        other => panic!("expected GameOver, got {:?}", other),
    }

    // Confirming at game over walks back to the menu on the next tick.
    process_input(&mut game, PlayerInput::Primary);
    process_tick(&mut game, &mut rng);
    assert!(matches!(game.screen, Screen::Menu));
}

// =============================================================================
// Scoring through play
// =============================================================================

#[test]
fn test_hovering_through_open_gaps_scores_pipes() {
    // Gap start pinned at 150 makes the opening span 150..350, clear of
    // the whole hover band, and no coins spawn.
    let mut rng = rng();
    let mut game = playing_game(config_with(150.0, 0.0), &mut rng);

    let events = hover_ticks(&mut game, &mut rng, 700);

    assert_eq!(count(&events, GameEvent::LifeLost), 0, "clean run");
    assert!(count(&events, GameEvent::Flapped) > 0);

    match &game.screen {
        Screen::Playing(round) => {
            // Pairs clear the bird roughly 340 ticks after spawning, and
            // spawns land every 100 ticks starting at tick 100.
            assert_eq!(round.score, 2);
            assert_eq!(round.bird.lives, 3);
        }
        other => panic!("expected Playing, got {:?}", other),
    }
}

#[test]
fn test_coin_in_the_gap_gets_collected() {
    // Gap start pinned at 200 puts the coin dead center in the hover band,
    // and every pair carries one.
    let mut rng = rng();
    let mut game = playing_game(config_with(200.0, 1.0), &mut rng);

    let events = hover_ticks(&mut game, &mut rng, 450);

    assert_eq!(count(&events, GameEvent::CoinCollected), 1);
    assert_eq!(count(&events, GameEvent::LifeLost), 0);

    match &game.screen {
        Screen::Playing(round) => {
            // One coin and the first pipe pass.
            assert_eq!(round.score, 11);
            assert_eq!(round.coins.collected_count, 1);
        }
        other => panic!("expected Playing, got {:?}", other),
    }
}

// =============================================================================
// Lives and grace across a whole run
// =============================================================================

#[test]
fn test_walled_run_spends_lives_pair_by_pair() {
    // Gap start pinned at 400 leaves the top pipe covering the entire hover
    // band: every arriving pair lands one hit, grace carries the bird
    // through the rest of that pair, and the third pair ends the run.
    let mut rng = rng();
    let mut game = playing_game(config_with(400.0, 0.0), &mut rng);

    let mut events = Vec::new();
    let mut ticks = 0u32;
    while !matches!(game.screen, Screen::GameOver(_)) {
        events.extend(hover_ticks(&mut game, &mut rng, 1));
        ticks += 1;
        assert!(ticks < 1000, "run should end inside 1000 ticks");
    }

    assert_eq!(count(&events, GameEvent::LifeLost), 3);

    match &game.screen {
        Screen::GameOver(summary) => {
            // The first two pairs still count as passed once they scroll
            // behind the bird; the third kills before clearing it.
            assert_eq!(summary.score, 2);
            assert_eq!(summary.coins_collected, 0);
        }
        other => panic!("expected GameOver, got {:?}", other),
    }
}
