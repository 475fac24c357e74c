//! Game driver: owns the live screen, applies pending transitions, and
//! routes input and ticks to whatever is on screen.

pub mod bird;
pub mod coins;
pub mod pipes;
pub mod rect;
pub mod round;
pub mod screen;

use rand::Rng;

use crate::config::GameConfig;
use round::Round;
use screen::{Screen, ScreenRequest};

/// UI-agnostic player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Space or left mouse click: flap in play, confirm on menus.
    Primary,
    /// Enter: confirms on menus, does nothing in play.
    Confirm,
    /// q, Esc, or Ctrl-C: leave the program (handled by the main loop).
    Quit,
    /// Any other key.
    Other,
}

/// Sound-worthy moments raised by the simulation and drained by the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flapped,
    CoinCollected,
    LifeLost,
}

/// Top-level game state: the current screen plus the transition marker.
#[derive(Debug)]
pub struct Game {
    pub config: GameConfig,
    pub screen: Screen,
    /// Raised by input or the simulation, consumed at the next tick's top.
    pub pending: Option<ScreenRequest>,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            screen: Screen::Menu,
            pending: None,
            events: Vec::new(),
        }
    }

    /// Drain the sound cues raised since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Swap screens if a request is pending. Entering play builds a fresh
    /// round; entering game over snapshots the one that just ended.
    fn apply_pending_transition(&mut self) {
        if let Some(request) = self.pending.take() {
            match request {
                ScreenRequest::Play => {
                    self.screen = Screen::Playing(Round::new(&self.config));
                }
                ScreenRequest::GameOver => {
                    if let Screen::Playing(round) = &self.screen {
                        self.screen = Screen::GameOver(round.summary());
                    }
                }
                ScreenRequest::Menu => {
                    self.screen = Screen::Menu;
                }
            }
        }
    }
}

/// Route one input to the current screen.
pub fn process_input(game: &mut Game, input: PlayerInput) {
    match &mut game.screen {
        Screen::Menu => {
            if matches!(input, PlayerInput::Primary | PlayerInput::Confirm) {
                game.pending = Some(ScreenRequest::Play);
            }
        }
        Screen::Playing(round) => {
            if matches!(input, PlayerInput::Primary) && round.bird.jump(&game.config) {
                game.events.push(GameEvent::Flapped);
            }
        }
        Screen::GameOver(_) => {
            if matches!(input, PlayerInput::Primary | PlayerInput::Confirm) {
                game.pending = Some(ScreenRequest::Menu);
            }
        }
    }
}

/// One simulation tick: apply any pending transition, then step the live
/// screen. Menu and game-over screens have nothing to simulate.
pub fn process_tick<R: Rng>(game: &mut Game, rng: &mut R) {
    game.apply_pending_transition();

    match &mut game.screen {
        Screen::Playing(round) => {
            if let Some(request) = round.tick(&game.config, rng, &mut game.events) {
                game.pending = Some(request);
            }
        }
        Screen::Menu | Screen::GameOver(_) => {}
    }
}
