//! The three-screen flow: menu, playing, game over.

use crate::game::round::Round;

/// Snapshot of a finished round, shown on the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    pub coins_collected: u32,
}

/// A requested screen change. Raised during input handling or a simulation
/// tick, then consumed exactly once at the top of the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenRequest {
    Play,
    GameOver,
    Menu,
}

/// The live screen. Exactly one exists at a time; `Playing` owns the whole
/// round it is running, so leaving it drops the round wholesale.
#[derive(Debug)]
pub enum Screen {
    Menu,
    Playing(Round),
    GameOver(RunSummary),
}
