//! Scene rendering, dispatched over the current screen.

mod common;
mod game_over_scene;
mod menu_scene;
mod playfield;

use crate::game::screen::Screen;
use crate::game::Game;
use ratatui::Frame;

/// Draw whatever screen is live.
pub fn draw(frame: &mut Frame, game: &Game, bird_art: &[String]) {
    let area = frame.size();
    match &game.screen {
        Screen::Menu => menu_scene::render(frame, area, &game.config),
        Screen::Playing(round) => playfield::render(frame, area, round, &game.config, bird_art),
        Screen::GameOver(summary) => game_over_scene::render(frame, area, summary),
    }
}
