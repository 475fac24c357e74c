//! The player bird: gravity physics, lives, and the post-hit grace period.

use crate::config::GameConfig;
use crate::game::rect::Rect;

/// Player avatar. Position is the top-left corner of the bounding box,
/// in play-field pixels.
#[derive(Debug, Clone)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    /// Vertical velocity in px/tick (positive = downward).
    pub velocity: f64,
    /// Remaining lives. The run ends when this reaches zero.
    pub lives: u32,
    pub alive: bool,
    /// True while the post-hit grace period is running.
    pub invincible: bool,
    /// Grace ticks remaining.
    pub invincible_ticks: u32,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        let mut bird = Self {
            x: 0.0,
            y: 0.0,
            velocity: 0.0,
            lives: 0,
            alive: false,
            invincible: false,
            invincible_ticks: 0,
        };
        bird.reset(config);
        bird
    }

    /// Flap upward. Sets velocity to the jump impulse outright, so repeated
    /// flaps override rather than stack. Returns whether the flap fired
    /// (a dead bird cannot flap).
    pub fn jump(&mut self, config: &GameConfig) -> bool {
        if self.alive {
            self.velocity = config.jump_impulse;
            true
        } else {
            false
        }
    }

    /// One physics tick: grace countdown first, then gravity and screen
    /// clamping. A dead bird only counts down.
    pub fn tick(&mut self, config: &GameConfig) {
        if self.invincible {
            self.invincible_ticks = self.invincible_ticks.saturating_sub(1);
            if self.invincible_ticks == 0 {
                self.invincible = false;
            }
        }

        if !self.alive {
            return;
        }

        // Gravity with a cap on fall speed only; rising speed is never capped
        self.velocity += config.gravity;
        if self.velocity > config.max_fall_speed {
            self.velocity = config.max_fall_speed;
        }

        self.y += self.velocity;

        // Keep the bounding box on screen; any clamp kills the velocity
        if self.y < 0.0 {
            self.y = 0.0;
            self.velocity = 0.0;
        }
        if self.y + config.bird_height > config.screen_height {
            self.y = config.screen_height - config.bird_height;
            self.velocity = 0.0;
        }
    }

    /// Take a hit. No-op when out of lives or during the grace period.
    /// A non-final loss repositions the bird at the start and begins the
    /// grace period; the final loss only marks the bird dead, leaving it
    /// where it crashed. Returns whether a life was actually lost.
    pub fn lose_life(&mut self, config: &GameConfig) -> bool {
        if self.lives == 0 || self.invincible {
            return false;
        }

        self.lives -= 1;
        if self.lives == 0 {
            self.alive = false;
        } else {
            self.x = config.bird_start_x;
            self.y = config.bird_start_y;
            self.velocity = 0.0;
            self.invincible = true;
            self.invincible_ticks = config.invincibility_ticks;
        }
        true
    }

    /// Back to a fresh bird at the start position with full lives.
    pub fn reset(&mut self, config: &GameConfig) {
        self.x = config.bird_start_x;
        self.y = config.bird_start_y;
        self.velocity = 0.0;
        self.lives = config.starting_lives;
        self.alive = true;
        self.invincible = false;
        self.invincible_ticks = 0;
    }

    pub fn bounds(&self, config: &GameConfig) -> Rect {
        Rect::new(self.x, self.y, config.bird_width, config.bird_height)
    }

    /// Bounding box touching the top or bottom screen edge (inclusive:
    /// a bird clamped flat against an edge counts as touching).
    pub fn touching_screen_edge(&self, config: &GameConfig) -> bool {
        self.y <= 0.0 || self.y + config.bird_height >= config.screen_height
    }
}
