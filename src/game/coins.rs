//! Collectible coins that drift left with the pipes.

use crate::config::GameConfig;
use crate::game::rect::Rect;

/// A single collectible. Position is the coin's center.
#[derive(Debug, Clone)]
pub struct Coin {
    pub x: f64,
    pub y: f64,
    /// Cosmetic spin in degrees, wraps at a full turn.
    pub rotation: f64,
    /// Marked on pickup; the manager drops marked coins immediately.
    pub collected: bool,
}

impl Coin {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            rotation: 0.0,
            collected: false,
        }
    }

    /// Square bounding box centered on the coin.
    pub fn bounds(&self, config: &GameConfig) -> Rect {
        let half = config.coin_size / 2.0;
        Rect::new(
            self.x - half,
            self.y - half,
            config.coin_size,
            config.coin_size,
        )
    }

    fn advance(&mut self, config: &GameConfig) {
        self.x -= config.pipe_speed;
        self.rotation += config.coin_rotation_speed;
        if self.rotation >= 360.0 {
            self.rotation = 0.0;
        }
    }

    fn is_off_screen(&self, config: &GameConfig) -> bool {
        self.x + config.coin_size / 2.0 < 0.0
    }
}

/// Owns the live coins and the running collected count.
#[derive(Debug, Clone, Default)]
pub struct CoinManager {
    pub coins: Vec<Coin>,
    pub collected_count: u32,
}

impl CoinManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_coin(&mut self, x: f64, y: f64) {
        self.coins.push(Coin::new(x, y));
    }

    /// Drift every coin left one tick and spin it.
    pub fn advance(&mut self, config: &GameConfig) {
        for coin in &mut self.coins {
            coin.advance(config);
        }
    }

    /// Collect the first coin overlapping `bounds`, if any. At most one
    /// coin is taken per call; any others overlap again next tick.
    pub fn collect_first(&mut self, bounds: &Rect, config: &GameConfig) -> bool {
        let mut collected = false;
        for coin in &mut self.coins {
            if coin.bounds(config).intersects(bounds) {
                coin.collected = true;
                self.collected_count += 1;
                collected = true;
                break;
            }
        }
        if collected {
            self.coins.retain(|coin| !coin.collected);
        }
        collected
    }

    /// Drop coins fully past the left edge.
    pub fn remove_off_screen(&mut self, config: &GameConfig) {
        self.coins.retain(|coin| !coin.is_off_screen(config));
    }
}
