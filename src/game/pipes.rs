//! Pipe obstacles: vertically offset pairs sharing a gap the bird must
//! thread. Pairs scroll left at a constant speed and score once when the
//! bird clears them.

use crate::config::GameConfig;
use crate::game::rect::Rect;
use rand::Rng;

/// Stable id assigned at spawn, used for damage bookkeeping.
pub type PipePairId = u64;

/// One solid pipe. Height never changes after spawn.
#[derive(Debug, Clone)]
pub struct Pipe {
    pub rect: Rect,
}

impl Pipe {
    fn advance(&mut self, config: &GameConfig) {
        self.rect.x -= config.pipe_speed;
    }
}

/// Top and bottom pipe at one x position, with a fixed-height opening
/// between them.
#[derive(Debug, Clone)]
pub struct PipePair {
    pub id: PipePairId,
    /// Left edge, shared by both pipes.
    pub x: f64,
    /// Where the opening starts; equals the top pipe's height.
    pub gap_y: f64,
    /// Vertical midpoint of the opening; default coin spawn point.
    pub gap_center: f64,
    /// Set once the bird has cleared the pair. Prevents double scoring.
    pub passed: bool,
    pub top: Pipe,
    pub bottom: Pipe,
}

impl PipePair {
    /// Spawn at `x` with a uniformly random gap start.
    pub fn spawn<R: Rng>(id: PipePairId, x: f64, config: &GameConfig, rng: &mut R) -> Self {
        let gap_y = rng.gen_range(config.gap_min_y..=config.gap_max_y);
        Self::with_gap(id, x, gap_y, config)
    }

    /// Build with an explicit gap start. Tests use this to pick geometry.
    pub fn with_gap(id: PipePairId, x: f64, gap_y: f64, config: &GameConfig) -> Self {
        let bottom_y = gap_y + config.pipe_gap;
        Self {
            id,
            x,
            gap_y,
            gap_center: gap_y + config.pipe_gap / 2.0,
            passed: false,
            top: Pipe {
                rect: Rect::new(x, 0.0, config.pipe_width, gap_y),
            },
            bottom: Pipe {
                rect: Rect::new(
                    x,
                    bottom_y,
                    config.pipe_width,
                    config.screen_height - bottom_y,
                ),
            },
        }
    }

    /// Scroll left one tick.
    pub fn advance(&mut self, config: &GameConfig) {
        self.x -= config.pipe_speed;
        self.top.advance(config);
        self.bottom.advance(config);
    }

    /// Flip `passed` the first time the pair's right edge falls strictly
    /// left of `bird_x`. Returns true exactly once, on that tick.
    pub fn check_passed(&mut self, bird_x: f64, config: &GameConfig) -> bool {
        if !self.passed && self.x + config.pipe_width < bird_x {
            self.passed = true;
            return true;
        }
        false
    }

    /// Fully past the left edge, ready for removal.
    pub fn is_off_screen(&self, config: &GameConfig) -> bool {
        self.x + config.pipe_width < 0.0
    }

    /// Whether either pipe overlaps the given box.
    pub fn hits(&self, bounds: &Rect) -> bool {
        self.top.rect.intersects(bounds) || self.bottom.rect.intersects(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    // ── Geometry ──

    #[test]
    fn test_pipes_frame_the_gap() {
        let config = config();
        let pair = PipePair::with_gap(1, 500.0, 150.0, &config);

        assert_eq!(pair.top.rect, Rect::new(500.0, 0.0, 80.0, 150.0));
        assert_eq!(pair.bottom.rect, Rect::new(500.0, 350.0, 80.0, 250.0));
        assert_eq!(pair.gap_center, 250.0);
        assert!(!pair.passed);
    }

    #[test]
    fn test_spawned_gap_stays_in_range() {
        let config = config();
        let mut rng = rand::thread_rng();

        for id in 0..200 {
            let pair = PipePair::spawn(id, 1100.0, &config, &mut rng);
            assert!(
                pair.gap_y >= config.gap_min_y && pair.gap_y <= config.gap_max_y,
                "gap start {} outside configured range",
                pair.gap_y
            );
            assert_eq!(pair.gap_center, pair.gap_y + config.pipe_gap / 2.0);
        }
    }

    #[test]
    fn test_lowest_gap_leaves_zero_height_bottom() {
        let config = config();
        let pair = PipePair::with_gap(1, 500.0, config.gap_max_y, &config);
        assert_eq!(pair.bottom.rect.height, 0.0);

        // A bird hugging the floor still cannot hit the degenerate pipe.
        let bird = Rect::new(510.0, 570.0, 40.0, 30.0);
        assert!(!pair.hits(&bird));
    }

    // ── Motion ──

    #[test]
    fn test_advance_moves_pair_and_both_pipes() {
        let config = config();
        let mut pair = PipePair::with_gap(1, 500.0, 200.0, &config);

        pair.advance(&config);
        assert_eq!(pair.x, 497.0);
        assert_eq!(pair.top.rect.x, 497.0);
        assert_eq!(pair.bottom.rect.x, 497.0);
    }

    #[test]
    fn test_off_screen_requires_full_exit() {
        let config = config();
        let mut pair = PipePair::with_gap(1, -80.0, 200.0, &config);
        // Right edge exactly at zero is still (barely) on screen.
        assert!(!pair.is_off_screen(&config));

        pair.advance(&config);
        assert!(pair.is_off_screen(&config));
    }

    // ── Passing ──

    #[test]
    fn test_check_passed_requires_strictly_clearing() {
        let config = config();
        let bird_x = 150.0;

        // Right edge exactly at the bird's x: not yet passed.
        let mut level = PipePair::with_gap(1, 70.0, 200.0, &config);
        assert!(!level.check_passed(bird_x, &config));
        assert!(!level.passed);

        // A hair further left: passed.
        let mut cleared = PipePair::with_gap(2, 69.9, 200.0, &config);
        assert!(cleared.check_passed(bird_x, &config));
        assert!(cleared.passed);
    }

    #[test]
    fn test_check_passed_fires_exactly_once() {
        let config = config();
        let mut pair = PipePair::with_gap(1, 50.0, 200.0, &config);

        assert!(pair.check_passed(150.0, &config));
        assert!(!pair.check_passed(150.0, &config), "no double scoring");

        pair.advance(&config);
        assert!(!pair.check_passed(150.0, &config), "nor after more scroll");
    }

    // ── Collision ──

    #[test]
    fn test_hits_top_and_bottom_pipes() {
        let config = config();
        let pair = PipePair::with_gap(1, 140.0, 200.0, &config);

        let in_top = Rect::new(150.0, 100.0, 40.0, 30.0);
        assert!(pair.hits(&in_top));

        let in_bottom = Rect::new(150.0, 450.0, 40.0, 30.0);
        assert!(pair.hits(&in_bottom));
    }

    #[test]
    fn test_flying_through_the_gap_is_clean() {
        let config = config();
        let pair = PipePair::with_gap(1, 140.0, 200.0, &config);

        // Gap spans 200..400; a 30-tall bird at 280 is well inside.
        let in_gap = Rect::new(150.0, 280.0, 40.0, 30.0);
        assert!(!pair.hits(&in_gap));

        // Clear of the pair horizontally.
        let elsewhere = Rect::new(400.0, 100.0, 40.0, 30.0);
        assert!(!pair.hits(&elsewhere));
    }
}
