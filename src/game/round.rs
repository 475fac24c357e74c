//! One playing session: pipe cadence, scrolling, scoring, and damage.

use std::collections::HashSet;

use rand::Rng;

use crate::config::GameConfig;
use crate::game::bird::Bird;
use crate::game::coins::CoinManager;
use crate::game::pipes::{PipePair, PipePairId};
use crate::game::screen::{RunSummary, ScreenRequest};
use crate::game::GameEvent;

/// Live state of one run. Built fresh every time play begins.
#[derive(Debug)]
pub struct Round {
    pub bird: Bird,
    pub pipes: Vec<PipePair>,
    pub coins: CoinManager,
    /// Points from cleared pipes and collected coins.
    pub score: u32,
    /// Ticks since the last pipe spawn.
    pub spawn_timer: u32,
    /// X where the most recent pair was created. New pairs offset from
    /// this, not from wherever that pair has scrolled to since.
    pub last_spawn_x: f64,
    /// Id handed to the next spawned pair.
    pub next_pipe_id: PipePairId,
    /// Pairs that already damaged the bird and may not do so again.
    pub resolved_hits: HashSet<PipePairId>,
}

impl Round {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bird: Bird::new(config),
            pipes: Vec::new(),
            coins: CoinManager::new(),
            score: 0,
            spawn_timer: 0,
            // First pair offsets from the right screen edge
            last_spawn_x: config.screen_width,
            next_pipe_id: 0,
            resolved_hits: HashSet::new(),
        }
    }

    /// One simulation tick. Returns a screen request when the run ends.
    pub fn tick<R: Rng>(
        &mut self,
        config: &GameConfig,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) -> Option<ScreenRequest> {
        // 1. Spawn a pair when the cadence timer fills
        self.spawn_timer += 1;
        if self.spawn_timer >= config.pipe_spawn_interval() {
            self.spawn_pipe_pair(config, rng);
            self.spawn_timer = 0;
        }

        // 2. Bird physics (grace countdown, gravity, screen clamp)
        self.bird.tick(config);

        // 3. Scroll pipes, dropping any gone off screen. A pair spawned
        //    this very tick moves with the rest.
        for pair in &mut self.pipes {
            pair.advance(config);
        }
        self.pipes.retain(|pair| !pair.is_off_screen(config));

        // 4. Scroll coins likewise
        self.coins.advance(config);
        self.coins.remove_off_screen(config);

        // 5. Score pairs the bird has just cleared
        let bird_x = self.bird.x;
        for pair in &mut self.pipes {
            if pair.check_passed(bird_x, config) {
                self.score += config.pipe_score;
            }
        }

        // 6. Damage and pickups
        self.resolve_collisions(config, events)
    }

    fn spawn_pipe_pair<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        let x = self.last_spawn_x + config.pipe_spawn_distance;
        let id = self.next_pipe_id;
        self.next_pipe_id += 1;

        let pair = PipePair::spawn(id, x, config, rng);
        self.last_spawn_x = pair.x;

        // Maybe drop a coin at the middle of the fresh gap
        if rng.gen::<f64>() < config.coin_spawn_chance {
            self.coins
                .spawn_coin(pair.x + config.pipe_width / 2.0, pair.gap_center);
        }

        self.pipes.push(pair);
    }

    /// Pipe hits, then coin pickups, then the screen edges. A pipe hit
    /// ends this tick's collision work immediately.
    fn resolve_collisions(
        &mut self,
        config: &GameConfig,
        events: &mut Vec<GameEvent>,
    ) -> Option<ScreenRequest> {
        let bounds = self.bird.bounds(config);

        // Pipes are only tested while damage can actually land
        if self.bird.alive && !self.bird.invincible {
            let hit = self
                .pipes
                .iter()
                .find(|pair| !self.resolved_hits.contains(&pair.id) && pair.hits(&bounds))
                .map(|pair| pair.id);

            if let Some(id) = hit {
                self.bird.lose_life(config);
                events.push(GameEvent::LifeLost);

                // A fresh grace period forgets earlier offenders; only the
                // pair that just connected stays resolved.
                if self.bird.invincible {
                    self.resolved_hits.clear();
                }
                self.resolved_hits.insert(id);

                if !self.bird.alive {
                    return Some(ScreenRequest::GameOver);
                }
                return None;
            }
        }

        // Coin pickup, allowed even during grace
        if self.coins.collect_first(&bounds, config) {
            self.score += config.coin_score;
            events.push(GameEvent::CoinCollected);
        }

        // Screen edges wound exactly like a pipe
        if self.bird.touching_screen_edge(config) && self.bird.lose_life(config) {
            events.push(GameEvent::LifeLost);
            if self.bird.invincible {
                self.resolved_hits.clear();
            }
            if !self.bird.alive {
                return Some(ScreenRequest::GameOver);
            }
        }

        None
    }

    /// Snapshot for the game-over screen.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            score: self.score,
            coins_collected: self.coins.collected_count,
        }
    }
}
