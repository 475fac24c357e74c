//! Game tuning.
//!
//! Every constant that shapes gameplay lives in one [`GameConfig`] value,
//! built once at startup and passed by reference to whatever needs it.
//! Positions and sizes are logical pixels in a fixed play field; the
//! renderer scales them to terminal cells.

/// All gameplay tuning in one place.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Logical play-field width in pixels.
    pub screen_width: f64,
    /// Logical play-field height in pixels.
    pub screen_height: f64,
    /// Simulation ticks per second.
    pub tick_rate: u32,

    // Bird
    pub bird_width: f64,
    pub bird_height: f64,
    pub bird_start_x: f64,
    pub bird_start_y: f64,
    /// Velocity change per tick (positive = downward).
    pub gravity: f64,
    /// Velocity set on a flap (negative = upward). Overrides, never stacks.
    pub jump_impulse: f64,
    /// Cap on downward velocity. Upward speed is never capped.
    pub max_fall_speed: f64,
    pub starting_lives: u32,
    /// Grace period after losing a life, in ticks.
    pub invincibility_ticks: u32,

    // Pipes
    pub pipe_width: f64,
    /// Vertical opening between a pair's top and bottom pipe.
    pub pipe_gap: f64,
    /// Leftward scroll speed in px/tick, shared by pipes and coins.
    pub pipe_speed: f64,
    /// Horizontal distance between consecutive pair spawn positions.
    pub pipe_spawn_distance: f64,
    /// Lowest allowed gap-start y (top pipe height).
    pub gap_min_y: f64,
    /// Highest allowed gap-start y.
    pub gap_max_y: f64,

    // Coins
    /// Coin bounding-box side length.
    pub coin_size: f64,
    /// Cosmetic spin in degrees per tick.
    pub coin_rotation_speed: f64,
    /// Chance that a freshly spawned pair carries a coin in its gap.
    /// Stock tuning puts one in every gap.
    pub coin_spawn_chance: f64,

    // Scoring
    /// Points for passing a pipe pair.
    pub pipe_score: u32,
    /// Points for collecting a coin.
    pub coin_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            tick_rate: 60,

            bird_width: 40.0,
            bird_height: 30.0,
            bird_start_x: 150.0,
            bird_start_y: 300.0,
            gravity: 0.5,
            jump_impulse: -8.0,
            max_fall_speed: 10.0,
            starting_lives: 3,
            invincibility_ticks: 120,

            pipe_width: 80.0,
            pipe_gap: 200.0,
            pipe_speed: 3.0,
            pipe_spawn_distance: 300.0,
            gap_min_y: 100.0,
            gap_max_y: 400.0,

            coin_size: 30.0,
            coin_rotation_speed: 5.0,
            coin_spawn_chance: 1.0,

            pipe_score: 1,
            coin_score: 10,
        }
    }
}

impl GameConfig {
    /// Ticks between pipe-pair spawns: the whole-tick count whose scroll
    /// distance lands nearest `pipe_spawn_distance`.
    pub fn pipe_spawn_interval(&self) -> u32 {
        (self.pipe_spawn_distance / self.pipe_speed).round() as u32
    }

    /// Milliseconds per simulation tick (~16 at 60 Hz).
    pub fn tick_interval_ms(&self) -> u64 {
        1000 / self.tick_rate as u64
    }
}
