//! Alien Siege - a descending-fleet arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, fleet motion, collisions, tick)
//! - `settings`: Static and dynamically-scaled gameplay tunables
//! - `highscores`: In-memory leaderboard
//! - `render`: Frame snapshot + renderer boundary trait
//!
//! Rendering, window/input plumbing, and audio live outside this crate; they
//! talk to the core through [`render::Frame`], [`sim::TickInput`], and the
//! [`sim::GameEvent`] stream. Screen coordinates: origin top-left, y grows
//! downward.

pub mod highscores;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Simulation tick rate (discrete steps per second)
    pub const TICK_HZ: u32 = 60;
    /// Input freeze after a ship hit (~0.5 s worth of ticks)
    pub const HIT_PAUSE_TICKS: u32 = TICK_HZ / 2;

    /// Default playfield dimensions
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Default entity sizes (width, height)
    pub const SHIP_SIZE: Vec2 = Vec2::new(60.0, 48.0);
    pub const ALIEN_SIZE: Vec2 = Vec2::new(60.0, 58.0);
    pub const BULLET_SIZE: Vec2 = Vec2::new(3.0, 15.0);
}
