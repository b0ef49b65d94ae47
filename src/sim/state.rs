//! Game state and core simulation types
//!
//! All session state lives here: the ship, the live bullets, the fleet, and
//! the progression record (score, level, lives, high score). The high score
//! is the only value that survives a game reset; nothing survives the
//! process.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::fleet::Fleet;
use super::rect::Rect;
use crate::consts::HIT_PAUSE_TICKS;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No gameplay ticking; waiting for a start request
    Idle,
    /// Full simulation ticking
    Active,
    /// Lives exhausted. Same ticking behavior as Idle, but the UI layer may
    /// show a different prompt; the last layout stays frozen on screen.
    GameOver,
}

impl GamePhase {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, GamePhase::Active)
    }
}

/// Playfield construction error (the only fallible path in the core)
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Screen width or height is not strictly positive
    NonPositiveScreen(Vec2),
    /// A named entity size is not strictly positive
    NonPositiveSize(&'static str, Vec2),
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::NonPositiveScreen(s) => {
                write!(f, "screen dimensions must be positive, got {}x{}", s.x, s.y)
            }
            GeometryError::NonPositiveSize(name, s) => {
                write!(f, "{name} size must be positive, got {}x{}", s.x, s.y)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Playfield geometry: screen dimensions plus fixed entity sizes.
///
/// Supplied once at construction; fleet layout and boundary checks are pure
/// functions of these values plus [`Settings`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Geometry {
    /// Screen width and height
    pub screen: Vec2,
    pub ship_size: Vec2,
    pub alien_size: Vec2,
    pub bullet_size: Vec2,
}

impl Geometry {
    /// Validate and build a playfield. Fails fast on non-positive dimensions.
    pub fn new(
        screen: Vec2,
        ship_size: Vec2,
        alien_size: Vec2,
        bullet_size: Vec2,
    ) -> Result<Self, GeometryError> {
        if screen.x <= 0.0 || screen.y <= 0.0 {
            return Err(GeometryError::NonPositiveScreen(screen));
        }
        for (name, size) in [
            ("ship", ship_size),
            ("alien", alien_size),
            ("bullet", bullet_size),
        ] {
            if size.x <= 0.0 || size.y <= 0.0 {
                return Err(GeometryError::NonPositiveSize(name, size));
            }
        }
        Ok(Self {
            screen,
            ship_size,
            alien_size,
            bullet_size,
        })
    }
}

impl Default for Geometry {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            screen: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            ship_size: SHIP_SIZE,
            alien_size: ALIEN_SIZE,
            bullet_size: BULLET_SIZE,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub rect: Rect,
}

impl Ship {
    /// Spawn the ship centered at the bottom of the playfield
    pub fn new(geometry: &Geometry) -> Self {
        let mut ship = Self {
            rect: Rect::new(Vec2::ZERO, geometry.ship_size),
        };
        ship.center(geometry);
        ship
    }

    /// Reposition to the centered start position (bottom center)
    pub fn center(&mut self, geometry: &Geometry) {
        self.rect.pos = Vec2::new(
            (geometry.screen.x - self.rect.size.x) / 2.0,
            geometry.screen.y - self.rect.size.y,
        );
    }

    /// Move left by `speed`, clamped at the left screen edge
    pub fn move_left(&mut self, speed: f32) {
        self.rect.pos.x = (self.rect.pos.x - speed).max(0.0);
    }

    /// Move right by `speed`, clamped at the right screen edge
    pub fn move_right(&mut self, speed: f32, geometry: &Geometry) {
        let max_x = (geometry.screen.x - self.rect.size.x).max(0.0);
        self.rect.pos.x = (self.rect.pos.x + speed).min(max_x);
    }
}

/// A live bullet, moving straight up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub rect: Rect,
}

impl Bullet {
    /// Spawn at the ship's top center
    pub fn fired_from(id: u32, ship: &Ship, geometry: &Geometry) -> Self {
        let pos = Vec2::new(
            ship.rect.center().x - geometry.bullet_size.x / 2.0,
            ship.rect.top(),
        );
        Self {
            id,
            rect: Rect::new(pos, geometry.bullet_size),
        }
    }

    /// Advance one tick (upward = decreasing y)
    pub fn advance(&mut self, speed: f32) {
        self.rect.pos.y -= speed;
    }

    /// True once the bullet has fully exited the top of the playfield
    #[inline]
    pub fn off_top(&self) -> bool {
        self.rect.bottom() <= 0.0
    }
}

/// A single alien of the fleet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alien {
    pub id: u32,
    pub rect: Rect,
}

impl Alien {
    pub fn new(id: u32, pos: Vec2, geometry: &Geometry) -> Self {
        Self {
            id,
            rect: Rect::new(pos, geometry.alien_size),
        }
    }
}

/// Monotonic entity id allocator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn alloc(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Things that happened during a tick, drained by the driver for UI/audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    AlienDestroyed { points: u64 },
    FleetCleared { level: u32 },
    ShipHit { lives_left: u32 },
    GameOver { score: u64 },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub geometry: Geometry,
    pub settings: Settings,
    pub phase: GamePhase,

    /// Current score (non-negative, resets per game)
    pub score: u64,
    /// Current level, starting at 1
    pub level: u32,
    /// Lives remaining
    pub lives: u32,
    /// Best score seen this process; never decreases
    pub high_score: u64,

    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub fleet: Fleet,

    /// Ticks left during which player input is ignored (post-hit pause)
    pub input_freeze_ticks: u32,
    /// Ticks elapsed while Active
    pub time_ticks: u64,
    /// Events emitted by the most recent tick
    pub events: Vec<GameEvent>,

    ids: IdAllocator,
}

impl GameState {
    /// Build a fresh session in `Idle`, fleet spawned so the idle screen has
    /// something to show.
    pub fn new(geometry: Geometry, settings: Settings) -> Self {
        let mut ids = IdAllocator::default();
        let fleet = Fleet::build(&geometry, &mut ids);
        let ship = Ship::new(&geometry);
        let lives = settings.ship_limit;
        Self {
            geometry,
            settings,
            phase: GamePhase::Idle,
            score: 0,
            level: 1,
            lives,
            high_score: 0,
            ship,
            bullets: Vec::new(),
            fleet,
            input_freeze_ticks: 0,
            time_ticks: 0,
            events: Vec::new(),
            ids,
        }
    }

    /// Allocate a new entity id
    pub fn next_entity_id(&mut self) -> u32 {
        self.ids.alloc()
    }

    /// Replace the fleet with a freshly laid-out one
    pub fn rebuild_fleet(&mut self) {
        self.fleet = Fleet::build(&self.geometry, &mut self.ids);
    }

    /// Start (or restart) a game: reset progression and the dynamic settings
    /// tier, clear the field, rebuild the fleet, recenter the ship.
    ///
    /// Valid from `Idle` and `GameOver`; the high score is kept.
    pub fn start_game(&mut self) {
        self.score = 0;
        self.level = 1;
        self.lives = self.settings.ship_limit;
        self.settings.reset_dynamic();

        self.bullets.clear();
        self.rebuild_fleet();
        self.ship.center(&self.geometry);

        self.input_freeze_ticks = 0;
        self.phase = GamePhase::Active;
        self.events.push(GameEvent::GameStarted);
        log::info!("game started: lives={} fleet={}", self.lives, self.fleet.len());
    }

    /// Fire request: spawn one bullet unless the cap is reached (then it is
    /// silently ignored).
    pub fn fire_bullet(&mut self) {
        if self.bullets.len() >= self.settings.bullets_allowed {
            return;
        }
        let id = self.next_entity_id();
        let bullet = Bullet::fired_from(id, &self.ship, &self.geometry);
        self.bullets.push(bullet);
    }

    /// Credit destroyed aliens to the score and keep the high score current
    pub fn record_kills(&mut self, kills: u32, points: u64) {
        if kills == 0 {
            return;
        }
        self.score += points;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        let per_kill = self.settings.alien_points;
        for _ in 0..kills {
            self.events.push(GameEvent::AlienDestroyed { points: per_kill });
        }
    }

    /// Fleet-cleared handling: next level at a scaled-up difficulty
    pub fn advance_level(&mut self) {
        self.bullets.clear();
        self.settings.increase_speed();
        self.level += 1;
        self.rebuild_fleet();
        self.events.push(GameEvent::FleetCleared { level: self.level });
        log::info!(
            "fleet cleared: level={} fleet_speed={:.2} alien_points={}",
            self.level,
            self.settings.fleet_speed,
            self.settings.alien_points
        );
    }

    /// Hit-response: the ship was struck, or the fleet reached the bottom.
    ///
    /// Burns one life. With lives left, the field resets at the current
    /// difficulty and input freezes for [`HIT_PAUSE_TICKS`]; at zero the
    /// session ends and the last layout stays frozen.
    pub fn hit_response(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver { score: self.score });
            log::info!("game over: score={} high_score={}", self.score, self.high_score);
            return;
        }

        self.bullets.clear();
        self.rebuild_fleet();
        self.ship.center(&self.geometry);
        self.input_freeze_ticks = HIT_PAUSE_TICKS;
        self.events.push(GameEvent::ShipHit {
            lives_left: self.lives,
        });
        log::info!("ship hit: lives_left={}", self.lives);
    }

    /// Take this tick's events, leaving the buffer empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
