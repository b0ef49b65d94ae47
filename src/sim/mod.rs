//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - One discrete step per [`tick::tick`] call, fixed order
//! - Stable iteration order (spawn order) for every entity collection
//! - No rendering or platform dependencies

pub mod collision;
pub mod fleet;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Volley, resolve_bullet_hits, ship_struck};
pub use fleet::Fleet;
pub use rect::Rect;
pub use state::{
    Alien, Bullet, GameEvent, GamePhase, GameState, Geometry, GeometryError, IdAllocator, Ship,
};
pub use tick::{InputEvent, TickInput, tick};
