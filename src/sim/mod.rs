//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order, processed newest first)
//! - No rendering or input dependencies

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::choose_lane;
pub use collision::{check_level_up, is_caught, resolve_collision};
pub use spawn::{kind_for_roll, spawn_item};
pub use state::{FallingItem, GameEvent, GamePhase, GameState, ItemKind, Lane};
pub use tick::tick;
