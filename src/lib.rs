//! Lane Catch - a three-lane catch-the-falling-items arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, scoring)
//! - `engine`: Lifecycle, lane input and per-frame observer notifications
//! - `tuning`: Data-driven game balance
//!
//! The engine is headless. A host feeds it lane decisions and one
//! [`Engine::frame`] call per rendered frame, and draws whatever
//! [`Snapshot`] the observer receives.

pub mod engine;
pub mod error;
pub mod sim;
pub mod tuning;

pub use engine::{Engine, GameObserver, GameOverReport, ItemView, Snapshot};
pub use error::TuningError;
pub use sim::{GameEvent, GamePhase, ItemKind, Lane};
pub use tuning::{ItemSpec, Tuning};
