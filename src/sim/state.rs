//! Game state and core simulation types
//!
//! Everything a frame step reads or writes lives in [`GameState`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// One of the three discrete horizontal slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Lane {
    Left,
    #[default]
    Center,
    Right,
}

impl Lane {
    /// All lanes, left to right
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Center, Lane::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::Left => "LEFT",
            Lane::Center => "CENTER",
            Lane::Right => "RIGHT",
        }
    }

    /// Parse a lane label as produced by a classifier. Unknown labels yield `None`.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Some(Lane::Left),
            "center" | "centre" | "middle" | "c" => Some(Lane::Center),
            "right" | "r" => Some(Lane::Right),
            _ => None,
        }
    }

    /// Lane by index, 0 = left
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Center => 1,
            Lane::Right => 2,
        }
    }
}

/// Falling item variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemKind {
    Apple,
    Banana,
    Pineapple,
    /// Restores a life
    Heart,
    /// Grants a timed score multiplier
    Money,
    /// Costs lives
    Bomb,
}

impl ItemKind {
    pub const ALL: [ItemKind; 6] = [
        ItemKind::Apple,
        ItemKind::Banana,
        ItemKind::Pineapple,
        ItemKind::Heart,
        ItemKind::Money,
        ItemKind::Bomb,
    ];

    /// Scoring fruit: caught for points, counts as a miss when dropped
    pub fn is_fruit(&self) -> bool {
        matches!(self, ItemKind::Apple | ItemKind::Banana | ItemKind::Pineapple)
    }
}

/// A falling item instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingItem {
    pub id: u32,
    pub kind: ItemKind,
    pub lane: Lane,
    /// Percent of travel: 0 at spawn, past 100 is off-screen
    pub position: f32,
}

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not started, stopped, or torn down after game over
    #[default]
    Inactive,
    /// Frames are being simulated
    Active,
    /// Lives hit zero this frame; awaiting teardown
    GameOver,
}

/// Discrete things that happened during a frame step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32, kind: ItemKind, lane: Lane },
    Caught { id: u32, kind: ItemKind, points: u64 },
    /// A fruit fell past the bottom of the field
    Missed { id: u32, kind: ItemKind },
    LifeLost { lives: u32 },
    LevelUp { level: u32, spawn_interval: u32 },
    MultiplierStarted { factor: u32, frames: u32 },
    MultiplierExpired,
    GameOver { score: u64, level: u32 },
}

/// Complete mutable game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed this game's RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    /// Starts at 1, never decreases
    pub level: u32,
    pub lives: u32,
    /// Active items in spawn order
    pub items: Vec<FallingItem>,
    pub player_lane: Lane,
    /// Fruit dropped since the last life lost
    pub missed: u32,
    pub multiplier: u32,
    /// Frames left before the multiplier resets to 1
    pub multiplier_remaining: u32,
    pub spawn_timer: u32,
    pub spawn_interval: u32,
    /// Simulated frames since start
    pub frame: u64,
    /// Events recorded this frame; `tick` clears them before stepping
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Fresh game state (inactive) using the tuning's starting values
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Inactive,
            score: 0,
            level: 1,
            lives: tuning.starting_lives,
            items: Vec::new(),
            player_lane: Lane::Center,
            missed: 0,
            multiplier: 1,
            multiplier_remaining: 0,
            spawn_timer: 0,
            spawn_interval: tuning.base_spawn_interval,
            frame: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Add an item at the top of the field and return its id
    pub fn push_item(&mut self, kind: ItemKind, lane: Lane) -> u32 {
        let id = self.next_entity_id();
        self.items.push(FallingItem {
            id,
            kind,
            lane,
            position: 0.0,
        });
        self.events.push(GameEvent::Spawned { id, kind, lane });
        id
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
