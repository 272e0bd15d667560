//! Data-driven game balance
//!
//! Item catalog, spawn schedule, multiplier and lives rules. Everything the
//! frame step treats as a constant comes from here, so the rules can be
//! swapped without touching the update algorithm.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TuningError;
use crate::sim::ItemKind;

/// Tolerance when checking that spawn weights sum to 1.0
pub const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Catalog entry for one item kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub kind: ItemKind,
    /// Display symbol for renderers
    pub symbol: String,
    /// Base points when caught (before multiplier)
    pub score: u64,
    /// Spawn probability weight
    pub weight: f64,
}

impl ItemSpec {
    fn new(kind: ItemKind, symbol: &str, score: u64, weight: f64) -> Self {
        Self {
            kind,
            symbol: symbol.to_string(),
            score,
            weight,
        }
    }
}

/// Game balance configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Items in sampling order; the first entry is the sampling fallback
    pub catalog: Vec<ItemSpec>,

    // === Spawning ===
    /// Frames between spawns at level 1
    pub base_spawn_interval: u32,
    /// Interval reduction per level
    pub spawn_interval_step: u32,
    /// Interval floor
    pub min_spawn_interval: u32,

    // === Movement ===
    /// Percent of travel per frame at level 0
    pub base_speed: f32,
    /// Extra percent per frame per level
    pub speed_per_level: f32,

    // === Field geometry (percent of travel) ===
    /// Collision window lower bound (exclusive)
    pub catch_window_start: f32,
    /// Collision window upper bound (exclusive)
    pub catch_window_end: f32,
    /// Items beyond this are off-screen
    pub off_screen: f32,

    // === Scoring ===
    /// Points needed per level: level-up when score >= level * step
    pub level_score_step: u64,
    pub multiplier_factor: u32,
    pub multiplier_frames: u32,

    // === Lives ===
    pub starting_lives: u32,
    pub bomb_damage: u32,
    pub heart_restore: u32,
    /// Dropped fruit that cost one life
    pub misses_per_life: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            catalog: vec![
                ItemSpec::new(ItemKind::Apple, "🍎", 100, 0.45),
                ItemSpec::new(ItemKind::Banana, "🍌", 200, 0.2),
                ItemSpec::new(ItemKind::Pineapple, "🍍", 300, 0.05),
                ItemSpec::new(ItemKind::Heart, "❤️", 0, 0.1),
                ItemSpec::new(ItemKind::Money, "💰", 0, 0.1),
                ItemSpec::new(ItemKind::Bomb, "💣", 0, 0.1),
            ],

            base_spawn_interval: 60,
            spawn_interval_step: 5,
            min_spawn_interval: 20,

            base_speed: 1.0,
            speed_per_level: 0.2,

            catch_window_start: 85.0,
            catch_window_end: 95.0,
            off_screen: 100.0,

            level_score_step: 500,
            multiplier_factor: 2,
            multiplier_frames: 600,

            starting_lives: 3,
            bomb_damage: 3,
            heart_restore: 1,
            misses_per_life: 2,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON. Missing fields take default values.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check catalog and schedule consistency
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.catalog.is_empty() {
            return Err(TuningError::EmptyCatalog);
        }

        let mut sum = 0.0;
        for (i, spec) in self.catalog.iter().enumerate() {
            if self.catalog[..i].iter().any(|s| s.kind == spec.kind) {
                return Err(TuningError::DuplicateKind(spec.kind));
            }
            if !spec.weight.is_finite() || spec.weight < 0.0 {
                return Err(TuningError::InvalidWeight {
                    kind: spec.kind,
                    weight: spec.weight,
                });
            }
            sum += spec.weight;
        }
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(TuningError::WeightSum(sum));
        }

        if self.min_spawn_interval == 0 {
            return Err(TuningError::InvalidSchedule(
                "min_spawn_interval must be at least 1".into(),
            ));
        }
        if self.min_spawn_interval > self.base_spawn_interval {
            return Err(TuningError::InvalidSchedule(format!(
                "min_spawn_interval {} exceeds base_spawn_interval {}",
                self.min_spawn_interval, self.base_spawn_interval
            )));
        }
        if !(self.base_speed > 0.0 && self.speed_per_level >= 0.0) {
            return Err(TuningError::InvalidSchedule(
                "fall speed must be positive and non-decreasing".into(),
            ));
        }
        if !(0.0 <= self.catch_window_start
            && self.catch_window_start < self.catch_window_end
            && self.catch_window_end <= self.off_screen)
        {
            return Err(TuningError::InvalidSchedule(format!(
                "catch window ({}, {}) must lie inside the field (0, {})",
                self.catch_window_start, self.catch_window_end, self.off_screen
            )));
        }
        if self.multiplier_factor < 1 || self.multiplier_frames == 0 {
            return Err(TuningError::InvalidSchedule(format!(
                "multiplier x{} for {} frames must be at least x1 for at least 1 frame",
                self.multiplier_factor, self.multiplier_frames
            )));
        }
        if self.level_score_step == 0 || self.misses_per_life == 0 {
            return Err(TuningError::InvalidSchedule(
                "level_score_step and misses_per_life must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Catalog entry for a kind
    pub fn spec(&self, kind: ItemKind) -> Option<&ItemSpec> {
        self.catalog.iter().find(|s| s.kind == kind)
    }

    /// Base points for a kind (0 when absent from the catalog)
    pub fn score_value(&self, kind: ItemKind) -> u64 {
        self.spec(kind).map(|s| s.score).unwrap_or(0)
    }

    /// Display symbol for a kind
    pub fn symbol(&self, kind: ItemKind) -> &str {
        self.spec(kind).map(|s| s.symbol.as_str()).unwrap_or("?")
    }

    /// Spawn interval in frames once `level` is reached
    pub fn spawn_interval_for_level(&self, level: u32) -> u32 {
        self.base_spawn_interval
            .saturating_sub(level.saturating_mul(self.spawn_interval_step))
            .max(self.min_spawn_interval)
    }

    /// Per-frame fall distance at `level`
    pub fn fall_speed(&self, level: u32) -> f32 {
        self.base_speed + level as f32 * self.speed_per_level
    }

    /// Score at which `level` advances to the next one
    pub fn level_threshold(&self, level: u32) -> u64 {
        u64::from(level).saturating_mul(self.level_score_step)
    }

    /// Whether `position` lies strictly inside the collision window
    pub fn in_catch_window(&self, position: f32) -> bool {
        position > self.catch_window_start && position < self.catch_window_end
    }
}
