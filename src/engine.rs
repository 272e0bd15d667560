//! Host-facing engine
//!
//! Owns the game state and tuning, runs the start/stop/game-over lifecycle,
//! and reports every frame to a [`GameObserver`]. The host calls
//! [`Engine::frame`] once per rendered frame and forwards lane decisions
//! through [`Engine::on_lane_selected`].

use serde::{Deserialize, Serialize};

use crate::error::TuningError;
use crate::sim::{GameEvent, GamePhase, GameState, ItemKind, Lane, tick};
use crate::tuning::Tuning;

/// Renderable view of one falling item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: u32,
    pub kind: ItemKind,
    pub lane: Lane,
    pub position: f32,
    pub symbol: String,
    pub score_value: u64,
}

/// State snapshot emitted after every frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub score: u64,
    pub level: u32,
    pub lives: u32,
    pub items: Vec<ItemView>,
    pub player_lane: Lane,
    pub multiplier: u32,
    pub multiplier_remaining: u32,
    pub phase: GamePhase,
    pub frame: u64,
}

impl Snapshot {
    pub fn capture(state: &GameState, tuning: &Tuning) -> Self {
        Self {
            score: state.score,
            level: state.level,
            lives: state.lives,
            items: state
                .items
                .iter()
                .map(|item| ItemView {
                    id: item.id,
                    kind: item.kind,
                    lane: item.lane,
                    position: item.position,
                    symbol: tuning.symbol(item.kind).to_string(),
                    score_value: tuning.score_value(item.kind),
                })
                .collect(),
            player_lane: state.player_lane,
            multiplier: state.multiplier,
            multiplier_remaining: state.multiplier_remaining,
            phase: state.phase,
            frame: state.frame,
        }
    }
}

/// Final result delivered once per game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverReport {
    pub score: u64,
    pub level: u32,
}

/// Receives engine output. Every method defaults to a no-op, so hosts only
/// implement what they care about.
pub trait GameObserver {
    /// Called at the end of every frame and once on start
    fn on_update(&mut self, _snapshot: &Snapshot) {}

    /// Called exactly once when a game ends by losing all lives
    fn on_game_over(&mut self, _report: &GameOverReport) {}

    /// Called for each event recorded during a frame, before `on_update`
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Absent observer
impl GameObserver for () {}

/// The game engine
pub struct Engine<O: GameObserver = ()> {
    tuning: Tuning,
    state: GameState,
    observer: O,
    base_seed: u64,
    games_started: u64,
}

impl Engine<()> {
    /// Engine without an observer
    pub fn headless(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        Self::new(tuning, seed, ())
    }
}

impl<O: GameObserver> Engine<O> {
    /// Build an engine, rejecting tunings that fail [`Tuning::validate`]
    pub fn new(tuning: Tuning, seed: u64, observer: O) -> Result<Self, TuningError> {
        tuning.validate()?;
        let state = GameState::new(&tuning, seed);
        Ok(Self {
            tuning,
            state,
            observer,
            base_seed: seed,
            games_started: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts and tests that stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.tuning)
    }

    /// Reset to a fresh game and begin accepting frames
    pub fn start(&mut self) {
        let seed = self
            .base_seed
            .wrapping_add(self.games_started.wrapping_mul(2654435761));
        self.games_started += 1;

        self.state = GameState::new(&self.tuning, seed);
        self.state.phase = GamePhase::Active;
        log::info!("Game {} started (seed {})", self.games_started, seed);
        self.emit_snapshot();
    }

    /// Stop accepting frames. Safe to call at any time.
    pub fn stop(&mut self) {
        if self.state.phase == GamePhase::Inactive {
            return;
        }
        self.state.phase = GamePhase::Inactive;
        log::info!("Game stopped at frame {}", self.state.frame);
    }

    /// Simulate one frame and notify the observer. No-op while inactive.
    pub fn frame(&mut self) {
        if !self.state.is_active() {
            return;
        }
        tick(&mut self.state, &self.tuning);

        for event in self.state.drain_events() {
            self.observer.on_event(&event);
        }
        if self.state.phase == GamePhase::GameOver {
            self.game_over();
        }
        self.emit_snapshot();
    }

    /// Run up to `frames` frames, stopping early if the game ends
    pub fn run_frames(&mut self, frames: u64) -> u64 {
        let mut ran = 0;
        while ran < frames && self.state.is_active() {
            self.frame();
            ran += 1;
        }
        ran
    }

    /// Move the basket. Ignored while inactive.
    pub fn on_lane_selected(&mut self, lane: Lane) {
        if !self.state.is_active() {
            return;
        }
        self.state.player_lane = lane;
    }

    /// Move the basket from a classifier label; unknown labels are dropped
    pub fn on_lane_label(&mut self, label: &str) {
        match Lane::from_label(label) {
            Some(lane) => self.on_lane_selected(lane),
            None => log::debug!("Ignoring unknown lane label {:?}", label),
        }
    }

    /// Move the basket by lane index; out-of-range indices are dropped
    pub fn on_lane_index(&mut self, index: usize) {
        match Lane::from_index(index) {
            Some(lane) => self.on_lane_selected(lane),
            None => log::debug!("Ignoring out-of-range lane index {}", index),
        }
    }

    fn game_over(&mut self) {
        let report = GameOverReport {
            score: self.state.score,
            level: self.state.level,
        };
        log::info!("Game over: score {}, level {}", report.score, report.level);
        self.observer.on_game_over(&report);
        self.stop();
    }

    fn emit_snapshot(&mut self) {
        let snapshot = Snapshot::capture(&self.state, &self.tuning);
        self.observer.on_update(&snapshot);
    }
}
