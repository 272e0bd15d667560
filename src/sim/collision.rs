//! Collision detection and resolution
//!
//! An item collides with the basket when it sits inside the catch window and
//! shares the player's lane. Resolution dispatches on the item kind.

use super::state::{FallingItem, GameEvent, GamePhase, GameState, ItemKind};
use crate::tuning::Tuning;

/// Whether `item` is touching the basket this frame
pub fn is_caught(item: &FallingItem, state: &GameState, tuning: &Tuning) -> bool {
    item.lane == state.player_lane && tuning.in_catch_window(item.position)
}

/// Apply the effect of catching `item`.
///
/// Returns true when the catch ended the game.
pub fn resolve_collision(state: &mut GameState, tuning: &Tuning, item: &FallingItem) -> bool {
    match item.kind {
        ItemKind::Bomb => {
            state.lives = state.lives.saturating_sub(tuning.bomb_damage);
            log::debug!("Bomb #{} hit, lives now {}", item.id, state.lives);
            state.events.push(GameEvent::Caught {
                id: item.id,
                kind: item.kind,
                points: 0,
            });
            state.events.push(GameEvent::LifeLost { lives: state.lives });
            if state.lives == 0 {
                enter_game_over(state);
                return true;
            }
        }
        ItemKind::Heart => {
            state.lives += tuning.heart_restore;
            state.events.push(GameEvent::Caught {
                id: item.id,
                kind: item.kind,
                points: 0,
            });
        }
        ItemKind::Money => {
            // Overwrites any running countdown
            state.multiplier = tuning.multiplier_factor;
            state.multiplier_remaining = tuning.multiplier_frames;
            state.events.push(GameEvent::Caught {
                id: item.id,
                kind: item.kind,
                points: 0,
            });
            state.events.push(GameEvent::MultiplierStarted {
                factor: state.multiplier,
                frames: state.multiplier_remaining,
            });
        }
        ItemKind::Apple | ItemKind::Banana | ItemKind::Pineapple => {
            let points = tuning.score_value(item.kind) * u64::from(state.multiplier);
            state.score += points;
            state.events.push(GameEvent::Caught {
                id: item.id,
                kind: item.kind,
                points,
            });
            check_level_up(state, tuning);
        }
    }
    false
}

/// Advance at most one level if the score has reached the current threshold
pub fn check_level_up(state: &mut GameState, tuning: &Tuning) {
    if state.score >= tuning.level_threshold(state.level) {
        state.level += 1;
        state.spawn_interval = tuning.spawn_interval_for_level(state.level);
        log::info!(
            "Level {} reached (score {}, spawn every {} frames)",
            state.level,
            state.score,
            state.spawn_interval
        );
        state.events.push(GameEvent::LevelUp {
            level: state.level,
            spawn_interval: state.spawn_interval,
        });
    }
}

/// Mark the game as over. Lives are already clamped at 0 by the caller.
pub fn enter_game_over(state: &mut GameState) {
    if state.phase != GamePhase::Active {
        return;
    }
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::GameOver {
        score: state.score,
        level: state.level,
    });
}
