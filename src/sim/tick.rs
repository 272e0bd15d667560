//! Per-frame simulation step
//!
//! Core game loop that advances the simulation by exactly one frame.

use super::collision::{enter_game_over, is_caught, resolve_collision};
use super::spawn::spawn_item;
use super::state::{FallingItem, GameEvent, GameState};
use crate::tuning::Tuning;

/// Advance the game state by one frame.
///
/// Does nothing unless the game is active. Items are processed newest first;
/// when lives run out mid-frame the remaining items are left untouched.
/// `state.events` holds only this frame's events once the step returns.
pub fn tick(state: &mut GameState, tuning: &Tuning) {
    if !state.is_active() {
        return;
    }
    state.events.clear();
    state.frame += 1;

    // Multiplier decay
    if state.multiplier_remaining > 0 {
        state.multiplier_remaining -= 1;
        if state.multiplier_remaining == 0 {
            state.multiplier = 1;
            state.events.push(GameEvent::MultiplierExpired);
        }
    }

    // Spawning
    state.spawn_timer += 1;
    if state.spawn_timer >= state.spawn_interval {
        spawn_item(state, tuning);
        state.spawn_timer = 0;
    }

    // Movement and resolution
    let items = std::mem::take(&mut state.items);
    let mut kept: Vec<FallingItem> = Vec::with_capacity(items.len());
    let mut pending = items.into_iter().rev();

    for mut item in pending.by_ref() {
        item.position += tuning.fall_speed(state.level);

        if is_caught(&item, state, tuning) {
            log::debug!("Caught {:?} #{}", item.kind, item.id);
            if resolve_collision(state, tuning, &item) {
                break;
            }
            continue;
        }

        if item.position > tuning.off_screen {
            if item.kind.is_fruit() && register_miss(state, tuning, &item) {
                break;
            }
            continue;
        }

        kept.push(item);
    }

    // Items skipped by an early abort stay where they were
    kept.extend(pending);
    kept.reverse();
    state.items = kept;
}

/// Count a dropped fruit. Returns true when it cost the last life.
fn register_miss(state: &mut GameState, tuning: &Tuning, item: &FallingItem) -> bool {
    state.missed += 1;
    state.events.push(GameEvent::Missed {
        id: item.id,
        kind: item.kind,
    });
    log::debug!("Missed {:?} #{} ({} in a row)", item.kind, item.id, state.missed);

    if state.missed < tuning.misses_per_life {
        return false;
    }
    state.missed = 0;
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost { lives: state.lives });
    if state.lives == 0 {
        enter_game_over(state);
        return true;
    }
    false
}
