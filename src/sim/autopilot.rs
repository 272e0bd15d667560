//! Idle/demo player
//!
//! Picks a lane from the visible items the way a cautious player would: chase
//! the lowest catchable item, never stand under a bomb about to land.

use super::state::{FallingItem, GameState, ItemKind, Lane};
use crate::tuning::Tuning;

/// How far above the catch window a bomb counts as an immediate threat
const BOMB_DANGER_MARGIN: f32 = 20.0;

/// Choose the lane the player should move to this frame
pub fn choose_lane(state: &GameState, tuning: &Tuning) -> Lane {
    let threatened = |lane: Lane| {
        state.items.iter().any(|item| {
            item.kind == ItemKind::Bomb
                && item.lane == lane
                && item.position < tuning.catch_window_end
                && item.position > tuning.catch_window_start - BOMB_DANGER_MARGIN
        })
    };

    // Lowest item that can still be caught and is worth catching
    let target = state
        .items
        .iter()
        .filter(|item| item.kind != ItemKind::Bomb && item.position < tuning.catch_window_end)
        .filter(|item| !threatened(item.lane))
        .max_by(|a, b| {
            desirability(a, tuning)
                .partial_cmp(&desirability(b, tuning))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(item) = target {
        return item.lane;
    }

    if !threatened(state.player_lane) {
        return state.player_lane;
    }

    // Dodge to the nearest safe lane
    let current = state.player_lane.index();
    Lane::ALL
        .iter()
        .copied()
        .filter(|lane| !threatened(*lane))
        .min_by_key(|lane| lane.index().abs_diff(current))
        .unwrap_or(state.player_lane)
}

/// Lower items first; fruit beats power-ups at similar heights
fn desirability(item: &FallingItem, tuning: &Tuning) -> f32 {
    let bonus = match item.kind {
        ItemKind::Heart => 3.0,
        ItemKind::Money => 2.0,
        _ => 4.0 + tuning.score_value(item.kind) as f32 / 100.0,
    };
    item.position + bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;
    use crate::sim::tick;

    fn state_with(items: &[(ItemKind, Lane, f32)]) -> (GameState, Tuning) {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning, 11);
        state.phase = GamePhase::Active;
        for &(kind, lane, position) in items {
            let id = state.push_item(kind, lane);
            if let Some(item) = state.items.iter_mut().find(|i| i.id == id) {
                item.position = position;
            }
        }
        (state, tuning)
    }

    #[test]
    fn test_chases_lowest_fruit() {
        let (state, tuning) =
            state_with(&[(ItemKind::Apple, Lane::Left, 30.0), (ItemKind::Apple, Lane::Right, 70.0)]);
        assert_eq!(choose_lane(&state, &tuning), Lane::Right);
    }

    #[test]
    fn test_dodges_incoming_bomb() {
        let (state, tuning) = state_with(&[(ItemKind::Bomb, Lane::Center, 80.0)]);
        let lane = choose_lane(&state, &tuning);
        assert_ne!(lane, Lane::Center);
    }

    #[test]
    fn test_ignores_fruit_under_bomb() {
        let (state, tuning) = state_with(&[
            (ItemKind::Apple, Lane::Left, 88.0),
            (ItemKind::Bomb, Lane::Left, 80.0),
            (ItemKind::Banana, Lane::Right, 40.0),
        ]);
        assert_eq!(choose_lane(&state, &tuning), Lane::Right);
    }

    #[test]
    fn test_prefers_fruit_over_power_up_at_similar_height() {
        let (state, tuning) =
            state_with(&[(ItemKind::Apple, Lane::Left, 60.0), (ItemKind::Heart, Lane::Right, 61.0)]);
        assert_eq!(choose_lane(&state, &tuning), Lane::Left);

        let (state, tuning) =
            state_with(&[(ItemKind::Apple, Lane::Left, 40.0), (ItemKind::Money, Lane::Right, 70.0)]);
        assert_eq!(choose_lane(&state, &tuning), Lane::Right);
    }

    #[test]
    fn test_stays_put_when_idle() {
        let (mut state, tuning) = state_with(&[]);
        state.player_lane = Lane::Left;
        assert_eq!(choose_lane(&state, &tuning), Lane::Left);
    }

    #[test]
    fn test_autopilot_scores() {
        let (mut state, tuning) = state_with(&[]);
        for _ in 0..3_000 {
            if !state.is_active() {
                break;
            }
            state.player_lane = choose_lane(&state, &tuning);
            tick(&mut state, &tuning);
        }
        assert!(state.score > 0);
    }
}
