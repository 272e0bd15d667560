//! Item spawning: uniform lane choice and weighted kind sampling

use rand::Rng;

use super::state::{GameState, ItemKind, Lane};
use crate::tuning::{ItemSpec, Tuning};

/// Pick a kind for the draw `roll` in `[0, 1)`.
///
/// Walks the catalog accumulating weights and returns the first kind whose
/// cumulative weight reaches `roll`. Falls back to the first entry when
/// rounding leaves nothing selected.
pub fn kind_for_roll(catalog: &[ItemSpec], roll: f64) -> Option<ItemKind> {
    let mut cumulative = 0.0;
    for spec in catalog {
        cumulative += spec.weight;
        if cumulative >= roll {
            return Some(spec.kind);
        }
    }
    catalog.first().map(|s| s.kind)
}

/// Sample a kind from the catalog using the state's RNG
pub fn sample_kind(state: &mut GameState, tuning: &Tuning) -> ItemKind {
    let roll: f64 = state.rng.random();
    // Validated tunings are never empty; Apple keeps an empty catalog defined
    kind_for_roll(&tuning.catalog, roll).unwrap_or(ItemKind::Apple)
}

/// Pick one of the three lanes uniformly
pub fn sample_lane(state: &mut GameState) -> Lane {
    Lane::ALL[state.rng.random_range(0..Lane::ALL.len())]
}

/// Spawn one random item at the top of the field
pub fn spawn_item(state: &mut GameState, tuning: &Tuning) -> u32 {
    let lane = sample_lane(state);
    let kind = sample_kind(state, tuning);
    let id = state.push_item(kind, lane);
    log::debug!("Spawned {:?} #{} in {}", kind, id, lane.as_str());
    id
}
