//! End-to-end games driven through the public engine API

use lane_catch::{Engine, GameEvent, GameObserver, ItemKind, Lane, Tuning};

#[derive(Default)]
struct Events(Vec<GameEvent>);

impl GameObserver for Events {
    fn on_event(&mut self, event: &GameEvent) {
        self.0.push(*event);
    }
}

/// Started engine with random spawning disabled
fn quiet_engine() -> Engine<Events> {
    let mut engine = Engine::new(Tuning::default(), 9, Events::default()).unwrap();
    engine.start();
    engine.state_mut().spawn_interval = u32::MAX;
    engine
}

fn place(engine: &mut Engine<Events>, kind: ItemKind, lane: Lane, position: f32) -> u32 {
    let id = engine.state_mut().push_item(kind, lane);
    if let Some(item) = engine.state_mut().items.iter_mut().find(|i| i.id == id) {
        item.position = position;
    }
    id
}

#[test]
fn apple_caught_in_player_lane() {
    let mut engine = quiet_engine();
    let lane = engine.state().player_lane;
    place(&mut engine, ItemKind::Apple, lane, 88.0);
    engine.frame();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.score, 100);
    assert!(snapshot.items.is_empty());
    assert_eq!(snapshot.lives, 3);
    assert_eq!(snapshot.level, 1);
}

#[test]
fn money_doubles_next_fruit() {
    let mut engine = quiet_engine();
    engine.on_lane_selected(Lane::Left);
    place(&mut engine, ItemKind::Money, Lane::Left, 88.0);
    engine.frame();
    assert_eq!(engine.state().multiplier, 2);

    place(&mut engine, ItemKind::Banana, Lane::Left, 88.0);
    engine.frame();
    assert_eq!(engine.state().score, 400);
}

#[test]
fn multiplier_lasts_exactly_its_duration() {
    let mut engine = quiet_engine();
    let lane = engine.state().player_lane;
    place(&mut engine, ItemKind::Money, lane, 88.0);
    engine.frame();
    assert_eq!(engine.state().multiplier_remaining, 600);

    engine.run_frames(599);
    assert_eq!(engine.state().multiplier, 2);
    engine.frame();
    assert_eq!(engine.state().multiplier, 1);
    assert!(engine.observer().0.contains(&GameEvent::MultiplierExpired));
}

#[test]
fn dodging_fruit_costs_a_life_every_second_miss() {
    let mut engine = quiet_engine();
    engine.on_lane_selected(Lane::Right);

    place(&mut engine, ItemKind::Apple, Lane::Left, 99.5);
    engine.frame();
    assert_eq!(engine.state().lives, 3);
    assert_eq!(engine.state().missed, 1);

    place(&mut engine, ItemKind::Banana, Lane::Center, 99.5);
    engine.frame();
    assert_eq!(engine.state().lives, 2);
    assert_eq!(engine.state().missed, 0);

    let lost: Vec<_> = engine
        .observer()
        .0
        .iter()
        .filter(|e| matches!(e, GameEvent::LifeLost { .. }))
        .collect();
    assert_eq!(lost.len(), 1);
}

#[test]
fn catching_a_heart_then_a_bomb() {
    let mut engine = quiet_engine();
    let lane = engine.state().player_lane;
    place(&mut engine, ItemKind::Heart, lane, 88.0);
    engine.frame();
    assert_eq!(engine.state().lives, 4);

    place(&mut engine, ItemKind::Bomb, lane, 88.0);
    engine.frame();
    assert_eq!(engine.state().lives, 1);
    assert!(engine.is_active());
}

#[test]
fn exact_threshold_levels_up() {
    let mut engine = quiet_engine();
    engine.state_mut().score = 300;
    let lane = engine.state().player_lane;
    place(&mut engine, ItemKind::Banana, lane, 88.0);
    engine.frame();

    let state = engine.state();
    assert_eq!(state.score, 500);
    assert_eq!(state.level, 2);
    assert_eq!(state.spawn_interval, 50);
    assert!(engine
        .observer()
        .0
        .contains(&GameEvent::LevelUp { level: 2, spawn_interval: 50 }));
}

#[test]
fn stop_without_start_is_harmless() {
    let mut engine = Engine::headless(Tuning::default(), 0).unwrap();
    engine.stop();
    engine.stop();
    engine.frame();
    assert!(!engine.is_active());
    assert_eq!(engine.state().frame, 0);
}
