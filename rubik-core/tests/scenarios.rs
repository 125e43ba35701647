use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::time::Duration;

use rubik_core::{
    Axis, CubeEngine, CubeletId, Direction, EngineConfig, Face, GestureRejected, GridPos,
    Orientation,
};

const FRAME: Duration = Duration::from_millis(16);

fn id_at(engine: &CubeEngine, x: i32, y: i32, z: i32) -> CubeletId {
    engine
        .registry()
        .at(&GridPos::new(x, y, z))
        .map(|c| c.id())
        .expect("lattice point is occupied")
}

fn run_until_committed(engine: &mut CubeEngine) -> usize {
    let mut frames = 0;
    while engine.is_turning() {
        engine.tick(FRAME);
        frames += 1;
        assert!(frames < 1000, "turn never finished");
    }
    frames
}

#[test]
fn upward_drag_turns_clicked_x_layer() {
    let mut engine = CubeEngine::default();
    let before = engine.registry().clone();
    let clicked = id_at(&engine, 1, 1, 1);

    engine.pointer_down(100.0, 100.0, Some(clicked));
    let started = engine.pointer_up(100.0, 40.0).expect("drag is a turn");
    assert_eq!(started.axis, Axis::X);
    assert_eq!(started.direction, Direction::Negative);
    assert_eq!(started.layer_value, 1);
    assert_eq!(started.member_count, 9);

    // 0.4s at 16ms per frame
    assert_eq!(run_until_committed(&mut engine), 25);

    let quarter = Orientation::quarter_turn(Axis::X, Direction::Negative);
    for (old, new) in before.iter().zip(engine.registry().iter()) {
        if old.position().x == 1 {
            assert_eq!(*new.position(), quarter.rotate(old.position()));
        } else {
            assert_eq!(new, old);
        }
    }

    // (x, y, z) -> (x, z, -y)
    let moved = engine.registry().get(clicked).expect("clicked cubelet");
    assert_eq!(*moved.position(), GridPos::new(1, 1, -1));
    assert!(engine.registry().is_lattice_bijection());
}

#[test]
fn tiny_drag_changes_nothing() {
    let mut engine = CubeEngine::default();
    let before = engine.registry().clone();

    engine.pointer_down(100.0, 100.0, Some(id_at(&engine, 0, 0, 1)));
    let result = engine.pointer_up(104.0, 103.0);

    assert!(matches!(result, Err(GestureRejected::BelowThreshold { .. })));
    assert!(!engine.is_turning());
    assert_eq!(engine.registry(), &before);
}

#[test]
fn back_to_back_gestures_start_one_turn() {
    let mut engine = CubeEngine::default();
    let clicked = id_at(&engine, -1, 0, 0);

    engine.pointer_down(0.0, 0.0, Some(clicked));
    assert!(engine.pointer_up(80.0, 0.0).is_ok());

    engine.pointer_down(0.0, 0.0, Some(clicked));
    assert_eq!(
        engine.pointer_up(0.0, 80.0),
        Err(GestureRejected::NoDragInProgress)
    );
    assert_eq!(
        engine.start_turn(Axis::X, -1, Direction::Positive),
        Err(GestureRejected::Busy)
    );

    let turn = engine.active_turn().expect("first turn is active");
    assert_eq!(turn.axis(), Axis::Y);
    assert_eq!(turn.layer_value(), 0);
}

#[test]
fn back_to_back_completions_commit_once() {
    let mut engine = CubeEngine::default();
    engine
        .start_turn(Axis::Y, 1, Direction::Positive)
        .expect("idle engine");

    let first = engine.tick(Duration::from_secs(1));
    let second = engine.tick(Duration::from_secs(1));

    let committed = first.expect("first tick commits");
    assert!(second.is_none());
    let members: HashSet<CubeletId> = committed.members.iter().copied().collect();
    assert_eq!(members.len(), 9);
    assert!(engine.registry().is_lattice_bijection());
}

#[test]
fn members_are_fixed_for_the_whole_turn() {
    let mut engine = CubeEngine::default();
    engine
        .start_turn(Axis::Z, 0, Direction::Negative)
        .expect("idle engine");
    let members = engine.active_turn().expect("active").members().to_vec();

    engine.tick(Duration::from_millis(100));
    engine.tick(Duration::from_millis(100));
    assert_eq!(engine.active_turn().expect("active").members(), &members[..]);

    let committed = engine.tick(Duration::from_secs(1)).expect("commit");
    assert_eq!(committed.members, members);
}

#[test]
fn stickers_follow_the_turn() {
    let mut engine = CubeEngine::default();
    let corner = id_at(&engine, 1, 1, 1);

    // Top layer a quarter turn about +y: front stickers move to the right side.
    engine
        .start_turn(Axis::Y, 1, Direction::Positive)
        .expect("idle engine");
    run_until_committed(&mut engine);

    let cubelet = engine.registry().get(corner).expect("corner");
    assert_eq!(*cubelet.position(), GridPos::new(1, 1, -1));
    assert_eq!(cubelet.face_towards(&GridPos::new(1, 0, 0)), Some(Face::Front));
    assert_eq!(cubelet.face_towards(&GridPos::new(0, 1, 0)), Some(Face::Top));
}

#[test]
fn custom_threshold_from_config() {
    let config = EngineConfig::from_toml_str("drag_threshold = 3.0").expect("config");
    let mut engine = CubeEngine::new(config);

    engine.pointer_down(100.0, 100.0, Some(id_at(&engine, 0, -1, 0)));
    let started = engine.pointer_up(104.0, 103.0).expect("above custom threshold");
    assert_eq!(started.axis, Axis::Y);
    assert_eq!(started.layer_value, -1);
}
