use egui::{Color32, Pos2, pos2};
use nail_doodle::command::{Action, Command};
use nail_doodle::decoration::DecorationKind;
use nail_doodle::editor::Editor;
use nail_doodle::geometry::{ShapeKind, regions_for};
use nail_doodle::renderer::{CanvasFrame, reduce};
use nail_doodle::stroke::Stroke;

fn decoration(kind: DecorationKind, at: Pos2, color: Color32, seed: u64) -> Action {
    Action::Decoration {
        kind,
        at,
        color,
        size: 1.0,
        seed,
    }
}

// A design touching every action kind
fn sample_history() -> Vec<Action> {
    vec![
        Action::Fill {
            region_index: 0,
            color: Color32::LIGHT_BLUE,
        },
        Action::Stroke(Stroke::new(
            Color32::BLACK,
            vec![pos2(20.0, 40.0), pos2(120.0, 60.0), pos2(220.0, 40.0)],
        )),
        decoration(DecorationKind::Flower, pos2(55.0, 160.0), Color32::RED, 1),
        decoration(DecorationKind::Bow, pos2(127.0, 145.0), Color32::BLUE, 2),
        decoration(DecorationKind::Heart, pos2(282.0, 145.0), Color32::RED, 3),
        decoration(DecorationKind::Glitter, pos2(352.0, 160.0), Color32::GOLD, 4),
    ]
}

fn pixel(frame: &CanvasFrame, p: Pos2) -> Color32 {
    frame.pixel(p.x as u32, p.y as u32).unwrap()
}

fn editor_with(shape: ShapeKind, actions: &[Action]) -> Editor {
    let mut editor = Editor::new(shape).unwrap();
    for action in actions {
        editor.append(action.clone());
    }
    editor
}

#[test]
fn test_replay_is_deterministic() {
    for shape in ShapeKind::ALL {
        let history = sample_history();
        let first = reduce(shape, &history).unwrap();
        let second = reduce(shape, &history).unwrap();
        assert_eq!(first.data(), second.data());
    }
}

#[test]
fn test_editor_frame_matches_reduce() {
    let history = sample_history();
    let editor = editor_with(ShapeKind::Oval, &history);
    assert_eq!(
        editor.frame().data(),
        reduce(ShapeKind::Oval, &history).unwrap().data()
    );
}

#[test]
fn test_undo_equals_replay_of_the_prefix() {
    let history = sample_history();
    let mut editor = editor_with(ShapeKind::Square, &history);

    for n in (0..history.len()).rev() {
        editor.undo();
        assert_eq!(editor.actions(), &history[..n]);
        assert_eq!(
            editor.frame().data(),
            reduce(ShapeKind::Square, &history[..n]).unwrap().data()
        );
    }
}

#[test]
fn test_undo_on_empty_leaves_frame_unchanged() {
    let mut editor = Editor::new(ShapeKind::Stiletto).unwrap();
    let before = editor.frame().data().to_vec();
    editor.undo();
    assert!(editor.actions().is_empty());
    assert_eq!(editor.frame().data(), before.as_slice());
}

#[test]
fn test_shape_switch_isolates_designs() {
    let mut editor = editor_with(ShapeKind::Square, &sample_history());
    editor.execute(Command::SwitchShape(ShapeKind::Stiletto));

    assert_eq!(editor.shape(), ShapeKind::Stiletto);
    assert!(editor.actions().is_empty());
    assert!(!editor.history().can_redo());
    assert_eq!(
        editor.frame().data(),
        reduce(ShapeKind::Stiletto, &[]).unwrap().data()
    );
}

#[test]
fn test_reset_always_yields_empty_outlines() {
    let mut editor = editor_with(ShapeKind::Oval, &sample_history());
    editor.begin_stroke(Color32::BLACK, pos2(5.0, 5.0));
    editor.extend_stroke(pos2(50.0, 5.0));
    editor.execute(Command::Reset);

    assert!(editor.actions().is_empty());
    assert!(!editor.state().is_drawing());
    assert_eq!(
        editor.frame().data(),
        reduce(ShapeKind::Oval, &[]).unwrap().data()
    );
}

#[test]
fn test_fill_then_star_then_undo() {
    let red = Color32::from_rgb(0xff, 0x00, 0x00);
    let yellow = Color32::from_rgb(0xff, 0xff, 0x00);
    let star_at = pos2(200.0, 150.0);

    let mut editor = Editor::new(ShapeKind::Square).unwrap();
    editor.append(Action::Fill {
        region_index: 2,
        color: red,
    });
    editor.append(decoration(DecorationKind::Star, star_at, yellow, 0));
    assert_eq!(pixel(editor.frame(), star_at), yellow);

    editor.undo();

    assert_eq!(
        editor.actions(),
        &[Action::Fill {
            region_index: 2,
            color: red
        }]
    );
    let region = regions_for(ShapeKind::Square)[2];
    assert_eq!(pixel(editor.frame(), region.center()), red);
    assert_eq!(pixel(editor.frame(), star_at), red);
}

#[test]
fn test_redo_after_new_mark_is_gone() {
    let mut editor = editor_with(ShapeKind::Square, &sample_history()[..2]);
    editor.undo();
    editor.append(decoration(
        DecorationKind::Star,
        pos2(300.0, 40.0),
        Color32::GREEN,
        9,
    ));
    let before = editor.frame().data().to_vec();
    editor.redo();
    assert_eq!(editor.actions().len(), 2);
    assert_eq!(editor.frame().data(), before.as_slice());
}

#[test]
fn test_decorations_only_use_recorded_coordinates() {
    // The same bow stamped through the editor and replayed from the log must
    // land on the same pixels.
    let bow = decoration(DecorationKind::Bow, pos2(205.0, 120.0), Color32::BLUE, 0);
    let editor = editor_with(ShapeKind::Square, &[bow.clone()]);
    let replayed = reduce(ShapeKind::Square, &[bow]).unwrap();
    assert_eq!(editor.frame().data(), replayed.data());
    assert_eq!(pixel(&replayed, pos2(205.0, 120.0)), Color32::BLUE);
}

#[test]
fn test_hand_built_glitter_with_negative_size_replays() {
    let glitter = Action::Decoration {
        kind: DecorationKind::Glitter,
        at: pos2(205.0, 130.0),
        color: Color32::GOLD,
        size: -2.0,
        seed: 11,
    };
    let clamped = Action::Decoration {
        kind: DecorationKind::Glitter,
        at: pos2(205.0, 130.0),
        color: Color32::GOLD,
        size: 0.5,
        seed: 11,
    };
    assert_eq!(
        reduce(ShapeKind::Square, &[glitter]).unwrap().data(),
        reduce(ShapeKind::Square, &[clamped]).unwrap().data()
    );
}
