use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use glam::{Affine3A, Vec3};
use spatial_marker::app::tools::stroke_curve::StrokeStyle;
use spatial_marker::app::tool_router;
use spatial_marker::core::inside_any;
use spatial_marker::{
    ControllerEvent, ControllerHandle, DrawingVolume, FaceButton, FrameInput, Hand, HandPair,
    MarkerOptions, Notification, Rgb, SessionCommand, SessionController, SessionIntent,
    SessionState,
};

const FRAME: f32 = 1.0 / 72.0;
const BOX_CENTER: Vec3 = Vec3::new(0.0, 0.0, -4.0);

/// Session mit einer 4×4×4-Box bei (0, 0, -4) und zwei getrackten Controllern.
fn session() -> (SessionController, SessionState) {
    session_with(MarkerOptions::default())
}

fn session_with(options: MarkerOptions) -> (SessionController, SessionState) {
    let controllers = HandPair::from_fn(|hand| {
        ControllerHandle::with_transform(hand, pose(hand, 0.0))
    });
    let volumes = vec![DrawingVolume::axis_box(BOX_CENTER, Vec3::splat(4.0))];
    let state = SessionState::new(controllers, volumes, options);
    (SessionController::new(), state)
}

/// Session, deren Rig bereits in der Zone steht.
fn session_inside() -> (SessionController, SessionState) {
    session_inside_with(MarkerOptions::default())
}

fn session_inside_with(options: MarkerOptions) -> (SessionController, SessionState) {
    let (mut controller, mut state) = session_with(options);
    controller.queue_intent(
        &mut state,
        SessionIntent::TeleportRig {
            position: BOX_CENTER,
        },
    );
    tick(&mut controller, &mut state);
    state.notifications.drain();
    (controller, state)
}

fn pose(hand: Hand, x: f32) -> Affine3A {
    let side = if hand == Hand::Left { -0.3 } else { 0.3 };
    Affine3A::from_translation(BOX_CENTER + Vec3::new(side + x, 1.2, 0.0))
}

fn tick(controller: &mut SessionController, state: &mut SessionState) {
    controller
        .tick(state, FrameInput::idle(FRAME))
        .expect("Tick sollte nie fehlschlagen");
}

fn tick_at(controller: &mut SessionController, state: &mut SessionState, hand: Hand, x: f32) {
    controller
        .tick(state, FrameInput::idle(FRAME).with_controller(hand, pose(hand, x)))
        .expect("Tick sollte nie fehlschlagen");
}

fn press(controller: &mut SessionController, state: &mut SessionState, event: ControllerEvent) {
    controller.queue_event(state, event);
    tick(controller, state);
}

/// Zeichnet einen Stroke mit `samples` Punkten im Abstand von 1 cm.
fn draw(controller: &mut SessionController, state: &mut SessionState, hand: Hand, samples: usize) {
    controller.queue_event(state, ControllerEvent::TriggerDown { hand });
    for i in 0..samples {
        tick_at(controller, state, hand, i as f32 * 0.01);
    }
    press(controller, state, ControllerEvent::TriggerUp { hand });
}

fn teleport(controller: &mut SessionController, state: &mut SessionState, position: Vec3) {
    controller.queue_intent(state, SessionIntent::TeleportRig { position });
    tick(controller, state);
}

// ── Zone ────────────────────────────────────────────────────────────

#[test]
fn test_zone_matches_disjunction_every_tick() {
    let (mut controller, mut state) = session();
    state
        .volumes
        .push(DrawingVolume::axis_box(Vec3::new(10.0, 0.0, 0.0), Vec3::ONE));

    let positions = [
        Vec3::ZERO,
        BOX_CENTER,
        Vec3::new(1.9, 0.0, -4.0),
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::new(10.2, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -2.5),
        Vec3::new(0.0, 5.0, -4.0),
    ];
    for position in positions {
        teleport(&mut controller, &mut state, position);
        assert_eq!(
            state.zone.inside,
            inside_any(&state.volumes, position),
            "Zonenzustand bei {position:?} veraltet"
        );
    }
}

#[test]
fn test_zone_follows_volume_transform_changes() {
    let (mut controller, mut state) = session_inside();
    assert!(state.zone.inside);

    state.volumes[0].transform.translation = Vec3::new(50.0, 0.0, 0.0);
    tick(&mut controller, &mut state);
    assert!(!state.zone.inside, "Verschobene Zone muss im nächsten Tick greifen");

    state.volumes[0].transform.translation = BOX_CENTER;
    tick(&mut controller, &mut state);
    assert!(state.zone.inside);
}

#[test]
fn test_box_scenario_enables_right_painter() {
    let (_, state) = session_inside();

    assert!(state.zone.inside);
    assert_eq!(state.role.painter(), Hand::Right);
    assert!(state.drawing_enabled(Hand::Right));
    assert!(!state.drawing_enabled(Hand::Left));
    assert!(state.locomotion_enabled(Hand::Right));
    assert!(!state.locomotion_enabled(Hand::Left));
    assert_eq!(state.size_picker.attached(), Some(Hand::Right));
    assert_eq!(state.color_picker.attached(), Some(Hand::Left));
}

#[test]
fn test_outside_everything_is_released() {
    let (mut controller, mut state) = session_inside();
    teleport(&mut controller, &mut state, Vec3::new(0.0, 0.0, 10.0));

    assert!(!state.zone.inside);
    assert!(!state.drawing_enabled(Hand::Right));
    assert!(state.locomotion_enabled(Hand::Left));
    assert!(state.locomotion_enabled(Hand::Right));
    assert!(state.size_picker.attached().is_none());
    assert!(state.color_picker.attached().is_none());
    assert!(!state.hands.left.colorizer.is_active());
    assert!(!state.hands.right.colorizer.is_active());
    assert!(!state.stroke.indicator_visible());
}

// ── Stroke-Abbruch beim Verlassen ─────────────────────────────────

#[test]
fn test_exit_commits_stroke_before_role_change() {
    let (mut controller, mut state) = session_inside();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    state
        .notifications
        .subscribe(move |n| sink.borrow_mut().push(n.clone()));

    controller.queue_event(&mut state, ControllerEvent::TriggerDown { hand: Hand::Right });
    for i in 0..3 {
        tick_at(&mut controller, &mut state, Hand::Right, i as f32 * 0.01);
    }
    assert!(state.stroke.is_recording());

    // Selber Tick: Zone verlassen und Rollentausch anfragen
    controller.queue_intent(
        &mut state,
        SessionIntent::TeleportRig {
            position: Vec3::new(0.0, 0.0, 10.0),
        },
    );
    controller.queue_event(&mut state, ControllerEvent::GripDown { hand: Hand::Left });
    tick(&mut controller, &mut state);

    assert!(!state.stroke.is_recording());
    assert_eq!(state.stroke.stroke_count(), 1);
    assert_eq!(state.role.painter(), Hand::Right, "Tausch außerhalb ignoriert");
    assert_eq!(
        *seen.borrow(),
        vec![
            Notification::StrokeCommitted {
                point_count: 3,
                total: 1
            },
            Notification::ZoneChanged { inside: false },
        ]
    );
}

#[test]
fn test_exit_with_single_sample_persists_nothing() {
    let (mut controller, mut state) = session_inside();
    controller.queue_event(&mut state, ControllerEvent::TriggerDown { hand: Hand::Right });
    tick(&mut controller, &mut state);
    assert_eq!(state.stroke.point_count(), 1);

    teleport(&mut controller, &mut state, Vec3::new(0.0, 0.0, 10.0));

    assert_eq!(state.stroke.stroke_count(), 0);
    assert_eq!(state.stroke.store().live_count(), 0);
}

#[test]
fn test_trigger_outside_does_not_start_stroke() {
    let (mut controller, mut state) = session();
    tick(&mut controller, &mut state);
    press(
        &mut controller,
        &mut state,
        ControllerEvent::TriggerDown { hand: Hand::Right },
    );
    assert!(!state.stroke.is_recording());
    assert_eq!(state.stroke.store().live_count(), 0);
}

// ── Strokes & Undo ──────────────────────────────────────────────────

#[test]
fn test_single_sample_stroke_is_discarded_and_indicator_restored() {
    let (mut controller, mut state) = session_inside();
    draw(&mut controller, &mut state, Hand::Right, 1);

    assert_eq!(state.stroke.stroke_count(), 0);
    assert_eq!(state.stroke.store().live_count(), 0);
    assert!(state.stroke.indicator_visible());
    assert!(controller.build_scene(&state).tip_indicator.is_some());
}

#[test]
fn test_sampling_respects_min_distance() {
    let (mut controller, mut state) = session_inside();
    controller.queue_event(&mut state, ControllerEvent::TriggerDown { hand: Hand::Right });
    for i in 0..5 {
        tick_at(&mut controller, &mut state, Hand::Right, i as f32 * 0.01);
    }
    assert_eq!(state.stroke.point_count(), 5);

    // 2 mm neben dem letzten Punkt
    tick_at(&mut controller, &mut state, Hand::Right, 0.042);
    assert_eq!(state.stroke.point_count(), 5);
    // Controller steht still
    tick(&mut controller, &mut state);
    assert_eq!(state.stroke.point_count(), 5);
}

#[test]
fn test_committed_stroke_has_tube_and_two_caps() {
    let (mut controller, mut state) = session_inside();
    draw(&mut controller, &mut state, Hand::Right, 6);

    let scene = controller.build_scene(&state);
    assert_eq!(state.stroke.stroke_count(), 1);
    assert_eq!(scene.tube_count(), 1);
    assert_eq!(scene.cap_count(), 2);
    assert!(scene.active_path.is_none());
}

#[test]
fn test_undo_n_times_empties_stack_and_store() {
    let (mut controller, mut state) = session_inside();
    for _ in 0..3 {
        draw(&mut controller, &mut state, Hand::Right, 4);
    }
    assert_eq!(state.stroke.stroke_count(), 3);
    assert_eq!(state.stroke.store().live_count(), 9);

    for _ in 0..5 {
        controller
            .handle_intent(&mut state, SessionIntent::UndoRequested)
            .expect("Undo sollte nie fehlschlagen");
    }

    assert_eq!(state.stroke.stroke_count(), 0);
    assert_eq!(state.stroke.store().live_count(), 0);
    let undone = state
        .notifications
        .drain()
        .into_iter()
        .filter(|n| matches!(n, Notification::StrokeUndone { .. }))
        .count();
    assert_eq!(undone, 3);
}

#[test]
fn test_strokes_beyond_undo_depth_stay_visible() {
    let mut options = MarkerOptions::default();
    options.undo_depth = 3;
    let (mut controller, mut state) = session_inside_with(options);

    draw(&mut controller, &mut state, Hand::Right, 3);
    let first = *state.stroke.committed().next().expect("ein Stroke");
    for _ in 0..3 {
        draw(&mut controller, &mut state, Hand::Right, 3);
    }

    assert_eq!(state.stroke.stroke_count(), 3);
    assert_eq!(state.stroke.store().live_count(), 12);
    assert!(state.stroke.store().tube(first.path).is_some(), "ältester Tube gelöscht");
    for cap in first.caps {
        assert!(state.stroke.store().get(cap).is_some(), "Kappe {cap:?} gelöscht");
    }
    let scene = controller.build_scene(&state);
    assert!(scene.geometries.iter().any(|(id, _)| *id == first.path));

    for _ in 0..4 {
        controller
            .handle_intent(&mut state, SessionIntent::UndoRequested)
            .expect("Undo sollte nie fehlschlagen");
    }
    assert_eq!(state.stroke.stroke_count(), 0);
    assert_eq!(state.stroke.store().live_count(), 3, "nur der älteste Stroke bleibt");
}

#[test]
fn test_undo_button_needs_drawing_input() {
    let (mut controller, mut state) = session_inside();
    draw(&mut controller, &mut state, Hand::Right, 4);

    // Palette-Hand darf nicht rückgängig machen
    press(
        &mut controller,
        &mut state,
        ControllerEvent::FaceButtonDown {
            hand: Hand::Left,
            button: FaceButton::X,
        },
    );
    assert_eq!(state.stroke.stroke_count(), 1);

    teleport(&mut controller, &mut state, Vec3::new(0.0, 0.0, 10.0));
    press(
        &mut controller,
        &mut state,
        ControllerEvent::FaceButtonDown {
            hand: Hand::Right,
            button: FaceButton::A,
        },
    );
    assert_eq!(state.stroke.stroke_count(), 1, "Außerhalb kein Undo per Button");

    teleport(&mut controller, &mut state, BOX_CENTER);
    press(
        &mut controller,
        &mut state,
        ControllerEvent::FaceButtonDown {
            hand: Hand::Right,
            button: FaceButton::A,
        },
    );
    assert_eq!(state.stroke.stroke_count(), 0);
}

#[test]
fn test_thickness_change_mid_stroke_affects_next_sample_only() {
    let (mut controller, mut state) = session_inside();
    draw(&mut controller, &mut state, Hand::Right, 3);
    let first = *state.stroke.committed().next().expect("ein Stroke");
    let first_radius = state
        .stroke
        .store()
        .tube(first.path)
        .expect("Tube vorhanden")
        .radius;

    controller.queue_event(&mut state, ControllerEvent::TriggerDown { hand: Hand::Right });
    tick_at(&mut controller, &mut state, Hand::Right, 0.0);
    tick_at(&mut controller, &mut state, Hand::Right, 0.01);
    let path = state.stroke.active_path().expect("Stroke läuft");
    let before = state.stroke.store().tube(path).expect("Tube").radius;

    controller.queue_intent(
        &mut state,
        SessionIntent::StrokeThicknessRequested { thickness: 0.02 },
    );
    tick(&mut controller, &mut state);
    assert_relative_eq!(
        state.stroke.store().tube(path).expect("Tube").radius,
        before
    );

    tick_at(&mut controller, &mut state, Hand::Right, 0.02);
    assert_relative_eq!(state.stroke.store().tube(path).expect("Tube").radius, 0.02);
    assert_relative_eq!(
        state.stroke.store().tube(first.path).expect("Tube").radius,
        first_radius
    );
}

#[test]
fn test_invalid_thickness_is_clamped() {
    let (mut controller, mut state) = session_inside();
    for thickness in [0.0, -1.0, f32::NAN] {
        controller
            .handle_intent(&mut state, SessionIntent::StrokeThicknessRequested { thickness })
            .expect("Stiländerung sollte nie fehlschlagen");
        assert!(state.stroke.style().thickness > 0.0);
    }
}

// ── Rollen ──────────────────────────────────────────────────────────

#[test]
fn test_grip_outside_zone_is_ignored() {
    let (mut controller, mut state) = session();
    tick(&mut controller, &mut state);
    press(
        &mut controller,
        &mut state,
        ControllerEvent::GripDown { hand: Hand::Left },
    );

    assert_eq!(state.role.painter(), Hand::Right);
}

#[test]
fn test_grip_on_current_painter_is_noop() {
    let (mut controller, mut state) = session_inside();
    press(
        &mut controller,
        &mut state,
        ControllerEvent::GripDown { hand: Hand::Right },
    );

    assert_eq!(state.role.painter(), Hand::Right);
    assert!(!state
        .notifications
        .drain()
        .iter()
        .any(|n| matches!(n, Notification::PainterChanged { .. })));
}

#[test]
fn test_swap_inside_moves_all_tools() {
    let (mut controller, mut state) = session_inside();
    press(
        &mut controller,
        &mut state,
        ControllerEvent::GripDown { hand: Hand::Left },
    );

    assert_eq!(state.role.painter(), Hand::Left);
    assert_eq!(state.role.palette(), Hand::Right);
    assert!(state.drawing_enabled(Hand::Left));
    assert!(!state.drawing_enabled(Hand::Right));
    assert!(state.locomotion_enabled(Hand::Left));
    assert!(!state.locomotion_enabled(Hand::Right));
    assert_eq!(state.size_picker.attached(), Some(Hand::Left));
    assert_eq!(state.color_picker.attached(), Some(Hand::Right));
    assert!(state
        .notifications
        .drain()
        .contains(&Notification::PainterChanged {
            painter: Hand::Left,
            palette: Hand::Right
        }));
}

#[test]
fn test_swap_mid_stroke_ends_stroke_of_old_painter() {
    let (mut controller, mut state) = session_inside();
    controller.queue_event(&mut state, ControllerEvent::TriggerDown { hand: Hand::Right });
    for i in 0..4 {
        tick_at(&mut controller, &mut state, Hand::Right, i as f32 * 0.01);
    }
    press(
        &mut controller,
        &mut state,
        ControllerEvent::GripDown { hand: Hand::Left },
    );

    assert!(!state.stroke.is_recording());
    assert_eq!(state.stroke.stroke_count(), 1);

    // Alter Painter hört den Trigger nicht mehr
    press(
        &mut controller,
        &mut state,
        ControllerEvent::TriggerDown { hand: Hand::Right },
    );
    assert!(!state.stroke.is_recording());
}

#[test]
fn test_swap_resets_style_then_pushes_picker_selection() {
    let (mut controller, mut state) = session_inside();
    press(
        &mut controller,
        &mut state,
        ControllerEvent::FaceButtonDown {
            hand: Hand::Right,
            button: FaceButton::B,
        },
    );
    assert_relative_eq!(state.stroke.style().thickness, 0.005);

    press(
        &mut controller,
        &mut state,
        ControllerEvent::GripDown { hand: Hand::Left },
    );

    let expected = StrokeStyle::new(
        state.color_picker.selected_color(),
        state.size_picker.selected(),
    );
    assert_eq!(state.stroke.style(), expected);
}

// ── Picker ──────────────────────────────────────────────────────────

#[test]
fn test_size_button_cycles_with_wrap() {
    let (mut controller, mut state) = session_inside();
    let sizes = MarkerOptions::default().marker_sizes;
    for expected in sizes.iter().skip(1).chain(sizes.iter().take(1)) {
        press(
            &mut controller,
            &mut state,
            ControllerEvent::FaceButtonDown {
                hand: Hand::Right,
                button: FaceButton::B,
            },
        );
        assert_relative_eq!(state.stroke.style().thickness, *expected);
    }
}

#[test]
fn test_size_button_on_palette_hand_is_ignored() {
    let (mut controller, mut state) = session_inside();
    press(
        &mut controller,
        &mut state,
        ControllerEvent::FaceButtonDown {
            hand: Hand::Left,
            button: FaceButton::Y,
        },
    );
    assert_eq!(state.size_picker.index(), 0);
}

#[test]
fn test_color_row_reprojection_six_to_four() {
    let (mut controller, mut state) = session_inside();
    state.color_picker.select(2, 5);

    // Stick nach vorne (Host liefert y negativ)
    press(
        &mut controller,
        &mut state,
        ControllerEvent::JoystickMoved {
            hand: Hand::Left,
            x: 0.0,
            y: -0.9,
        },
    );

    assert_eq!(state.color_picker.selected_cell(), (1, 3));
    let expected = state.color_picker.colors()[2 + 3];
    assert_eq!(state.stroke.style().color, expected);
    assert!(state
        .notifications
        .drain()
        .iter()
        .any(|n| matches!(n, Notification::StyleChanged { color, .. } if *color == expected)));
}

#[test]
fn test_held_stick_steps_once() {
    let (mut controller, mut state) = session_inside();
    let start = state.color_picker.selected_index();
    for _ in 0..5 {
        press(
            &mut controller,
            &mut state,
            ControllerEvent::JoystickMoved {
                hand: Hand::Left,
                x: 0.9,
                y: 0.0,
            },
        );
    }
    assert_eq!(state.color_picker.selected_index(), start + 1);

    press(
        &mut controller,
        &mut state,
        ControllerEvent::JoystickMoved {
            hand: Hand::Left,
            x: 0.0,
            y: 0.0,
        },
    );
    press(
        &mut controller,
        &mut state,
        ControllerEvent::JoystickMoved {
            hand: Hand::Left,
            x: 0.9,
            y: 0.0,
        },
    );
    // Zeile 0 hat zwei Zellen: zweiter Schritt bricht um
    assert_eq!(state.color_picker.selected_index(), start);
}

#[test]
fn test_external_color_request_targets_painter_style() {
    let (mut controller, mut state) = session_inside();
    let red = Rgb::new(0xff, 0, 0);
    controller
        .handle_intent(&mut state, SessionIntent::StrokeColorRequested { color: red })
        .expect("Stiländerung sollte nie fehlschlagen");
    assert_eq!(state.stroke.style().color, red);
}

// ── Lokomotion ──────────────────────────────────────────────────────

#[test]
fn test_only_painter_stick_moves_rig_inside() {
    let (mut controller, mut state) = session_inside();

    controller.queue_event(
        &mut state,
        ControllerEvent::JoystickMoved {
            hand: Hand::Left,
            x: 0.0,
            y: -1.0,
        },
    );
    for _ in 0..10 {
        tick(&mut controller, &mut state);
    }
    assert_relative_eq!(state.rig.position.z, BOX_CENTER.z);

    controller.queue_event(
        &mut state,
        ControllerEvent::JoystickMoved {
            hand: Hand::Right,
            x: 0.0,
            y: -1.0,
        },
    );
    for _ in 0..10 {
        tick(&mut controller, &mut state);
    }
    assert!(state.rig.position.z < BOX_CENTER.z, "Rig bewegt sich nach vorne");
}

#[test]
fn test_both_sticks_move_rig_outside() {
    let (mut controller, mut state) = session();
    tick(&mut controller, &mut state);
    press(
        &mut controller,
        &mut state,
        ControllerEvent::JoystickMoved {
            hand: Hand::Left,
            x: 1.0,
            y: 0.0,
        },
    );
    for _ in 0..5 {
        tick(&mut controller, &mut state);
    }
    assert!(state.rig.position.x > 0.0);
}

#[test]
fn test_long_frame_stops_locomotion() {
    let (mut controller, mut state) = session();
    tick(&mut controller, &mut state);
    press(
        &mut controller,
        &mut state,
        ControllerEvent::JoystickMoved {
            hand: Hand::Right,
            x: 1.0,
            y: 0.0,
        },
    );
    let before = state.rig.position;
    controller
        .tick(&mut state, FrameInput::idle(0.5))
        .expect("Tick sollte nie fehlschlagen");
    assert_eq!(state.rig.position, before);
    assert_eq!(state.hands.right.locomotion.velocity(), Vec3::ZERO);
}

// ── Fehlende Referenzen ─────────────────────────────────────────────

#[test]
fn test_stale_painter_handle_skips_sampling_only() {
    let mut controllers = HandPair::from_fn(ControllerHandle::new);
    controllers.left = ControllerHandle::with_transform(Hand::Left, pose(Hand::Left, 0.0));
    let volumes = vec![DrawingVolume::axis_box(BOX_CENTER, Vec3::splat(4.0))];
    let mut state = SessionState::new(controllers, volumes, MarkerOptions::default());
    let mut controller = SessionController::new();

    teleport(&mut controller, &mut state, BOX_CENTER);
    assert!(state.zone.inside);
    assert!(state.drawing_enabled(Hand::Right));
    assert_eq!(state.color_picker.attached(), Some(Hand::Left));

    press(
        &mut controller,
        &mut state,
        ControllerEvent::TriggerDown { hand: Hand::Right },
    );
    assert!(state.stroke.is_recording());
    assert_eq!(state.stroke.point_count(), 0);
    assert!(controller.build_scene(&state).tip_indicator.is_none());

    // Host liefert die erste Pose nach
    tick_at(&mut controller, &mut state, Hand::Right, 0.0);
    assert_eq!(state.stroke.point_count(), 1);
}

#[test]
fn test_empty_volumes_fall_back_to_default_area() {
    let state = SessionState::with_options(MarkerOptions::default());
    assert_eq!(state.volumes.len(), 1);
    assert!(inside_any(&state.volumes, Vec3::new(0.0, 0.0, -4.0)));
}

#[test]
fn test_initial_assignment_is_logged_and_forced() {
    let (mut controller, mut state) = session();
    tick(&mut controller, &mut state);

    let first = state.command_log.entries().first().expect("ein Command");
    assert_eq!(first.tick, 1, "Zuweisung läuft im ersten Frame");
    assert!(matches!(
        first.command,
        SessionCommand::AssignPainter {
            hand: Hand::Right,
            force: true
        }
    ));
    assert!(state
        .notifications
        .drain()
        .contains(&Notification::PainterChanged {
            painter: Hand::Right,
            palette: Hand::Left
        }));
}

#[test]
fn test_identical_input_replays_identical_command_log() {
    let run = |press_tick: usize| {
        let (mut controller, mut state) = session_inside();
        for i in 0..6 {
            if i == press_tick {
                controller.queue_event(&mut state, ControllerEvent::TriggerDown { hand: Hand::Right });
            }
            tick_at(&mut controller, &mut state, Hand::Right, i as f32 * 0.01);
        }
        press(&mut controller, &mut state, ControllerEvent::TriggerUp { hand: Hand::Right });
        state
    };

    let a = run(1);
    let b = run(1);
    assert_eq!(a.command_log.first_divergence(&b.command_log), None);

    let late = run(2);
    let index = a
        .command_log
        .first_divergence(&late.command_log)
        .expect("verschobener Trigger muss abweichen");
    let entry = &a.command_log.entries()[index];
    assert!(matches!(entry.command, SessionCommand::BeginStroke { hand: Hand::Right }));
    assert_eq!(late.command_log.entries()[index].tick, entry.tick + 1);
}

#[test]
fn test_router_can_be_driven_without_controller() {
    let (_, mut state) = session();
    state.rig.position = BOX_CENTER;
    assert_eq!(
        tool_router::evaluate(&mut state),
        tool_router::ZoneTransition::Entered
    );
}
