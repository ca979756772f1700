//! Spatial Marker (Headless-Replay).
//!
//! Spielt eine kurze Session ohne Host ab: Rig läuft in die Zeichenzone,
//! zeichnet einen Stroke, macht ihn rückgängig, zeichnet erneut, tauscht die
//! Hände und verlässt die Zone mitten im Stroke. Ein zweiter Lauf prüft, dass
//! das Command-Log identisch ist. Dient als Smoke-Run mit Logging.

use glam::{Affine3A, Vec3};
use spatial_marker::{
    ControllerEvent, ControllerHandle, FaceButton, FrameInput, Hand, HandPair, MarkerOptions,
    ModelNode, SessionController, SessionIntent, SessionState,
};

/// Frame-Dauer der Wiedergabe (72 Hz Headset).
const FRAME: f32 = 1.0 / 72.0;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Spatial Marker v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let options = MarkerOptions::load_from_file(&MarkerOptions::config_path());

    let mut replay = Replay::new(options.clone());
    replay
        .state
        .notifications
        .subscribe(|n| log::info!("→ {:?}", n));
    replay.run()?;

    let scene = replay.controller.build_scene(&replay.state);
    log::info!(
        "Ende: {} Tubes, {} Kappen, {} Commands in {} Ticks, Rig bei {:?}",
        scene.tube_count(),
        scene.cap_count(),
        replay.state.command_log.len(),
        replay.state.command_log.current_tick(),
        scene.rig_position
    );

    // Zweiter Lauf ohne Beobachter muss dieselben Commands in denselben Ticks ausführen
    let mut check = Replay::new(options);
    check.run()?;
    match replay
        .state
        .command_log
        .first_divergence(&check.state.command_log)
    {
        None => log::info!("Replay deterministisch"),
        Some(index) => log::warn!(
            "Replay weicht bei Eintrag {} ab: {:?} / {:?}",
            index,
            replay.state.command_log.entries().get(index),
            check.state.command_log.entries().get(index)
        ),
    }
    Ok(())
}

/// Abspielzustand der Demo-Session.
struct Replay {
    controller: SessionController,
    state: SessionState,
    time: f32,
}

impl Replay {
    fn new(options: MarkerOptions) -> Self {
        let controllers = HandPair::from_fn(|hand| {
            let mut handle =
                ControllerHandle::with_transform(hand, hand_pose(hand, Vec3::ZERO, 0.0));
            handle.model = demo_model();
            handle
        });
        Self {
            controller: SessionController::new(),
            state: SessionState::new(controllers, Vec::new(), options),
            time: 0.0,
        }
    }

    fn run(&mut self) -> anyhow::Result<()> {
        // Außerhalb starten, dann in die Default-Fläche bei (0, 0, -4)
        self.controller.queue_intent(
            &mut self.state,
            SessionIntent::TeleportRig {
                position: Vec3::new(0.0, 0.0, 3.0),
            },
        );
        self.frames(2, None)?;
        self.controller.queue_intent(
            &mut self.state,
            SessionIntent::TeleportRig {
                position: Vec3::new(0.0, 0.0, -4.0),
            },
        );
        self.frames(2, None)?;

        // Kreis zeichnen, rückgängig machen, neu zeichnen
        self.stroke(Hand::Right, 90)?;
        self.press(ControllerEvent::FaceButtonDown {
            hand: Hand::Right,
            button: FaceButton::A,
        })?;
        self.press(ControllerEvent::FaceButtonDown {
            hand: Hand::Right,
            button: FaceButton::B,
        })?;
        self.press(ControllerEvent::JoystickMoved {
            hand: Hand::Left,
            x: 0.9,
            y: 0.0,
        })?;
        self.press(ControllerEvent::JoystickMoved {
            hand: Hand::Left,
            x: 0.0,
            y: 0.0,
        })?;
        self.stroke(Hand::Right, 90)?;

        // Hände tauschen, mit links zeichnen und mitten im Stroke hinauslaufen
        self.press(ControllerEvent::GripDown { hand: Hand::Left })?;
        self.controller.queue_event(
            &mut self.state,
            ControllerEvent::TriggerDown { hand: Hand::Left },
        );
        self.frames(30, Some(Hand::Left))?;
        self.controller.queue_event(
            &mut self.state,
            ControllerEvent::JoystickMoved {
                hand: Hand::Left,
                x: 0.0,
                y: -1.0,
            },
        );
        self.frames(90, Some(Hand::Left))?;
        Ok(())
    }

    fn press(&mut self, event: ControllerEvent) -> anyhow::Result<()> {
        self.controller.queue_event(&mut self.state, event);
        self.frames(1, None)
    }

    fn stroke(&mut self, hand: Hand, frames: usize) -> anyhow::Result<()> {
        self.controller
            .queue_event(&mut self.state, ControllerEvent::TriggerDown { hand });
        self.frames(frames, Some(hand))?;
        self.controller
            .queue_event(&mut self.state, ControllerEvent::TriggerUp { hand });
        self.frames(1, None)
    }

    /// Spielt Frames ab; `moving` bewegt die Hand auf einer Kreisbahn.
    fn frames(&mut self, count: usize, moving: Option<Hand>) -> anyhow::Result<()> {
        for _ in 0..count {
            self.time += FRAME;
            let mut frame = FrameInput::idle(FRAME);
            if let Some(hand) = moving {
                frame = frame.with_controller(hand, hand_pose(hand, self.state.rig.position, self.time));
            }
            self.controller.tick(&mut self.state, frame)?;
        }
        Ok(())
    }
}

/// Pose einer Hand relativ zum Rig; die Spitze läuft auf einem Kreis.
fn hand_pose(hand: Hand, rig: Vec3, time: f32) -> Affine3A {
    let side = match hand {
        Hand::Left => -0.25,
        Hand::Right => 0.25,
    };
    let angle = time * std::f32::consts::TAU * 0.5;
    let offset = Vec3::new(side + 0.15 * angle.cos(), 1.2 + 0.15 * angle.sin(), -0.4);
    Affine3A::from_translation(rig + offset)
}

/// Minimales Controller-Modell mit benannten Buttons.
fn demo_model() -> Vec<ModelNode> {
    vec![
        ModelNode::new("xr_standard_trigger", 0.0, Some(0.02)),
        ModelNode::new("xr_standard_squeeze", -0.01, Some(0.02)),
        ModelNode::new("button_a", 0.004, Some(0.008)),
        ModelNode::new("button_b", 0.012, Some(0.008)),
    ]
}
