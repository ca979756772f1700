//! Session-State: alles, was zwischen zwei Ticks erhalten bleibt.

use glam::{Affine3A, Vec3};

use super::command_log::CommandLog;
use super::events::SessionCommand;
use super::hand_role::HandRole;
use super::notifications::NotificationHub;
use super::tools::button_colorizer::ButtonColorizer;
use super::tools::color_picker::ColorPicker;
use super::tools::locomotion::LocomotionGate;
use super::tools::size_picker::SizePicker;
use super::tools::stroke_curve::StrokeCurve;
use crate::core::{ControllerHandle, DrawingVolume, Hand, HandPair};
use crate::shared::MarkerOptions;

/// Pose des Rigs (Avatar-Wurzel) und Blickrichtung.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RigState {
    /// Weltposition des Rigs
    pub position: Vec3,
    /// Blick-Yaw der Kamera (Radiant)
    pub yaw: f32,
    /// Blick-Pitch der Kamera (Radiant)
    pub pitch: f32,
}

/// Zonenzustand (einmal pro Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneState {
    /// Steht das Rig in mindestens einer Zeichenzone?
    pub inside: bool,
}

/// Per-Hand-Werkzeuge, die unabhängig von der Rolle existieren.
#[derive(Debug, Clone)]
pub struct HandState {
    pub locomotion: LocomotionGate,
    pub colorizer: ButtonColorizer,
}

/// Eingaben des Hosts für einen Tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Frame-Dauer in Sekunden
    pub delta: f32,
    /// Neue Controller-Posen; `None` = letzte Pose beibehalten
    pub controllers: HandPair<Option<Affine3A>>,
    /// Blick-Yaw der Kamera (Radiant)
    pub head_yaw: f32,
    /// Blick-Pitch der Kamera (Radiant)
    pub head_pitch: f32,
}

impl FrameInput {
    /// Frame ohne neue Posen und mit Blick nach vorne.
    pub fn idle(delta: f32) -> Self {
        Self {
            delta,
            controllers: HandPair::new(None, None),
            head_yaw: 0.0,
            head_pitch: 0.0,
        }
    }

    /// Setzt die Pose einer Hand.
    pub fn with_controller(mut self, hand: Hand, transform: Affine3A) -> Self {
        self.controllers[hand] = Some(transform);
        self
    }
}

/// Gesamtzustand einer Mal-Session.
pub struct SessionState {
    /// Die zwei injizierten Controller
    pub controllers: HandPair<ControllerHandle>,
    pub hands: HandPair<HandState>,
    pub role: HandRole,
    pub zone: ZoneState,
    pub volumes: Vec<DrawingVolume>,
    pub rig: RigState,
    /// Zeichenwerkzeug der Painter-Hand (Strokes, Undo, Stil)
    pub stroke: StrokeCurve,
    pub size_picker: SizePicker,
    pub color_picker: ColorPicker,
    pub notifications: NotificationHub,
    pub command_log: CommandLog,
    pub options: MarkerOptions,
    /// Commands, die im nächsten Tick ausgeführt werden
    pub pending: Vec<SessionCommand>,
}

impl SessionState {
    /// Erstellt eine Session mit den zwei Controllern des Hosts.
    ///
    /// Ohne Zonen (und mit `area.auto_area`) wird die Default-Fläche erzeugt.
    /// Die initiale Rollenzuweisung (rechts malt) läuft im ersten Tick.
    pub fn new(
        controllers: HandPair<ControllerHandle>,
        volumes: Vec<DrawingVolume>,
        options: MarkerOptions,
    ) -> Self {
        let volumes = if volumes.is_empty() && options.area.auto_area {
            log::info!("Keine Zeichenzonen angegeben, erzeuge Default-Fläche");
            vec![DrawingVolume::default_area(&options.area)]
        } else {
            volumes
        };
        if volumes.is_empty() {
            log::warn!("Keine Zeichenzonen vorhanden, Zeichnen bleibt deaktiviert");
        }

        let role = HandRole::new();
        let hands = HandPair::from_fn(|_| HandState {
            locomotion: LocomotionGate::new(options.locomotion.clone()),
            colorizer: ButtonColorizer::new(),
        });

        Self {
            controllers,
            hands,
            role,
            zone: ZoneState::default(),
            volumes,
            rig: RigState::default(),
            stroke: StrokeCurve::new(role.painter(), &options),
            size_picker: SizePicker::new(&options.marker_sizes, options.hint.clone()),
            color_picker: ColorPicker::new(
                &options.color_rows,
                options.palette(),
                options.stick_press_threshold,
                options.stick_release_threshold,
                options.invert_stick_y,
            ),
            notifications: NotificationHub::new(),
            command_log: CommandLog::new(),
            pending: vec![SessionCommand::AssignPainter {
                hand: role.painter(),
                force: true,
            }],
            options,
        }
    }

    /// Session mit zwei noch nicht getrackten Controllern.
    pub fn with_options(options: MarkerOptions) -> Self {
        Self::new(
            HandPair::from_fn(ControllerHandle::new),
            Vec::new(),
            options,
        )
    }

    /// Kann die Hand gerade zeichnen (Painter mit aktivem Input)?
    pub fn drawing_enabled(&self, hand: Hand) -> bool {
        self.stroke.accepts_input_from(hand)
    }

    /// Darf die Hand gerade das Rig bewegen?
    pub fn locomotion_enabled(&self, hand: Hand) -> bool {
        self.hands[hand].locomotion.is_enabled()
    }
}
