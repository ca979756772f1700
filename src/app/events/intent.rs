use glam::Vec3;

use crate::core::{DrawingVolume, Hand, ModelNode, Rgb};

/// Face-Buttons der beiden Controller.
///
/// A/B sitzen auf dem rechten, X/Y auf dem linken Controller. A und X sind
/// gleichwertig (unterer Button), ebenso B und Y (oberer Button).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceButton {
    A,
    B,
    X,
    Y,
}

impl FaceButton {
    /// Controller-Seite, auf der der Button sitzt.
    pub fn hand(self) -> Hand {
        match self {
            FaceButton::A | FaceButton::B => Hand::Right,
            FaceButton::X | FaceButton::Y => Hand::Left,
        }
    }

    /// Unterer Button (A/X): letzten Stroke rückgängig machen.
    pub fn is_lower(self) -> bool {
        matches!(self, FaceButton::A | FaceButton::X)
    }

    /// Oberer Button (B/Y): Size-Picker weiterschalten.
    pub fn is_upper(self) -> bool {
        matches!(self, FaceButton::B | FaceButton::Y)
    }

    /// Parst Host-IDs wie `"a"`, `"B"`, `"xbuttondown"`.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().to_ascii_lowercase();
        let key = id.strip_suffix("buttondown").unwrap_or(&id);
        match key {
            "a" => Some(FaceButton::A),
            "b" => Some(FaceButton::B),
            "x" => Some(FaceButton::X),
            "y" => Some(FaceButton::Y),
            _ => None,
        }
    }
}

/// Roh-Eingaben des Hosts pro Controller.
///
/// Events werden asynchron geliefert, aber erst im nächsten Tick angewendet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerEvent {
    /// Trigger gedrückt
    TriggerDown { hand: Hand },
    /// Trigger losgelassen
    TriggerUp { hand: Hand },
    /// Grip gedrückt (Rollentausch-Anfrage)
    GripDown { hand: Hand },
    /// Thumbstick-Auslenkung, jeweils in [-1, 1]
    JoystickMoved { hand: Hand, x: f32, y: f32 },
    /// Face-Button gedrückt
    FaceButtonDown { hand: Hand, button: FaceButton },
}

impl ControllerEvent {
    /// Hand, von der das Event stammt.
    pub fn hand(&self) -> Hand {
        match *self {
            ControllerEvent::TriggerDown { hand }
            | ControllerEvent::TriggerUp { hand }
            | ControllerEvent::GripDown { hand }
            | ControllerEvent::JoystickMoved { hand, .. }
            | ControllerEvent::FaceButtonDown { hand, .. } => hand,
        }
    }
}

/// Session-Intents: Eingaben aus Host/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Controller-Eingabe
    Input(ControllerEvent),
    /// Externer Undo-Trigger (z.B. Menü), unabhängig von Face-Buttons
    UndoRequested,
    /// Rig an eine Weltposition versetzen
    TeleportRig { position: Vec3 },
    /// Zeichenzonen ersetzen (Host hat Inhalte geladen/geändert)
    VolumesReplaced { volumes: Vec<DrawingVolume> },
    /// Controller-Modell geladen, Mesh-Knoten für Button-Tints
    ControllerModelLoaded { hand: Hand, nodes: Vec<ModelNode> },
    /// Rollenzuweisung erzwingen (Session-Setup / Reset)
    ForceAssignPainter { hand: Hand },
    /// Strichfarbe von außen setzen
    StrokeColorRequested { color: Rgb },
    /// Strichstärke von außen setzen
    StrokeThicknessRequested { thickness: f32 },
}
