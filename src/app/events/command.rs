use glam::Vec3;

use crate::core::{DrawingVolume, Hand, ModelNode, Rgb};

/// Ausführungsphase eines Commands innerhalb eines Ticks.
///
/// Innerhalb eines Ticks werden Commands stabil nach Phase sortiert, damit
/// ein Rollentausch nie zwischen Zonen-Auswertung und Stroke-Eingabe landet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TickPhase {
    /// Host-Setup (Rig, Zonen), läuft vor der Zonen-Auswertung
    Setup,
    /// Rollenzuweisung
    Role,
    /// Stroke-Start/-Ende und Undo
    Stroke,
    /// Picker-Auswahl (nach dem Sampling)
    Picker,
    /// Lokomotions-Eingabe
    Locomotion,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Rig an eine Weltposition versetzen
    TeleportRig { position: Vec3 },
    /// Zeichenzonen ersetzen
    ReplaceVolumes { volumes: Vec<DrawingVolume> },
    /// Mesh-Knoten des Controller-Modells setzen
    SetControllerModel { hand: Hand, nodes: Vec<ModelNode> },
    /// Painter-Rolle zuweisen (`force` umgeht Zonen- und No-op-Prüfung)
    AssignPainter { hand: Hand, force: bool },
    /// Stroke starten (nur Painter mit aktivem Zeichen-Input)
    BeginStroke { hand: Hand },
    /// Stroke beenden
    EndStroke { hand: Hand },
    /// Letzten Stroke entfernen
    UndoLastStroke,
    /// Undo per Face-Button (nur wenn die Hand Zeichen-Input hat)
    UndoFromHand { hand: Hand },
    /// Size-Picker der Hand weiterschalten
    AdvanceSize { hand: Hand },
    /// Color-Picker der Hand per Stick navigieren
    NavigateColor { hand: Hand, x: f32, y: f32 },
    /// Strichfarbe direkt setzen
    SetStrokeColor { color: Rgb },
    /// Strichstärke direkt setzen
    SetStrokeThickness { thickness: f32 },
    /// Stick-Vektor an die Lokomotion der Hand übergeben
    FeedLocomotion { hand: Hand, x: f32, y: f32 },
}

impl SessionCommand {
    /// Phase, in der der Command im Tick ausgeführt wird.
    pub fn phase(&self) -> TickPhase {
        match self {
            SessionCommand::TeleportRig { .. }
            | SessionCommand::ReplaceVolumes { .. }
            | SessionCommand::SetControllerModel { .. } => TickPhase::Setup,
            SessionCommand::AssignPainter { .. } => TickPhase::Role,
            SessionCommand::BeginStroke { .. }
            | SessionCommand::EndStroke { .. }
            | SessionCommand::UndoLastStroke
            | SessionCommand::UndoFromHand { .. } => TickPhase::Stroke,
            SessionCommand::AdvanceSize { .. }
            | SessionCommand::NavigateColor { .. }
            | SessionCommand::SetStrokeColor { .. }
            | SessionCommand::SetStrokeThickness { .. } => TickPhase::Picker,
            SessionCommand::FeedLocomotion { .. } => TickPhase::Locomotion,
        }
    }
}
