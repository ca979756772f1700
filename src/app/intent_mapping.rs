//! Mapping von Host-Intents auf mutierende Session-Commands.

use super::events::ControllerEvent;
use super::{SessionCommand, SessionIntent};

/// Übersetzt einen `SessionIntent` in eine Sequenz ausführbarer `SessionCommand`s.
pub fn map_intent_to_commands(intent: SessionIntent) -> Vec<SessionCommand> {
    match intent {
        SessionIntent::Input(event) => map_controller_event(event),
        SessionIntent::UndoRequested => vec![SessionCommand::UndoLastStroke],
        SessionIntent::TeleportRig { position } => vec![SessionCommand::TeleportRig { position }],
        SessionIntent::VolumesReplaced { volumes } => {
            vec![SessionCommand::ReplaceVolumes { volumes }]
        }
        SessionIntent::ControllerModelLoaded { hand, nodes } => {
            vec![SessionCommand::SetControllerModel { hand, nodes }]
        }
        SessionIntent::ForceAssignPainter { hand } => {
            vec![SessionCommand::AssignPainter { hand, force: true }]
        }
        SessionIntent::StrokeColorRequested { color } => {
            vec![SessionCommand::SetStrokeColor { color }]
        }
        SessionIntent::StrokeThicknessRequested { thickness } => {
            vec![SessionCommand::SetStrokeThickness { thickness }]
        }
    }
}

fn map_controller_event(event: ControllerEvent) -> Vec<SessionCommand> {
    match event {
        ControllerEvent::TriggerDown { hand } => vec![SessionCommand::BeginStroke { hand }],
        ControllerEvent::TriggerUp { hand } => vec![SessionCommand::EndStroke { hand }],
        ControllerEvent::GripDown { hand } => {
            vec![SessionCommand::AssignPainter { hand, force: false }]
        }
        // Derselbe Stick steuert Color-Picker und Lokomotion; welcher davon
        // reagiert, entscheidet die aktuelle Rollenverteilung.
        ControllerEvent::JoystickMoved { hand, x, y } => vec![
            SessionCommand::NavigateColor { hand, x, y },
            SessionCommand::FeedLocomotion { hand, x, y },
        ],
        ControllerEvent::FaceButtonDown { hand, button } => {
            if button.hand() != hand {
                log::debug!(
                    "Face-Button {:?} von Hand {} passt nicht zur Seite",
                    button,
                    hand.label()
                );
            }
            if button.is_lower() {
                vec![SessionCommand::UndoFromHand { hand }]
            } else {
                vec![SessionCommand::AdvanceSize { hand }]
            }
        }
    }
}
