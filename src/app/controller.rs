//! Session Controller für zentrale Event-Verarbeitung und den Tick-Ablauf.

use super::events::{ControllerEvent, TickPhase};
use super::render_scene;
use super::state::FrameInput;
use super::{tool_router, SessionCommand, SessionIntent, SessionState};
use crate::core::Hand;
use crate::shared::MarkerScene;

/// Orchestriert Host-Events, Zonen-Gate und Werkzeuge auf den SessionState.
#[derive(Default)]
pub struct SessionController;

impl SessionController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Reiht ein Controller-Event für den nächsten Tick ein.
    pub fn queue_event(&mut self, state: &mut SessionState, event: ControllerEvent) {
        self.queue_intent(state, SessionIntent::Input(event));
    }

    /// Reiht einen Intent über Intent->Command Mapping für den nächsten Tick ein.
    pub fn queue_intent(&mut self, state: &mut SessionState, intent: SessionIntent) {
        let commands = super::intent_mapping::map_intent_to_commands(intent);
        state.pending.extend(commands);
    }

    /// Verarbeitet einen Intent sofort, ohne auf den nächsten Tick zu warten.
    pub fn handle_intent(
        &mut self,
        state: &mut SessionState,
        intent: SessionIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt einen Frame aus.
    ///
    /// Reihenfolge: Posen übernehmen → Setup-Commands → Zonen-Auswertung →
    /// Rollen- und Stroke-Commands → Tip-Sampling → Picker-Commands →
    /// Lokomotion. Der erzwungene Stroke-Abbruch beim Verlassen der Zone
    /// läuft damit immer vor jedem Rollentausch desselben Ticks.
    pub fn tick(&mut self, state: &mut SessionState, frame: FrameInput) -> anyhow::Result<()> {
        state.command_log.begin_tick();
        for hand in Hand::BOTH {
            if let Some(transform) = frame.controllers[hand] {
                state.controllers[hand].world_transform = Some(transform);
            }
        }

        let mut pending = std::mem::take(&mut state.pending);
        pending.sort_by_key(SessionCommand::phase);
        let mut queue = pending.into_iter().peekable();

        self.run_phase(state, &mut queue, TickPhase::Setup)?;
        tool_router::evaluate(state);
        self.run_phase(state, &mut queue, TickPhase::Role)?;
        self.run_phase(state, &mut queue, TickPhase::Stroke)?;
        super::handlers::stroke::sample_painter_tip(state);
        self.run_phase(state, &mut queue, TickPhase::Picker)?;
        self.run_phase(state, &mut queue, TickPhase::Locomotion)?;
        super::handlers::locomotion::integrate(state, &frame);

        Ok(())
    }

    fn run_phase(
        &mut self,
        state: &mut SessionState,
        queue: &mut std::iter::Peekable<std::vec::IntoIter<SessionCommand>>,
        phase: TickPhase,
    ) -> anyhow::Result<()> {
        while let Some(command) = queue.next_if(|c| c.phase() <= phase) {
            self.handle_command(state, command)?;
        }
        Ok(())
    }

    /// Führt mutierende Commands auf dem SessionState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut SessionState,
        command: SessionCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Setup ===
            SessionCommand::TeleportRig { position } => handlers::rig::teleport(state, position),
            SessionCommand::ReplaceVolumes { volumes } => {
                handlers::rig::replace_volumes(state, volumes)
            }
            SessionCommand::SetControllerModel { hand, nodes } => {
                handlers::rig::set_controller_model(state, hand, nodes)
            }

            // === Rollen ===
            SessionCommand::AssignPainter { hand, force } => {
                handlers::role::assign_painter(state, hand, force)
            }

            // === Strokes ===
            SessionCommand::BeginStroke { hand } => handlers::stroke::begin(state, hand),
            SessionCommand::EndStroke { hand } => handlers::stroke::end(state, hand),
            SessionCommand::UndoLastStroke => handlers::stroke::undo_last(state),
            SessionCommand::UndoFromHand { hand } => handlers::stroke::undo_from_hand(state, hand),

            // === Picker ===
            SessionCommand::AdvanceSize { hand } => handlers::picker::advance_size(state, hand),
            SessionCommand::NavigateColor { hand, x, y } => {
                handlers::picker::navigate_color(state, hand, x, y)
            }
            SessionCommand::SetStrokeColor { color } => handlers::picker::set_color(state, color),
            SessionCommand::SetStrokeThickness { thickness } => {
                handlers::picker::set_thickness(state, thickness)
            }

            // === Lokomotion ===
            SessionCommand::FeedLocomotion { hand, x, y } => {
                handlers::locomotion::feed(state, hand, x, y)
            }
        }

        Ok(())
    }

    /// Baut die Marker-Szene aus dem aktuellen SessionState.
    pub fn build_scene(&self, state: &SessionState) -> MarkerScene {
        render_scene::build(state)
    }
}
