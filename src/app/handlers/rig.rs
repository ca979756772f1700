//! Handler für Host-Setup: Rig-Position, Zeichenzonen, Controller-Modelle.

use glam::Vec3;

use crate::app::SessionState;
use crate::core::{DrawingVolume, Hand, ModelNode};

/// Versetzt das Rig. Die Zone wird im selben Tick neu ausgewertet.
pub fn teleport(state: &mut SessionState, position: Vec3) {
    if !position.is_finite() {
        log::warn!("Teleport auf nicht-endliche Position ignoriert");
        return;
    }
    state.rig.position = position;
}

/// Ersetzt die Zeichenzonen (leere Liste + `auto_area` = Default-Fläche).
pub fn replace_volumes(state: &mut SessionState, volumes: Vec<DrawingVolume>) {
    state.volumes = if volumes.is_empty() && state.options.area.auto_area {
        vec![DrawingVolume::default_area(&state.options.area)]
    } else {
        volumes
    };
    log::info!("{} Zeichenzone(n) aktiv", state.volumes.len());
}

/// Übernimmt die Mesh-Knoten eines geladenen Controller-Modells.
///
/// Ein aktives Tint-Schema wird auf die neuen Knoten übertragen.
pub fn set_controller_model(state: &mut SessionState, hand: Hand, nodes: Vec<ModelNode>) {
    log::debug!("Controller-Modell {}: {} Knoten", hand.label(), nodes.len());
    state.controllers[hand].model = nodes;
    let handle = &state.controllers[hand];
    state.hands[hand].colorizer.refresh(hand, &handle.model);
}
