//! Zonen-Gate: schaltet Zeichnen, Picker, Tints und Lokomotion beim
//! Betreten und Verlassen der Zeichenzonen.

use super::handlers::stroke::report_end;
use super::notifications::Notification;
use super::tools::button_colorizer::TintScheme;
use super::SessionState;
use crate::core::{inside_any, Hand};

/// Ergebnis der Zonen-Auswertung eines Ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneTransition {
    /// Kein Flankenwechsel
    Unchanged,
    /// Rig hat die Zone betreten
    Entered,
    /// Rig hat die Zone verlassen
    Exited,
}

/// Wertet die Rig-Position gegen alle Zonen aus (einmal pro Tick).
///
/// Außerhalb wird jeder laufende Stroke in jedem Tick beendet, nicht nur an
/// der Flanke, damit eine verpasste Flanke nichts offen lässt.
pub fn evaluate(state: &mut SessionState) -> ZoneTransition {
    let inside = inside_any(&state.volumes, state.rig.position);

    if !inside {
        force_release(state);
    }

    if inside == state.zone.inside {
        return ZoneTransition::Unchanged;
    }
    state.zone.inside = inside;
    log::info!(
        "Zeichenzone {} (Rig bei {:?})",
        if inside { "betreten" } else { "verlassen" },
        state.rig.position
    );

    let transition = if inside {
        enable_painting(state);
        ZoneTransition::Entered
    } else {
        disable_painting(state);
        ZoneTransition::Exited
    };
    state
        .notifications
        .emit(Notification::ZoneChanged { inside });
    transition
}

/// Beendet einen laufenden Stroke sofort und versteckt den Indikator.
pub fn force_release(state: &mut SessionState) {
    if !state.stroke.is_recording() {
        return;
    }
    log::debug!(
        "Rig außerhalb der Zone, Stroke der Hand {} wird beendet",
        state.stroke.owner().label()
    );
    let outcome = state.stroke.end();
    state.stroke.indicator_visible = false;
    report_end(state, outcome);
}

/// Aktiviert die Mal-Werkzeuge für die aktuelle Rollenverteilung.
pub fn enable_painting(state: &mut SessionState) {
    let painter = state.role.painter();
    let palette = state.role.palette();

    state.stroke.enable_input();

    state.size_picker.attach(painter);
    state.color_picker.attach(palette);
    super::handlers::picker::push_selection(state);

    apply_tints(state, painter, palette);
    gate_locomotion_to(state, painter);
}

/// Deaktiviert alle Mal-Werkzeuge und gibt beide Hände für Lokomotion frei.
pub fn disable_painting(state: &mut SessionState) {
    let outcome = state.stroke.disable_input();
    report_end(state, outcome);

    state.size_picker.detach();
    state.color_picker.detach();

    for hand in Hand::BOTH {
        state.hands[hand].colorizer.clear_scheme();
        state.hands[hand].locomotion.set_enabled(true);
    }
}

/// Nur die Painter-Hand darf das Rig bewegen.
pub fn gate_locomotion_to(state: &mut SessionState, painter: Hand) {
    for hand in Hand::BOTH {
        state.hands[hand]
            .locomotion
            .set_enabled(hand == painter);
    }
}

/// Aktiv-Tints auf die Painter-Hand, Palette-Hand wird geleert.
fn apply_tints(state: &mut SessionState, painter: Hand, palette: Hand) {
    state.hands[palette].colorizer.clear_scheme();

    let handle = &state.controllers[painter];
    if !handle.is_ready() {
        log::debug!(
            "Controller {} noch nicht initialisiert, Tints übersprungen",
            painter.label()
        );
        return;
    }
    state.hands[painter]
        .colorizer
        .apply_scheme(TintScheme::active_for(painter), painter, &handle.model);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ControllerHandle, DrawingVolume, HandPair, ModelNode};
    use crate::shared::MarkerOptions;
    use glam::{Affine3A, Vec3};

    fn state_with_box() -> SessionState {
        let mut controllers = HandPair::from_fn(|hand| {
            ControllerHandle::with_transform(hand, Affine3A::from_translation(Vec3::Y))
        });
        controllers.right.model = vec![ModelNode::new("button_a", 0.0, Some(0.01))];
        let volumes = vec![DrawingVolume::axis_box(
            Vec3::new(0.0, 0.0, -4.0),
            Vec3::new(4.0, 4.0, 4.0),
        )];
        SessionState::new(controllers, volumes, MarkerOptions::default())
    }

    #[test]
    fn entering_enables_painter_tools() {
        let mut state = state_with_box();
        state.rig.position = Vec3::new(0.0, 0.0, -4.0);
        assert_eq!(evaluate(&mut state), ZoneTransition::Entered);
        assert!(state.zone.inside);
        assert!(state.drawing_enabled(Hand::Right));
        assert!(!state.drawing_enabled(Hand::Left));
        assert!(state.locomotion_enabled(Hand::Right));
        assert!(!state.locomotion_enabled(Hand::Left));
        assert_eq!(state.size_picker.attached(), Some(Hand::Right));
        assert_eq!(state.color_picker.attached(), Some(Hand::Left));
        assert!(state.hands.right.colorizer.is_active());
        assert!(!state.hands.left.colorizer.is_active());
    }

    #[test]
    fn staying_inside_is_unchanged() {
        let mut state = state_with_box();
        state.rig.position = Vec3::new(0.0, 0.0, -4.0);
        evaluate(&mut state);
        assert_eq!(evaluate(&mut state), ZoneTransition::Unchanged);
    }

    #[test]
    fn leaving_disables_everything() {
        let mut state = state_with_box();
        state.rig.position = Vec3::new(0.0, 0.0, -4.0);
        evaluate(&mut state);
        state.rig.position = Vec3::new(10.0, 0.0, 0.0);
        assert_eq!(evaluate(&mut state), ZoneTransition::Exited);
        assert!(!state.drawing_enabled(Hand::Right));
        assert!(state.locomotion_enabled(Hand::Left));
        assert!(state.locomotion_enabled(Hand::Right));
        assert!(state.size_picker.attached().is_none());
        assert!(state.color_picker.attached().is_none());
        assert!(!state.hands.right.colorizer.is_active());
    }

    #[test]
    fn stale_painter_skips_only_tints() {
        let mut state = state_with_box();
        state.controllers.right.world_transform = None;
        state.rig.position = Vec3::new(0.0, 0.0, -4.0);
        assert_eq!(evaluate(&mut state), ZoneTransition::Entered);
        assert!(!state.hands.right.colorizer.is_active());
        assert!(state.drawing_enabled(Hand::Right));
        assert_eq!(state.color_picker.attached(), Some(Hand::Left));
    }
}
