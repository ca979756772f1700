//! Handler für Stick-Lokomotion.

use crate::app::state::FrameInput;
use crate::app::SessionState;
use crate::core::Hand;

/// Speichert den Stick-Vektor der Hand (auch wenn deaktiviert).
pub fn feed(state: &mut SessionState, hand: Hand, x: f32, y: f32) {
    state.hands[hand].locomotion.set_stick(x, y);
}

/// Integriert beide Hände und verschiebt das Rig.
pub fn integrate(state: &mut SessionState, frame: &FrameInput) {
    state.rig.yaw = frame.head_yaw;
    state.rig.pitch = frame.head_pitch;

    let mut displacement = glam::Vec3::ZERO;
    for hand in Hand::BOTH {
        let gate = &mut state.hands[hand].locomotion;
        gate.update(frame.delta);
        displacement += gate.displacement(frame.delta, frame.head_yaw, frame.head_pitch);
    }
    if displacement.is_finite() && displacement != glam::Vec3::ZERO {
        state.rig.position += displacement;
    }
}
