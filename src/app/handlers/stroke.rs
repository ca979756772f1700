//! Handler für Stroke-Start/-Ende, Tip-Sampling und Undo.

use crate::app::notifications::Notification;
use crate::app::tools::stroke_curve::{EndOutcome, SampleOutcome};
use crate::app::SessionState;
use crate::core::Hand;

/// Trigger gedrückt: startet einen Stroke, falls `hand` zeichnen darf.
pub fn begin(state: &mut SessionState, hand: Hand) {
    if !state.drawing_enabled(hand) {
        log::debug!("Trigger {} ohne Zeichen-Input ignoriert", hand.label());
        return;
    }
    let path = state.stroke.begin();
    log::debug!("Stroke gestartet ({:?}) auf Hand {}", path, hand.label());
}

/// Trigger losgelassen: beendet den laufenden Stroke der Hand.
pub fn end(state: &mut SessionState, hand: Hand) {
    if state.stroke.owner() != hand || !state.stroke.is_recording() {
        return;
    }
    let outcome = state.stroke.end();
    report_end(state, outcome);
}

/// Sampelt die Stiftspitze des Painters (einmal pro Tick).
pub fn sample_painter_tip(state: &mut SessionState) {
    if !state.stroke.is_recording() {
        return;
    }
    let painter = state.stroke.owner();
    let Some(tip) = state.controllers[painter].tip_position(state.options.tip_offset) else {
        log::debug!(
            "Controller {} ohne Transform, Sample übersprungen",
            painter.label()
        );
        return;
    };
    if state.stroke.sample(tip) == SampleOutcome::Rejected {
        log::trace!("Sample bei {:?} abgelehnt", tip);
    }
}

/// Entfernt den jüngsten Stroke (externer Undo-Trigger).
pub fn undo_last(state: &mut SessionState) {
    if state.stroke.undo_last().is_some() {
        state.notifications.emit(Notification::StrokeUndone {
            remaining: state.stroke.stroke_count(),
        });
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Undo per A/X: nur wenn die Hand gerade Zeichen-Input hat.
pub fn undo_from_hand(state: &mut SessionState, hand: Hand) {
    if !state.drawing_enabled(hand) {
        log::debug!("Undo-Button {} ohne Zeichen-Input ignoriert", hand.label());
        return;
    }
    undo_last(state);
}

/// Meldet einen abgeschlossenen Stroke an die Beobachter.
pub fn report_end(state: &mut SessionState, outcome: EndOutcome) {
    if let EndOutcome::Committed(stroke) = outcome {
        state.notifications.emit(Notification::StrokeCommitted {
            point_count: stroke.point_count,
            total: state.stroke.stroke_count(),
        });
    }
}
