//! Handler für die Painter-/Palette-Rollenzuweisung.

use crate::app::notifications::Notification;
use crate::app::{tool_router, SessionState};
use crate::core::Hand;

/// Weist die Painter-Rolle `hand` zu.
///
/// Ohne `force` nur innerhalb der Zone und nur bei echtem Wechsel. Vor dem
/// Neuaufbau wird auf beiden Händen alles abgebaut (laufender Stroke,
/// Zeichen-Input, Picker, Tints), damit der alte Painter keinen Trigger mehr hört.
pub fn assign_painter(state: &mut SessionState, hand: Hand, force: bool) {
    if !force && !state.zone.inside {
        log::debug!(
            "Rollentausch auf {} außerhalb der Zone ignoriert",
            hand.label()
        );
        return;
    }
    if !state.role.assign(hand, force) {
        log::debug!("Hand {} malt bereits", hand.label());
        return;
    }

    let outcome = state.stroke.attach(hand);
    super::stroke::report_end(state, outcome);
    state.size_picker.detach();
    state.color_picker.detach();
    for side in Hand::BOTH {
        state.hands[side].colorizer.clear_scheme();
    }

    log::info!(
        "Painter: {}, Palette: {}",
        state.role.painter().label(),
        state.role.palette().label()
    );
    state.notifications.emit(Notification::PainterChanged {
        painter: state.role.painter(),
        palette: state.role.palette(),
    });

    if state.zone.inside {
        tool_router::enable_painting(state);
    }
}
