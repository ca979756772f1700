//! Handler für Size-/Color-Picker und direkte Stiländerungen.
//!
//! Unabhängig davon, welche Hand den Picker trägt, landet jede Auswahl im
//! Stil des Painter-Strokes.

use crate::app::notifications::Notification;
use crate::app::tools::color_picker::ColorStep;
use crate::app::SessionState;
use crate::core::{Hand, Rgb};

/// B/Y: schaltet den Size-Picker weiter, falls er an `hand` hängt.
pub fn advance_size(state: &mut SessionState, hand: Hand) {
    if state.size_picker.attached() != Some(hand) {
        log::debug!("Size-Picker nicht an Hand {}", hand.label());
        return;
    }
    let thickness = state.size_picker.advance();
    log::debug!("Size-Picker: Index {} ({})", state.size_picker.index(), thickness);
    set_thickness(state, thickness);
}

/// Stick-Bewegung auf der Hand des Color-Pickers.
pub fn navigate_color(state: &mut SessionState, hand: Hand, x: f32, y: f32) {
    if state.color_picker.attached() != Some(hand) {
        return;
    }
    if state.color_picker.on_stick(x, y) == ColorStep::Moved {
        let (row, col) = state.color_picker.selected_cell();
        let color = state.color_picker.selected_color();
        log::debug!("Color-Picker: Zeile {}, Spalte {} ({})", row, col, color);
        set_color(state, color);
    }
}

/// Setzt die Strichfarbe des Painters.
pub fn set_color(state: &mut SessionState, color: Rgb) {
    state.stroke.set_color(color);
    emit_style(state);
}

/// Setzt die Strichstärke des Painters (wird geklemmt).
pub fn set_thickness(state: &mut SessionState, thickness: f32) {
    if !thickness.is_finite() || thickness <= 0.0 {
        log::warn!("Ungültige Strichstärke {}, wird geklemmt", thickness);
    }
    state.stroke.set_thickness(thickness);
    emit_style(state);
}

/// Überträgt die aktuellen Picker-Auswahlen auf den Painter-Stil.
pub fn push_selection(state: &mut SessionState) {
    state.stroke.set_thickness(state.size_picker.selected());
    state.stroke.set_color(state.color_picker.selected_color());
    emit_style(state);
}

fn emit_style(state: &mut SessionState) {
    let style = state.stroke.style();
    state.notifications.emit(Notification::StyleChanged {
        color: style.color,
        thickness: style.thickness,
    });
}
