//! Builder für Marker-Szenen aus dem SessionState.

use crate::app::SessionState;
use crate::core::HandPair;
use crate::shared::{ColorPickerView, MarkerScene, SizePickerView, TipIndicator};

/// Baut eine MarkerScene aus dem aktuellen SessionState.
pub fn build(state: &SessionState) -> MarkerScene {
    let painter = state.role.painter();
    let style = state.stroke.style();

    // Indikator nur mit gültiger Controller-Pose
    let tip_indicator = if state.stroke.indicator_visible() {
        state.controllers[painter]
            .tip_position(state.options.tip_offset)
            .map(|position| TipIndicator {
                hand: painter,
                position,
                radius: style.thickness,
                color: style.color,
            })
    } else {
        None
    };

    let size_picker = state.size_picker.attached().map(|hand| SizePickerView {
        hand,
        index: state.size_picker.index(),
        rings: state.size_picker.rings().to_vec(),
        hint: state.size_picker.hint().clone(),
    });

    let color_picker = state.color_picker.attached().map(|hand| {
        let (row, col) = state.color_picker.selected_cell();
        ColorPickerView {
            hand,
            row,
            col,
            color: state.color_picker.selected_color(),
            position: state
                .color_picker
                .cell_position(state.color_picker.selected_index()),
            colors: state.color_picker.colors().to_vec(),
        }
    });

    MarkerScene {
        geometries: state
            .stroke
            .store()
            .iter()
            .map(|(id, geometry)| (id, geometry.clone()))
            .collect(),
        active_path: state.stroke.active_path(),
        rig_position: state.rig.position,
        inside_zone: state.zone.inside,
        painter,
        tip_indicator,
        tints: HandPair::from_fn(|hand| state.hands[hand].colorizer.tints().copied().collect()),
        size_picker,
        color_picker,
    }
}
