//! Tube- und Kappen-Geometrie aus den Stroke-Punkten.

use glam::Vec3;

use super::state::{StrokeConfig, StrokeStyle};
use crate::core::{CapMarker, TubeMesh};
use crate::shared::spline_geometry::catmull_rom_chain;

/// Baut das komplette Tube-Mesh über alle Punkte neu auf.
///
/// Die Spline wird bei jedem Aufruf über den ganzen Pfad berechnet, da eine
/// durchgehende Röhre keine stückweise Erweiterung erlaubt.
pub(crate) fn build_tube(points: &[Vec3], style: &StrokeStyle, config: &StrokeConfig) -> TubeMesh {
    if points.len() < 2 {
        return TubeMesh::empty(style.color);
    }
    let segments = config.tubular_segments(points.len());
    let path = catmull_rom_chain(points, segments);
    TubeMesh::from_path(&path, style.thickness, config.radial_segments, style.color)
}

/// Kugel-Kappe an einem Stroke-Ende.
pub(crate) fn cap_at(center: Vec3, style: &StrokeStyle, config: &StrokeConfig) -> CapMarker {
    CapMarker {
        center,
        radius: style.thickness,
        color: style.color,
        segments: config.cap_segments,
    }
}
