use super::Rgb;

/// Beschreibt einen Mesh-Knoten eines Controller-Modells.
///
/// Der Host liefert die Liste nach dem Laden des Modells; der Kern
/// braucht nur Namen, lokale Höhe und Größe für die Button-Zuordnung.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelNode {
    /// Mesh-Name aus dem Modell (z.B. "xr_standard_thumbstick", "button_a")
    pub name: String,
    /// Y-Position im lokalen Raum des Controllers
    pub local_y: f32,
    /// Radius der Bounding-Sphere (None = keine Geometrie)
    pub bounding_radius: Option<f32>,
}

impl ModelNode {
    /// Erstellt einen Knoten.
    pub fn new(name: impl Into<String>, local_y: f32, bounding_radius: Option<f32>) -> Self {
        Self {
            name: name.into(),
            local_y,
            bounding_radius,
        }
    }
}

/// Tint eines Controller-Mesh-Knotens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonTint {
    /// Index in `ControllerHandle::model`
    pub node: usize,
    /// Basis- und Emissive-Farbe
    pub color: Rgb,
    /// Emissive-Intensität (0 = kein Leuchten)
    pub emissive_intensity: f32,
}
