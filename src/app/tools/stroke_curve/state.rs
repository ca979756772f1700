//! State-Definitionen und Lese-Zugriffe für den StrokeCurve.

use glam::Vec3;

use crate::app::history::{CommittedStroke, StrokeHistory};
use crate::core::{GeometryId, GeometryStore, Hand, Rgb};
use crate::shared::options::{sanitize_thickness, MarkerOptions};

/// Live-Stil des Strokes (wirkt auf den nächsten Sample, nie rückwirkend).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    /// Tube-Radius in Welteinheiten, immer > 0
    pub thickness: f32,
}

impl StrokeStyle {
    /// Erstellt einen Stil; ungültige Stärken werden geklemmt.
    pub fn new(color: Rgb, thickness: f32) -> Self {
        Self {
            color,
            thickness: sanitize_thickness(thickness),
        }
    }
}

/// Tessellierungs- und Sampling-Parameter (aus `MarkerOptions` abgeleitet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeConfig {
    pub min_distance: f32,
    pub radial_segments: usize,
    pub segments_per_point: usize,
    pub min_segments: usize,
    pub cap_segments: u32,
    pub max_points: usize,
}

impl StrokeConfig {
    /// Übernimmt die Stroke-relevanten Werte aus den Optionen.
    pub fn from_options(options: &MarkerOptions) -> Self {
        Self {
            min_distance: options.min_distance.max(0.0),
            radial_segments: options.tube_radial_segments.max(3),
            segments_per_point: options.tube_segments_per_point.max(1),
            min_segments: options.tube_min_segments.max(1),
            cap_segments: options.cap_segments.max(3),
            max_points: options.max_stroke_points.max(2),
        }
    }

    /// Tubulare Segmente für `point_count` Punkte.
    pub fn tubular_segments(&self, point_count: usize) -> usize {
        (point_count * self.segments_per_point).max(self.min_segments)
    }
}

/// Ein laufender (noch nicht abgeschlossener) Stroke.
#[derive(Debug, Clone)]
pub(crate) struct ActiveStroke {
    /// Aufgenommene Punkte in Weltkoordinaten
    pub(crate) points: Vec<Vec3>,
    /// Pfad-Ressource im GeometryStore
    pub(crate) path: GeometryId,
    /// Obergrenze erreicht (einmalig geloggt)
    pub(crate) saturated: bool,
}

/// Zeichenwerkzeug der Painter-Hand.
///
/// Besitzt den GeometryStore aller Strokes und den begrenzten Undo-Stack.
/// Beim Rollentausch wechselt nur `owner`, Strokes und Undo bleiben erhalten.
pub struct StrokeCurve {
    pub(crate) store: GeometryStore,
    pub(crate) history: StrokeHistory,
    pub(crate) style: StrokeStyle,
    pub(crate) default_style: StrokeStyle,
    pub(crate) config: StrokeConfig,
    pub(crate) active: Option<ActiveStroke>,
    /// Hand, an der das Werkzeug hängt
    pub(crate) owner: Hand,
    /// Trigger/Undo-Eingaben werden angenommen
    pub(crate) input_enabled: bool,
    /// Tip-Indikator soll angezeigt werden (zusätzlich zu `input_enabled`)
    pub(crate) indicator_visible: bool,
}

impl StrokeCurve {
    /// Erstellt das Werkzeug mit Input aus (wird erst in der Zone aktiviert).
    pub fn new(owner: Hand, options: &MarkerOptions) -> Self {
        let default_style = StrokeStyle::new(options.default_color, options.default_thickness);
        Self {
            store: GeometryStore::new(),
            history: StrokeHistory::new_with_capacity(options.undo_depth),
            style: default_style,
            default_style,
            config: StrokeConfig::from_options(options),
            active: None,
            owner,
            input_enabled: false,
            indicator_visible: false,
        }
    }

    /// Aktueller Stil.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Stil, mit dem eine frisch zugewiesene Painter-Hand startet.
    pub fn default_style(&self) -> StrokeStyle {
        self.default_style
    }

    /// Setzt die Farbe (auch mitten im Stroke).
    pub fn set_color(&mut self, color: Rgb) {
        self.style.color = color;
    }

    /// Setzt die Stärke; ≤ 0 oder nicht-endlich wird auf das Minimum geklemmt.
    pub fn set_thickness(&mut self, thickness: f32) {
        self.style.thickness = sanitize_thickness(thickness);
    }

    /// Hand, an der das Werkzeug hängt.
    pub fn owner(&self) -> Hand {
        self.owner
    }

    /// Ist der Zeichen-Input aktiv?
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Nimmt die Hand gerade Trigger-Eingaben an?
    pub fn accepts_input_from(&self, hand: Hand) -> bool {
        self.input_enabled && self.owner == hand
    }

    /// Läuft gerade ein Stroke?
    pub fn is_recording(&self) -> bool {
        self.active.is_some()
    }

    /// Punkte des laufenden Strokes (0 wenn keiner läuft).
    pub fn point_count(&self) -> usize {
        self.active.as_ref().map_or(0, |a| a.points.len())
    }

    /// Punkte des laufenden Strokes.
    pub fn active_points(&self) -> &[Vec3] {
        self.active
            .as_ref()
            .map(|a| a.points.as_slice())
            .unwrap_or(&[])
    }

    /// Pfad-Ressource des laufenden Strokes.
    pub fn active_path(&self) -> Option<GeometryId> {
        self.active.as_ref().map(|a| a.path)
    }

    /// Soll der Tip-Indikator sichtbar sein?
    pub fn indicator_visible(&self) -> bool {
        self.input_enabled && self.indicator_visible && self.active.is_none()
    }

    /// Anzahl abgeschlossener, rückgängig machbarer Strokes.
    pub fn stroke_count(&self) -> usize {
        self.history.len()
    }

    /// Rückgängig machbare Strokes von alt nach neu.
    pub fn committed(&self) -> impl Iterator<Item = &CommittedStroke> {
        self.history.iter()
    }

    /// Read-only Zugriff auf alle Geometrie-Ressourcen.
    pub fn store(&self) -> &GeometryStore {
        &self.store
    }

    /// Tessellierungs-Parameter.
    pub fn config(&self) -> &StrokeConfig {
        &self.config
    }
}
