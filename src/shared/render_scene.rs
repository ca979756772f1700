//! Marker-Szene als expliziter Übergabevertrag zwischen Session und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host-Renderer sie konsumiert.

use glam::{Vec2, Vec3};

use super::options::HintConfig;
use crate::core::{ButtonTint, Geometry, GeometryId, Hand, HandPair, Rgb};

/// Ein Ring der Size-Picker-Darstellung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRing {
    /// Strichstärke, die der Ring repräsentiert
    pub thickness: f32,
    pub outer_radius: f32,
    pub inner_radius: f32,
    /// X-Position, um die Ringreihe zentriert
    pub offset_x: f32,
}

/// Kugel an der Stiftspitze des Painters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipIndicator {
    pub hand: Hand,
    /// Weltposition der Spitze
    pub position: Vec3,
    /// Radius = aktuelle Strichstärke
    pub radius: f32,
    pub color: Rgb,
}

/// Size-Picker an der Painter-Hand.
#[derive(Debug, Clone, PartialEq)]
pub struct SizePickerView {
    pub hand: Hand,
    /// Index des hervorgehobenen Rings
    pub index: usize,
    pub rings: Vec<SizeRing>,
    /// Bedienhinweis (Größe, Bild, Tint)
    pub hint: HintConfig,
}

/// Color-Picker an der Palette-Hand.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPickerView {
    pub hand: Hand,
    pub row: usize,
    pub col: usize,
    pub color: Rgb,
    /// Position des Auswahlrings im Raster
    pub position: Vec2,
    /// Alle Rasterfarben in Zeilenreihenfolge
    pub colors: Vec<Rgb>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerScene {
    /// Alle lebenden Geometrien (Tubes + Kappen) in Erzeugungsreihenfolge
    pub geometries: Vec<(GeometryId, Geometry)>,
    /// Pfad des laufenden Strokes (falls einer aufgenommen wird)
    pub active_path: Option<GeometryId>,
    pub rig_position: Vec3,
    pub inside_zone: bool,
    pub painter: Hand,
    /// Nur sichtbar, wenn der Painter zeichnen darf und gerade nicht zeichnet
    pub tip_indicator: Option<TipIndicator>,
    /// Button-Tints pro Controller
    pub tints: HandPair<Vec<ButtonTint>>,
    pub size_picker: Option<SizePickerView>,
    pub color_picker: Option<ColorPickerView>,
}

impl MarkerScene {
    /// Anzahl der Tube-Meshes (fertige + laufender Stroke).
    pub fn tube_count(&self) -> usize {
        self.geometries
            .iter()
            .filter(|(_, g)| matches!(g, Geometry::Tube(_)))
            .count()
    }

    /// Anzahl der Endkappen.
    pub fn cap_count(&self) -> usize {
        self.geometries
            .iter()
            .filter(|(_, g)| matches!(g, Geometry::Cap(_)))
            .count()
    }
}
