//! Zentrale Konfiguration für Spatial Marker.
//!
//! `MarkerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::{parse_palette, Rgb};

// ── Stroke ──────────────────────────────────────────────────────────

/// Mindestabstand zwischen zwei aufgenommenen Punkten (Meter).
pub const MIN_DISTANCE: f32 = 0.005;
/// Strichstärke (Tube-Radius) beim Zuweisen der Painter-Hand.
pub const DEFAULT_THICKNESS: f32 = 0.0025;
/// Untergrenze für Strichstärken; kleinere Werte werden darauf geklemmt.
pub const MIN_THICKNESS: f32 = 1.0e-4;
/// Abstand der Stiftspitze vor dem Controller (lokal -Z).
pub const TIP_OFFSET: f32 = 0.05;
/// Radiale Segmente des Tube-Meshes.
pub const TUBE_RADIAL_SEGMENTS: usize = 8;
/// Tube-Segmente pro aufgenommenem Punkt.
pub const TUBE_SEGMENTS_PER_POINT: usize = 4;
/// Mindestanzahl Tube-Segmente (glatte Darstellung bei wenigen Punkten).
pub const TUBE_MIN_SEGMENTS: usize = 16;
/// Segmente der Kugel-Endkappen.
pub const CAP_SEGMENTS: u32 = 8;
/// Obergrenze an Punkten pro Stroke (Neuaufbau ist O(n) pro Sample).
pub const MAX_STROKE_POINTS: usize = 4096;
/// Maximale Tiefe des Undo-Stacks.
pub const UNDO_DEPTH: usize = 256;

// ── Size-Picker ─────────────────────────────────────────────────────

/// Auswählbare Strichstärken.
pub const MARKER_SIZES: [f32; 4] = [0.0025, 0.005, 0.01, 0.02];
/// Kleinste erlaubte Picker-Stärke.
pub const SIZE_PICKER_MIN: f32 = 0.001;
/// Größte erlaubte Picker-Stärke.
pub const SIZE_PICKER_MAX: f32 = 0.04;
/// Maximale Anzahl Picker-Einträge.
pub const SIZE_PICKER_MAX_ENTRIES: usize = 4;

// ── Color-Picker ────────────────────────────────────────────────────

/// Zellen pro Palettenzeile, von oben nach unten.
pub const COLOR_ROWS: [usize; 6] = [2, 4, 6, 6, 4, 2];
/// Standard-Palette (24 Farben, zeilenweise).
pub const PALETTE: [&str; 24] = [
    "#f2f23a", "#d8d835", //
    "#f4bd36", "#d29930", "#f58436", "#d06430", //
    "#f45336", "#d13230", "#f33a3a", "#d13636", "#f3398c", "#d13470", //
    "#f339f3", "#d134d8", "#9933f3", "#7300d8", "#3333f3", "#0000d8", //
    "#3399f3", "#0073d8", "#33f339", "#00d836", //
    "#99f339", "#70d134",
];
/// Stick-Auslenkung, ab der ein Schritt ausgelöst wird.
pub const STICK_PRESS_THRESHOLD: f32 = 0.5;
/// Stick-Auslenkung, unter die beide Achsen fallen müssen, bevor erneut geschaltet wird.
pub const STICK_RELEASE_THRESHOLD: f32 = 0.5;

// ── Lokomotion ──────────────────────────────────────────────────────

/// Beschleunigung pro voller Stick-Auslenkung.
pub const LOCOMOTION_ACCELERATION: f32 = 25.0;
/// Dämpfungsbasis (Geschwindigkeit × (1/easing)^(delta·60)).
pub const LOCOMOTION_EASING: f32 = 1.1;
/// Restgeschwindigkeit, unter der auf 0 gesetzt wird.
pub const LOCOMOTION_CLAMP_VELOCITY: f32 = 1.0e-5;
/// Frame-Delta (Sekunden), ab dem die Geschwindigkeit verworfen wird.
pub const LOCOMOTION_MAX_FRAME_DELTA: f32 = 0.2;

// ── Zeichenzone ─────────────────────────────────────────────────────

/// Geometrie der automatisch erzeugten Zeichenfläche.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaOptions {
    /// Default-Fläche erzeugen, wenn der Host keine Zonen liefert
    pub auto_area: bool,
    /// Breite × Höhe
    pub size: [f32; 2],
    /// Mittelpunkt
    pub position: [f32; 3],
    /// Rotation (XYZ-Euler, Grad)
    pub rotation_deg: [f32; 3],
}

impl Default for AreaOptions {
    fn default() -> Self {
        Self {
            auto_area: true,
            size: [4.0, 4.0],
            position: [0.0, 0.0, -4.0],
            rotation_deg: [-90.0, 0.0, 0.0],
        }
    }
}

/// Parameter der Lokomotion pro Hand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocomotionOptions {
    pub acceleration: f32,
    pub easing: f32,
    pub clamp_velocity: f32,
    pub max_frame_delta: f32,
    /// Blickneigung (Pitch) in die Bewegung einrechnen
    #[serde(default)]
    pub fly: bool,
    /// Horizontal-Achse invertieren
    #[serde(default)]
    pub invert_x: bool,
    /// Vor/Zurück-Achse invertieren
    #[serde(default)]
    pub invert_y: bool,
}

impl Default for LocomotionOptions {
    fn default() -> Self {
        Self {
            acceleration: LOCOMOTION_ACCELERATION,
            easing: LOCOMOTION_EASING,
            clamp_velocity: LOCOMOTION_CLAMP_VELOCITY,
            max_frame_delta: LOCOMOTION_MAX_FRAME_DELTA,
            fly: false,
            invert_x: false,
            invert_y: false,
        }
    }
}

/// Darstellung des Bedienhinweises neben dem Size-Picker.
///
/// Wird beim Erstellen des Pickers übergeben, nicht nachträglich gepatcht.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HintConfig {
    /// Kantenlänge der Hinweis-Fläche
    pub size: f32,
    /// Bildquelle; `None` → einfarbige Fläche mit `tint`
    pub image: Option<String>,
    pub tint: Rgb,
    pub opacity: f32,
    /// Fläche zur Kamera drehen
    pub billboard: bool,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            size: 0.1,
            image: Some("UI.png".to_string()),
            tint: Rgb::new(0x11, 0x11, 0x11),
            opacity: 0.9,
            billboard: true,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `spatial_marker.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerOptions {
    // ── Stroke ──────────────────────────────────────────────────
    /// Mindestabstand zwischen aufgenommenen Punkten
    pub min_distance: f32,
    /// Strichstärke nach Zuweisung der Painter-Hand
    pub default_thickness: f32,
    /// Farbe nach Zuweisung der Painter-Hand
    pub default_color: Rgb,
    /// Abstand der Stiftspitze vor dem Controller
    pub tip_offset: f32,
    pub tube_radial_segments: usize,
    pub tube_segments_per_point: usize,
    pub tube_min_segments: usize,
    pub cap_segments: u32,
    /// Obergrenze an Punkten pro Stroke
    #[serde(default = "default_max_stroke_points")]
    pub max_stroke_points: usize,
    /// Maximale Anzahl rückgängig machbarer Strokes
    #[serde(default = "default_undo_depth")]
    pub undo_depth: usize,

    // ── Picker ──────────────────────────────────────────────────
    /// Auswählbare Strichstärken (max. 4, geklemmt)
    pub marker_sizes: Vec<f32>,
    /// Palette als Hex-Strings; ungültige Einträge werden verworfen
    pub colors: Vec<String>,
    /// Zellen pro Palettenzeile
    pub color_rows: Vec<usize>,
    pub stick_press_threshold: f32,
    pub stick_release_threshold: f32,
    /// Stick nach oben = Palette nach oben
    pub invert_stick_y: bool,
    /// Hinweis-Darstellung am Size-Picker
    #[serde(default)]
    pub hint: HintConfig,

    // ── Zone & Bewegung ─────────────────────────────────────────
    #[serde(default)]
    pub area: AreaOptions,
    #[serde(default)]
    pub locomotion: LocomotionOptions,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            min_distance: MIN_DISTANCE,
            default_thickness: DEFAULT_THICKNESS,
            default_color: Rgb::WHITE,
            tip_offset: TIP_OFFSET,
            tube_radial_segments: TUBE_RADIAL_SEGMENTS,
            tube_segments_per_point: TUBE_SEGMENTS_PER_POINT,
            tube_min_segments: TUBE_MIN_SEGMENTS,
            cap_segments: CAP_SEGMENTS,
            max_stroke_points: MAX_STROKE_POINTS,
            undo_depth: UNDO_DEPTH,

            marker_sizes: MARKER_SIZES.to_vec(),
            colors: PALETTE.iter().map(|s| s.to_string()).collect(),
            color_rows: COLOR_ROWS.to_vec(),
            stick_press_threshold: STICK_PRESS_THRESHOLD,
            stick_release_threshold: STICK_RELEASE_THRESHOLD,
            invert_stick_y: true,
            hint: HintConfig::default(),

            area: AreaOptions::default(),
            locomotion: LocomotionOptions::default(),
        }
    }
}

/// Serde-Default für `max_stroke_points` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_max_stroke_points() -> usize {
    MAX_STROKE_POINTS
}

/// Serde-Default für `undo_depth`.
fn default_undo_depth() -> usize {
    UNDO_DEPTH
}

impl MarkerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spatial_marker"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spatial_marker.toml")
    }

    /// Geparste Palette; ungültige Einträge werden verworfen.
    pub fn palette(&self) -> Vec<Rgb> {
        parse_palette(&self.colors.join(","))
    }
}

/// Klemmt eine Strichstärke auf einen gültigen positiven Wert.
pub fn sanitize_thickness(thickness: f32) -> f32 {
    if thickness.is_finite() && thickness > MIN_THICKNESS {
        thickness
    } else {
        if thickness <= 0.0 || !thickness.is_finite() {
            log::debug!("Ungültige Strichstärke {} → {}", thickness, MIN_THICKNESS);
        }
        MIN_THICKNESS
    }
}
