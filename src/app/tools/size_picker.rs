//! Size-Picker: zyklische Auswahl aus bis zu vier Strichstärken.
//!
//! Hängt an der Painter-Hand und wird über B (rechts) bzw. Y (links)
//! weitergeschaltet. Die Ring-Geometrie für die Darstellung wird aus den
//! Stärken abgeleitet, der Bedienhinweis kommt fertig konfiguriert herein.

use crate::core::Hand;
use crate::shared::options::{
    HintConfig, SIZE_PICKER_MAX, SIZE_PICKER_MAX_ENTRIES, SIZE_PICKER_MIN,
};
use crate::shared::SizeRing;

/// Ringbreite (outer − inner).
const RING_BAND: f32 = 0.0012;
/// Kleinster Außenradius.
const RING_MIN_RADIUS: f32 = RING_BAND + 0.0008;
/// Größter Außenradius.
const RING_MAX_RADIUS: f32 = 0.030;
/// Exponent der Radius-Abbildung (komprimiert große Stärken).
const RING_EXPONENT: f32 = 0.70;
/// Abstand zwischen benachbarten Ringen.
const RING_GAP: f32 = 0.01;
/// Fallback, wenn keine gültige Stärke übrig bleibt.
const FALLBACK_SIZE: f32 = 0.01;

/// Auswahlzustand des Size-Pickers.
#[derive(Debug, Clone)]
pub struct SizePicker {
    rings: Vec<SizeRing>,
    index: usize,
    attached: Option<Hand>,
    hint: HintConfig,
}

impl SizePicker {
    /// Erstellt den Picker aus Roh-Stärken und Hinweis-Konfiguration.
    pub fn new(sizes: &[f32], hint: HintConfig) -> Self {
        Self {
            rings: layout_rings(&sanitize_sizes(sizes)),
            index: 0,
            attached: None,
            hint,
        }
    }

    /// Hängt den Picker an eine Hand. Die Auswahl bleibt erhalten.
    pub fn attach(&mut self, hand: Hand) {
        self.attached = Some(hand);
    }

    /// Entfernt den Picker von seiner Hand.
    pub fn detach(&mut self) {
        self.attached = None;
    }

    /// Hand, an der der Picker hängt.
    pub fn attached(&self) -> Option<Hand> {
        self.attached
    }

    /// Aktuell gewählter Index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Aktuell gewählte Strichstärke.
    pub fn selected(&self) -> f32 {
        self.rings
            .get(self.index)
            .map_or(FALLBACK_SIZE, |r| r.thickness)
    }

    /// Schaltet zyklisch weiter und liefert die neue Stärke.
    pub fn advance(&mut self) -> f32 {
        if !self.rings.is_empty() {
            self.index = (self.index + 1) % self.rings.len();
        }
        self.selected()
    }

    /// Ringe in Darstellungsreihenfolge.
    pub fn rings(&self) -> &[SizeRing] {
        &self.rings
    }

    /// Bedienhinweis-Konfiguration.
    pub fn hint(&self) -> &HintConfig {
        &self.hint
    }
}

/// Filtert ungültige Stärken, klemmt auf den erlaubten Bereich und kürzt auf max. 4.
pub fn sanitize_sizes(raw: &[f32]) -> Vec<f32> {
    let sizes: Vec<f32> = raw
        .iter()
        .copied()
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v.clamp(SIZE_PICKER_MIN, SIZE_PICKER_MAX))
        .take(SIZE_PICKER_MAX_ENTRIES)
        .collect();
    if sizes.is_empty() {
        log::warn!("Keine gültigen Picker-Stärken, verwende {}", FALLBACK_SIZE);
        vec![FALLBACK_SIZE]
    } else {
        sizes
    }
}

/// Bildet Stärken auf Ringradien ab und verteilt die Ringe zentriert auf X.
fn layout_rings(sizes: &[f32]) -> Vec<SizeRing> {
    let t_min = sizes.iter().copied().fold(f32::INFINITY, f32::min);
    let map_radius = |t: f32| {
        (RING_MIN_RADIUS * (t / t_min).max(1.0).powf(RING_EXPONENT)).min(RING_MAX_RADIUS)
    };

    let mut rings: Vec<SizeRing> = sizes
        .iter()
        .map(|&t| {
            let outer_radius = map_radius(t);
            SizeRing {
                thickness: t,
                outer_radius,
                inner_radius: (outer_radius - RING_BAND).max(0.001),
                offset_x: 0.0,
            }
        })
        .collect();

    let mut x = 0.0;
    for i in 0..rings.len() {
        x = if i == 0 {
            -rings[0].outer_radius
        } else {
            x + rings[i - 1].outer_radius + rings[i].outer_radius + RING_GAP
        };
        rings[i].offset_x = x;
    }
    if let (Some(first), Some(last)) = (rings.first(), rings.last()) {
        let center = (first.offset_x + last.offset_x) / 2.0;
        rings.iter_mut().for_each(|r| r.offset_x -= center);
    }
    rings
}
