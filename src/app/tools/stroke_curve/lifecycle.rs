//! Lifecycle-Methoden des StrokeCurve (begin, sample, end, undo, Input-Gating).

use glam::Vec3;

use super::geometry::{build_tube, cap_at};
use super::state::{ActiveStroke, StrokeCurve, StrokeStyle};
use crate::app::history::CommittedStroke;
use crate::core::{Geometry, GeometryId, Hand, TubeMesh};

/// Ergebnis eines `sample()`-Aufrufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// Punkt übernommen, Mesh neu aufgebaut (ab 2 Punkten)
    Accepted,
    /// Innerhalb von `min_distance` zum letzten Punkt
    TooClose,
    /// Punktobergrenze erreicht oder Position ungültig
    Rejected,
    /// Kein laufender Stroke
    Idle,
}

/// Ergebnis eines `end()`-Aufrufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOutcome {
    /// Stroke mit Kappen auf den Undo-Stack gelegt
    Committed(CommittedStroke),
    /// Weniger als 2 Punkte: Pfad verworfen
    Discarded,
    /// Kein laufender Stroke
    Idle,
}

impl StrokeCurve {
    /// Startet einen neuen Stroke.
    ///
    /// Ein noch laufender Stroke wird vorher verworfen, damit sein Pfad nicht
    /// verwaist. Die Prüfung auf aktiven Input liegt beim Aufrufer.
    pub fn begin(&mut self) -> GeometryId {
        if let Some(previous) = self.active.take() {
            log::debug!(
                "Laufender Stroke mit {} Punkten verworfen (erneutes begin)",
                previous.points.len()
            );
            self.store.release_all(&[previous.path]);
        }

        self.indicator_visible = false;
        let path = self
            .store
            .allocate(Geometry::Tube(TubeMesh::empty(self.style.color)));
        self.active = Some(ActiveStroke {
            points: Vec::new(),
            path,
            saturated: false,
        });
        path
    }

    /// Nimmt eine Tip-Position auf.
    ///
    /// Der erste Punkt wird immer übernommen, weitere nur bei Abstand
    /// `> min_distance`. Ab 2 Punkten wird das Tube-Mesh komplett ersetzt.
    pub fn sample(&mut self, point: Vec3) -> SampleOutcome {
        let Some(active) = self.active.as_mut() else {
            return SampleOutcome::Idle;
        };
        if !point.is_finite() {
            log::debug!("Nicht-endliche Tip-Position ignoriert");
            return SampleOutcome::Rejected;
        }
        if let Some(last) = active.points.last() {
            if last.distance(point) <= self.config.min_distance {
                return SampleOutcome::TooClose;
            }
        }
        if active.points.len() >= self.config.max_points {
            if !active.saturated {
                active.saturated = true;
                log::warn!(
                    "Stroke hat {} Punkte erreicht, weitere Samples werden ignoriert",
                    self.config.max_points
                );
            }
            return SampleOutcome::Rejected;
        }

        active.points.push(point);
        if active.points.len() >= 2 {
            let mesh = build_tube(&active.points, &self.style, &self.config);
            self.store.replace(active.path, Geometry::Tube(mesh));
        }
        SampleOutcome::Accepted
    }

    /// Beendet den laufenden Stroke.
    ///
    /// Ab 2 Punkten entstehen Kappen an erstem und letztem Punkt und der Stroke
    /// landet auf dem Undo-Stack, sonst wird der Pfad freigegeben. Der
    /// Tip-Indikator wird in jedem Fall wieder eingeblendet.
    pub fn end(&mut self) -> EndOutcome {
        self.indicator_visible = true;
        let Some(active) = self.active.take() else {
            return EndOutcome::Idle;
        };

        let (first, last) = match (active.points.first(), active.points.last()) {
            (Some(first), Some(last)) if active.points.len() >= 2 => (*first, *last),
            _ => {
                self.store.release_all(&[active.path]);
                log::debug!(
                    "Stroke mit {} Punkt(en) verworfen",
                    active.points.len()
                );
                return EndOutcome::Discarded;
            }
        };

        let start_cap = self
            .store
            .allocate(Geometry::Cap(cap_at(first, &self.style, &self.config)));
        let end_cap = self
            .store
            .allocate(Geometry::Cap(cap_at(last, &self.style, &self.config)));
        let stroke = CommittedStroke {
            path: active.path,
            caps: [start_cap, end_cap],
            point_count: active.points.len(),
        };

        // Verdrängte Strokes bleiben sichtbar, nur ihr Undo-Eintrag entfällt
        if let Some(evicted) = self.history.push(stroke) {
            log::debug!(
                "Undo-Tiefe erreicht, Stroke mit {} Punkten nicht mehr rückgängig machbar",
                evicted.point_count
            );
        }
        log::info!("Stroke abgeschlossen: {} Punkte", stroke.point_count);
        EndOutcome::Committed(stroke)
    }

    /// Entfernt den jüngsten Stroke samt beiden Kappen. No-op bei leerem Stack.
    pub fn undo_last(&mut self) -> Option<CommittedStroke> {
        let stroke = self.history.pop()?;
        let released = self.store.release_all(&stroke.resources());
        if released != 3 {
            log::warn!(
                "Undo hat nur {} von 3 Ressourcen freigegeben",
                released
            );
        }
        log::info!("Stroke rückgängig gemacht ({} verbleibend)", self.history.len());
        Some(stroke)
    }

    /// Aktiviert Trigger-/Undo-Eingaben und blendet den Tip-Indikator ein.
    pub fn enable_input(&mut self) {
        self.input_enabled = true;
        self.indicator_visible = true;
    }

    /// Deaktiviert die Eingaben und blendet den Indikator aus.
    ///
    /// Ein laufender Stroke wird vorher regulär beendet.
    pub fn disable_input(&mut self) -> EndOutcome {
        let outcome = self.end();
        self.input_enabled = false;
        self.indicator_visible = false;
        outcome
    }

    /// Hängt das Werkzeug an eine (neue) Painter-Hand.
    ///
    /// Beendet einen laufenden Stroke, schaltet den Input ab und setzt den
    /// Stil auf den Startwert zurück. Strokes und Undo-Stack bleiben erhalten.
    pub fn attach(&mut self, hand: Hand) -> EndOutcome {
        let outcome = self.disable_input();
        self.owner = hand;
        self.style = self.default_style;
        outcome
    }

    /// Ersetzt den Stil vollständig (Stärke wird geklemmt).
    pub fn apply_style(&mut self, style: StrokeStyle) {
        self.style = StrokeStyle::new(style.color, style.thickness);
    }
}
