use std::collections::VecDeque;

use crate::core::GeometryId;

/// Ein abgeschlossener Stroke: Tube-Pfad plus zwei Endkappen.
///
/// Die drei Ressourcen werden nur gemeinsam freigegeben.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedStroke {
    /// Tube-Mesh des Strokes
    pub path: GeometryId,
    /// Kappen an erstem und letztem Punkt
    pub caps: [GeometryId; 2],
    /// Anzahl aufgenommener Punkte
    pub point_count: usize,
}

impl CommittedStroke {
    /// Alle Ressourcen-IDs des Strokes (Pfad + Kappen).
    pub fn resources(&self) -> [GeometryId; 3] {
        [self.path, self.caps[0], self.caps[1]]
    }
}

/// Begrenzter Undo-Stack abgeschlossener Strokes.
///
/// Bei voller Tiefe wird der älteste Eintrag verdrängt und an den Aufrufer
/// zurückgegeben. Dessen Geometrie bleibt bestehen, der Stroke ist danach
/// nur nicht mehr rückgängig machbar.
#[derive(Debug, Default)]
pub struct StrokeHistory {
    undo_stack: VecDeque<CommittedStroke>,
    max_depth: usize,
}

impl StrokeHistory {
    /// Erstellt einen History-Manager mit maximaler Tiefe (mindestens 1).
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(max_depth.min(1024)),
            max_depth,
        }
    }

    /// Legt einen abgeschlossenen Stroke ab. Gibt einen verdrängten Eintrag zurück.
    pub fn push(&mut self, stroke: CommittedStroke) -> Option<CommittedStroke> {
        let evicted = if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.pop_front()
        } else {
            None
        };
        self.undo_stack.push_back(stroke);
        evicted
    }

    /// Entnimmt den jüngsten Stroke.
    pub fn pop(&mut self) -> Option<CommittedStroke> {
        self.undo_stack.pop_back()
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Anzahl gespeicherter Strokes.
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Gibt `true` zurück, wenn keine Strokes vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// Iteriert von alt nach neu.
    pub fn iter(&self) -> impl Iterator<Item = &CommittedStroke> {
        self.undo_stack.iter()
    }
}
