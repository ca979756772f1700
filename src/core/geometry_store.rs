//! Besitz aller vom Kern erzeugten Render-Ressourcen (Tubes und Endkappen).
//!
//! Der Host rendert nur, was hier registriert ist. Ein Stroke gilt erst als
//! vollständig entfernt, wenn alle drei Ressourcen (Tube + 2 Kappen) freigegeben sind.

use std::collections::BTreeMap;

use super::{CapMarker, TubeMesh};

/// Stabile ID einer Geometrie-Ressource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GeometryId(pub u64);

/// Eine renderbare Ressource.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Röhren-Mesh eines (laufenden oder fertigen) Strokes
    Tube(TubeMesh),
    /// Kugel-Kappe an einem Stroke-Ende
    Cap(CapMarker),
}

/// Registry aller lebenden Geometrie-Ressourcen.
#[derive(Debug, Default)]
pub struct GeometryStore {
    entries: BTreeMap<GeometryId, Geometry>,
    next_id: u64,
}

impl GeometryStore {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Registriert eine neue Ressource und gibt ihre ID zurück.
    pub fn allocate(&mut self, geometry: Geometry) -> GeometryId {
        let id = GeometryId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        self.entries.insert(id, geometry);
        id
    }

    /// Ersetzt die Geometrie einer lebenden Ressource. Unbekannte IDs werden ignoriert.
    pub fn replace(&mut self, id: GeometryId, geometry: Geometry) -> bool {
        match self.entries.get_mut(&id) {
            Some(slot) => {
                *slot = geometry;
                true
            }
            None => {
                log::debug!("Geometrie {:?} nicht (mehr) registriert", id);
                false
            }
        }
    }

    /// Gibt mehrere Ressourcen gemeinsam frei. Liefert die Anzahl tatsächlich entfernter.
    pub fn release_all(&mut self, ids: &[GeometryId]) -> usize {
        ids.iter()
            .filter(|id| self.entries.remove(id).is_some())
            .count()
    }

    /// Read-only Zugriff auf eine Ressource.
    pub fn get(&self, id: GeometryId) -> Option<&Geometry> {
        self.entries.get(&id)
    }

    /// Liefert das Tube-Mesh zu einer ID (falls es eins ist).
    pub fn tube(&self, id: GeometryId) -> Option<&TubeMesh> {
        match self.entries.get(&id) {
            Some(Geometry::Tube(mesh)) => Some(mesh),
            _ => None,
        }
    }

    /// Anzahl lebender Ressourcen.
    pub fn live_count(&self) -> usize {
        self.entries.len()
    }

    /// Iteriert über alle Ressourcen in Erzeugungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (GeometryId, &Geometry)> {
        self.entries.iter().map(|(id, g)| (*id, g))
    }
}
