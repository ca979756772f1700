//! Controller-Identitäten und Handle auf die zwei getrackten Controller.

use glam::{Affine3A, Vec3};

use super::ModelNode;

/// Seite eines Controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hand {
    /// Linker Controller
    Left,
    /// Rechter Controller (Start-Painter)
    #[default]
    Right,
}

impl Hand {
    /// Beide Seiten in fester Reihenfolge (links, rechts).
    pub const BOTH: [Hand; 2] = [Hand::Left, Hand::Right];

    /// Gibt die jeweils andere Hand zurück.
    pub fn other(self) -> Hand {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }

    /// Kurzname für Logs.
    pub fn label(self) -> &'static str {
        match self {
            Hand::Left => "links",
            Hand::Right => "rechts",
        }
    }
}

/// Ein Wert pro Hand, per `Hand` indexierbar.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HandPair<T> {
    pub left: T,
    pub right: T,
}

impl<T> HandPair<T> {
    /// Erstellt ein Paar aus zwei Werten.
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    /// Erstellt ein Paar, dessen Werte aus der jeweiligen Seite abgeleitet werden.
    pub fn from_fn(mut f: impl FnMut(Hand) -> T) -> Self {
        Self {
            left: f(Hand::Left),
            right: f(Hand::Right),
        }
    }

    /// Iteriert über (Hand, &Wert) in der Reihenfolge links, rechts.
    pub fn iter(&self) -> impl Iterator<Item = (Hand, &T)> {
        [(Hand::Left, &self.left), (Hand::Right, &self.right)].into_iter()
    }
}

impl<T> std::ops::Index<Hand> for HandPair<T> {
    type Output = T;

    fn index(&self, hand: Hand) -> &T {
        match hand {
            Hand::Left => &self.left,
            Hand::Right => &self.right,
        }
    }
}

impl<T> std::ops::IndexMut<Hand> for HandPair<T> {
    fn index_mut(&mut self, hand: Hand) -> &mut T {
        match hand {
            Hand::Left => &mut self.left,
            Hand::Right => &mut self.right,
        }
    }
}

/// Handle auf einen vom Host verwalteten Controller.
///
/// Wird beim Session-Setup genau zweimal erstellt und per Dependency Injection
/// übergeben. `world_transform == None` bedeutet: der Controller ist noch nicht
/// initialisiert (veraltete Referenz), betroffene Operationen werden übersprungen.
#[derive(Debug, Clone, Default)]
pub struct ControllerHandle {
    /// Seite des Controllers
    pub hand: Hand,
    /// Aktuelle Welt-Transformation (None = noch nicht getrackt)
    pub world_transform: Option<Affine3A>,
    /// Mesh-Knoten des Controller-Modells (für Button-Tints)
    pub model: Vec<ModelNode>,
}

impl ControllerHandle {
    /// Erstellt ein noch nicht initialisiertes Handle.
    pub fn new(hand: Hand) -> Self {
        Self {
            hand,
            world_transform: None,
            model: Vec::new(),
        }
    }

    /// Erstellt ein Handle mit bekannter Welt-Transformation.
    pub fn with_transform(hand: Hand, transform: Affine3A) -> Self {
        Self {
            hand,
            world_transform: Some(transform),
            model: Vec::new(),
        }
    }

    /// Gibt `true` zurück, wenn der Host bereits eine Transformation geliefert hat.
    pub fn is_ready(&self) -> bool {
        self.world_transform.is_some()
    }

    /// Weltposition der Stiftspitze (lokal `(0, 0, -tip_offset)`).
    pub fn tip_position(&self, tip_offset: f32) -> Option<Vec3> {
        self.world_transform
            .map(|t| t.transform_point3(Vec3::new(0.0, 0.0, -tip_offset)))
    }
}
