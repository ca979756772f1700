//! Binäre Rollenzuweisung: Painter-Hand und Palette-Hand.

use crate::core::Hand;

/// Welche Hand malt; die andere ist immer die Palette-Hand.
///
/// Zwei Zustände (rechts malt / links malt), Start: rechts malt. Die
/// Seiteneffekte eines Wechsels (Abbau und Neuaufbau der Werkzeuge) führt
/// `handlers::role::assign_painter` aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandRole {
    painter: Hand,
}

impl Default for HandRole {
    fn default() -> Self {
        Self::new()
    }
}

impl HandRole {
    /// Startzustand: rechte Hand malt.
    pub fn new() -> Self {
        Self {
            painter: Hand::Right,
        }
    }

    /// Setzt die Painter-Hand.
    ///
    /// Gibt `false` zurück (No-op), wenn `side` bereits malt und `force` nicht gesetzt ist.
    pub fn assign(&mut self, side: Hand, force: bool) -> bool {
        if side == self.painter && !force {
            return false;
        }
        self.painter = side;
        true
    }

    /// Aktuelle Painter-Hand.
    pub fn painter(&self) -> Hand {
        self.painter
    }

    /// Aktuelle Palette-Hand (immer das Komplement).
    pub fn palette(&self) -> Hand {
        self.painter.other()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_right_painter() {
        let role = HandRole::new();
        assert_eq!(role.painter(), Hand::Right);
        assert_eq!(role.palette(), Hand::Left);
    }

    #[test]
    fn assign_same_side_is_noop_unless_forced() {
        let mut role = HandRole::new();
        assert!(!role.assign(Hand::Right, false));
        assert!(role.assign(Hand::Right, true));
        assert_eq!(role.painter(), Hand::Right);
    }

    #[test]
    fn painter_and_palette_always_differ() {
        let mut role = HandRole::new();
        for side in [Hand::Left, Hand::Left, Hand::Right, Hand::Left] {
            role.assign(side, false);
            assert_ne!(role.painter(), role.palette());
            assert_eq!(role.painter(), side);
        }
    }
}
