//! Färbt die Buttons des Painter-Controllers passend zur Bedienung ein.
//!
//! Die Zuordnung erfolgt über die Mesh-Namen des Controller-Modells. Fehlen
//! eindeutige Namen, werden die beiden Face-Buttons nach ihrer Höhe gepaart
//! (oben = B/Y, unten = A/X). Diese Heuristik kann bei ungewöhnlich benannten
//! Modellen falsch einfärben.

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::core::{ButtonTint, Hand, ModelNode, Rgb};

/// Emissive-Intensität für Face-Buttons.
pub const EMISSIVE_FACE: f32 = 0.30;
/// Emissive-Intensität für den Grip.
pub const EMISSIVE_GRIP: f32 = 0.00;

/// Maximaler Bounding-Radius, ab dem ein einzelner Buchstabe als Button gilt.
const BUTTON_LIKE_MAX_RADIUS: f32 = 0.05;

/// Einfärbbare Controller-Elemente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKey {
    A,
    B,
    X,
    Y,
    Grip,
}

impl ButtonKey {
    /// Reihenfolge, in der Namen geprüft werden (erster Treffer gewinnt).
    const MATCH_ORDER: [ButtonKey; 5] = [
        ButtonKey::A,
        ButtonKey::B,
        ButtonKey::X,
        ButtonKey::Y,
        ButtonKey::Grip,
    ];

    /// Gleichwertige Schlüssel (A ↔ X, B ↔ Y).
    fn equivalents(self) -> &'static [ButtonKey] {
        match self {
            ButtonKey::A => &[ButtonKey::A, ButtonKey::X],
            ButtonKey::X => &[ButtonKey::X, ButtonKey::A],
            ButtonKey::B => &[ButtonKey::B, ButtonKey::Y],
            ButtonKey::Y => &[ButtonKey::Y, ButtonKey::B],
            ButtonKey::Grip => &[ButtonKey::Grip],
        }
    }

    fn letter(self) -> Option<char> {
        match self {
            ButtonKey::A => Some('a'),
            ButtonKey::B => Some('b'),
            ButtonKey::X => Some('x'),
            ButtonKey::Y => Some('y'),
            ButtonKey::Grip => None,
        }
    }

    fn emissive_intensity(self) -> f32 {
        match self {
            ButtonKey::Grip => EMISSIVE_GRIP,
            _ => EMISSIVE_FACE,
        }
    }
}

/// Farbschema für einen Controller.
#[derive(Debug, Clone, PartialEq)]
pub struct TintScheme {
    entries: IndexMap<ButtonKey, Rgb>,
}

impl TintScheme {
    /// Aktiv-Schema der Painter-Hand.
    pub fn active_for(hand: Hand) -> Self {
        let lower = Rgb::new(0xe9, 0x44, 0x62);
        let upper = Rgb::new(0x80, 0xa8, 0xff);
        let grip = Rgb::new(0xd4, 0xe7, 0x00);
        let mut entries = IndexMap::new();
        match hand {
            Hand::Right => {
                entries.insert(ButtonKey::A, lower);
                entries.insert(ButtonKey::B, upper);
            }
            Hand::Left => {
                entries.insert(ButtonKey::X, lower);
                entries.insert(ButtonKey::Y, upper);
            }
        }
        entries.insert(ButtonKey::Grip, grip);
        Self { entries }
    }

    /// Farbe für einen Schlüssel.
    pub fn get(&self, key: ButtonKey) -> Option<Rgb> {
        self.entries.get(&key).copied()
    }

    fn has_any(&self, keys: &[ButtonKey]) -> bool {
        keys.iter().any(|k| self.entries.contains_key(k))
    }
}

/// Vorkompilierte Namensmuster.
struct ButtonPatterns {
    labeled: IndexMap<ButtonKey, Regex>,
    lone: IndexMap<ButtonKey, Regex>,
    grip: Regex,
}

fn patterns() -> &'static ButtonPatterns {
    static PATTERNS: OnceLock<ButtonPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let mut labeled = IndexMap::new();
        let mut lone = IndexMap::new();
        for key in ButtonKey::MATCH_ORDER {
            let Some(l) = key.letter() else { continue };
            let pattern = format!(
                "button[_-]?{l}|{l}[_-]?button|btn[_-]{l}|{l}-?cap|cap_{l}|{l}-?face|face_{l}"
            );
            labeled.insert(key, Regex::new(&pattern).expect("statisches Regex-Muster"));
            if matches!(key, ButtonKey::X | ButtonKey::Y) {
                let pattern = format!("(^|[^a-z0-9]){l}([^a-z0-9]|$)");
                lone.insert(key, Regex::new(&pattern).expect("statisches Regex-Muster"));
            }
        }
        ButtonPatterns {
            labeled,
            lone,
            grip: Regex::new("grip|squeeze").expect("statisches Regex-Muster"),
        }
    })
}

/// Ordnet einen Mesh-Knoten einem Button zu.
pub fn classify_node(node: &ModelNode) -> Option<ButtonKey> {
    let name: String = node
        .name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if name.is_empty() {
        return None;
    }
    let p = patterns();
    let button_like = node
        .bounding_radius
        .is_some_and(|r| r > 0.0 && r < BUTTON_LIKE_MAX_RADIUS);

    ButtonKey::MATCH_ORDER.into_iter().find(|&key| match key {
        ButtonKey::Grip => p.grip.is_match(&name),
        _ => {
            p.labeled.get(&key).is_some_and(|re| re.is_match(&name))
                || (button_like && p.lone.get(&key).is_some_and(|re| re.is_match(&name)))
        }
    })
}

/// Tint-Zustand eines Controllers.
#[derive(Debug, Clone, Default)]
pub struct ButtonColorizer {
    scheme: Option<TintScheme>,
    tints: IndexMap<usize, ButtonTint>,
}

impl ButtonColorizer {
    /// Erstellt einen Colorizer ohne Schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wendet ein Schema auf die Modellknoten der Hand an.
    pub fn apply_scheme(&mut self, scheme: TintScheme, side: Hand, nodes: &[ModelNode]) {
        self.scheme = Some(scheme);
        self.refresh(side, nodes);
    }

    /// Berechnet die Tints neu (z.B. nachdem das Modell geladen wurde).
    pub fn refresh(&mut self, side: Hand, nodes: &[ModelNode]) {
        self.tints.clear();
        let Some(scheme) = self.scheme.clone() else {
            return;
        };

        let mut targets: IndexMap<ButtonKey, Vec<usize>> = ButtonKey::MATCH_ORDER
            .into_iter()
            .map(|k| (k, Vec::new()))
            .collect();
        for (index, node) in nodes.iter().enumerate() {
            if let Some(key) = classify_node(node) {
                targets.entry(key).or_default().push(index);
            }
        }

        for (&key, &color) in &scheme.entries {
            for &target_key in key.equivalents() {
                for &node in targets.get(&target_key).into_iter().flatten() {
                    self.tint(node, color, target_key);
                }
            }
        }

        self.pair_by_height(&scheme, side, nodes, &targets);
    }

    /// Entfernt alle Tints und das Schema.
    pub fn clear_scheme(&mut self) {
        self.scheme = None;
        self.tints.clear();
    }

    /// Ist ein Schema aktiv?
    pub fn is_active(&self) -> bool {
        self.scheme.is_some()
    }

    /// Aktuelle Tints in Anwendungsreihenfolge.
    pub fn tints(&self) -> impl Iterator<Item = &ButtonTint> {
        self.tints.values()
    }

    /// Tint eines bestimmten Knotens.
    pub fn tint_of(&self, node: usize) -> Option<&ButtonTint> {
        self.tints.get(&node)
    }

    fn tint(&mut self, node: usize, color: Rgb, key: ButtonKey) {
        self.tints.insert(
            node,
            ButtonTint {
                node,
                color,
                emissive_intensity: key.emissive_intensity(),
            },
        );
    }

    /// Fallback: Face-Buttons ohne eindeutige Namen nach Höhe paaren.
    fn pair_by_height(
        &mut self,
        scheme: &TintScheme,
        side: Hand,
        nodes: &[ModelNode],
        targets: &IndexMap<ButtonKey, Vec<usize>>,
    ) {
        let count = |k: ButtonKey| targets.get(&k).map_or(0, Vec::len);

        let mut faces: Vec<usize> = Vec::new();
        for key in [ButtonKey::A, ButtonKey::B, ButtonKey::X, ButtonKey::Y] {
            for &node in targets.get(&key).into_iter().flatten() {
                if !faces.contains(&node) {
                    faces.push(node);
                }
            }
        }
        if faces.len() < 2 {
            return;
        }

        let missing_left = scheme.has_any(&[ButtonKey::X, ButtonKey::Y])
            && (count(ButtonKey::X) == 0 || count(ButtonKey::Y) == 0);
        let missing_right = scheme.has_any(&[ButtonKey::A, ButtonKey::B])
            && (count(ButtonKey::A) == 0 || count(ButtonKey::B) == 0);
        if !missing_left && !missing_right {
            return;
        }

        faces.sort_by(|&a, &b| nodes[b].local_y.total_cmp(&nodes[a].local_y));
        let (top_key, bottom_key) = match side {
            Hand::Left => (ButtonKey::Y, ButtonKey::X),
            Hand::Right => (ButtonKey::B, ButtonKey::A),
        };
        log::debug!(
            "Button-Namen unvollständig ({}), paare Face-Buttons nach Höhe",
            side.label()
        );
        if let Some(color) = scheme.get(top_key) {
            self.tint(faces[0], color, top_key);
        }
        if let Some(color) = scheme.get(bottom_key) {
            self.tint(faces[1], color, bottom_key);
        }
    }
}
