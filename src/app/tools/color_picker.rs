//! Color-Picker: Stick-Navigation über ein unregelmäßiges Farbraster.
//!
//! Die Zeilen haben unterschiedliche Breiten (Standard 2/4/6/6/4/2). Horizontal
//! wird innerhalb der Zeile umgebrochen, vertikal in die Nachbarzeile (oben und
//! unten ebenfalls umbrechend) mit proportionaler Spalten-Projektion.

use glam::Vec2;

use crate::core::{Hand, Rgb};

/// Zellabstand der Darstellung.
const CELL_GAP: f32 = 0.03;

/// Ergebnis einer Stick-Auswertung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorStep {
    /// Auswahl hat sich bewegt
    Moved,
    /// Latch noch gesperrt oder Stick neutral
    Ignored,
}

/// Auswahlzustand des Color-Pickers.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    row_sizes: Vec<usize>,
    row_starts: Vec<usize>,
    colors: Vec<Rgb>,
    selected: usize,
    /// Latch: erst nach Rückkehr in die Neutralzone wieder schaltbar
    can_step: bool,
    press_threshold: f32,
    release_threshold: f32,
    invert_y: bool,
    attached: Option<Hand>,
}

impl ColorPicker {
    /// Erstellt den Picker. Leere Zeilen werden verworfen, Farben auf die
    /// Rasterkapazität gekürzt (Fallback: Weiß).
    pub fn new(
        row_sizes: &[usize],
        colors: Vec<Rgb>,
        press_threshold: f32,
        release_threshold: f32,
        invert_y: bool,
    ) -> Self {
        let mut row_sizes: Vec<usize> = row_sizes.iter().copied().filter(|&s| s > 0).collect();
        if row_sizes.is_empty() {
            row_sizes.push(1);
        }
        let row_starts = row_sizes
            .iter()
            .scan(0, |acc, &size| {
                let start = *acc;
                *acc += size;
                Some(start)
            })
            .collect();
        let capacity: usize = row_sizes.iter().sum();

        let mut colors = colors;
        colors.truncate(capacity);
        if colors.is_empty() {
            colors.push(Rgb::WHITE);
        }

        Self {
            row_sizes,
            row_starts,
            colors,
            selected: 0,
            can_step: true,
            press_threshold,
            release_threshold,
            invert_y,
            attached: None,
        }
    }

    /// Hängt den Picker an eine Hand. Die Auswahl bleibt erhalten.
    pub fn attach(&mut self, hand: Hand) {
        self.attached = Some(hand);
        self.can_step = true;
    }

    /// Entfernt den Picker von seiner Hand.
    pub fn detach(&mut self) {
        self.attached = None;
    }

    /// Hand, an der der Picker hängt.
    pub fn attached(&self) -> Option<Hand> {
        self.attached
    }

    /// Index der gewählten Zelle (zeilenweise, oben links = 0).
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// (Zeile, Spalte) der gewählten Zelle.
    pub fn selected_cell(&self) -> (usize, usize) {
        let row = self.row_of(self.selected);
        (row, self.selected - self.row_starts[row])
    }

    /// Farbe der gewählten Zelle. Zellen ohne Farbe liefern Weiß.
    pub fn selected_color(&self) -> Rgb {
        self.colors.get(self.selected).copied().unwrap_or(Rgb::WHITE)
    }

    /// Setzt die Auswahl direkt auf (Zeile, Spalte), Spalte wird geklemmt.
    pub fn select(&mut self, row: usize, col: usize) {
        let row = row.min(self.row_sizes.len() - 1);
        let col = col.min(self.row_sizes[row] - 1);
        self.selected = self.row_starts[row] + col;
    }

    /// Wertet einen Stick-Vektor aus (Hysterese: Press- und Release-Schwelle).
    pub fn on_stick(&mut self, x: f32, y: f32) -> ColorStep {
        let y = if self.invert_y { -y } else { y };

        if !self.can_step {
            if x.abs() < self.release_threshold && y.abs() < self.release_threshold {
                self.can_step = true;
            }
            return ColorStep::Ignored;
        }

        if y > self.press_threshold {
            self.move_vertical(-1);
        } else if y < -self.press_threshold {
            self.move_vertical(1);
        } else if x > self.press_threshold {
            self.move_horizontal(1);
        } else if x < -self.press_threshold {
            self.move_horizontal(-1);
        } else {
            return ColorStep::Ignored;
        }

        self.can_step = false;
        ColorStep::Moved
    }

    /// Zellposition im Picker-Raum (oberste Zeile oben, linke Spalte links).
    pub fn cell_position(&self, index: usize) -> Vec2 {
        let row = self.row_of(index);
        let count = self.row_sizes[row];
        let col = index - self.row_starts[row];
        let rows = self.row_sizes.len();
        Vec2::new(
            (col as f32 - (count as f32 - 1.0) / 2.0) * CELL_GAP,
            ((rows as f32 - 1.0) / 2.0 - row as f32) * CELL_GAP,
        )
    }

    /// Anzahl Zellen im Raster.
    pub fn capacity(&self) -> usize {
        self.row_sizes.iter().sum()
    }

    /// Geparste Palette.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    fn row_of(&self, index: usize) -> usize {
        self.row_starts
            .iter()
            .zip(&self.row_sizes)
            .position(|(&start, &size)| index < start + size)
            .unwrap_or(0)
    }

    fn move_horizontal(&mut self, dir: isize) {
        let (row, col) = self.selected_cell();
        let size = self.row_sizes[row] as isize;
        let new_col = (col as isize + dir).rem_euclid(size) as usize;
        self.selected = self.row_starts[row] + new_col;
    }

    fn move_vertical(&mut self, dir: isize) {
        let (row, col) = self.selected_cell();
        let size = self.row_sizes[row];
        let frac = if size > 1 {
            col as f32 / (size - 1) as f32
        } else {
            0.0
        };
        let rows = self.row_sizes.len() as isize;
        let new_row = (row as isize + dir).rem_euclid(rows) as usize;
        let new_size = self.row_sizes[new_row];
        let new_col = (frac * (new_size - 1) as f32).round() as usize;
        self.selected = self.row_starts[new_row] + new_col.min(new_size - 1);
    }
}
