//! Freihand-Stroke der Painter-Hand: Punkte sammeln, Tube-Mesh neu aufbauen, Undo.
//!
//! Aufgeteilt in:
//! - `state`:     Struct, Konstruktor, Stil und Lese-Zugriffe
//! - `lifecycle`: begin / sample / end / undo_last, Input-Gating
//! - `geometry`:  Tube- und Kappen-Aufbau aus den Stroke-Punkten

pub(crate) mod geometry;
mod lifecycle;
mod state;

pub use lifecycle::{EndOutcome, SampleOutcome};
pub use state::{StrokeConfig, StrokeCurve, StrokeStyle};
