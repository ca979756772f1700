//! Werkzeuge der beiden Hände: Zeichnen, Picker, Tints und Lokomotion.

pub mod button_colorizer;
pub mod color_picker;
pub mod locomotion;
pub mod size_picker;
/// Freihand-Stroke mit Tube-Mesh, Kappen und Undo
pub mod stroke_curve;

pub use button_colorizer::{ButtonColorizer, TintScheme};
pub use color_picker::{ColorPicker, ColorStep};
pub use locomotion::LocomotionGate;
pub use size_picker::SizePicker;
pub use stroke_curve::{EndOutcome, SampleOutcome, StrokeCurve, StrokeStyle};
