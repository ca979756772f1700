//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen, Spline-Mathematik und die Render-Szene, die zwischen
//! `app` und dem Host-Renderer geteilt werden.

pub mod options;
mod render_scene;
pub mod spline_geometry;

pub use options::MarkerOptions;
pub use render_scene::{
    ColorPickerView, MarkerScene, SizePickerView, SizeRing, TipIndicator,
};
