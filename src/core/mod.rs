//! Core-Domänentypen: Hände, Controller, Zeichenzonen, Farben, Stroke-Geometrie.

pub mod color;
pub mod geometry_store;
pub mod hand;
/// Controller-Modell-Knoten für Button-Tints
pub mod model;
pub mod tube;
pub mod volume;

pub use color::{parse_palette, ColorParseError, Rgb};
pub use geometry_store::{Geometry, GeometryId, GeometryStore};
pub use hand::{ControllerHandle, Hand, HandPair};
pub use model::{ButtonTint, ModelNode};
pub use tube::{CapMarker, TubeMesh, TubeVertex};
pub use volume::{inside_any, Aabb, DrawingVolume, VolumeShape, VolumeTransform};
