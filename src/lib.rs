//! Spatial Marker Library.
//! Freihand-Zeichnen im Raum als Library exportiert für Hosts, Tests und Benches.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    ControllerEvent, FaceButton, FrameInput, Notification, SessionCommand, SessionController,
    SessionIntent, SessionState,
};
pub use core::{
    ControllerHandle, DrawingVolume, Geometry, GeometryId, Hand, HandPair, ModelNode, Rgb,
    TubeMesh,
};
pub use shared::{MarkerOptions, MarkerScene};
