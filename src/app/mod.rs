//! Application-Layer: Controller, State, Events, Werkzeuge und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod hand_role;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod notifications;
pub mod render_scene;
/// Session-State und Frame-Eingaben
pub mod state;
pub mod tool_router;
pub mod tools;

pub use command_log::{CommandLog, LoggedCommand};
pub use controller::SessionController;
pub use events::{ControllerEvent, FaceButton, SessionCommand, SessionIntent, TickPhase};
pub use hand_role::HandRole;
pub use notifications::{Notification, NotificationHub};
pub use render_scene::build as build_scene;
pub use state::{FrameInput, RigState, SessionState, ZoneState};
pub use tool_router::ZoneTransition;
