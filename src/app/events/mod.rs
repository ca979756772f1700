//! SessionIntent- und SessionCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::{SessionCommand, TickPhase};
pub use intent::{ControllerEvent, FaceButton, SessionIntent};
