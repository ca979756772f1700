//! Feature-Handler für SessionCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod locomotion;
pub mod picker;
pub mod rig;
pub mod role;
pub mod stroke;
