//! Typisierte Benachrichtigungen an externe Schichten (Tint, Shader, Indikatoren).
//!
//! Beobachter registrieren sich per `subscribe` und werden synchron beim
//! Emittieren aufgerufen; zusätzlich puffert der Hub alle Nachrichten, bis der
//! Host sie per `drain` abholt.

use crate::core::{Hand, Rgb};

/// Benachrichtigung über eine Zustandsänderung der Session.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Painter-Rolle hat gewechselt (oder wurde erzwungen neu gesetzt)
    PainterChanged { painter: Hand, palette: Hand },
    /// Stil des Painter-Strokes hat sich geändert
    StyleChanged { color: Rgb, thickness: f32 },
    /// Rig hat die Zeichenzone betreten oder verlassen
    ZoneChanged { inside: bool },
    /// Stroke abgeschlossen und auf den Undo-Stack gelegt
    StrokeCommitted { point_count: usize, total: usize },
    /// Stroke per Undo entfernt
    StrokeUndone { remaining: usize },
}

type Observer = Box<dyn FnMut(&Notification)>;

/// Verteiler für `Notification`s.
#[derive(Default)]
pub struct NotificationHub {
    observers: Vec<Observer>,
    pending: Vec<Notification>,
}

impl std::fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationHub")
            .field("observers", &self.observers.len())
            .field("pending", &self.pending)
            .finish()
    }
}

impl NotificationHub {
    /// Maximale Anzahl gepufferter Nachrichten, falls der Host nie abholt.
    const MAX_PENDING: usize = 1024;

    /// Erstellt einen leeren Hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Beobachter.
    pub fn subscribe(&mut self, observer: impl FnMut(&Notification) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Verteilt eine Nachricht an alle Beobachter und puffert sie.
    pub fn emit(&mut self, notification: Notification) {
        log::debug!("Notification: {:?}", notification);
        for observer in &mut self.observers {
            observer(&notification);
        }
        if self.pending.len() >= Self::MAX_PENDING {
            self.pending.drain(..Self::MAX_PENDING / 2);
        }
        self.pending.push(notification);
    }

    /// Entnimmt alle gepufferten Nachrichten.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }

    /// Gepufferte Nachrichten (read-only).
    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }
}
