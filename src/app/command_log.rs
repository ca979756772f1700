//! Begrenztes Log der ausgeführten Session-Commands mit Tick-Index.
//!
//! Zwei Läufe derselben Eingabefolge müssen dieselben Commands in denselben
//! Ticks ausführen. `first_divergence` findet die erste Abweichung.

use super::SessionCommand;

/// Ein ausgeführter Command samt Tick, in dem er lief.
///
/// Tick 0 sind Commands, die vor dem ersten Frame sofort ausgeführt wurden.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCommand {
    pub tick: u64,
    pub command: SessionCommand,
}

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<LoggedCommand>,
    tick: u64,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            tick: 0,
        }
    }

    /// Startet einen neuen Frame und gibt dessen Index zurück (ab 1).
    pub fn begin_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Index des laufenden bzw. zuletzt gestarteten Frames.
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Fügt einen ausgeführten Command im aktuellen Tick hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: SessionCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(LoggedCommand {
            tick: self.tick,
            command,
        });
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[LoggedCommand] {
        &self.entries
    }

    /// Commands eines Ticks in Ausführungsreihenfolge.
    pub fn commands_in_tick(&self, tick: u64) -> impl Iterator<Item = &SessionCommand> {
        self.entries
            .iter()
            .filter(move |e| e.tick == tick)
            .map(|e| &e.command)
    }

    /// Index des ersten Eintrags, der sich von `other` unterscheidet
    /// (Tick oder Command). `None`, wenn beide Logs gleich sind.
    pub fn first_divergence(&self, other: &CommandLog) -> Option<usize> {
        let mismatch = self
            .entries
            .iter()
            .zip(other.entries.iter())
            .position(|(a, b)| a != b);
        match mismatch {
            Some(index) => Some(index),
            None if self.entries.len() != other.entries.len() => {
                Some(self.entries.len().min(other.entries.len()))
            }
            None => None,
        }
    }
}
