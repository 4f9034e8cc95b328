//! Ringpuffer der zuletzt ausgeführten Commands.
//!
//! Gehalten wird nur ein jüngstes Fenster: es reicht für die
//! Fehlerdiagnose in der Hauptschleife und für die Ablauf-Tests,
//! eine vollständige Historie braucht niemand.

use std::collections::VecDeque;

use super::AppCommand;

pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    const DEFAULT_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Log mit eigener Fenstergröße (mindestens 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Hängt einen ausgeführten Command an; ist das Fenster voll,
    /// fällt der älteste Eintrag heraus.
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle gehaltenen Einträge, ältester zuerst.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }

    /// Die bis zu `n` jüngsten Commands, ältester zuerst.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter().skip(self.len().saturating_sub(n))
    }
}
