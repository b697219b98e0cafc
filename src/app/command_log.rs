//! Ringpuffer der zuletzt ausgeführten Commands (Diagnose, Session-Auswertung).

use super::AppCommand;
use std::collections::VecDeque;

/// Speichert die jüngsten Commands in Ausführungsreihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
}

impl CommandLog {
    const CAPACITY: usize = 512;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    /// Hängt einen Command an; bei voller Kapazität fällt der älteste heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Iteriert vom ältesten zum jüngsten Eintrag.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }
}
