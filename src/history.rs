//! Bounded, most-recent-first list of generated passwords.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use log::debug;
use uuid::Uuid;

use crate::pass::{GeneratedPassword, PasswordSink, StrengthScore};

pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub password: GeneratedPassword,
    pub strength: StrengthScore,
    pub created: DateTime<Local>,
}

/// In-memory history owned by whoever drives generation. Never persisted.
#[derive(Debug)]
pub struct History {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl History {
    /// A capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Insert at the front, evicting the oldest entries beyond capacity.
    pub fn append(&mut self, password: GeneratedPassword, strength: StrengthScore) -> Uuid {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            password,
            strength,
            created: Local::now(),
        };
        let id = entry.id;
        self.entries.push_front(entry);
        self.evict();
        id
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(idx) => {
                self.entries.remove(idx);
                debug!("removed history entry {id}");
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entry by display position, newest first.
    pub fn nth(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change capacity, dropping the oldest entries if it shrinks.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.evict();
    }

    fn evict(&mut self) {
        if self.entries.len() > self.capacity {
            debug!(
                "history full, evicting {} entr(ies)",
                self.entries.len() - self.capacity
            );
            self.entries.truncate(self.capacity);
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl PasswordSink for History {
    fn accept(
        &mut self,
        password: &GeneratedPassword,
        strength: &StrengthScore,
    ) -> crate::Result<()> {
        self.append(password.clone(), *strength);
        Ok(())
    }
}
