//! An editable module list for one calculation session.
//!
//! Every mutation recomputes the aggregate from scratch and hands it back, so
//! any host (a terminal shell, a test, a GUI) drives the same pure
//! [`compute`](crate::calculator::compute) without keeping its own totals.

use serde::Serialize;
use std::fmt;

use crate::calculator::{AggregateResult, ModuleEntry, compute};

/// Stable handle for a row. Ids are never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ModuleId(pub u32);

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A partial edit to a module. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct ModuleUpdate {
    pub name: Option<String>,
    /// `Some(None)` clears the grade back to "ungraded".
    pub grade: Option<Option<String>>,
    pub credits: Option<f64>,
}

impl ModuleUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn grade(grade: Option<&str>) -> Self {
        Self {
            grade: Some(grade.map(str::to_string)),
            ..Default::default()
        }
    }

    pub fn credits(credits: f64) -> Self {
        Self {
            credits: Some(credits),
            ..Default::default()
        }
    }

    fn apply(self, entry: &mut ModuleEntry) {
        if let Some(name) = self.name {
            entry.name = name;
        }
        if let Some(grade) = self.grade {
            entry.grade = grade;
        }
        if let Some(credits) = self.credits {
            entry.credits = credits;
        }
    }
}

/// Ordered module rows plus the id counter.
///
/// `ids[i]` names `entries[i]`; the two are always the same length.
#[derive(Debug, Default)]
pub struct Session {
    ids: Vec<ModuleId>,
    entries: Vec<ModuleEntry>,
    last_id: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row and returns its id with the recomputed aggregate.
    pub fn add_module(&mut self, entry: ModuleEntry) -> (ModuleId, AggregateResult) {
        self.last_id += 1;
        let id = ModuleId(self.last_id);
        self.ids.push(id);
        self.entries.push(entry);
        (id, self.compute())
    }

    /// Edits the row `id` in place. `None` if no such row exists.
    pub fn update_module(&mut self, id: ModuleId, update: ModuleUpdate) -> Option<AggregateResult> {
        let index = self.index_of(id)?;
        update.apply(&mut self.entries[index]);
        Some(self.compute())
    }

    /// Removes the row `id`. `None` if no such row exists.
    pub fn remove_module(&mut self, id: ModuleId) -> Option<AggregateResult> {
        let index = self.index_of(id)?;
        self.ids.remove(index);
        self.entries.remove(index);
        Some(self.compute())
    }

    fn index_of(&self, id: ModuleId) -> Option<usize> {
        self.ids.iter().position(|row_id| *row_id == id)
    }

    pub fn get(&self, id: ModuleId) -> Option<&ModuleEntry> {
        self.index_of(id).map(|index| &self.entries[index])
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = (ModuleId, &ModuleEntry)> {
        self.ids.iter().copied().zip(self.entries.iter())
    }

    /// The entries in row order.
    pub fn modules(&self) -> &[ModuleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn compute(&self) -> AggregateResult {
        compute(&self.entries)
    }

    /// A report can be exported once there is at least one row and
    /// something has contributed credits.
    pub fn can_export(&self) -> bool {
        !self.is_empty() && self.compute().has_credits()
    }
}
