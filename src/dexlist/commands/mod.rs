use crate::catalog::Catalog;
use crate::error::{DexError, Result};
use crate::list::PositionalList;
use crate::model::Record;
use serde::Serialize;
use std::fmt;

pub mod insert;
pub mod list;
pub mod remove;
pub mod script;
pub mod select;

/// Where an insert or remove applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
    /// Explicit 0-based position, as written in the command stream.
    At(i64),
}

impl Placement {
    /// Resolves an explicit position to an index, rejecting negatives.
    pub fn resolve(pos: i64, len: usize) -> Result<usize> {
        usize::try_from(pos).map_err(|_| DexError::InvalidPosition { pos, len })
    }
}

/// One scripted operation against the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a copy of the catalog record with this 1-based key.
    Insert { at: Placement, key: usize },
    Remove { at: Placement },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Insert {
                at: Placement::Front,
                key,
            } => write!(f, "II {}", key),
            Command::Insert {
                at: Placement::Back,
                key,
            } => write!(f, "I {}", key),
            Command::Insert {
                at: Placement::At(pos),
                key,
            } => write!(f, "I* {} {}", pos, key),
            Command::Remove {
                at: Placement::Front,
            } => write!(f, "RI"),
            Command::Remove {
                at: Placement::Back,
            } => write!(f, "R"),
            Command::Remove {
                at: Placement::At(pos),
            } => write!(f, "R* {}", pos),
        }
    }
}

/// A list entry paired with its 0-based position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedRecord {
    pub position: usize,
    pub record: Record,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records taken out of the list, in removal order.
    pub removed: Vec<Record>,
    pub listed: Vec<ListedRecord>,
    /// Number of records inserted.
    pub inserted: usize,
}

impl CmdResult {
    pub fn with_removed(mut self, records: Vec<Record>) -> Self {
        self.removed = records;
        self
    }

    pub fn with_listed(mut self, listed: Vec<ListedRecord>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_inserted(mut self, inserted: usize) -> Self {
        self.inserted = inserted;
        self
    }

    /// Folds another result into this one, keeping order.
    pub fn merge(&mut self, other: CmdResult) {
        self.removed.extend(other.removed);
        self.inserted += other.inserted;
        if !other.listed.is_empty() {
            self.listed = other.listed;
        }
    }
}

/// Runs one command against `list`.
pub fn run<L: PositionalList<Record>>(
    list: &mut L,
    catalog: &Catalog,
    command: &Command,
) -> Result<CmdResult> {
    match *command {
        Command::Insert { at, key } => insert::run(list, catalog, at, key),
        Command::Remove { at } => remove::run(list, at),
    }
}
