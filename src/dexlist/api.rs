//! # API Facade
//!
//! [`DexApi`] is the single entry point the CLI talks to. It owns the
//! [`Catalog`] and one list, and forwards each operation to the matching
//! command module. Like the commands, it never prints and never exits; it
//! returns [`CmdResult`]s and lets the caller decide what to show.
//!
//! ## Generic Over PositionalList
//!
//! `DexApi<L: PositionalList<Record>>` is generic over the list storage:
//! - `DexApi<BoundedList<Record>>` for the fixed-capacity array
//! - `DexApi<LinkedList<Record>>` for the linked chain
//!
//! The strategy is fixed when the facade is built.

use crate::catalog::Catalog;
use crate::commands::{self, script::Script, CmdResult, Command};
use crate::error::Result;
use crate::list::PositionalList;
use crate::model::Record;
use tracing::debug;

pub struct DexApi<L: PositionalList<Record>> {
    catalog: Catalog,
    list: L,
}

impl<L: PositionalList<Record>> DexApi<L> {
    pub fn new(catalog: Catalog, list: L) -> Self {
        Self { catalog, list }
    }

    /// Appends the records for `keys` to the back of the list.
    pub fn select(&mut self, keys: &[usize]) -> Result<CmdResult> {
        commands::select::run(&mut self.list, &self.catalog, keys)
    }

    pub fn apply(&mut self, command: &Command) -> Result<CmdResult> {
        debug!(%command, "applying");
        commands::run(&mut self.list, &self.catalog, command)
    }

    /// Runs a whole script: selection first, then each command in order,
    /// then a final listing. Stops at the first failing command.
    pub fn run_script(&mut self, script: &Script) -> Result<CmdResult> {
        let mut result = self.select(&script.selection)?;
        for command in &script.commands {
            result.merge(self.apply(command)?);
        }
        result.merge(self.list_entries()?);
        Ok(result)
    }

    pub fn list_entries(&self) -> Result<CmdResult> {
        commands::list::run(&self.list)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    /// Releases every record still held by the list.
    pub fn clear(&mut self) {
        self.list.clear();
    }
}

pub use crate::commands::{ListedRecord, Placement};
pub use crate::list::Strategy;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::abc;
    use crate::commands::script::DEFAULT_SENTINEL;
    use crate::error::DexError;
    use crate::list::{BoundedList, LinkedList};

    fn listed_names(result: &CmdResult) -> Vec<&str> {
        result
            .listed
            .iter()
            .map(|l| l.record.name.as_str())
            .collect()
    }

    fn end_to_end<L: PositionalList<Record>>(list: L) {
        let mut api = DexApi::new(abc(), list);
        let script = Script::parse("2\n1\n3\nFIM\nI* 1 3\n", DEFAULT_SENTINEL).unwrap();
        let result = api.run_script(&script).unwrap();
        assert_eq!(listed_names(&result), vec!["B", "C", "A", "C"]);

        let removed = api
            .apply(&Command::Remove {
                at: Placement::Front,
            })
            .unwrap();
        assert_eq!(removed.removed[0].name, "B");
        let listing = api.list_entries().unwrap();
        assert_eq!(listed_names(&listing), vec!["C", "A", "C"]);
    }

    #[test]
    fn end_to_end_bounded() {
        end_to_end(BoundedList::with_capacity(10).unwrap());
    }

    #[test]
    fn end_to_end_linked() {
        end_to_end(LinkedList::new());
    }

    #[test]
    fn run_script_collects_removals_in_order() {
        let mut api = DexApi::new(abc(), LinkedList::new());
        let script = Script::parse("1\n2\n3\nFIM\nR\nRI\n", DEFAULT_SENTINEL).unwrap();
        let result = api.run_script(&script).unwrap();
        let removed: Vec<_> = result.removed.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(removed, vec!["C", "A"]);
        assert_eq!(listed_names(&result), vec!["B"]);
        assert_eq!(result.inserted, 3);
    }

    #[test]
    fn run_script_stops_at_first_error() {
        let mut api = DexApi::new(abc(), BoundedList::with_capacity(3).unwrap());
        let script = Script::parse("1\n2\n3\nFIM\nII 1\nR\n", DEFAULT_SENTINEL).unwrap();
        let err = api.run_script(&script).unwrap_err();
        assert!(matches!(err, DexError::CapacityExceeded { capacity: 3 }));
        assert_eq!(api.list().len(), 3);
    }

    #[test]
    fn clear_empties_list_but_keeps_catalog() {
        let mut api = DexApi::new(abc(), LinkedList::new());
        api.select(&[1, 2]).unwrap();
        api.clear();
        assert!(api.list().is_empty());
        assert_eq!(api.catalog().len(), 3);
    }
}
