use crate::catalog::Catalog;
use crate::commands::{CmdResult, Placement};
use crate::error::Result;
use crate::list::PositionalList;
use crate::model::Record;
use tracing::debug;

/// Copies the catalog record for `key` into the list.
pub fn run<L: PositionalList<Record>>(
    list: &mut L,
    catalog: &Catalog,
    at: Placement,
    key: usize,
) -> Result<CmdResult> {
    let record = catalog.lookup(key)?;
    match at {
        Placement::Front => list.insert_front(record)?,
        Placement::Back => list.insert_back(record)?,
        Placement::At(pos) => {
            let pos = Placement::resolve(pos, list.len())?;
            list.insert(record, pos)?
        }
    }
    debug!(key, name = %record.name, len = list.len(), "inserted");
    Ok(CmdResult::default().with_inserted(1))
}
