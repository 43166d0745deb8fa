use crate::commands::{CmdResult, ListedRecord};
use crate::error::Result;
use crate::list::PositionalList;
use crate::model::Record;

/// Snapshots the list contents with their 0-based positions.
pub fn run<L: PositionalList<Record>>(list: &L) -> Result<CmdResult> {
    let listed = list
        .iter()
        .enumerate()
        .map(|(position, record)| ListedRecord {
            position,
            record: record.clone(),
        })
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}
