use crate::commands::{CmdResult, Placement};
use crate::error::Result;
use crate::list::PositionalList;
use crate::model::Record;
use tracing::debug;

/// Takes one record out of the list and hands it back in the result.
pub fn run<L: PositionalList<Record>>(list: &mut L, at: Placement) -> Result<CmdResult> {
    let removed = match at {
        Placement::Front => list.remove_front()?,
        Placement::Back => list.remove_back()?,
        Placement::At(pos) => {
            let pos = Placement::resolve(pos, list.len())?;
            list.remove(pos)?
        }
    };
    debug!(name = %removed.name, len = list.len(), "removed");
    Ok(CmdResult::default().with_removed(vec![removed]))
}
