use crate::catalog::Catalog;
use crate::commands::{insert, CmdResult, Placement};
use crate::error::Result;
use crate::list::PositionalList;
use crate::model::Record;

/// Appends the records for `keys`, in order, to the back of the list.
pub fn run<L: PositionalList<Record>>(
    list: &mut L,
    catalog: &Catalog,
    keys: &[usize],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for &key in keys {
        result.merge(insert::run(list, catalog, Placement::Back, key)?);
    }
    Ok(result)
}
