use dexlist::api::ListedRecord;
use dexlist::commands::CmdResult;
use dexlist::error::Result;
use dexlist::model::Record;
use serde::Serialize;

pub(super) fn print_removed(records: &[Record]) {
    for record in records {
        println!("(R) {}", record.name);
    }
}

pub(super) fn print_listing(listed: &[ListedRecord]) {
    for entry in listed {
        println!("[{}] {}", entry.position, entry.record);
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    removed: Vec<&'a str>,
    entries: &'a [ListedRecord],
}

pub(super) fn print_json(result: &CmdResult) -> Result<()> {
    let report = JsonReport {
        removed: result.removed.iter().map(|r| r.name.as_str()).collect(),
        entries: &result.listed,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
