use crate::commands::{CmdMessage, CmdResult};
use crate::dex::Dex;
use crate::error::Result;

pub fn run(dex: &Dex) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_records(dex.records().to_vec());
    if result.records.is_empty() {
        result.add_message(CmdMessage::warning("The Pokedex is empty."));
    }
    Ok(result)
}
