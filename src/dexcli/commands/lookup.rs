use crate::commands::{CmdMessage, CmdResult};
use crate::dex::Dex;
use crate::error::{DexError, Result};

/// Case-insensitive name lookup. A miss is a normal negative result: an empty
/// `CmdResult` carrying a warning message, so the caller can re-prompt.
pub fn by_name(dex: &Dex, query: &str) -> Result<CmdResult> {
    match dex.find_by_name(query) {
        Some(pokemon) => Ok(CmdResult::default().with_records(vec![pokemon.clone()])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!(
                "No Pokemon named {:?} in the Pokedex.",
                query
            )));
            Ok(result)
        }
    }
}

/// Numeric lookup. A query that does not parse as a number is reported as
/// [`DexError::InvalidId`], distinct from an ID that parses but matches no
/// record.
pub fn by_id(dex: &Dex, query: &str) -> Result<CmdResult> {
    let id: u32 = query
        .trim()
        .parse()
        .map_err(|_| DexError::InvalidId(query.to_string()))?;

    match dex.find_by_id(id) {
        Some(pokemon) => Ok(CmdResult::default().with_records(vec![pokemon.clone()])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!(
                "No Pokemon with ID {} in the Pokedex.",
                id
            )));
            Ok(result)
        }
    }
}
