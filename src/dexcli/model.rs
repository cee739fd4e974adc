use serde::Serialize;

/// One Pokedex entry, as imported from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub classification: String,
    pub primary_type: String,
    // The dataset writes the literal label "none" for single-typed Pokemon;
    // it is kept verbatim.
    pub secondary_type: String,
}

impl Pokemon {
    /// Both type labels joined by a slash, e.g. `grass/poison` or `fire/none`.
    pub fn typing(&self) -> String {
        format!("{}/{}", self.primary_type, self.secondary_type)
    }

    /// The four-line info block shown after a successful lookup.
    pub fn info_block(&self) -> String {
        format!(
            "Pokedex ID: {}\nName: {}\nPokemon Classification: {}\nPokemon Typing: {}",
            self.id,
            self.name,
            self.classification,
            self.typing()
        )
    }
}
