//! # The Record Store
//!
//! A [`Dex`] holds every record imported from one dataset, in source order.
//! It is built exactly once by the loader and exposes no mutating API, so
//! queries can be served repeatedly (and from multiple threads, if a caller
//! ever wants to) without any synchronization.
//!
//! Both lookups are plain linear scans. The dataset tops out at a few hundred
//! records, so an index structure would buy nothing observable; what matters
//! is the tie-break contract: scans run in insertion order, and the first
//! match wins.

use crate::model::Pokemon;

/// The loaded Pokedex: an ordered, read-only collection of [`Pokemon`].
#[derive(Debug, Default)]
pub struct Dex {
    records: Vec<Pokemon>,
}

impl Dex {
    pub(crate) fn from_records(records: Vec<Pokemon>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Pokemon] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pokemon> {
        self.records.iter()
    }

    /// First record whose name equals `query` under case-insensitive
    /// comparison.
    ///
    /// If the dataset carries duplicate names, only the earliest entry is
    /// reachable here. First occurrence wins.
    pub fn find_by_name(&self, query: &str) -> Option<&Pokemon> {
        let query_lower = query.to_lowercase();
        self.records
            .iter()
            .find(|p| p.name.to_lowercase() == query_lower)
    }

    /// First record with the given Pokedex ID.
    pub fn find_by_id(&self, id: u32) -> Option<&Pokemon> {
        self.records.iter().find(|p| p.id == id)
    }
}
