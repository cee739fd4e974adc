//! # Dataset Loader
//!
//! Reads a Pokemon CSV into a [`Dex`]. The source format is
//! `id,name,classification,type1,type2`: one header line (always discarded,
//! whatever it contains) followed by data rows. The split is a naive
//! split-on-comma; the format has no quoting, so embedded commas are not
//! supported.
//!
//! Malformed rows never crash the load and never leave a half-parsed record
//! in the store. By default they are skipped and reported back with their
//! line number; in strict mode the first one aborts the whole load.

use crate::dex::Dex;
use crate::error::{DexError, Result};
use crate::model::Pokemon;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Default record cap, sized for the Gen I-VII dataset this tool ships
/// against.
pub const DEFAULT_CAPACITY: usize = 801;

const FIELDS_PER_ROW: usize = 5;

/// A data row the loader refused, with its 1-based line number in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: String,
}

/// A completed load: the populated store plus any rows skipped along the way.
#[derive(Debug)]
pub struct LoadOutcome {
    pub dex: Dex,
    pub skipped: Vec<SkippedRow>,
}

pub struct Loader {
    path: PathBuf,
    capacity: usize,
    strict: bool,
}

impl Loader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            capacity: DEFAULT_CAPACITY,
            strict: false,
        }
    }

    /// Cap the number of records imported from one source. Lines beyond the
    /// cap are ignored, not an error.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Abort the whole load on the first malformed row instead of skipping it.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Open the configured path and load it. A missing file is
    /// [`DexError::SourceNotFound`]; the handle is released on every exit
    /// path, error or not.
    pub fn load(&self) -> Result<LoadOutcome> {
        let file = File::open(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DexError::SourceNotFound(self.path.clone())
            } else {
                DexError::Io(e)
            }
        })?;
        self.load_from_reader(BufReader::new(file))
    }

    /// Parse records out of an already-open source. [`Loader::load`] wraps
    /// this; tests drive it with in-memory readers.
    pub fn load_from_reader<R: BufRead>(&self, reader: R) -> Result<LoadOutcome> {
        let mut records = Vec::new();
        let mut skipped = Vec::new();

        let mut lines = reader.lines().enumerate();

        // Header row.
        if let Some((_, line)) = lines.next() {
            line?;
        }

        for (index, line) in lines {
            if records.len() >= self.capacity {
                break;
            }
            let line = line?;
            let line_number = index + 1;

            match parse_row(&line) {
                Ok(pokemon) => records.push(pokemon),
                Err(reason) => {
                    if self.strict {
                        return Err(DexError::MalformedRecord {
                            line: line_number,
                            reason,
                        });
                    }
                    skipped.push(SkippedRow {
                        line: line_number,
                        reason,
                    });
                }
            }
        }

        Ok(LoadOutcome {
            dex: Dex::from_records(records),
            skipped,
        })
    }
}

/// Split one data row into a record. Pieces past the fifth are ignored, same
/// as the index-bounded split the dataset was written for.
fn parse_row(line: &str) -> std::result::Result<Pokemon, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < FIELDS_PER_ROW {
        return Err(format!(
            "expected {} fields, found {}",
            FIELDS_PER_ROW,
            fields.len()
        ));
    }

    let id: u32 = fields[0]
        .parse()
        .map_err(|_| format!("ID {:?} is not a number", fields[0]))?;
    if id == 0 {
        return Err("ID must be a positive number".to_string());
    }

    if fields[1].is_empty() {
        return Err("name is empty".to_string());
    }

    Ok(Pokemon {
        id,
        name: fields[1].to_string(),
        classification: fields[2].to_string(),
        primary_type: fields[3].to_string(),
        secondary_type: fields[4].to_string(),
    })
}
