//! # API Facade
//!
//! The single entry point for Pokedex operations. The facade owns the loaded
//! [`Dex`] and dispatches to the command layer; it holds no business logic,
//! performs no I/O, and returns structured `Result<CmdResult>` values only.
//! Any client — the CLI binary, or some future UI — goes through here rather
//! than calling command modules directly.

use crate::commands::{self, CmdResult};
use crate::dex::Dex;
use crate::error::Result;

pub struct DexApi {
    dex: Dex,
}

impl DexApi {
    pub fn new(dex: Dex) -> Self {
        Self { dex }
    }

    pub fn find_by_name(&self, query: &str) -> Result<CmdResult> {
        commands::lookup::by_name(&self.dex, query)
    }

    pub fn find_by_id(&self, query: &str) -> Result<CmdResult> {
        commands::lookup::by_id(&self.dex, query)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.dex)
    }

    pub fn dex(&self) -> &Dex {
        &self.dex
    }
}
