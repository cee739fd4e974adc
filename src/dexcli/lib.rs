//! # Dexcli Architecture
//!
//! Dexcli is a **UI-agnostic Pokedex lookup library** with a thin CLI client
//! on top. The binary owns every terminal concern; everything from the API
//! facade inward takes plain Rust arguments and returns plain Rust types.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                             │
//! │  - Parses arguments, runs the prompt loop, formats output  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes│
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Thin facade over commands, owns the loaded Dex          │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - Lookup and list logic, returns CmdResult                │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Data Layer (loader.rs, dex.rs, model.rs)                  │
//! │  - CSV import with validation; immutable record store      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Load Once, Query Forever
//!
//! The loader runs exactly once at startup and is the only code that ever
//! constructs or fills a [`dex::Dex`]. From then on the store is read-only:
//! queries are side-effect-free linear scans, so the query path needs no
//! locking, no state machine, and no global anything — the query string is
//! passed in, a result comes back.
//!
//! ## Error Policy
//!
//! - A missing dataset is fatal: there is no Pokedex to serve, so the binary
//!   reports it and exits non-zero before any prompting.
//! - A malformed data row is recoverable: skipped with its line number (or,
//!   in strict mode, aborts the load) — it never crashes and never leaves a
//!   half-parsed record in the store.
//! - An unparseable ID query and a lookup miss are values returned to the
//!   caller, never errors that escape the query layer.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Lookup and list logic
//! - [`loader`]: CSV import and row validation
//! - [`dex`]: The immutable record store and its scans
//! - [`model`]: The `Pokemon` record type and its info block
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dex;
pub mod error;
pub mod loader;
pub mod model;
