//! # Project — Portfolio Project Catalog
//!
//! Holds the projects showcased on the portfolio site: a fixed, ordered table
//! of records embedded in the binary, plus an owned [`Catalog`] that the CLI
//! and HTTP server hand to the rendering layer.
//!
//! ## Architecture
//!
//! ```text
//! Embedded table (table.rs, &'static [Project])      TOML catalog (--catalog)
//!     ↓ Catalog::embedded()                               ↓ parse_toml_file()
//!     └────────────── Catalog (Arc, read-only) ───────────┘
//!                         ↓
//!          list / export (CLI)     GET /api/projects (server)
//! ```
//!
//! ## Module Structure
//!
//! - [`types`] — the `Project` record and its serialized shape
//! - [`table`] — the embedded project table and `projects()`
//! - [`catalog`] — owned catalog, TOML parsing, JSON export

mod catalog;
mod table;
mod types;

pub use catalog::*;
pub use table::*;
pub use types::*;
