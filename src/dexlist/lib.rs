//! # Dexlist Architecture
//!
//! Dexlist loads a creature catalog from CSV and replays a script of
//! positional inserts and removes against a list of catalog copies. The list
//! comes in two storage strategies behind one trait; the rest of the crate is
//! generic over it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, resolves config, prints results        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - DexApi<L>: owns the catalog and one list                 │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - select / insert / remove / list, plus script parsing     │
//! │  - Translates catalog keys and raw positions                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (list/, catalog.rs, model.rs, parse.rs)               │
//! │  - PositionalList trait                                     │
//! │  - BoundedList (array), LinkedList (nodes)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions and keys
//!
//! Catalog keys are 1-based (`key - 1` is the catalog index). List positions
//! are 0-based everywhere. Positions read from a script are signed so that a
//! negative one reaches the command layer and is rejected as
//! `InvalidPosition`, the same error an out-of-range position gets.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns `Result<CmdResult>` and never writes to
//! stdout/stderr or calls `std::process::exit`. Diagnostics go through
//! `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation, plus the script parser
//! - [`list`]: The list trait and both storage strategies
//! - [`catalog`]: Record catalog and test fixtures
//! - [`model`]: `Record`, `PokeType`, record formatting
//! - [`parse`]: CSV line parsing
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod list;
pub mod model;
pub mod parse;
