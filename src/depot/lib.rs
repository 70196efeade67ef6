//! # Depot Architecture
//!
//! Depot is a **UI-agnostic inventory library**. The binary is a thin CLI
//! client; everything it does goes through the same layered core that any
//! other front end would use.
//!
//! ## The Layers
//!
//! ```text
//! CLI layer (main.rs, args.rs)
//!   - Parses arguments, poses prompts, formats output
//!   - The ONLY place that knows about stdout/stderr/exit codes
//!           │
//!           ▼
//! API layer (api.rs)
//!   - Thin facade over commands
//!   - Returns structured Result types
//!           │
//!           ▼
//! Command layer (commands/*.rs)
//!   - Pure business logic over the inventory document
//!   - Operates on Rust types, returns Rust types
//!           │
//!           ▼
//! Storage layer (store/)
//!   - Abstract DocumentStore trait
//!   - FileStore (production), InMemoryStore (testing)
//! ```
//!
//! Every operation is an atomic read-mutate-write unit over the whole
//! document: the store is read at the start, the in-memory copy is
//! mutated, and the document is written back only when the operation
//! succeeds. Failed operations never persist anything.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! Interactive input is a collaborator, not a core concern: the CLI layer
//! collects answers through [`prompt::PromptSource`] and converts them to
//! typed values before any command runs.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Inventory`, `Warehouse`, `StockEntry`)
//! - [`prompt`]: Interactive input and answer validation
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod prompt;
pub mod store;
