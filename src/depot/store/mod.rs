//! # Storage Layer
//!
//! This module defines the storage abstraction for depot. The
//! [`DocumentStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON document on disk
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Granularity
//!
//! The contract is deliberately whole-document: `read` loads the latest
//! state, `write` replaces it. There is no partial write, no lock, and no
//! detection of concurrent modification between read and write; if two
//! processes interleave, last write wins.

use crate::error::Result;
use crate::model::Inventory;

pub mod fs;
pub mod memory;

/// Abstract interface to the persisted inventory document.
pub trait DocumentStore {
    /// Load the latest document state into memory.
    fn read(&self) -> Result<Inventory>;

    /// Persist the whole document.
    fn write(&mut self, doc: &Inventory) -> Result<()>;
}
