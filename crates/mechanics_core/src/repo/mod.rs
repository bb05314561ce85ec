//! Record store: in-memory persistence for all entity collections.
//!
//! # Responsibility
//! - Provide uniform CRUD over every record type via `Collection<R>`.
//! - Keep validation out of storage; callers hand in pre-validated shapes.
//!
//! # Invariants
//! - Not-found is a value (`None` / `false`), never an error.
//! - Each collection has its own lock; writes are atomic per record.

pub mod collection;
pub mod memory_store;
