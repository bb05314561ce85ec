//! HTTP surface for the Project Mechanics store.
//!
//! # Responsibility
//! - Translate REST requests into service and store calls.
//! - Map validation, uniqueness and absence outcomes onto status codes and
//!   `{"error": ...}` bodies.
//!
//! # Invariants
//! - Handlers never hold a store lock across an `.await`.
//! - The store handle is injected at router construction; there are no
//!   module-level data singletons.

pub mod api;
pub mod error;
pub mod router;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use server::{serve, ServerConfig};
pub use state::AppState;
