//! Core use-case services.
//!
//! # Responsibility
//! - Enforce rules that span a whole collection (secondary-key uniqueness).
//! - Provide read projections the API serves directly (dashboard summary).
//! - Keep the HTTP layer decoupled from store details.

pub mod blog_service;
pub mod dashboard_service;
pub mod user_service;
