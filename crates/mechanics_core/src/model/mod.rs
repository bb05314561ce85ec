//! Domain records for the PMO dashboard and blog engine.
//!
//! # Responsibility
//! - Define one record type per collection, plus its insert (`New*`) and
//!   partial-update (`*Patch`) shapes.
//! - Own record materialization and the derived-timestamp rules.
//!
//! # Invariants
//! - Every record is identified by an opaque, stable `RecordId`.
//! - Relations are plain id fields; nothing here enforces referential integrity.
//! - `updated_at` is re-stamped on every applied patch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

pub mod blog_post;
pub mod comment;
pub mod media;
pub mod program;
pub mod project;
pub mod task;
pub mod user;

/// Opaque record identifier. Generated ids are UUID v4 text.
pub type RecordId = String;

/// UTC wall-clock instant used for all record timestamps.
pub type Timestamp = DateTime<Utc>;

/// Contract shared by every stored record type.
///
/// The store is generic over this trait, so create/update semantics live with
/// the record rather than in per-collection store code.
pub trait Record: Clone + Send + Sync + 'static {
    /// Insert shape accepted by `create`.
    type New;
    /// Partial shape accepted by `update`.
    type Patch;

    /// Collection label used in log events and error messages.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Builds a fully materialized record, applying defaults and derived fields.
    fn materialize(id: RecordId, new: Self::New, now: Timestamp) -> Self;

    /// Merges present patch fields, re-stamps `updated_at` and re-applies
    /// derived fields.
    fn apply_patch(&mut self, patch: Self::Patch, now: Timestamp);
}

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`) in patch payloads.
///
/// Use with `#[serde(default, deserialize_with = "nullable")]`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Applies a nullable patch value onto a stored optional field.
pub(crate) fn merge_nullable<T>(target: &mut Option<T>, value: Option<Option<T>>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Applies a non-nullable patch value onto a stored field.
pub(crate) fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
