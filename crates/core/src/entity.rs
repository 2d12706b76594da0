//! Entity trait: a record that a store identifies and validates.

use crate::error::DomainResult;
use crate::id::RecordId;

/// A storable record.
///
/// The identifier is optional on the record itself: callers hand in records without one
/// and the store populates it on insert.
pub trait Entity: Clone + core::fmt::Debug {
    /// Strongly-typed entity identifier.
    type Id: RecordId;

    /// Human-readable entity kind (used in logs and error messages).
    const KIND: &'static str;

    /// Returns the identifier, if one has been assigned.
    fn id(&self) -> Option<Self::Id>;

    /// Sets the identifier.
    fn assign_id(&mut self, id: Self::Id);

    /// Checks the invariants that only depend on the record itself.
    ///
    /// Cross-record checks (references to other tables) are the store's job.
    fn validate(&self) -> DomainResult<()>;
}
