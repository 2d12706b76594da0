//! Strongly-typed record identifiers.
//!
//! Every entity table hands out its own identifiers, so each gets its own newtype:
//! an `ItemId` cannot be passed where an `InventoryId` is expected.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an inventory.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryId(u64);

/// Identifier of an item metadata record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemMetadataId(u64);

/// Identifier of an item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

/// Identifier allocation shared by every record id type.
pub trait RecordId:
    Copy + Ord + core::hash::Hash + core::fmt::Debug + core::fmt::Display + Send + Sync + 'static
{
    /// Identifier handed out by an empty table.
    const FIRST: Self;

    /// The identifier following this one, or `None` once the id space is used up.
    fn next(&self) -> Option<Self>;
}

macro_rules! impl_record_id {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl RecordId for $t {
            const FIRST: Self = Self(0);

            fn next(&self) -> Option<Self> {
                self.0.checked_add(1).map(Self)
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = u64::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_record_id!(InventoryId, "InventoryId");
impl_record_id!(ItemMetadataId, "ItemMetadataId");
impl_record_id!(ItemId, "ItemId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_id_is_zero_and_next_increments() {
        assert_eq!(ItemId::FIRST.value(), 0);
        assert_eq!(ItemId::FIRST.next(), Some(ItemId::new(1)));
        assert_eq!(InventoryId::new(41).next().map(|id| id.value()), Some(42));
    }

    #[test]
    fn next_is_none_at_the_top_of_the_id_space() {
        assert_eq!(ItemMetadataId::new(u64::MAX).next(), None);
        assert_eq!(InventoryId::new(u64::MAX - 1).next(), Some(InventoryId::new(u64::MAX)));
    }

    #[test]
    fn parses_non_negative_integers_only() {
        assert_eq!("7".parse::<ItemMetadataId>().unwrap(), ItemMetadataId::new(7));

        let err = "-1".parse::<ItemMetadataId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(ref msg) if msg.starts_with("ItemMetadataId")));

        assert!("abc".parse::<InventoryId>().is_err());
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&InventoryId::new(3)).unwrap();
        assert_eq!(json, "3");

        let back: InventoryId = serde_json::from_str("3").unwrap();
        assert_eq!(back, InventoryId::new(3));
    }
}
