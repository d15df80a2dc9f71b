//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `SellerId` where a
//! `ClientId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(SellerId, "Unique identifier for a seller (sales staff).");
typed_id!(ClientId, "Unique identifier for a confirmed client.");
typed_id!(ProspectId, "Unique identifier for a prospective client.");
typed_id!(VisitReportId, "Unique identifier for a visit report.");
typed_id!(ProductTypeId, "Unique identifier for a product category.");
typed_id!(PaymentMethodId, "Unique identifier for a payment method.");
typed_id!(ContactMethodId, "Unique identifier for a contact method.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_ids_are_distinct_types() {
        let seller = SellerId::new();
        let client = ClientId::from_uuid(seller.into_inner());
        // Same UUID, different types; only the inner value compares equal.
        assert_eq!(seller.into_inner(), client.into_inner());
    }

    #[test]
    fn test_display_and_parse_round_trip() {
        let id = VisitReportId::new();
        let parsed = VisitReportId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductTypeId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.into_inner()));
    }
}
