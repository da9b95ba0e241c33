//! Typed identifiers for backend entities.
//!
//! The backend keys products, users, and categories with 64-bit integers.
//! Wrapping them keeps a product id from being passed where a user id is
//! expected, at zero runtime cost.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Raw backend key.
            #[must_use]
            pub fn value(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id! {
    /// Identifier of a product listing.
    ProductId
}

define_id! {
    /// Identifier of a user account.
    UserId
}

define_id! {
    /// Identifier of a merch category.
    CategoryId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_value() {
        assert_eq!(ProductId(42).to_string(), "42");
        assert_eq!(UserId(7).to_string(), "7");
    }

    #[test]
    fn test_serde_transparent() {
        let id: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ProductId(42));
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // Compile-time property; the assertion just keeps the test non-empty.
        fn takes_product(id: ProductId) -> i64 {
            id.value()
        }
        assert_eq!(takes_product(ProductId::from(3)), 3);
    }
}
