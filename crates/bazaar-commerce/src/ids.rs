//! Newtype IDs for type-safe identifiers.
//!
//! The upstream store hands out serial integer ids, so every ID wraps an
//! `i64`. Using newtypes prevents accidentally mixing up different ID
//! kinds, e.g. passing a `ProductId` where a `VariantId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an ID from a raw value.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Generate a fresh, session-unique ID.
            ///
            /// Lines removed from the middle of a cart must not shift the
            /// ids of the remaining lines, so ids are assigned once at
            /// creation and never derived from positions.
            pub fn generate() -> Self {
                Self(next_id())
            }

            /// Get the raw value.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

// Define all ID types
define_id!(ProductId);
define_id!(VariantId);
define_id!(LineItemId);
define_id!(UserId);
define_id!(AffiliateId);

/// Hand out monotonically increasing ids, unique within the process.
fn next_id() -> i64 {
    use std::sync::atomic::{AtomicI64, Ordering};

    static COUNTER: AtomicI64 = AtomicI64::new(1);
    COUNTER.fetch_add(1, Ordering::SeqCst)
}
