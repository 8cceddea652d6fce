//! # Identity Newtypes
//!
//! Backend-assigned numeric identifiers. Each is a distinct type, so a
//! [`PatientId`] cannot be passed where a [`VaccineId`] is expected. All of
//! them serialize as bare JSON integers.

use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw backend identifier.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// The raw backend identifier.
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a registered patient.
    PatientId
);

numeric_id!(
    /// Identifier of a vaccine in the catalog.
    VaccineId
);

numeric_id!(
    /// Identifier of a recorded dose application.
    ApplicationId
);

numeric_id!(
    /// Backend-side identifier of an alert. Not used as a display key; see
    /// [`AlertKey`](crate::AlertKey).
    AlertId
);
