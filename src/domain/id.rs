//! Identifier newtypes for remote resources.
//!
//! Every service hands out UUIDs. Wrapping them per resource keeps a team
//! guid from being passed where a budget guid is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! guid_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Wrap a raw UUID.
            #[must_use]
            pub const fn new(id: Uuid) -> Self {
                Self(id)
            }

            /// Get the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self::new(id)
            }
        }
    };
}

guid_newtype!(
    /// Roster participant identifier from the world-list service.
    PlayerId
);

guid_newtype!(
    /// Fictive team identifier from the team service.
    TeamId
);

guid_newtype!(
    /// Budget system identifier from the team service.
    BudgetId
);

guid_newtype!(
    /// Arena identifier from the game service.
    ArenaId
);

guid_newtype!(
    /// Match identifier from the game service.
    MatchId
);

guid_newtype!(
    /// Placeholder owner required by the fictive team schema.
    OwnerId
);
