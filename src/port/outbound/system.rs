//! Process-local capabilities that tests need to pin down.

use chrono::{DateTime, Utc};

use crate::domain::OwnerId;

/// Source of fresh owner ids for new fictive teams.
pub trait IdGenerator: Send + Sync {
    fn owner_id(&self) -> OwnerId;
}

/// Wall clock used for match start times.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
