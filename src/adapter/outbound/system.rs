//! Production clock and id source.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::OwnerId;
use crate::port::outbound::system::{Clock, IdGenerator};

/// Random v4 owner ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn owner_id(&self) -> OwnerId {
        OwnerId::new(Uuid::new_v4())
    }
}

/// System wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
