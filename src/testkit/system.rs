//! Deterministic system capabilities.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::OwnerId;
use crate::port::{Clock, IdGenerator};

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Hands out owner ids `…0001`, `…0002`, ... in call order.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// The id the `n`-th call (1-based) returns.
    #[must_use]
    pub fn nth(n: u64) -> OwnerId {
        OwnerId::new(Uuid::from_u128(u128::from(n)))
    }
}

impl IdGenerator for SequentialIds {
    fn owner_id(&self) -> OwnerId {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        Self::nth(n)
    }
}
