//! Wire-only response shapes that have no domain counterpart.

use serde::Deserialize;

use crate::domain::wire::null_as_default;
use crate::domain::PlayerId;

/// Spring Data page envelope. Only `content` is consumed.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub content: Vec<T>,
}

/// Roster entry; every other player field is ignored.
#[derive(Debug, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
}
