//! World-list roster port.

use async_trait::async_trait;

use crate::domain::{BearerToken, PlayerId};
use crate::error::Result;

/// Read access to the roster of available players.
#[async_trait]
pub trait RosterService: Send + Sync {
    /// Fetch the ids of one page of players.
    ///
    /// Pages are sorted by a stable key so the same page against an
    /// unchanged roster yields the same ordered ids. An empty page is
    /// returned as an empty vector, not an error.
    async fn fetch_player_ids(&self, auth: &BearerToken, page: u32) -> Result<Vec<PlayerId>>;
}
