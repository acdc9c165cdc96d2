//! Game service port: arenas and matches.

use async_trait::async_trait;

use crate::domain::{Arena, BearerToken, Match, MatchId, NewMatch};
use crate::error::Result;

#[async_trait]
pub trait GameService: Send + Sync {
    /// First page of arenas sorted by name.
    async fn fetch_arenas(&self, auth: &BearerToken) -> Result<Vec<Arena>>;

    /// Schedule a match. The match comes back without a result.
    async fn create_match(&self, auth: &BearerToken, request: &NewMatch) -> Result<Match>;

    /// Read a match including its result once one is attached.
    async fn get_match(&self, auth: &BearerToken, id: MatchId) -> Result<Match>;
}
