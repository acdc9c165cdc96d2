//! World-list service client.

use async_trait::async_trait;
use tracing::debug;

use super::client::ApiClient;
use super::dto::{Page, PlayerSummary};
use crate::domain::{BearerToken, PlayerId};
use crate::error::Result;
use crate::port::outbound::roster::RosterService;

/// Players are sorted by last name so pages are reproducible.
const PLAYER_SORT: &str = "lastName,ASC";

/// Default number of players per roster page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

pub struct RosterClient {
    api: ApiClient,
    page_size: u32,
}

impl RosterClient {
    #[must_use]
    pub fn new(api: ApiClient, page_size: u32) -> Self {
        Self { api, page_size }
    }
}

#[async_trait]
impl RosterService for RosterClient {
    async fn fetch_player_ids(&self, auth: &BearerToken, page: u32) -> Result<Vec<PlayerId>> {
        let query = [
            ("page", page.to_string()),
            ("size", self.page_size.to_string()),
            ("sort", PLAYER_SORT.to_string()),
        ];

        let response: Page<PlayerSummary> = self.api.get_json(auth, "/players/", &query).await?;
        let ids: Vec<PlayerId> = response.content.into_iter().map(|p| p.id).collect();

        debug!(page, count = ids.len(), "Fetched roster page");
        Ok(ids)
    }
}
