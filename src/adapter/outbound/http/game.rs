//! Game service client: arenas and matches.

use async_trait::async_trait;

use super::client::ApiClient;
use super::dto::Page;
use crate::domain::{Arena, BearerToken, Match, MatchId, NewMatch};
use crate::error::Result;
use crate::port::outbound::game::GameService;

const ARENA_SORT: &str = "arenaName,ASC";

pub struct GameClient {
    api: ApiClient,
}

impl GameClient {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl GameService for GameClient {
    async fn fetch_arenas(&self, auth: &BearerToken) -> Result<Vec<Arena>> {
        let query = [
            ("page", "0".to_string()),
            ("size", "1".to_string()),
            ("sort", ARENA_SORT.to_string()),
        ];
        let page: Page<Arena> = self.api.get_json(auth, "/arena/", &query).await?;
        Ok(page.content)
    }

    async fn create_match(&self, auth: &BearerToken, request: &NewMatch) -> Result<Match> {
        self.api.post_json(auth, "/matches/", request).await
    }

    async fn get_match(&self, auth: &BearerToken, id: MatchId) -> Result<Match> {
        let path = format!("/matches/{id}");
        self.api
            .get_json(auth, &path, &[("results", "true".to_string())])
            .await
    }
}
