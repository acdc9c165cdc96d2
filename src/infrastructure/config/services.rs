//! Backend service endpoints.

use serde::Deserialize;

use crate::adapter::outbound::http::DEFAULT_PAGE_SIZE;

/// Base URLs of the three backend services plus roster paging.
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesConfig {
    /// World-list service, e.g. `http://localhost:8080/api/v1`.
    #[serde(default = "default_roster_url")]
    pub roster_url: String,
    /// Team service, e.g. `http://localhost:8081/api`.
    #[serde(default = "default_team_url")]
    pub team_url: String,
    /// Game service, e.g. `http://localhost:8082/api/v1`.
    #[serde(default = "default_game_url")]
    pub game_url: String,
    /// Players per roster page (one page per team).
    #[serde(default = "default_roster_page_size")]
    pub roster_page_size: u32,
}

fn default_roster_url() -> String {
    "http://host.docker.internal:8080/api/v1".to_string()
}

fn default_team_url() -> String {
    "http://host.docker.internal:8081/api".to_string()
}

fn default_game_url() -> String {
    "http://host.docker.internal:8082/api/v1".to_string()
}

const fn default_roster_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            roster_url: default_roster_url(),
            team_url: default_team_url(),
            game_url: default_game_url(),
            roster_page_size: default_roster_page_size(),
        }
    }
}
