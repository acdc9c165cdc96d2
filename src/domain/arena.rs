use serde::{Deserialize, Serialize};

use super::id::ArenaId;

/// Match venue from the game service. Read-only for the scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arena {
    pub guid: ArenaId,
    #[serde(default)]
    pub arena_name: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

impl Arena {
    /// Display name, falling back to the guid.
    #[must_use]
    pub fn label(&self) -> String {
        self.arena_name
            .clone()
            .unwrap_or_else(|| self.guid.to_string())
    }
}
