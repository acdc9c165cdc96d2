//! Builders for domain primitives used across tests.
//!
//! Ids are derived from small integers so assertions can name them
//! directly instead of threading generated values around.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{
    Arena, ArenaId, BudgetId, BudgetRecord, CharacteristicType, Match, MatchId, MatchResult,
    OwnerId, PlayerId, Team, TeamId,
};

fn uuid(namespace: u128, n: u128) -> Uuid {
    Uuid::from_u128((namespace << 64) | n)
}

/// Generate `n` player ids distinct per `page`.
pub fn player_ids(page: u32, n: usize) -> Vec<PlayerId> {
    (0..n)
        .map(|i| PlayerId::new(uuid(0x10 + u128::from(page), i as u128)))
        .collect()
}

pub fn team_id(n: u128) -> TeamId {
    TeamId::new(uuid(0x20, n))
}

pub fn budget_id(n: u128) -> BudgetId {
    BudgetId::new(uuid(0x30, n))
}

pub fn arena_id(n: u128) -> ArenaId {
    ArenaId::new(uuid(0x40, n))
}

pub fn match_id(n: u128) -> MatchId {
    MatchId::new(uuid(0x50, n))
}

/// Team the service would return for a creation request.
pub fn team(guid: TeamId, name: &str, owner: OwnerId, players: Vec<PlayerId>) -> Team {
    Team {
        guid,
        name: name.to_string(),
        owner_id: Some(owner),
        player_ids: players,
        characteristic_type: Some(CharacteristicType::Strength),
        budget_system_id: None,
    }
}

pub fn budget(guid: BudgetId, team_id: TeamId, amount: Decimal) -> BudgetRecord {
    BudgetRecord {
        guid,
        amount,
        team_id,
    }
}

pub fn arena(guid: ArenaId, name: &str) -> Arena {
    Arena {
        guid,
        arena_name: Some(name.to_string()),
        city_name: None,
        country_code: None,
    }
}

/// Match without a result.
pub fn pending_match(
    guid: MatchId,
    arena: &Arena,
    start_at: DateTime<FixedOffset>,
    home: TeamId,
    away: TeamId,
) -> Match {
    Match {
        guid,
        arena: Some(arena.clone()),
        start_at: Some(start_at),
        end_at: None,
        home_team_uid: Some(home),
        away_team_uid: Some(away),
        match_type: Some("FRIENDLY".to_string()),
        result: None,
    }
}

/// Copy of `pending` with the given final score attached.
pub fn finished_match(pending: &Match, home: i32, away: i32) -> Match {
    let winner_team = if home > away {
        pending.home_team_uid
    } else if away > home {
        pending.away_team_uid
    } else {
        None
    };

    Match {
        result: Some(MatchResult {
            winner_team,
            score_home_team: home,
            score_away_team: away,
        }),
        ..pending.clone()
    }
}
