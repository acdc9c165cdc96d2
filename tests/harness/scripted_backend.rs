use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use matchday::domain::{
    Arena, BearerToken, BudgetId, BudgetRecord, Match, MatchId, NewBudget, NewFictiveTeam,
    NewMatch, PlayerId, Team, TeamId,
};
use matchday::error::{Error, Result};
use matchday::port::{GameService, RosterService, TeamService};
use matchday::testkit::domain as build;
use reqwest::StatusCode;
use rust_decimal::Decimal;

/// One observed port call, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchPlayers(u32),
    CreateTeam(String),
    CreateBudget(TeamId),
    FetchArenas,
    CreateMatch,
    GetMatch(MatchId),
    GetBudget(BudgetId),
}

/// Port operation a failure can be injected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    FetchPlayers,
    CreateTeam,
    CreateBudget,
    FetchArenas,
    CreateMatch,
    GetMatch,
    GetBudget,
}

#[derive(Debug, Default)]
struct State {
    calls: Vec<Call>,
    tokens: Vec<String>,
    roster_pages: HashMap<u32, Vec<PlayerId>>,
    arenas: Vec<Arena>,
    pending_reads: usize,
    score: (i32, i32),
    reward: Decimal,
    fail_at: Option<Step>,
    foreign_budget_team: Option<TeamId>,
    team_requests: Vec<NewFictiveTeam>,
    match_requests: Vec<NewMatch>,
    budgets: HashMap<BudgetId, BudgetRecord>,
    matches: HashMap<MatchId, Match>,
    match_reads: usize,
    settled: bool,
}

/// Deterministic in-memory stand-in for the roster, team and game services.
///
/// Matches stay pending for a configurable number of reads and then finish
/// with the scripted score. Finishing a match credits the winner (both
/// sides on a draw) with the scripted reward, the way the backend adjusts
/// budgets after a simulation.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    state: Mutex<State>,
}

impl ScriptedBackend {
    /// Backend with two populated roster pages and one arena.
    pub fn ready() -> Self {
        let backend = Self::default();
        backend.set_roster_page(0, build::player_ids(0, 3));
        backend.set_roster_page(1, build::player_ids(1, 3));
        backend.set_arenas(vec![build::arena(build::arena_id(1), "Home Ice")]);
        backend.set_reward(Decimal::from(100));
        backend
    }

    pub fn set_roster_page(&self, page: u32, players: Vec<PlayerId>) {
        self.lock().roster_pages.insert(page, players);
    }

    pub fn set_arenas(&self, arenas: Vec<Arena>) {
        self.lock().arenas = arenas;
    }

    /// Number of reads that observe the match still pending.
    pub fn set_pending_reads(&self, reads: usize) {
        self.lock().pending_reads = reads;
    }

    pub fn set_score(&self, home: i32, away: i32) {
        self.lock().score = (home, away);
    }

    pub fn set_reward(&self, reward: Decimal) {
        self.lock().reward = reward;
    }

    pub fn fail_at(&self, step: Step) {
        self.lock().fail_at = Some(step);
    }

    /// Make budget reads report a team other than the one it was opened for.
    pub fn misattribute_budgets_to(&self, team: TeamId) {
        self.lock().foreign_budget_team = Some(team);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.lock().calls.iter().filter(|c| pred(c)).count()
    }

    /// Every bearer header value presented, one per call.
    pub fn tokens(&self) -> Vec<String> {
        self.lock().tokens.clone()
    }

    pub fn team_requests(&self) -> Vec<NewFictiveTeam> {
        self.lock().team_requests.clone()
    }

    pub fn match_requests(&self) -> Vec<NewMatch> {
        self.lock().match_requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    fn record(&self, auth: &BearerToken, call: Call, step: Step) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(call);
        state.tokens.push(auth.header_value());
        if state.fail_at == Some(step) {
            return Err(Error::Status {
                service: "scripted",
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: format!("{step:?} failed"),
            });
        }
        Ok(())
    }
}

impl State {
    fn settle(&mut self, home: TeamId, away: TeamId) {
        if self.settled {
            return;
        }
        self.settled = true;

        let (h, a) = self.score;
        let winners = if h == a {
            vec![home, away]
        } else if h > a {
            vec![home]
        } else {
            vec![away]
        };
        let reward = self.reward;
        for budget in self.budgets.values_mut() {
            if winners.contains(&budget.team_id) {
                budget.amount += reward;
            }
        }
    }
}

#[async_trait]
impl RosterService for ScriptedBackend {
    async fn fetch_player_ids(&self, auth: &BearerToken, page: u32) -> Result<Vec<PlayerId>> {
        self.record(auth, Call::FetchPlayers(page), Step::FetchPlayers)?;
        Ok(self
            .lock()
            .roster_pages
            .get(&page)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl TeamService for ScriptedBackend {
    async fn create_fictive_team(&self, auth: &BearerToken, team: &NewFictiveTeam) -> Result<Team> {
        self.record(auth, Call::CreateTeam(team.name.clone()), Step::CreateTeam)?;
        let mut state = self.lock();
        state.team_requests.push(team.clone());
        let guid = build::team_id(state.team_requests.len() as u128);
        Ok(build::team(
            guid,
            &team.name,
            team.owner_id,
            team.player_ids.clone(),
        ))
    }

    async fn create_budget(&self, auth: &BearerToken, budget: &NewBudget) -> Result<BudgetRecord> {
        self.record(auth, Call::CreateBudget(budget.team_id), Step::CreateBudget)?;
        let mut state = self.lock();
        let guid = build::budget_id(state.budgets.len() as u128 + 1);
        let record = build::budget(guid, budget.team_id, budget.amount);
        state.budgets.insert(guid, record.clone());
        Ok(record)
    }

    async fn get_budget(&self, auth: &BearerToken, id: BudgetId) -> Result<BudgetRecord> {
        self.record(auth, Call::GetBudget(id), Step::GetBudget)?;
        let state = self.lock();
        let mut record = state.budgets.get(&id).cloned().ok_or(Error::Status {
            service: "scripted",
            status: StatusCode::NOT_FOUND,
            body: format!("budget {id} not found"),
        })?;
        if let Some(team) = state.foreign_budget_team {
            record.team_id = team;
        }
        Ok(record)
    }
}

#[async_trait]
impl GameService for ScriptedBackend {
    async fn fetch_arenas(&self, auth: &BearerToken) -> Result<Vec<Arena>> {
        self.record(auth, Call::FetchArenas, Step::FetchArenas)?;
        Ok(self.lock().arenas.clone())
    }

    async fn create_match(&self, auth: &BearerToken, request: &NewMatch) -> Result<Match> {
        self.record(auth, Call::CreateMatch, Step::CreateMatch)?;
        let mut state = self.lock();
        state.match_requests.push(request.clone());

        let arena = state
            .arenas
            .iter()
            .find(|a| a.guid == request.arena_uid)
            .cloned()
            .unwrap_or_else(|| build::arena(request.arena_uid, "unknown"));
        let created = build::pending_match(
            build::match_id(state.match_requests.len() as u128),
            &arena,
            request.start_at,
            request.home_team_uid,
            request.away_team_uid,
        );
        state.matches.insert(created.guid, created.clone());
        Ok(created)
    }

    async fn get_match(&self, auth: &BearerToken, id: MatchId) -> Result<Match> {
        self.record(auth, Call::GetMatch(id), Step::GetMatch)?;
        let mut state = self.lock();
        let pending = state.matches.get(&id).cloned().ok_or(Error::Status {
            service: "scripted",
            status: StatusCode::NOT_FOUND,
            body: format!("match {id} not found"),
        })?;

        state.match_reads += 1;
        if state.match_reads <= state.pending_reads {
            return Ok(pending);
        }

        let (home, away) = state.score;
        if let (Some(h), Some(a)) = (pending.home_team_uid, pending.away_team_uid) {
            state.settle(h, a);
        }
        Ok(build::finished_match(&pending, home, away))
    }
}
