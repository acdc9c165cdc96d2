//! Waits for the backend to attach a result to a match.
//!
//! Simulation time is not bounded by the client, so the poller has no
//! attempt limit, timeout or backoff. It keeps querying at a fixed interval
//! until the match is finalized. The only way out besides a result is the
//! shutdown signal, checked between queries, or a transport error, which is
//! never retried.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::domain::{BearerToken, MatchId, MatchState, Score};
use crate::error::{Error, Result};
use crate::port::outbound::game::GameService;

/// Default wait between match queries.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

pub struct ResultPoller {
    games: Arc<dyn GameService>,
    interval: Duration,
    shutdown: watch::Receiver<bool>,
}

impl ResultPoller {
    pub fn new(
        games: Arc<dyn GameService>,
        interval: Duration,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            games,
            interval,
            shutdown,
        }
    }

    /// Block until the match is finalized and return its score.
    pub async fn await_result(&self, auth: &BearerToken, match_id: MatchId) -> Result<Score> {
        let mut shutdown = self.shutdown.clone();
        let mut attempt: u64 = 0;

        loop {
            attempt += 1;
            let observed = self.games.get_match(auth, match_id).await?;

            match observed.state() {
                MatchState::Finalized(score) => {
                    info!(
                        match_id = %match_id,
                        home = score.home,
                        away = score.away,
                        attempts = attempt,
                        "Match finalized"
                    );
                    return Ok(score);
                }
                MatchState::Pending => {
                    info!(
                        match_id = %match_id,
                        attempt,
                        "Match in progress, waiting for result"
                    );
                    self.wait(&mut shutdown).await?;
                }
            }
        }
    }

    /// Sleep one interval unless shutdown is signalled first.
    async fn wait(&self, shutdown: &mut watch::Receiver<bool>) -> Result<()> {
        if *shutdown.borrow() {
            return Err(Error::Cancelled);
        }

        let sleep = tokio::time::sleep(self.interval);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                () = &mut sleep => return Ok(()),
                changed = shutdown.changed() => match changed {
                    Ok(()) => {
                        if *shutdown.borrow() {
                            debug!("Shutdown observed while waiting for match result");
                            return Err(Error::Cancelled);
                        }
                    }
                    // Sender gone: nobody can cancel us any more.
                    Err(_) => {
                        (&mut sleep).await;
                        return Ok(());
                    }
                },
            }
        }
    }
}
