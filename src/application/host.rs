//! Virtual-user host.
//!
//! Runs a number of independent scenario instances concurrently. Each user
//! repeats its scenario until the scenario says stop or shutdown is
//! signalled. Users share nothing but the HTTP connection pool inside the
//! service clients.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::domain::ScenarioReport;
use crate::error::{Error, Result};
use crate::port::inbound::scenario::{Iteration, ScenarioTask};

/// Final state of one virtual user.
#[derive(Debug)]
pub struct UserRun {
    pub user: usize,
    pub iterations: usize,
    /// Result of the last iteration.
    pub result: Result<ScenarioReport>,
}

/// Spawn `users` virtual users and wait for all of them to finish.
///
/// `factory` builds the scenario for a user index. Results come back
/// ordered by user index.
pub async fn run_users<F>(users: usize, factory: F, shutdown: watch::Receiver<bool>) -> Vec<UserRun>
where
    F: Fn(usize) -> Arc<dyn ScenarioTask>,
{
    let mut set = JoinSet::new();
    let mut owners = HashMap::with_capacity(users);
    for user in 0..users {
        let task = factory(user);
        let shutdown = shutdown.clone();
        let handle = set.spawn(run_user(user, task, shutdown));
        owners.insert(handle.id(), user);
    }
    info!(users, "Virtual users started");

    let mut runs = Vec::with_capacity(users);
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(run) => runs.push(run),
            Err(e) => {
                let user = owners.get(&e.id()).copied().unwrap_or(usize::MAX);
                warn!(user, error = %e, "Virtual user task aborted");
                runs.push(UserRun {
                    user,
                    iterations: 0,
                    result: Err(Error::UserTask(e)),
                });
            }
        }
    }

    runs.sort_by_key(|run| run.user);
    runs
}

async fn run_user(
    user: usize,
    task: Arc<dyn ScenarioTask>,
    mut shutdown: watch::Receiver<bool>,
) -> UserRun {
    let mut iterations = 0;

    loop {
        if *shutdown.borrow() {
            return UserRun {
                user,
                iterations,
                result: Err(Error::Cancelled),
            };
        }

        iterations += 1;
        debug!(user, iteration = iterations, scenario = task.name(), "Starting iteration");

        let outcome = tokio::select! {
            outcome = task.iterate() => outcome,
            () = stopped(&mut shutdown) => {
                info!(user, "Shutdown signal received, abandoning iteration");
                return UserRun { user, iterations, result: Err(Error::Cancelled) };
            }
        };

        if let Err(e) = &outcome.result {
            warn!(user, error = %e, "Iteration failed");
        }

        if outcome.next == Iteration::Stop {
            info!(user, iterations, scenario = task.name(), "Scenario requested stop");
            return UserRun {
                user,
                iterations,
                result: outcome.result,
            };
        }
    }
}

/// Resolves once shutdown is `true`. Pends forever if the sender is gone.
async fn stopped(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
