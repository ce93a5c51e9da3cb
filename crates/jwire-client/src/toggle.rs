//! Optimistic save-toggle coordination.
//!
//! One controller per screen list. A toggle flips the locally displayed
//! flag before the server confirms, a single-flight guard keeps at most one
//! in-flight request per job, and a confirmed toggle reloads the whole
//! backing list so every row's saved flag matches the server again.
//!
//! Controllers are screen-scoped: two controllers showing the same job can
//! diverge until each reloads. There is no cross-screen synchronization.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use jwire_models::{JobFilter, JobSummary, Outcome, SaveJobStatus};

use crate::repos::JobRepository;

/// Which server list a controller fronts.
#[derive(Debug, Clone)]
pub enum JobListSource {
    All,
    Recent,
    Newest,
    Search(JobFilter),
}

/// Per-job toggle lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    /// No toggle issued since the last reload.
    Idle,
    /// A toggle request is in flight; `previous` is the pre-flip flag.
    Saving { previous: bool },
    /// The last toggle resolved; the next reload resets to `Idle`.
    Settled,
}

/// What to do with the optimistic flip when the server rejects a toggle.
///
/// `ReloadOnly` reproduces the shipped behavior: the flip stays wrong until
/// the next full reload corrects it. `Revert` restores the captured
/// pre-flip value immediately. Switching the default is a product call, so
/// both stay available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RollbackPolicy {
    #[default]
    ReloadOnly,
    Revert,
}

/// Result of a toggle intent.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    /// A toggle for this job was already in flight; nothing was dispatched.
    Ignored,
    /// The server confirmed the new state and the list was reloaded.
    Confirmed(SaveJobStatus),
    /// The request failed; the local flag follows the rollback policy.
    Failed(String),
}

#[derive(Default)]
struct ToggleBoard {
    targets: HashMap<i64, ToggleState>,
    saved: HashMap<i64, bool>,
}

/// Screen-scoped coordinator for the save/unsave interaction.
pub struct SaveToggleController {
    jobs: JobRepository,
    source: JobListSource,
    rollback: RollbackPolicy,
    board: Mutex<ToggleBoard>,
}

impl SaveToggleController {
    pub fn new(jobs: JobRepository, source: JobListSource) -> Self {
        Self {
            jobs,
            source,
            rollback: RollbackPolicy::default(),
            board: Mutex::new(ToggleBoard::default()),
        }
    }

    /// Override the failure rollback policy.
    pub fn with_rollback(mut self, rollback: RollbackPolicy) -> Self {
        self.rollback = rollback;
        self
    }

    /// The locally displayed saved flag for a job, if the list knows it.
    pub fn is_saved(&self, job_id: i64) -> Option<bool> {
        self.lock_board().saved.get(&job_id).copied()
    }

    /// The toggle lifecycle state for a job.
    pub fn state(&self, job_id: i64) -> ToggleState {
        self.lock_board()
            .targets
            .get(&job_id)
            .copied()
            .unwrap_or(ToggleState::Idle)
    }

    /// Reload the backing list and resync every saved flag from the server.
    ///
    /// In-flight toggles keep their `Saving` entry; settled ones reset to
    /// `Idle`, the server list now being the truth for them.
    pub async fn refresh(&self) -> Outcome<Vec<JobSummary>> {
        let outcome = match &self.source {
            JobListSource::All => self.jobs.list().await,
            JobListSource::Recent => self.jobs.list_recent().await,
            JobListSource::Newest => self.jobs.newest().await,
            JobListSource::Search(filter) => self.jobs.search(filter).await,
        };

        if let Outcome::Success(items) = &outcome {
            let mut board = self.lock_board();
            let in_flight: HashMap<i64, bool> = board
                .targets
                .iter()
                .filter_map(|(id, state)| match state {
                    ToggleState::Saving { .. } => board.saved.get(id).map(|flag| (*id, *flag)),
                    _ => None,
                })
                .collect();
            board.saved = items.iter().map(|job| (job.id, job.saved)).collect();
            // An optimistic flip awaiting confirmation outranks the list
            // snapshot, which may predate the toggle server-side.
            board.saved.extend(in_flight);
            board
                .targets
                .retain(|_, state| matches!(state, ToggleState::Saving { .. }));
        }
        outcome
    }

    /// Toggle the saved flag for a job.
    ///
    /// At most one toggle per job is in flight at a time; an intent
    /// arriving while one is pending is ignored outright, not queued. The
    /// local flag flips before dispatch and the server's answer settles it.
    pub async fn toggle(&self, job_id: i64) -> ToggleOutcome {
        let previous = {
            let mut board = self.lock_board();
            if matches!(board.targets.get(&job_id), Some(ToggleState::Saving { .. })) {
                debug!(job_id, "Toggle already in flight, ignoring intent");
                return ToggleOutcome::Ignored;
            }
            let previous = board.saved.get(&job_id).copied().unwrap_or(false);
            board.targets.insert(job_id, ToggleState::Saving { previous });
            board.saved.insert(job_id, !previous);
            previous
        };

        match self.jobs.save_job(job_id).await {
            Outcome::Success(status) => {
                self.lock_board().saved.insert(job_id, status.is_job_saved);
                // Coarse resync: reload the whole list rather than patch one
                // row. The target stays `Saving` through the reload so a
                // second intent cannot interleave with reconciliation.
                let _ = self.refresh().await;
                let mut board = self.lock_board();
                board.targets.insert(job_id, ToggleState::Settled);
                board.saved.insert(job_id, status.is_job_saved);
                ToggleOutcome::Confirmed(status)
            }
            Outcome::Failure(reason) => {
                let mut board = self.lock_board();
                board.targets.insert(job_id, ToggleState::Settled);
                if self.rollback == RollbackPolicy::Revert {
                    board.saved.insert(job_id, previous);
                }
                ToggleOutcome::Failed(reason)
            }
        }
    }

    fn lock_board(&self) -> MutexGuard<'_, ToggleBoard> {
        self.board
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
