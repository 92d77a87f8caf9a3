//! Detached clean-up of users whose creation could not be announced.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use roster_core::{UserId, UserStore, UserStoreError};
use thiserror::Error;
use tokio::sync::Mutex;
use tokio_util::task::TaskTracker;
use tracing::Instrument;

/// A compensating delete that did not go through. The user record is orphaned
/// and needs manual reconciliation.
#[derive(Debug, Error)]
#[error("Failed to remove user {id} after its creation event was lost: {source}")]
pub struct CompensationError {
    pub id: UserId,
    #[source]
    pub source: UserStoreError,
}

/// Runs compensating deletes in the background.
///
/// Tasks are detached from the request that triggered them and are never
/// awaited by it. Outcomes are reported through tracing, the
/// `roster_compensations_total` metric and [`Compensator::failure_count`].
#[derive(Debug, Clone, Default)]
pub struct Compensator {
    tracker: TaskTracker,
    failures: Arc<AtomicU64>,
    idle_waiters: Arc<Mutex<()>>,
}

impl Compensator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules removal of `id` from `user_store`.
    pub fn dispatch<U>(&self, user_store: U, id: UserId)
    where
        U: UserStore + 'static,
    {
        let failures = Arc::clone(&self.failures);
        let span = tracing::info_span!("compensation", user_id = %id);

        self.tracker.spawn(
            async move {
                match user_store.delete(&id).await {
                    // Already gone, nothing left behind.
                    Ok(()) | Err(UserStoreError::UserNotFound) => {
                        tracing::info!("Removed user after failed event publication");
                        crate::metrics::record_compensation(true);
                    }
                    Err(source) => {
                        let error = CompensationError { id, source };
                        failures.fetch_add(1, Ordering::Relaxed);
                        crate::metrics::record_compensation(false);
                        tracing::error!(error = %error, "Compensation failed, user record is orphaned");
                    }
                }
            }
            .instrument(span),
        );
    }

    /// Arms a compensation for `id` that fires when the guard is dropped
    /// without being [disarmed](CompensationGuard::disarm).
    ///
    /// Covers callers whose future is dropped mid-flight, e.g. a handler
    /// abandoned on client disconnect.
    pub fn guard<U>(&self, user_store: U, id: UserId) -> CompensationGuard<U>
    where
        U: UserStore + 'static,
    {
        CompensationGuard {
            compensator: self.clone(),
            pending: Some((user_store, id)),
        }
    }

    /// Number of compensating deletes that failed since start-up.
    pub fn failure_count(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Number of compensations still running.
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Waits until every compensation dispatched so far has finished.
    ///
    /// New compensations may still be dispatched afterwards. Concurrent
    /// waiters, including ones on clones, take turns.
    pub async fn wait_idle(&self) {
        let _turn = self.idle_waiters.lock().await;
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }
}

/// Pending compensation, see [`Compensator::guard`].
#[must_use = "dropping the guard compensates immediately"]
pub struct CompensationGuard<U>
where
    U: UserStore + 'static,
{
    compensator: Compensator,
    pending: Option<(U, UserId)>,
}

impl<U> CompensationGuard<U>
where
    U: UserStore + 'static,
{
    /// The guarded work committed, nothing to undo.
    pub fn disarm(mut self) {
        self.pending = None;
    }
}

impl<U> Drop for CompensationGuard<U>
where
    U: UserStore + 'static,
{
    fn drop(&mut self) {
        let Some((user_store, id)) = self.pending.take() else {
            return;
        };

        if tokio::runtime::Handle::try_current().is_ok() {
            self.compensator.dispatch(user_store, id);
        } else {
            self.compensator.failures.fetch_add(1, Ordering::Relaxed);
            crate::metrics::record_compensation(false);
            tracing::error!(user_id = %id, "No runtime to compensate on, user record is orphaned");
        }
    }
}
