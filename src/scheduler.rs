use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::Instrument;

use crate::notify::Notifier;
use crate::remote::RemoteGateway;
use crate::store::SharedStore;
use crate::types::{Quote, QuoteError};

pub const SYNC_FAILED_MESSAGE: &str = "Failed to sync with server";
pub const PUSH_FAILED_MESSAGE: &str = "Failed to push quote to server";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncRequest {
    Tick,
    Push(Quote),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    Completed { added: usize, updated: usize },
    /// Another pass was already running; the trigger was dropped.
    Skipped,
}

/// `Idle`/`Syncing` flag. Only one [`SyncPermit`] exists at a time.
#[derive(Debug, Default)]
pub struct SyncGate {
    syncing: AtomicBool,
}

impl SyncGate {
    pub fn try_acquire(self: &Arc<Self>) -> Option<SyncPermit> {
        self.syncing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SyncPermit { gate: self.clone() })
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing.load(Ordering::Acquire)
    }
}

/// Returns the gate to `Idle` when dropped, on every exit path including panics.
#[derive(Debug)]
pub struct SyncPermit {
    gate: Arc<SyncGate>,
}

impl Drop for SyncPermit {
    fn drop(&mut self) {
        self.gate.syncing.store(false, Ordering::Release);
    }
}

#[derive(Clone)]
pub struct SyncScheduler {
    store: SharedStore,
    gateway: Arc<dyn RemoteGateway>,
    notifier: Arc<dyn Notifier>,
    gate: Arc<SyncGate>,
}

impl SyncScheduler {
    pub fn new(
        store: SharedStore,
        gateway: Arc<dyn RemoteGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            gateway,
            notifier,
            gate: Arc::new(SyncGate::default()),
        }
    }

    pub fn is_syncing(&self) -> bool {
        self.gate.is_syncing()
    }

    /// Run one reconciliation pass now, or report `Skipped` if one is in flight.
    pub async fn sync_now(&self) -> Result<SyncOutcome, QuoteError> {
        let Some(permit) = self.gate.try_acquire() else {
            log::debug!("sync already in progress, dropping trigger");
            return Ok(SyncOutcome::Skipped);
        };
        self.run_pass(permit, None).await
    }

    /// Push `quote`, then reconcile. While a pass is running only the push happens.
    pub async fn push_then_sync(&self, quote: Quote) -> Result<SyncOutcome, QuoteError> {
        match self.gate.try_acquire() {
            Some(permit) => self.run_pass(permit, Some(quote)).await,
            None => {
                self.push(&quote).await;
                Ok(SyncOutcome::Skipped)
            }
        }
    }

    /// Start the single consumer of sync requests. The first tick fires immediately.
    /// The returned task finishes only after every pass it started has finished.
    pub fn spawn(
        self,
        interval: Duration,
        shutdown: CancellationToken,
    ) -> (SyncHandle, JoinHandle<()>) {
        let (sync, rx) = SyncHandle::channel();
        let handle = tokio::spawn(self.consume(rx, interval, shutdown));
        (sync, handle)
    }

    async fn consume(
        self,
        mut rx: mpsc::UnboundedReceiver<SyncRequest>,
        interval: Duration,
        shutdown: CancellationToken,
    ) {
        log::info!("⏱️ Sync scheduler every {}s", interval.as_secs());
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let passes = TaskTracker::new();

        loop {
            let request = tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => SyncRequest::Tick,
                req = rx.recv() => match req {
                    Some(req) => req,
                    None => break,
                },
            };
            self.dispatch(request, &passes);
        }

        passes.close();
        if !passes.is_empty() {
            log::info!("⏳ Waiting for {} sync task(s) to finish", passes.len());
        }
        passes.wait().await;
        log::info!("👋 Sync scheduler exited");
    }

    fn dispatch(&self, request: SyncRequest, passes: &TaskTracker) {
        let permit = self.gate.try_acquire();
        let this = self.clone();
        match (request, permit) {
            (SyncRequest::Push(quote), Some(permit)) => {
                let span = tracing::info_span!("sync_pass", trigger = "push", quote = %quote.id);
                passes.spawn(
                    async move {
                        let _ = this.run_pass(permit, Some(quote)).await;
                    }
                    .instrument(span),
                );
            }
            (SyncRequest::Push(quote), None) => {
                log::debug!("sync in progress, pushing {} without a new pass", quote.id);
                let span = tracing::info_span!("push", quote = %quote.id);
                passes.spawn(async move { this.push(&quote).await }.instrument(span));
            }
            (request, Some(permit)) => {
                let span = tracing::info_span!("sync_pass", trigger = ?request);
                passes.spawn(
                    async move {
                        let _ = this.run_pass(permit, None).await;
                    }
                    .instrument(span),
                );
            }
            (request, None) => {
                log::debug!("sync in progress, dropping {:?}", request);
            }
        }
    }

    async fn push(&self, quote: &Quote) {
        if let Err(e) = self.gateway.push_local(quote).await {
            log::warn!("push of quote {} failed: {}", quote.id, e);
            self.notifier.notify(PUSH_FAILED_MESSAGE);
        }
    }

    async fn run_pass(
        &self,
        _permit: SyncPermit,
        push: Option<Quote>,
    ) -> Result<SyncOutcome, QuoteError> {
        if let Some(quote) = push {
            self.push(&quote).await;
        }

        let records = match self.gateway.fetch_remote().await {
            Ok(records) => records,
            Err(e) => {
                log::warn!("sync fetch failed: {}", e);
                self.notifier.notify(SYNC_FAILED_MESSAGE);
                return Err(e);
            }
        };

        let merged = self.store.lock().await.apply_remote(&records);
        let outcome = match merged {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("applying remote snapshot failed: {}", e);
                return Err(e);
            }
        };

        for message in &outcome.notifications {
            self.notifier.notify(message);
        }
        Ok(SyncOutcome::Completed {
            added: outcome.added,
            updated: outcome.updated,
        })
    }
}

/// Sender side of the scheduler's request queue.
#[derive(Clone)]
pub struct SyncHandle {
    tx: mpsc::UnboundedSender<SyncRequest>,
}

impl SyncHandle {
    /// A handle plus the receiving end that the consumer drains.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SyncRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Returns `false` once the scheduler has stopped.
    pub fn request(&self, request: SyncRequest) -> bool {
        self.tx.send(request).is_ok()
    }

    pub fn push(&self, quote: Quote) -> bool {
        self.request(SyncRequest::Push(quote))
    }
}
