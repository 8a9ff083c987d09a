// Nested transaction depth bookkeeping
//
// The depth counter is mutated by the connection's thread and read lock-free
// by others; unwinding to a savepoint publishes through VolatileService.

use rand::Rng;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::application::constants::{
    SAVEPOINT_DEPTH_MARKER, SAVEPOINT_MIN_MARKER_INDEX, SAVEPOINT_PREFIX, SAVEPOINT_RANDOM_BOUND,
};
use crate::error::{PlatformError, Result};
use crate::port::SqlitePlatform;

/// Transaction nesting depth of one connection
pub struct TransactionDepth {
    depth: Arc<AtomicI32>,
    platform: Arc<dyn SqlitePlatform>,
}

/// Read-only view of a depth counter, usable from any thread
#[derive(Clone)]
pub struct DepthReader {
    depth: Arc<AtomicI32>,
}

impl DepthReader {
    pub fn get(&self) -> i32 {
        self.depth.load(Ordering::Acquire)
    }
}

impl TransactionDepth {
    pub fn new(platform: Arc<dyn SqlitePlatform>) -> Self {
        Self {
            depth: Arc::new(AtomicI32::new(0)),
            platform,
        }
    }

    /// Current depth (0 = no open transaction)
    pub fn current(&self) -> i32 {
        self.depth.load(Ordering::Acquire)
    }

    pub fn reader(&self) -> DepthReader {
        DepthReader {
            depth: self.depth.clone(),
        }
    }

    /// Open the outermost transaction
    ///
    /// # Errors
    /// `InvalidState` if a transaction is already open.
    pub fn begin(&self) -> Result<()> {
        self.depth
            .compare_exchange(0, 1, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| debug!("Transaction begun"))
            .map_err(|_| {
                PlatformError::InvalidState(
                    "Cannot begin a transaction while already in a transaction".to_string(),
                )
            })
    }

    /// Push a savepoint and return its name (`S<random>D<depth>`)
    ///
    /// The encoded depth is the depth before the push, so releasing or
    /// rolling back to it restores that depth.
    pub fn save_point(&self) -> String {
        let depth = self.depth.fetch_add(1, Ordering::AcqRel);
        let nonce = rand::thread_rng().gen_range(0..SAVEPOINT_RANDOM_BOUND);
        let name = format!(
            "{}{}{}{}",
            SAVEPOINT_PREFIX, nonce, SAVEPOINT_DEPTH_MARKER, depth
        );

        debug!(savepoint = %name, depth = depth + 1, "Savepoint created");
        name
    }

    /// Unwind to `savepoint`, keeping its changes
    pub fn release(&self, savepoint: &str) -> Result<i32> {
        self.unwind_to(savepoint, "release")
    }

    /// Unwind to `savepoint`, discarding its changes
    ///
    /// An empty name rolls back every open level, like `rollback`.
    pub fn rollback_to(&self, savepoint: &str) -> Result<i32> {
        if savepoint.is_empty() {
            self.rollback();
            return Ok(0);
        }
        self.unwind_to(savepoint, "rollback to")
    }

    /// Whether any transaction level is open
    pub fn is_in_transaction(&self) -> bool {
        self.current() > 0
    }

    /// Run `f` inside a savepoint
    ///
    /// Releases the savepoint when `f` succeeds. On failure, of `f` or of the
    /// release, the whole transaction is rolled back, not just this level,
    /// and the error is returned.
    ///
    /// # Example
    /// ```text
    /// tx.run_in_transaction(|| insert_all(&rows))?;
    /// ```
    pub fn run_in_transaction<T, E>(
        &self,
        f: impl FnOnce() -> std::result::Result<T, E>,
    ) -> std::result::Result<T, E>
    where
        E: From<PlatformError>,
    {
        let savepoint = self.save_point();
        let outcome = f().and_then(|value| {
            self.release(&savepoint)?;
            Ok(value)
        });

        if outcome.is_err() {
            self.rollback();
            debug!(savepoint = %savepoint, "Transaction rolled back");
        }
        outcome
    }

    /// Close every open level; true if a transaction was open
    pub fn commit(&self) -> bool {
        self.depth.swap(0, Ordering::AcqRel) != 0
    }

    /// Abort every open level; true if a transaction was open
    pub fn rollback(&self) -> bool {
        self.depth.swap(0, Ordering::AcqRel) > 0
    }

    /// Undo one level after a failed begin or savepoint
    ///
    /// Never takes the depth below zero.
    pub fn abandon(&self) {
        let _ = self
            .depth
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |d| {
                (d > 0).then(|| d - 1)
            });
    }

    fn unwind_to(&self, savepoint: &str, action: &str) -> Result<i32> {
        let current = self.current();
        let target = parse_savepoint_depth(savepoint).filter(|d| (0..current).contains(d));

        match target {
            Some(depth) => {
                self.platform.volatile_service().write(&self.depth, depth);
                debug!(savepoint, action, from = current, to = depth, "Savepoint unwound");
                Ok(depth)
            }
            None => Err(PlatformError::InvalidSavepoint(format!(
                "'{}' is not valid, and should be the result of a call to save_point",
                savepoint
            ))),
        }
    }
}

/// Depth encoded in a savepoint name, if well formed
pub(crate) fn parse_savepoint_depth(savepoint: &str) -> Option<i32> {
    let marker = savepoint.find(SAVEPOINT_DEPTH_MARKER)?;
    if marker < SAVEPOINT_MIN_MARKER_INDEX || savepoint.len() <= marker + 1 {
        return None;
    }
    savepoint[marker + 1..].parse().ok()
}
