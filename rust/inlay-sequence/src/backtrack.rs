//! Detection of stale-copy replay in traversal state.
//!
//! Sequence contexts are plain value types, copied whenever the sequence value
//! is copied. A consumer can therefore end up holding two snapshots of one
//! traversal — one already advanced, one stale — and stepping the stale one
//! would silently reprocess or skip elements. A [`BacktrackDetector`] embedded
//! in the context turns that replay into an immediate error.
//!
//! The detector is a handle to a pooled cell shared by every copy of the
//! context. The cell records the latest step taken by *any* copy; each handle
//! records the latest step taken by *its* copy. The two counters agree only
//! for the copy at the front of the traversal, so a step through a stale
//! handle is detected on the spot.

use std::sync::{
    Arc, OnceLock,
    atomic::{AtomicU64, Ordering},
};

use inlay_common::{Result, error::Error};
use inlay_pool::Pool;

/// The shared heart of one detector borrow.
///
/// `generation` counts borrow/release cycles of the cell; `cursor` counts
/// steps within the current cycle.
#[derive(Debug, Default)]
struct DetectorCell {
    generation: AtomicU64,
    cursor: AtomicU64,
}

/// A pool of detector cells, reused across sequential traversal lifetimes.
///
/// One process-wide pool is available through [`DetectorPool::global`]; scoped
/// pools (per thread, per traversal root) can be created with
/// [`DetectorPool::new`] when borrow traffic should stay local.
pub struct DetectorPool {
    cells: Arc<Pool<Arc<DetectorCell>>>,
}

impl DetectorPool {
    /// Creates a new empty pool.
    pub fn new() -> DetectorPool {
        DetectorPool {
            cells: Arc::new(Pool::new()),
        }
    }

    /// Returns the process-wide detector pool.
    pub fn global() -> &'static DetectorPool {
        static GLOBAL: OnceLock<DetectorPool> = OnceLock::new();
        GLOBAL.get_or_init(DetectorPool::new)
    }

    /// Borrows a detector, reusing a pooled cell or allocating one if the
    /// pool is empty.
    ///
    /// The borrow must be paired with exactly one
    /// [`release`](BacktrackDetector::release), conventionally in the owning
    /// context's dispose operation.
    pub fn borrow(&self) -> BacktrackDetector {
        let cell = self.cells.take().unwrap_or_default();
        cell.cursor.store(0, Ordering::Relaxed);
        let generation = cell.generation.load(Ordering::Acquire);
        BacktrackDetector {
            cells: self.cells.clone(),
            cell,
            generation,
            seen: 0,
        }
    }
}

impl Default for DetectorPool {
    fn default() -> Self {
        Self::new()
    }
}

/// A per-context replay guard.
///
/// Cloning the detector (as part of cloning a context) clones the handle
/// including its `seen` snapshot; the cell stays shared. This is exactly what
/// makes a stale copy detectable: its snapshot stops matching the cell once
/// any other copy advances.
#[derive(Clone)]
pub struct BacktrackDetector {
    cells: Arc<Pool<Arc<DetectorCell>>>,
    cell: Arc<DetectorCell>,
    /// The cell's borrow generation at the time this handle was created.
    generation: u64,
    /// The latest step this handle has itself taken.
    seen: u64,
}

impl BacktrackDetector {
    /// Borrows a detector from the process-wide pool.
    pub fn borrow() -> BacktrackDetector {
        DetectorPool::global().borrow()
    }

    /// Asserts that this handle is the front of its traversal and records the
    /// current step as the latest seen.
    ///
    /// Fails with `BacktrackDetected` when a newer copy of the traversal has
    /// already advanced past this handle's snapshot, or when the underlying
    /// detector was released (the traversal this handle belongs to is over).
    /// Once a handle has faulted, every subsequent call keeps failing.
    #[inline]
    pub fn detect_backtrack(&mut self) -> Result<()> {
        if self.generation != self.cell.generation.load(Ordering::Acquire) {
            return Err(Error::backtrack_detected(
                "traversal stepped after its detector was released",
            ));
        }
        let cursor = self.cell.cursor.load(Ordering::Acquire);
        if self.seen != cursor {
            return Err(Error::backtrack_detected(
                "a newer copy of this traversal has already advanced past this point",
            ));
        }
        let next = cursor + 1;
        self.cell.cursor.store(next, Ordering::Release);
        self.seen = next;
        Ok(())
    }

    /// Ends the borrow: invalidates every outstanding handle to the cell and
    /// returns the cell to its pool for reuse.
    ///
    /// Fails with `InvalidState` if the cell was already released — borrow
    /// and release are strictly paired, one release per borrow regardless of
    /// how many copies of the handle exist.
    pub fn release(&mut self) -> Result<()> {
        if self.generation != self.cell.generation.load(Ordering::Acquire) {
            return Err(Error::invalid_state("detector already released"));
        }
        self.cell.generation.fetch_add(1, Ordering::AcqRel);
        self.cells.put(self.cell.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inlay_common::error::ErrorKind;

    #[test]
    fn test_linear_steps_pass() {
        let pool = DetectorPool::new();
        let mut detector = pool.borrow();
        for _ in 0..100 {
            detector.detect_backtrack().unwrap();
        }
        detector.release().unwrap();
    }

    #[test]
    fn test_stale_copy_faults() {
        let pool = DetectorPool::new();
        let mut front = pool.borrow();
        let mut stale = front.clone();

        front.detect_backtrack().unwrap();
        front.detect_backtrack().unwrap();

        let err = stale.detect_backtrack().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::BacktrackDetected { .. }));

        // A faulted handle stays faulted.
        let err = stale.detect_backtrack().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::BacktrackDetected { .. }));

        // The front copy is unaffected by the failed replay.
        front.detect_backtrack().unwrap();
        front.release().unwrap();
    }

    #[test]
    fn test_detect_after_release_faults() {
        let pool = DetectorPool::new();
        let mut detector = pool.borrow();
        let mut copy = detector.clone();
        detector.detect_backtrack().unwrap();
        detector.release().unwrap();

        let err = copy.detect_backtrack().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::BacktrackDetected { .. }));
    }

    #[test]
    fn test_double_release_fails() {
        let pool = DetectorPool::new();
        let mut detector = pool.borrow();
        detector.release().unwrap();
        let err = detector.release().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidState { .. }));
    }

    #[test]
    fn test_cell_reuse_across_lifetimes() {
        let pool = DetectorPool::new();

        let mut first = pool.borrow();
        assert_eq!(pool.cells.len(), 0);
        first.detect_backtrack().unwrap();
        first.release().unwrap();
        assert_eq!(pool.cells.len(), 1);

        // The next borrow reuses the released cell and starts clean.
        let mut second = pool.borrow();
        assert_eq!(pool.cells.len(), 0);
        for _ in 0..10 {
            second.detect_backtrack().unwrap();
        }

        // The handle from the previous lifetime cannot step the reused cell.
        let err = first.detect_backtrack().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::BacktrackDetected { .. }));

        second.release().unwrap();
    }

    #[test]
    fn test_global_pool_borrow() {
        let mut detector = BacktrackDetector::borrow();
        detector.detect_backtrack().unwrap();
        detector.release().unwrap();
    }
}
