#![forbid(unsafe_code)]

//! Document-level scroll lock for modal overlays.
//!
//! Known limitation, carried over deliberately: the lock is a boolean,
//! not a reference count. If two modal overlays were ever open at once,
//! closing the first would release the lock while the second is still
//! showing. The app never stacks modals today; switch to a counter before
//! allowing that.

use tracing::debug;

/// Boolean scroll lock over the background document.
#[derive(Debug, Default)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engage the lock. Idempotent.
    pub fn engage(&mut self) {
        if !self.locked {
            debug!("scroll locked");
        }
        self.locked = true;
    }

    /// Release the lock. Idempotent.
    pub fn release(&mut self) {
        if self.locked {
            debug!("scroll unlocked");
        }
        self.locked = false;
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engage_release_cycle() {
        let mut lock = ScrollLock::new();
        assert!(!lock.is_locked());
        lock.engage();
        assert!(lock.is_locked());
        lock.release();
        assert!(!lock.is_locked());
    }

    #[test]
    fn idempotent_both_ways() {
        let mut lock = ScrollLock::new();
        lock.engage();
        lock.engage();
        assert!(lock.is_locked());
        lock.release();
        lock.release();
        assert!(!lock.is_locked());
    }

    #[test]
    fn boolean_not_counted_documents_the_stacking_limitation() {
        let mut lock = ScrollLock::new();
        // Two "overlays" engage...
        lock.engage();
        lock.engage();
        // ...and the first close already unlocks, even though conceptually
        // one overlay is still open. This is the recorded limitation.
        lock.release();
        assert!(!lock.is_locked());
    }
}
