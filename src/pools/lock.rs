//! Non-blocking reentrancy lock.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::error::AmmError;

/// A flag held for the duration of a pool's mutating operation.
///
/// Acquisition never waits: a second caller, whether a reentrant callback
/// or another thread, is refused with [`AmmError::Reentrant`].
#[derive(Debug, Default)]
pub struct ReentrancyLock(AtomicBool);

impl ReentrancyLock {
    /// Creates an unlocked lock.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Takes the lock, releasing it when the returned guard drops.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Reentrant`] if the lock is already held.
    pub fn acquire(&self) -> Result<LockGuard<'_>, AmmError> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AmmError::Reentrant)?;
        Ok(LockGuard(&self.0))
    }

    /// Returns `true` while a guard is alive.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Releases its [`ReentrancyLock`] on drop, including on early return.
#[derive(Debug)]
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct LockGuard<'a>(&'a AtomicBool);

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
