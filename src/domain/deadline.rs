//! Caller-supplied expiry for router calls.

use core::fmt;

/// A unix timestamp (seconds) after which a router call must not execute.
///
/// A deadline equal to the current time is still live.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Deadline;
///
/// let d = Deadline::at(1_000);
/// assert!(!d.is_expired(1_000));
/// assert!(d.is_expired(1_001));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deadline(u64);

impl Deadline {
    /// A deadline that never passes.
    pub const NEVER: Self = Self(u64::MAX);

    /// Creates a deadline at the given unix second.
    #[must_use]
    pub const fn at(unix_secs: u64) -> Self {
        Self(unix_secs)
    }

    /// The deadline as unix seconds.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` once `now` is past the deadline.
    #[must_use]
    pub const fn is_expired(&self, now: u64) -> bool {
        self.0 < now
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_does_not_expire() {
        assert!(!Deadline::NEVER.is_expired(u64::MAX));
    }

    #[test]
    fn expires_strictly_after() {
        let d = Deadline::at(50);
        assert!(!d.is_expired(0));
        assert!(!d.is_expired(50));
        assert!(d.is_expired(51));
    }
}
