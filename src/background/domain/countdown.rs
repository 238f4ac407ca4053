//! Decrementing time-to-live for background handles.

use std::time::Duration;

/// Result of advancing a [`Countdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// Time remains.
    Running,
    /// The countdown reached or crossed zero.
    Lapsed,
}

/// Remaining time-to-live, or none for a handle that never expires.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use vitrine::background::domain::{Countdown, CountdownState};
///
/// let mut countdown = Countdown::finite(Duration::from_secs(5));
/// assert_eq!(countdown.tick(Duration::from_secs(3)), CountdownState::Running);
/// assert_eq!(countdown.tick(Duration::from_secs(3)), CountdownState::Lapsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: Option<Duration>,
}

impl Countdown {
    /// Creates a countdown that lapses after `ttl`.
    #[must_use]
    pub const fn finite(ttl: Duration) -> Self {
        Self {
            remaining: Some(ttl),
        }
    }

    /// Creates a countdown that never lapses.
    #[must_use]
    pub const fn never() -> Self {
        Self { remaining: None }
    }

    /// Returns the time left, or `None` for a countdown that never lapses.
    #[must_use]
    pub const fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Returns `true` once a finite countdown has reached zero.
    #[must_use]
    pub const fn is_lapsed(&self) -> bool {
        matches!(self.remaining, Some(left) if left.is_zero())
    }

    /// Subtracts `elapsed` and reports whether time remains.
    ///
    /// A result at or below zero lapses the countdown; it stays at zero.
    pub fn tick(&mut self, elapsed: Duration) -> CountdownState {
        let Some(current) = self.remaining else {
            return CountdownState::Running;
        };
        match current.checked_sub(elapsed) {
            Some(left) if !left.is_zero() => {
                self.remaining = Some(left);
                CountdownState::Running
            }
            _ => {
                self.remaining = Some(Duration::ZERO);
                CountdownState::Lapsed
            }
        }
    }
}

impl From<Option<Duration>> for Countdown {
    fn from(ttl: Option<Duration>) -> Self {
        Self { remaining: ttl }
    }
}
