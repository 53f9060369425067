//! Absolute search deadline

use instant::Instant;
use std::time::Duration;

/// A point in time at or after which the search must abort
///
/// `Deadline::never()` disables the limit, which exhaustive tests use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    pub fn at(instant: Instant) -> Self {
        Deadline(Some(instant))
    }

    /// `budget` from now. A budget too large to represent never expires.
    pub fn after(budget: Duration) -> Self {
        Instant::now()
            .checked_add(budget)
            .map_or_else(Deadline::never, Deadline::at)
    }

    /// `secs` seconds from now. Negative and NaN budgets are already expired,
    /// an infinite budget never expires.
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs.is_nan() || secs <= 0.0 {
            return Deadline::expired();
        }
        match Duration::try_from_secs_f64(secs) {
            Ok(budget) => Deadline::after(budget),
            Err(_) => Deadline::never(),
        }
    }

    pub fn never() -> Self {
        Deadline(None)
    }

    /// A deadline that has already passed
    pub fn expired() -> Self {
        Deadline::at(Instant::now())
    }

    #[inline]
    pub fn has_passed(&self) -> bool {
        match self.0 {
            Some(instant) => Instant::now() >= instant,
            None => false,
        }
    }

    /// Time left, `None` when unlimited
    pub fn remaining(&self) -> Option<Duration> {
        self.0
            .map(|instant| instant.saturating_duration_since(Instant::now()))
    }
}
