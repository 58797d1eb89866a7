use chrono::{DateTime, FixedOffset, Local, NaiveDate, Timelike};

/// Wall-clock port.
///
/// Scoring and derivation paths never read the system clock directly; they
/// take a [`Clock`] (or an already-resolved date) so tests can pin time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Local hour of day in `0..24`, used for time-of-day rules.
    fn hour(&self) -> u32 {
        self.now().hour()
    }
}

/// Production clock: local time with its UTC offset preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Test clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    #[must_use]
    pub const fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}
