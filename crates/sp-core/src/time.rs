//! Calendar time model.
//!
//! # Design
//!
//! The scheduler thinks in whole calendar days: an exam date, "today", and
//! zero-based day offsets between them.  `chrono::NaiveDate` is the canonical
//! day type — its `Ord` matches ISO `YYYY-MM-DD` lexicographic order, so a
//! date sort is also a chronological sort.
//!
//! "Today" is never read ambiently inside the scheduler.  It enters through
//! [`PlanClock`], which callers construct once per invocation — from the
//! system clock in production, or pinned to a fixed date in tests so every
//! scheduling run is reproducible.

use chrono::{Duration, Local, NaiveDate};

// ── Day arithmetic ────────────────────────────────────────────────────────────

/// Whole days from `earlier` to `later` (negative if `later` is in the past).
#[inline]
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

/// The date `n` days after `date`.
///
/// # Panics
///
/// Panics if the result falls outside chrono's representable range
/// (~±262,000 years) — unreachable for realistic schedules.
#[inline]
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::days(n)
}

// ── PlanClock ─────────────────────────────────────────────────────────────────

/// The scheduler's notion of "today".
///
/// Cheap to copy; holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanClock {
    today: NaiveDate,
}

impl PlanClock {
    /// A clock reading the local system date.
    pub fn system() -> Self {
        Self { today: Local::now().date_naive() }
    }

    /// A clock pinned to a fixed date.  Scheduling runs with a fixed clock
    /// are fully reproducible (modulo generated IDs and timestamps).
    pub fn fixed(today: NaiveDate) -> Self {
        Self { today }
    }

    #[inline]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Whole days from today until `date` (negative if `date` has passed).
    #[inline]
    pub fn days_until(&self, date: NaiveDate) -> i64 {
        days_between(self.today, date)
    }

    /// The date `offset` days after today.
    #[inline]
    pub fn date_at(&self, offset: i64) -> NaiveDate {
        add_days(self.today, offset)
    }
}
