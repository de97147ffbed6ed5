//! Stage 2 — greedy daily-capacity allocation.
//!
//! # Algorithm
//!
//! A single cursor `(current_day, hours_used_today)` walks forward from day
//! 0 (today) and is shared across all topics.  Each topic, taken in priority
//! order, is packed greedily: allocate `min(remaining, cap - used)` hours,
//! emit a `Study` entry (rounded to one decimal), advance the day when the
//! cap is reached.  The day immediately before the exam is reserved for
//! final revision and receives no `Study` allocation — except when only one
//! day exists, in which case that day is used anyway (the `max(1, …)`
//! clamp below).
//!
//! Hours that cannot be placed before the cursor runs out of study days are
//! dropped without error; the shortfall is reported through
//! [`CoverageReport`] so callers can warn without changing the plan.

use chrono::NaiveDate;

use sp_core::{PlanClock, hours_gt, round_tenths};
use sp_model::{PlanEntry, SessionKind, SyllabusTopic};

// ── Day arithmetic ────────────────────────────────────────────────────────────

/// Whole days from today to the exam, clamped to at least 1.
#[inline]
pub fn days_available(clock: &PlanClock, exam_date: NaiveDate) -> i64 {
    clock.days_until(exam_date).max(1)
}

/// Days usable for regular study: everything except the final-revision day,
/// but never less than 1.  With `days_available == 1` the single day doubles
/// as both study day and day-before-exam.
#[inline]
pub fn study_days(days_available: i64) -> i64 {
    (days_available - 1).max(1)
}

// ── CoverageReport ────────────────────────────────────────────────────────────

/// How much of the requested study time actually fit before the exam.
///
/// Both sums are in unrounded hours.  Truncation is not an error — this is
/// the diagnostic surface for it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoverageReport {
    /// Sum of required hours across all topics.
    pub required_hours:  f64,
    /// Sum of hours the allocator consumed from the runway (including any
    /// sub-tenth tail too small to emit as an entry).
    pub scheduled_hours: f64,
}

impl CoverageReport {
    /// Scheduled/required, in 0.0-1.0.  An empty plan counts as fully covered.
    pub fn ratio(&self) -> f64 {
        if self.required_hours <= 0.0 {
            1.0
        } else {
            (self.scheduled_hours / self.required_hours).min(1.0)
        }
    }

    /// `true` when every required hour was placed.
    pub fn is_complete(&self) -> bool {
        !hours_gt(self.required_hours, self.scheduled_hours)
    }

    /// Hours that were silently dropped.
    pub fn shortfall(&self) -> f64 {
        (self.required_hours - self.scheduled_hours).max(0.0)
    }
}

// ── Allocation ────────────────────────────────────────────────────────────────

/// Pack each topic's required hours into sequential days.
///
/// `order` is stage 1's output (indices into `topics`); `module_names` is
/// the denormalized module name per topic index.  Returns the `Study`
/// entries in emission order (non-decreasing dates per topic, each entry
/// ≤ `daily_hours`) together with the coverage diagnostic.
pub fn allocate_study(
    order: &[usize],
    topics: &[SyllabusTopic],
    module_names: &[&str],
    clock: &PlanClock,
    study_days: i64,
    daily_hours: f64,
) -> (Vec<PlanEntry>, CoverageReport) {
    let mut entries = Vec::new();
    let mut current_day: i64 = 0;
    let mut used_today: f64 = 0.0;

    let mut required = 0.0;
    let mut scheduled = 0.0;

    for &idx in order {
        let topic = &topics[idx];
        required += topic.required_hours;
        let mut remaining = topic.required_hours;

        while hours_gt(remaining, 0.0) && current_day < study_days {
            let available = daily_hours - used_today;
            let chunk = remaining.min(available).min(daily_hours);

            if !hours_gt(chunk, 0.0) {
                // Today is full; move the cursor and retry.
                current_day += 1;
                used_today = 0.0;
                continue;
            }

            // A tail chunk below 0.05 h rounds to 0.0: consume it without
            // emitting, so no entry ever carries zero hours.
            let rounded = round_tenths(chunk);
            if rounded > 0.0 {
                entries.push(PlanEntry::new(
                    topic.id,
                    clock.date_at(current_day),
                    rounded,
                    SessionKind::Study,
                    module_names[idx],
                    topic.name.as_str(),
                ));
            }

            used_today += chunk;
            remaining -= chunk;
            scheduled += chunk;

            if !hours_gt(daily_hours, used_today) {
                current_day += 1;
                used_today = 0.0;
            }
        }
        // remaining > 0 here means the runway ran out: the rest is dropped,
        // surfaced only through the coverage report.
    }

    (entries, CoverageReport { required_hours: required, scheduled_hours: scheduled })
}
