//! Stage 3 — spaced-repetition revision sessions.
//!
//! Derived from stage 2's `Study` entries, keyed on each topic's *first*
//! study date (later re-occurrences of a topic never spawn extra revision
//! baselines).  Three kinds, in emission order:
//!
//! | Kind     | Date                    | Hours                         | Condition            |
//! |----------|-------------------------|-------------------------------|----------------------|
//! | Short    | first study + 1 day     | `min(0.5, required × 0.30)`   | strictly before exam |
//! | Weekly   | first study + 7 days    | `min(0.5, required × 0.25)`   | strictly before exam |
//! | Final    | exam − 1 day            | `round(min(1, cap / n), 1)`   | always               |
//!
//! Final revision covers the first `min(6, topic_count)` topics in priority
//! order — whether or not they received a `Study` entry — splitting the
//! daily cap evenly, at most one hour each.  No entry's hours are ever
//! recomputed after creation.

use std::collections::HashMap;

use chrono::NaiveDate;

use sp_core::{TopicId, add_days, round_tenths};
use sp_model::{PlanEntry, SessionKind, SyllabusTopic};

/// Days after first study for the short-interval pass.
const SHORT_OFFSET_DAYS: i64 = 1;
/// Days after first study for the weekly-interval pass.
const WEEKLY_OFFSET_DAYS: i64 = 7;
/// Ceiling on short/weekly revision session length, in hours.
const REVISION_HOURS_CAP: f64 = 0.5;
const SHORT_HOURS_FACTOR: f64 = 0.30;
const WEEKLY_HOURS_FACTOR: f64 = 0.25;
/// At most this many topics get a final-revision slot.
const FINAL_TOPIC_LIMIT: usize = 6;
/// Ceiling on one topic's final-revision session, in hours.
const FINAL_HOURS_CAP: f64 = 1.0;

/// Derive all revision entries for a plan.
///
/// `study_entries` is stage 2's output in emission order; `order` is
/// stage 1's priority order.  Returns the Short group, then the Weekly
/// group, then the Final group, each internally in priority order.
pub fn schedule_revisions(
    study_entries: &[PlanEntry],
    order: &[usize],
    topics: &[SyllabusTopic],
    module_names: &[&str],
    exam_date: NaiveDate,
    daily_hours: f64,
) -> Vec<PlanEntry> {
    // First (earliest-emitted) study date per topic.  Entries for one topic
    // are emitted in non-decreasing date order, so first seen = earliest.
    let mut first_study: HashMap<TopicId, NaiveDate> = HashMap::new();
    for entry in study_entries {
        first_study.entry(entry.topic_id).or_insert(entry.date);
    }

    let mut out = Vec::new();

    for (offset, factor, kind) in [
        (SHORT_OFFSET_DAYS, SHORT_HOURS_FACTOR, SessionKind::RevisionShort),
        (WEEKLY_OFFSET_DAYS, WEEKLY_HOURS_FACTOR, SessionKind::RevisionWeekly),
    ] {
        for &idx in order {
            let topic = &topics[idx];
            let Some(&studied) = first_study.get(&topic.id) else {
                // Never studied (fully truncated): no spaced repetition.
                continue;
            };
            let date = add_days(studied, offset);
            if date < exam_date {
                out.push(PlanEntry::new(
                    topic.id,
                    date,
                    (topic.required_hours * factor).min(REVISION_HOURS_CAP),
                    kind,
                    module_names[idx],
                    topic.name.as_str(),
                ));
            }
        }
    }

    // Final pre-exam review for the highest-priority topics, studied or not.
    let final_topics = &order[..order.len().min(FINAL_TOPIC_LIMIT)];
    if !final_topics.is_empty() {
        let date = add_days(exam_date, -1);
        let hours = round_tenths((daily_hours / final_topics.len() as f64).min(FINAL_HOURS_CAP));
        // A cap small enough that the per-topic share rounds to 0.0 yields
        // no final sessions at all rather than zero-hour entries.
        if hours == 0.0 {
            return out;
        }
        for &idx in final_topics {
            out.push(PlanEntry::new(
                topics[idx].id,
                date,
                hours,
                SessionKind::RevisionFinal,
                module_names[idx],
                topics[idx].name.as_str(),
            ));
        }
    }

    out
}
