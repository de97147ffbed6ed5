//! `sp-core` — foundational types for the studyplan scheduler.
//!
//! This crate is a dependency of every other `sp-*` crate.  It intentionally
//! has no `sp-*` dependencies and minimal external ones (only `chrono` and
//! `uuid`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`ids`]   | `RoadmapId`, `SyllabusId`, `ModuleId`, `TopicId`, `EntryId` |
//! | [`time`]  | `PlanClock`, calendar-day arithmetic                        |
//! | [`hours`] | one-decimal hour rounding, epsilon comparison               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (needed by `sp-model` and `sp-store`). |

pub mod hours;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use hours::{HOURS_EPSILON, hours_gt, round_tenths};
pub use ids::{EntryId, ModuleId, ProgressId, RoadmapId, SyllabusId, TopicId};
pub use time::{PlanClock, add_days, days_between};
