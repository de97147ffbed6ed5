//! `sp-schedule` — the study-plan scheduling core.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`prioritize`] | Stage 1: topic allocation order                         |
//! | [`allocate`]   | Stage 2: greedy daily-capacity packing, `CoverageReport`|
//! | [`revision`]   | Stage 3: short/weekly/final spaced-repetition sessions  |
//! | [`builder`]    | Stage 4 + workflow: `RoadmapBuilder`, `PlanOutcome`     |
//! | [`error`]      | `ScheduleError`, `ScheduleResult<T>`                    |
//!
//! # Pipeline (summary)
//!
//! Data flows strictly forward through four pure, in-memory stages:
//!
//! ```text
//! outline ──▶ prioritize ──▶ allocate ──▶ revision ──▶ assemble/sort
//!             (order)        (Study)      (Revision*)  (Roadmap)
//! ```
//!
//! No stage re-enters an earlier one, nothing blocks, and the only
//! non-determinism is ID generation and creation timestamps — two runs with
//! the same inputs and the same [`sp_core::PlanClock`] produce structurally
//! identical schedules.
//!
//! # Usage
//!
//! ```rust,ignore
//! let outline = sp_model::parse_outline(&generator_json)?;
//! let outcome = RoadmapBuilder::new(spec, outline)
//!     .clock(PlanClock::system())
//!     .build()?;
//! if !outcome.coverage.is_complete() {
//!     // warn: not every required hour fit before the exam
//! }
//! store.save(&outcome.roadmap)?;
//! ```

pub mod allocate;
pub mod builder;
pub mod error;
pub mod prioritize;
pub mod revision;


pub use allocate::{CoverageReport, allocate_study, days_available, study_days};
pub use builder::{PlanOutcome, RoadmapBuilder, SyllabusSpec};
pub use error::{ScheduleError, ScheduleResult};
pub use prioritize::prioritize;
pub use revision::schedule_revisions;
