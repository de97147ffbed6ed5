//! Plan records: `PlanEntry`, `SessionKind`, `EntryStatus`, `ProgressEntry`.
//!
//! # Status model
//!
//! ```text
//! Pending ──▶ Completed
//!    └──────▶ Missed
//! ```
//!
//! Both transitions are terminal and are driven by the surrounding
//! application (the scheduler only ever emits `Pending` entries).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use sp_core::{EntryId, ProgressId, TopicId};

use crate::error::{ModelError, ModelResult};

// ── SessionKind ───────────────────────────────────────────────────────────────

/// What kind of session an entry schedules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    /// First-pass study of new material.
    Study,
    /// Spaced repetition, 1 day after first study.
    RevisionShort,
    /// Spaced repetition, 7 days after first study.
    RevisionWeekly,
    /// Pre-exam review on the day before the exam.
    RevisionFinal,
}

impl SessionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionKind::Study => "study",
            SessionKind::RevisionShort => "revision_short",
            SessionKind::RevisionWeekly => "revision_weekly",
            SessionKind::RevisionFinal => "revision_final",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "study" => Some(SessionKind::Study),
            "revision_short" => Some(SessionKind::RevisionShort),
            "revision_weekly" => Some(SessionKind::RevisionWeekly),
            "revision_final" => Some(SessionKind::RevisionFinal),
            _ => None,
        }
    }

    pub fn is_revision(self) -> bool {
        self != SessionKind::Study
    }
}

// ── EntryStatus ───────────────────────────────────────────────────────────────

/// Completion state of a plan entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    Pending,
    Completed,
    Missed,
}

impl EntryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryStatus::Pending => "pending",
            EntryStatus::Completed => "completed",
            EntryStatus::Missed => "missed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(EntryStatus::Pending),
            "completed" => Some(EntryStatus::Completed),
            "missed" => Some(EntryStatus::Missed),
            _ => None,
        }
    }

    /// `true` once the entry can no longer change state.
    pub fn is_terminal(self) -> bool {
        self != EntryStatus::Pending
    }
}

// ── PlanEntry ─────────────────────────────────────────────────────────────────

/// One scheduled session on a specific calendar date.
///
/// Module and topic names are denormalized onto the entry so a rendered
/// calendar needs no joins against the topic list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanEntry {
    pub id:              EntryId,
    pub topic_id:        TopicId,
    pub date:            NaiveDate,
    /// Hours allocated to this session.  Always > 0.
    pub allocated_hours: f64,
    pub kind:            SessionKind,
    pub status:          EntryStatus,
    pub generated_at:    DateTime<Utc>,
    pub module_name:     String,
    pub topic_name:      String,
}

impl PlanEntry {
    /// Mint a fresh `Pending` entry stamped "now".
    pub fn new(
        topic_id: TopicId,
        date: NaiveDate,
        allocated_hours: f64,
        kind: SessionKind,
        module_name: impl Into<String>,
        topic_name: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::generate(),
            topic_id,
            date,
            allocated_hours,
            kind,
            status: EntryStatus::Pending,
            generated_at: Utc::now(),
            module_name: module_name.into(),
            topic_name: topic_name.into(),
        }
    }

    /// Transition `Pending → Completed`.
    pub fn complete(&mut self) -> ModelResult<()> {
        self.transition(EntryStatus::Completed)
    }

    /// Transition `Pending → Missed`.
    pub fn miss(&mut self) -> ModelResult<()> {
        self.transition(EntryStatus::Missed)
    }

    fn transition(&mut self, to: EntryStatus) -> ModelResult<()> {
        if self.status.is_terminal() {
            return Err(ModelError::InvalidTransition { entry: self.id, from: self.status });
        }
        self.status = to;
        Ok(())
    }
}

// ── ProgressEntry ─────────────────────────────────────────────────────────────

/// One record in the roadmap's progress log, appended when the user
/// completes a plan entry.  Not consumed by the scheduling core.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub id:             ProgressId,
    pub entry_id:       EntryId,
    pub date_completed: NaiveDate,
    pub hours_spent:    f64,
    /// Self-reported confidence, 1-5.
    pub confidence:     u8,
}
