//! The `Roadmap` aggregate root.
//!
//! A roadmap binds one syllabus to its modules, topics, and the full
//! date-ordered plan.  The whole subgraph is created atomically by the
//! scheduler; afterwards only entry statuses, topic mastery flags, the
//! syllabus status, and the progress log mutate — all through the methods
//! here, never by the scheduler.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use sp_core::{EntryId, ProgressId, RoadmapId, TopicId};

use crate::error::{ModelError, ModelResult};
use crate::plan::{PlanEntry, ProgressEntry};
use crate::syllabus::{Syllabus, SyllabusModule, SyllabusTopic};

/// The full generated study plan for one syllabus.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roadmap {
    pub id:         RoadmapId,
    pub syllabus:   Syllabus,
    /// Modules in generator declaration order (`priority_rank` ascending).
    pub modules:    Vec<SyllabusModule>,
    /// Topics grouped by module, each group in declaration order.
    pub topics:     Vec<SyllabusTopic>,
    /// Plan entries sorted ascending by date (stable within a date).
    pub plan:       Vec<PlanEntry>,
    /// Progress log, appended by [`Roadmap::record_progress`].
    pub progress:   Vec<ProgressEntry>,
    pub created_at: DateTime<Utc>,
}

impl Roadmap {
    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn module(&self, id: sp_core::ModuleId) -> Option<&SyllabusModule> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn topic(&self, id: TopicId) -> Option<&SyllabusTopic> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub fn entry(&self, id: EntryId) -> Option<&PlanEntry> {
        self.plan.iter().find(|e| e.id == id)
    }

    /// All entries (study and revision) for one topic, in plan order.
    pub fn entries_for_topic(&self, topic: TopicId) -> impl Iterator<Item = &PlanEntry> {
        self.plan.iter().filter(move |e| e.topic_id == topic)
    }

    /// All entries falling on one calendar date, in plan order.
    pub fn entries_on(&self, date: NaiveDate) -> impl Iterator<Item = &PlanEntry> {
        self.plan.iter().filter(move |e| e.date == date)
    }

    /// Sum of allocated hours across the whole plan.
    pub fn total_planned_hours(&self) -> f64 {
        self.plan.iter().map(|e| e.allocated_hours).sum()
    }

    // ── Mutation surface (surrounding application, not the scheduler) ─────

    /// Mark a pending entry completed.
    pub fn complete_entry(&mut self, id: EntryId) -> ModelResult<()> {
        self.entry_mut(id)?.complete()
    }

    /// Mark a pending entry missed.
    pub fn miss_entry(&mut self, id: EntryId) -> ModelResult<()> {
        self.entry_mut(id)?.miss()
    }

    /// Set a topic's mastered flag.
    pub fn set_topic_mastered(&mut self, id: TopicId, mastered: bool) -> ModelResult<()> {
        let topic = self
            .topics
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ModelError::TopicNotFound(id))?;
        topic.mastered = mastered;
        Ok(())
    }

    /// Append a progress record for an existing plan entry.
    ///
    /// `confidence` is the user's 1-5 self-assessment.
    pub fn record_progress(
        &mut self,
        entry_id: EntryId,
        date_completed: NaiveDate,
        hours_spent: f64,
        confidence: u8,
    ) -> ModelResult<ProgressId> {
        if self.entry(entry_id).is_none() {
            return Err(ModelError::EntryNotFound(entry_id));
        }
        if !(1..=5).contains(&confidence) {
            return Err(ModelError::ConfidenceOutOfRange(confidence));
        }
        let record = ProgressEntry {
            id: ProgressId::generate(),
            entry_id,
            date_completed,
            hours_spent,
            confidence,
        };
        let id = record.id;
        self.progress.push(record);
        Ok(id)
    }

    // ── Integrity ─────────────────────────────────────────────────────────

    /// Check referential integrity across the aggregate: every entry's topic
    /// must resolve, and every topic's module must resolve.
    ///
    /// Used by tests and by storage backends after re-assembling a roadmap
    /// from persisted rows.
    pub fn validate(&self) -> ModelResult<()> {
        for topic in &self.topics {
            if self.module(topic.module_id).is_none() {
                return Err(ModelError::DanglingModule {
                    topic:  topic.id,
                    module: topic.module_id,
                });
            }
        }
        for entry in &self.plan {
            if self.topic(entry.topic_id).is_none() {
                return Err(ModelError::DanglingTopic {
                    entry: entry.id,
                    topic: entry.topic_id,
                });
            }
        }
        Ok(())
    }

    fn entry_mut(&mut self, id: EntryId) -> ModelResult<&mut PlanEntry> {
        self.plan
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ModelError::EntryNotFound(id))
    }
}
