//! Syllabus records: `Syllabus`, `SyllabusModule`, `SyllabusTopic`.
//!
//! These are the persistent entities the scheduler materializes from a
//! validated outline.  They are plain data with public fields; the
//! invariant-bearing construction happens in `sp-schedule`'s assembler,
//! which is the only place fresh records are minted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use sp_core::{ModuleId, SyllabusId, TopicId};

// ── InputMethod / SyllabusStatus ──────────────────────────────────────────────

/// How the user supplied the syllabus content to the upstream generator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMethod {
    TextInput,
    PdfUpload,
}

impl InputMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            InputMethod::TextInput => "text_input",
            InputMethod::PdfUpload => "pdf_upload",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text_input" => Some(InputMethod::TextInput),
            "pdf_upload" => Some(InputMethod::PdfUpload),
            _ => None,
        }
    }
}

/// Lifecycle state of a syllabus.  The only `Syllabus` field that mutates
/// after roadmap creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyllabusStatus {
    Active,
    Archived,
}

impl SyllabusStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SyllabusStatus::Active => "active",
            SyllabusStatus::Archived => "archived",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(SyllabusStatus::Active),
            "archived" => Some(SyllabusStatus::Archived),
            _ => None,
        }
    }
}

// ── Syllabus ──────────────────────────────────────────────────────────────────

/// One exam syllabus — the scheduling parameters for a roadmap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Syllabus {
    pub id:           SyllabusId,
    pub name:         String,
    /// The exam day.  No session is ever scheduled on or after this date.
    pub exam_date:    NaiveDate,
    /// Daily study-hour capacity (positive; realistic range 1-12).
    pub daily_hours:  f64,
    pub input_method: InputMethod,
    pub status:       SyllabusStatus,
    pub created_at:   DateTime<Utc>,
}

impl Syllabus {
    pub fn is_active(&self) -> bool {
        self.status == SyllabusStatus::Active
    }

    pub fn archive(&mut self) {
        self.status = SyllabusStatus::Archived;
    }

    pub fn reactivate(&mut self) {
        self.status = SyllabusStatus::Active;
    }
}

// ── SyllabusModule ────────────────────────────────────────────────────────────

/// A top-level syllabus section.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyllabusModule {
    pub id:          ModuleId,
    pub syllabus_id: SyllabusId,
    pub name:        String,
    /// Percentage share of exam importance.  Informational only — the
    /// scheduler orders by difficulty and rank, never by weightage.
    pub weightage:   f64,
    /// Difficulty score, 1 (easy) to 5 (hard).  Primary prioritization key.
    pub difficulty:  u8,
    /// 1-based position in the generator's module list.  Tie-breaker key.
    pub priority_rank: u32,
}

// ── SyllabusTopic ─────────────────────────────────────────────────────────────

/// An atomic unit of study content within a module.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyllabusTopic {
    pub id:             TopicId,
    pub module_id:      ModuleId,
    pub name:           String,
    /// Total study hours the generator estimates this topic needs (> 0).
    pub required_hours: f64,
    /// Flipped by the surrounding application as the user works through
    /// the plan.  Always `false` at creation.
    pub mastered:       bool,
}
