//! Stage 4 + workflow — `RoadmapBuilder`.
//!
//! The builder is the single entry point for roadmap creation: it validates
//! the scheduling parameters, materializes the syllabus/module/topic
//! records from a validated outline, runs stages 1-3, merges and
//! date-sorts the entry groups, and returns the assembled [`Roadmap`]
//! together with the coverage diagnostic.
//!
//! # Required inputs
//!
//! - [`SyllabusSpec`] — exam name/date, daily hours, input method
//! - `Vec<ModuleOutline>` — validated generator output (see `sp_model::loader`)
//!
//! # Optional inputs (have defaults)
//!
//! | Method      | Default               |
//! |-------------|-----------------------|
//! | `.clock(c)` | `PlanClock::system()` |
//!
//! # Example
//!
//! ```rust,ignore
//! let outcome = RoadmapBuilder::from_generated_json(spec, &payload)?
//!     .clock(PlanClock::fixed(today))
//!     .build()?;
//! ```

use chrono::Utc;

use sp_core::{ModuleId, PlanClock, RoadmapId, SyllabusId, TopicId};
use sp_model::{
    InputMethod, ModuleOutline, Roadmap, Syllabus, SyllabusModule, SyllabusStatus, SyllabusTopic,
    parse_outline,
};

use crate::allocate::{CoverageReport, allocate_study, days_available, study_days};
use crate::error::{ScheduleError, ScheduleResult};
use crate::prioritize::prioritize;
use crate::revision::schedule_revisions;

// ── SyllabusSpec ──────────────────────────────────────────────────────────────

/// User-supplied scheduling parameters for one roadmap.
#[derive(Clone, Debug)]
pub struct SyllabusSpec {
    pub name:         String,
    /// Must be strictly after the clock's "today".
    pub exam_date:    chrono::NaiveDate,
    /// Must be positive.  Realistic range is 1-12.
    pub daily_hours:  f64,
    pub input_method: InputMethod,
}

// ── PlanOutcome ───────────────────────────────────────────────────────────────

/// A built roadmap plus its allocation diagnostic.
#[derive(Clone, Debug)]
pub struct PlanOutcome {
    pub roadmap:  Roadmap,
    /// How much of the requested study time fit before the exam.  A ratio
    /// below 1.0 means some requested hours did not fit and were dropped.
    pub coverage: CoverageReport,
}

// ── RoadmapBuilder ────────────────────────────────────────────────────────────

/// Fluent builder running the full scheduling pipeline.
pub struct RoadmapBuilder {
    spec:    SyllabusSpec,
    outline: Vec<ModuleOutline>,
    clock:   Option<PlanClock>,
}

impl RoadmapBuilder {
    /// Create a builder from an already-validated outline.
    pub fn new(spec: SyllabusSpec, outline: Vec<ModuleOutline>) -> Self {
        Self { spec, outline, clock: None }
    }

    /// Create a builder straight from the generator's JSON payload.
    ///
    /// Parse/validation failures surface as [`ScheduleError::Generation`],
    /// distinct from the builder's own input-validation errors, so the
    /// caller can retry the generator rather than re-prompt the user.
    pub fn from_generated_json(spec: SyllabusSpec, json: &str) -> ScheduleResult<Self> {
        Ok(Self::new(spec, parse_outline(json)?))
    }

    /// Pin "today".  Defaults to the local system date; tests pin a fixed
    /// date so schedules are reproducible.
    pub fn clock(mut self, clock: PlanClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Validate inputs, run the four stages, and assemble the roadmap.
    pub fn build(self) -> ScheduleResult<PlanOutcome> {
        let clock = self.clock.unwrap_or_else(PlanClock::system);
        let spec = self.spec;

        // ── Validation (reject, not clamp) ────────────────────────────────
        if !spec.daily_hours.is_finite() || spec.daily_hours <= 0.0 {
            return Err(ScheduleError::NonPositiveDailyHours(spec.daily_hours));
        }
        if clock.days_until(spec.exam_date) < 1 {
            return Err(ScheduleError::ExamNotInFuture {
                exam:  spec.exam_date,
                today: clock.today(),
            });
        }

        // ── Materialize the syllabus subgraph ─────────────────────────────
        let syllabus_id = SyllabusId::generate();
        let syllabus = Syllabus {
            id:           syllabus_id,
            name:         spec.name,
            exam_date:    spec.exam_date,
            daily_hours:  spec.daily_hours,
            input_method: spec.input_method,
            status:       SyllabusStatus::Active,
            created_at:   Utc::now(),
        };

        let mut modules: Vec<SyllabusModule> = Vec::with_capacity(self.outline.len());
        let mut topics: Vec<SyllabusTopic> = Vec::new();

        for (i, outline_module) in self.outline.iter().enumerate() {
            let module_id = ModuleId::generate();
            modules.push(SyllabusModule {
                id:            module_id,
                syllabus_id,
                name:          outline_module.name().to_owned(),
                weightage:     outline_module.weightage(),
                difficulty:    outline_module.difficulty(),
                priority_rank: i as u32 + 1,
            });
            for outline_topic in outline_module.topics() {
                topics.push(SyllabusTopic {
                    id:             TopicId::generate(),
                    module_id,
                    name:           outline_topic.name().to_owned(),
                    required_hours: outline_topic.required_hours(),
                    mastered:       false,
                });
            }
        }

        if topics.is_empty() {
            return Err(ScheduleError::NoTopics);
        }

        // Denormalized module name per topic index, for entry display fields.
        let module_names: Vec<&str> = topics
            .iter()
            .map(|t| {
                modules
                    .iter()
                    .find(|m| m.id == t.module_id)
                    .map_or("General", |m| m.name.as_str())
            })
            .collect();

        // ── Stages 1-3 ────────────────────────────────────────────────────
        let order = prioritize(&modules, &topics);

        let runway = study_days(days_available(&clock, syllabus.exam_date));
        let (mut plan, coverage) = allocate_study(
            &order,
            &topics,
            &module_names,
            &clock,
            runway,
            syllabus.daily_hours,
        );

        let revisions = schedule_revisions(
            &plan,
            &order,
            &topics,
            &module_names,
            syllabus.exam_date,
            syllabus.daily_hours,
        );
        plan.extend(revisions);

        // ── Stage 4: stable chronological sort ────────────────────────────
        // Same-date entries keep group order (Study, Short, Weekly, Final)
        // and, within a group, topic-processing order.
        plan.sort_by_key(|e| e.date);

        let roadmap = Roadmap {
            id: RoadmapId::generate(),
            syllabus,
            modules,
            topics,
            plan,
            progress: Vec::new(),
            created_at: Utc::now(),
        };
        debug_assert!(roadmap.validate().is_ok());

        Ok(PlanOutcome { roadmap, coverage })
    }
}
