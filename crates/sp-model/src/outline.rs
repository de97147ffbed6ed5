//! Validated scheduler input: `ModuleOutline` and `TopicOutline`.
//!
//! An outline is the typed, already-checked form of the upstream generator's
//! module/topic list.  Constructors enforce the field invariants, so holding
//! a `ModuleOutline` is proof the data is well-formed — the scheduler never
//! re-validates fields.
//!
//! Outlines carry no IDs.  Identity is assigned when the assembler
//! materializes `SyllabusModule`/`SyllabusTopic` records from them.

use crate::error::{ModelError, ModelResult};

// ── TopicOutline ──────────────────────────────────────────────────────────────

/// One topic as declared by the upstream generator.
#[derive(Clone, Debug, PartialEq)]
pub struct TopicOutline {
    name:           String,
    required_hours: f64,
}

impl TopicOutline {
    /// Validate and construct.  `required_hours` must be finite and > 0.
    pub fn new(name: impl Into<String>, required_hours: f64) -> ModelResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName { what: "topic" });
        }
        if !required_hours.is_finite() || required_hours <= 0.0 {
            return Err(ModelError::NonPositiveHours { topic: name, hours: required_hours });
        }
        Ok(Self { name, required_hours })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_hours(&self) -> f64 {
        self.required_hours
    }
}

// ── ModuleOutline ─────────────────────────────────────────────────────────────

/// One module as declared by the upstream generator, with its topics in
/// declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleOutline {
    name:       String,
    weightage:  f64,
    difficulty: u8,
    topics:     Vec<TopicOutline>,
}

impl ModuleOutline {
    /// Validate and construct.
    ///
    /// `difficulty` must be an integral value in 1-5 (the generator emits it
    /// as a JSON number, so a float is accepted and checked here),
    /// `weightage` a percentage in 0-100, and `topics` non-empty.
    pub fn new(
        name: impl Into<String>,
        weightage: f64,
        difficulty: f64,
        topics: Vec<TopicOutline>,
    ) -> ModelResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName { what: "module" });
        }
        if !(1.0..=5.0).contains(&difficulty) || difficulty.fract() != 0.0 {
            return Err(ModelError::DifficultyOutOfRange { module: name, score: difficulty });
        }
        if !weightage.is_finite() || !(0.0..=100.0).contains(&weightage) {
            return Err(ModelError::WeightageOutOfRange { module: name, weightage });
        }
        if topics.is_empty() {
            return Err(ModelError::EmptyModule { module: name });
        }
        Ok(Self { name, weightage, difficulty: difficulty as u8, topics })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weightage(&self) -> f64 {
        self.weightage
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Topics in declaration order.
    pub fn topics(&self) -> &[TopicOutline] {
        &self.topics
    }

    /// Sum of required hours across this module's topics.
    pub fn total_hours(&self) -> f64 {
        self.topics.iter().map(TopicOutline::required_hours).sum()
    }
}

/// Total topic count across an outline list.
pub fn topic_count(outline: &[ModuleOutline]) -> usize {
    outline.iter().map(|m| m.topics().len()).sum()
}

/// Total required hours across an outline list.
pub fn total_required_hours(outline: &[ModuleOutline]) -> f64 {
    outline.iter().map(ModuleOutline::total_hours).sum()
}
