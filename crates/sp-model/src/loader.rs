//! JSON loader for the upstream generator payload.
//!
//! # Payload format
//!
//! The module-generation service returns an ordered JSON array, one object
//! per module:
//!
//! ```json
//! [
//!   {
//!     "moduleName": "Thermodynamics",
//!     "estimatedWeightage": 30,
//!     "aiDifficultyScore": 4,
//!     "topics": [
//!       { "topicName": "First law", "requiredStudyTimeHrs": 2.5 },
//!       { "topicName": "Entropy",   "requiredStudyTimeHrs": 3 }
//!     ]
//!   }
//! ]
//! ```
//!
//! Module order in the array is meaningful: it becomes `priority_rank`
//! (1-based) on the materialized `SyllabusModule` records.
//!
//! The payload is loosely typed (it comes from an LLM), so every field is
//! validated here before anything downstream sees it.  Malformed JSON maps
//! to [`ModelError::Parse`]; out-of-range values map to their dedicated
//! variants via the [`ModuleOutline`]/[`TopicOutline`] constructors.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ModelError, ModelResult};
use crate::outline::{ModuleOutline, TopicOutline};

// ── Raw records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedModule {
    module_name:         String,
    estimated_weightage: f64,
    ai_difficulty_score: f64,
    topics:              Vec<GeneratedTopic>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedTopic {
    topic_name:              String,
    required_study_time_hrs: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse and validate a generator payload from a JSON string.
///
/// Returns the outline in declaration order.  An empty module list is
/// rejected ([`ModelError::NoModules`]) — the caller should re-prompt the
/// generator rather than schedule a degenerate plan.
pub fn parse_outline(json: &str) -> ModelResult<Vec<ModuleOutline>> {
    let raw: Vec<GeneratedModule> =
        serde_json::from_str(json).map_err(|e| ModelError::Parse(e.to_string()))?;
    validate(raw)
}

/// Like [`parse_outline`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or streaming an HTTP
/// response body.
pub fn outline_from_reader<R: Read>(reader: R) -> ModelResult<Vec<ModuleOutline>> {
    let raw: Vec<GeneratedModule> =
        serde_json::from_reader(reader).map_err(|e| ModelError::Parse(e.to_string()))?;
    validate(raw)
}

/// Load a generator payload from a JSON file.
pub fn load_outline_json(path: &Path) -> ModelResult<Vec<ModuleOutline>> {
    let file = std::fs::File::open(path).map_err(ModelError::Io)?;
    outline_from_reader(file)
}

// ── Validation ────────────────────────────────────────────────────────────────

fn validate(raw: Vec<GeneratedModule>) -> ModelResult<Vec<ModuleOutline>> {
    if raw.is_empty() {
        return Err(ModelError::NoModules);
    }

    raw.into_iter()
        .map(|m| {
            let topics = m
                .topics
                .into_iter()
                .map(|t| TopicOutline::new(t.topic_name, t.required_study_time_hrs))
                .collect::<ModelResult<Vec<_>>>()?;
            ModuleOutline::new(m.module_name, m.estimated_weightage, m.ai_difficulty_score, topics)
        })
        .collect()
}
