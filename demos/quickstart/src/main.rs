//! quickstart — smallest end-to-end run of the studyplan scheduler.
//!
//! Takes an embedded syllabus outline (the shape the AI generator emits),
//! builds a roadmap for an exam two weeks out, prints the study calendar,
//! exports it to CSV, and round-trips it through the SQLite store.

use std::path::Path;

use anyhow::Result;

use sp_core::{PlanClock, add_days};
use sp_model::InputMethod;
use sp_schedule::{RoadmapBuilder, SyllabusSpec};
use sp_store::{RoadmapStore, SqliteStore, write_plan_csv};

// ── Constants ─────────────────────────────────────────────────────────────────

const DAYS_UNTIL_EXAM: i64 = 14;
const DAILY_HOURS:     f64 = 3.0;
const CSV_PATH:        &str = "plan.csv";
const DB_PATH:         &str = "plans.db";

// ── Syllabus outline ──────────────────────────────────────────────────────────

// The generator's JSON payload for a small physics syllabus.
const OUTLINE_JSON: &str = r#"[
  {
    "moduleName": "Thermodynamics",
    "estimatedWeightage": 40,
    "aiDifficultyScore": 4,
    "topics": [
      { "topicName": "First law",        "requiredStudyTimeHrs": 4   },
      { "topicName": "Entropy",          "requiredStudyTimeHrs": 3   },
      { "topicName": "Heat engines",     "requiredStudyTimeHrs": 2.5 }
    ]
  },
  {
    "moduleName": "Electromagnetism",
    "estimatedWeightage": 35,
    "aiDifficultyScore": 5,
    "topics": [
      { "topicName": "Maxwell's equations", "requiredStudyTimeHrs": 5 },
      { "topicName": "Induction",           "requiredStudyTimeHrs": 3 }
    ]
  },
  {
    "moduleName": "Optics",
    "estimatedWeightage": 25,
    "aiDifficultyScore": 2,
    "topics": [
      { "topicName": "Refraction",   "requiredStudyTimeHrs": 2 },
      { "topicName": "Interference", "requiredStudyTimeHrs": 2 }
    ]
  }
]"#;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== quickstart — studyplan scheduler ===");
    println!("Exam in {DAYS_UNTIL_EXAM} days  |  Daily cap: {DAILY_HOURS} h");
    println!();

    // 1. Build the roadmap from the generator payload.
    let clock = PlanClock::system();
    let spec = SyllabusSpec {
        name:         "Physics finals".into(),
        exam_date:    add_days(clock.today(), DAYS_UNTIL_EXAM),
        daily_hours:  DAILY_HOURS,
        input_method: InputMethod::PdfUpload,
    };
    let outcome = RoadmapBuilder::from_generated_json(spec, OUTLINE_JSON)?
        .clock(clock)
        .build()?;
    let roadmap = outcome.roadmap;

    let revision_sessions = roadmap.plan.iter().filter(|e| e.kind.is_revision()).count();
    println!(
        "Roadmap: {} modules, {} topics, {} sessions ({} study, {} revision)",
        roadmap.modules.len(),
        roadmap.topics.len(),
        roadmap.plan.len(),
        roadmap.plan.len() - revision_sessions,
        revision_sessions
    );

    // 2. Coverage diagnostic: did everything fit before the exam?
    let coverage = outcome.coverage;
    if coverage.is_complete() {
        println!("Coverage: all {:.1} h scheduled", coverage.required_hours);
    } else {
        println!(
            "Coverage: {:.1} of {:.1} h scheduled ({:.0}%) — {:.1} h dropped",
            coverage.scheduled_hours,
            coverage.required_hours,
            coverage.ratio() * 100.0,
            coverage.shortfall()
        );
    }
    println!();

    // 3. Print the calendar, one line per session.
    let mut current_date = None;
    for entry in &roadmap.plan {
        if current_date != Some(entry.date) {
            println!("{}", entry.date);
            current_date = Some(entry.date);
        }
        println!(
            "  {:>8}  {:.1} h  {} / {}",
            entry.kind.as_str(),
            entry.allocated_hours,
            entry.module_name,
            entry.topic_name
        );
    }
    println!();

    // 4. Export the calendar to CSV.
    write_plan_csv(Path::new(CSV_PATH), &roadmap)?;
    println!("Wrote {CSV_PATH}");

    // 5. Persist to SQLite and read it back.
    let mut store = SqliteStore::open(Path::new(DB_PATH))?;
    store.save(&roadmap)?;
    let reloaded = store
        .load(roadmap.id)?
        .ok_or_else(|| anyhow::anyhow!("roadmap vanished from {DB_PATH}"))?;
    println!(
        "Saved and reloaded roadmap {} from {DB_PATH} ({} sessions)",
        reloaded.id,
        reloaded.plan.len()
    );

    Ok(())
}
