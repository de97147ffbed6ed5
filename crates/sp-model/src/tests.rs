//! Unit tests for sp-model.

use chrono::{NaiveDate, Utc};

use sp_core::{ModuleId, RoadmapId, SyllabusId, TopicId};

use crate::error::ModelError;
use crate::outline::{ModuleOutline, TopicOutline, topic_count, total_required_hours};
use crate::plan::{EntryStatus, PlanEntry, SessionKind};
use crate::roadmap::Roadmap;
use crate::syllabus::{InputMethod, Syllabus, SyllabusModule, SyllabusStatus, SyllabusTopic};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn topic_outline(name: &str, hours: f64) -> TopicOutline {
    TopicOutline::new(name, hours).unwrap()
}

/// A hand-built two-module roadmap with one study entry per topic.
fn sample_roadmap() -> Roadmap {
    let syllabus_id = SyllabusId::generate();
    let syllabus = Syllabus {
        id:           syllabus_id,
        name:         "Physics 101".into(),
        exam_date:    date(2026, 6, 20),
        daily_hours:  3.0,
        input_method: InputMethod::TextInput,
        status:       SyllabusStatus::Active,
        created_at:   Utc::now(),
    };

    let mut modules = Vec::new();
    let mut topics = Vec::new();
    let mut plan = Vec::new();

    for (rank, (mod_name, topic_name, hours)) in
        [("Mechanics", "Kinematics", 2.0), ("Optics", "Lenses", 1.5)].iter().enumerate()
    {
        let module_id = ModuleId::generate();
        modules.push(SyllabusModule {
            id: module_id,
            syllabus_id,
            name: (*mod_name).into(),
            weightage: 50.0,
            difficulty: 3,
            priority_rank: rank as u32 + 1,
        });
        let topic_id = TopicId::generate();
        topics.push(SyllabusTopic {
            id: topic_id,
            module_id,
            name: (*topic_name).into(),
            required_hours: *hours,
            mastered: false,
        });
        plan.push(PlanEntry::new(
            topic_id,
            date(2026, 6, 1 + rank as u32),
            *hours,
            SessionKind::Study,
            *mod_name,
            *topic_name,
        ));
    }

    Roadmap {
        id: RoadmapId::generate(),
        syllabus,
        modules,
        topics,
        plan,
        progress: Vec::new(),
        created_at: Utc::now(),
    }
}

// ── Outline validation ────────────────────────────────────────────────────────

mod outline {
    use super::*;

    #[test]
    fn valid_outline_accepted() {
        let m = ModuleOutline::new(
            "Algebra",
            40.0,
            4.0,
            vec![topic_outline("Groups", 2.0), topic_outline("Rings", 3.5)],
        )
        .unwrap();
        assert_eq!(m.difficulty(), 4);
        assert_eq!(m.topics().len(), 2);
        assert_eq!(m.total_hours(), 5.5);
    }

    #[test]
    fn topic_rejects_zero_hours() {
        assert!(matches!(
            TopicOutline::new("Groups", 0.0),
            Err(ModelError::NonPositiveHours { .. })
        ));
        assert!(matches!(
            TopicOutline::new("Groups", -1.0),
            Err(ModelError::NonPositiveHours { .. })
        ));
        assert!(matches!(
            TopicOutline::new("Groups", f64::NAN),
            Err(ModelError::NonPositiveHours { .. })
        ));
    }

    #[test]
    fn topic_rejects_blank_name() {
        assert!(matches!(
            TopicOutline::new("  ", 1.0),
            Err(ModelError::EmptyName { what: "topic" })
        ));
    }

    #[test]
    fn module_rejects_out_of_range_difficulty() {
        for score in [0.0, 6.0, 3.5] {
            assert!(matches!(
                ModuleOutline::new("Algebra", 40.0, score, vec![topic_outline("Groups", 2.0)]),
                Err(ModelError::DifficultyOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn module_rejects_bad_weightage() {
        assert!(matches!(
            ModuleOutline::new("Algebra", -5.0, 3.0, vec![topic_outline("Groups", 2.0)]),
            Err(ModelError::WeightageOutOfRange { .. })
        ));
        assert!(matches!(
            ModuleOutline::new("Algebra", 120.0, 3.0, vec![topic_outline("Groups", 2.0)]),
            Err(ModelError::WeightageOutOfRange { .. })
        ));
    }

    #[test]
    fn module_rejects_no_topics() {
        assert!(matches!(
            ModuleOutline::new("Algebra", 40.0, 3.0, vec![]),
            Err(ModelError::EmptyModule { .. })
        ));
    }

    #[test]
    fn outline_aggregates() {
        let outline = vec![
            ModuleOutline::new("A", 50.0, 3.0, vec![topic_outline("a1", 2.0)]).unwrap(),
            ModuleOutline::new("B", 50.0, 2.0, vec![
                topic_outline("b1", 1.0),
                topic_outline("b2", 1.5),
            ])
            .unwrap(),
        ];
        assert_eq!(topic_count(&outline), 3);
        assert_eq!(total_required_hours(&outline), 4.5);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

mod loader {
    use std::io::Cursor;

    use crate::loader::{outline_from_reader, parse_outline};

    use super::*;

    const GOOD: &str = r#"[
        {
            "moduleName": "Thermodynamics",
            "estimatedWeightage": 30,
            "aiDifficultyScore": 4,
            "topics": [
                { "topicName": "First law", "requiredStudyTimeHrs": 2.5 },
                { "topicName": "Entropy",   "requiredStudyTimeHrs": 3 }
            ]
        },
        {
            "moduleName": "Waves",
            "estimatedWeightage": 20,
            "aiDifficultyScore": 2,
            "topics": [
                { "topicName": "Interference", "requiredStudyTimeHrs": 1.5 }
            ]
        }
    ]"#;

    #[test]
    fn parses_valid_payload_in_order() {
        let outline = parse_outline(GOOD).unwrap();
        assert_eq!(outline.len(), 2);
        assert_eq!(outline[0].name(), "Thermodynamics");
        assert_eq!(outline[0].difficulty(), 4);
        assert_eq!(outline[0].topics()[1].name(), "Entropy");
        assert_eq!(outline[1].name(), "Waves");
        assert_eq!(outline[1].topics()[0].required_hours(), 1.5);
    }

    #[test]
    fn reader_variant_matches_string_variant() {
        let a = parse_outline(GOOD).unwrap();
        let b = outline_from_reader(Cursor::new(GOOD.as_bytes())).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse_outline("not json"), Err(ModelError::Parse(_))));
    }

    #[test]
    fn rejects_missing_fields() {
        let payload = r#"[{ "moduleName": "X", "topics": [] }]"#;
        assert!(matches!(parse_outline(payload), Err(ModelError::Parse(_))));
    }

    #[test]
    fn rejects_empty_module_list() {
        assert!(matches!(parse_outline("[]"), Err(ModelError::NoModules)));
    }

    #[test]
    fn rejects_out_of_range_difficulty() {
        let payload = r#"[{
            "moduleName": "X",
            "estimatedWeightage": 10,
            "aiDifficultyScore": 9,
            "topics": [{ "topicName": "t", "requiredStudyTimeHrs": 1 }]
        }]"#;
        assert!(matches!(
            parse_outline(payload),
            Err(ModelError::DifficultyOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_topic_hours() {
        let payload = r#"[{
            "moduleName": "X",
            "estimatedWeightage": 10,
            "aiDifficultyScore": 3,
            "topics": [{ "topicName": "t", "requiredStudyTimeHrs": 0 }]
        }]"#;
        assert!(matches!(
            parse_outline(payload),
            Err(ModelError::NonPositiveHours { .. })
        ));
    }
}

// ── Entry status state machine ────────────────────────────────────────────────

mod status {
    use super::*;

    fn entry() -> PlanEntry {
        PlanEntry::new(TopicId::generate(), date(2026, 6, 1), 1.0, SessionKind::Study, "M", "T")
    }

    #[test]
    fn new_entry_is_pending() {
        let e = entry();
        assert_eq!(e.status, EntryStatus::Pending);
        assert!(!e.status.is_terminal());
    }

    #[test]
    fn pending_to_completed() {
        let mut e = entry();
        e.complete().unwrap();
        assert_eq!(e.status, EntryStatus::Completed);
    }

    #[test]
    fn pending_to_missed() {
        let mut e = entry();
        e.miss().unwrap();
        assert_eq!(e.status, EntryStatus::Missed);
    }

    #[test]
    fn terminal_states_reject_transitions() {
        let mut e = entry();
        e.complete().unwrap();
        assert!(matches!(e.miss(), Err(ModelError::InvalidTransition { .. })));
        assert!(matches!(e.complete(), Err(ModelError::InvalidTransition { .. })));
    }

    #[test]
    fn kind_and_status_strings_round_trip() {
        for kind in [
            SessionKind::Study,
            SessionKind::RevisionShort,
            SessionKind::RevisionWeekly,
            SessionKind::RevisionFinal,
        ] {
            assert_eq!(SessionKind::parse(kind.as_str()), Some(kind));
        }
        for status in [EntryStatus::Pending, EntryStatus::Completed, EntryStatus::Missed] {
            assert_eq!(EntryStatus::parse(status.as_str()), Some(status));
        }
        assert!(SessionKind::parse("nap").is_none());
    }

    #[test]
    fn only_study_is_not_revision() {
        assert!(!SessionKind::Study.is_revision());
        assert!(SessionKind::RevisionShort.is_revision());
        assert!(SessionKind::RevisionWeekly.is_revision());
        assert!(SessionKind::RevisionFinal.is_revision());
    }
}

// ── Roadmap aggregate ─────────────────────────────────────────────────────────

mod roadmap {
    use super::*;

    #[test]
    fn lookups_resolve() {
        let r = sample_roadmap();
        let topic = &r.topics[0];
        assert_eq!(r.topic(topic.id).unwrap().name, "Kinematics");
        assert_eq!(r.module(topic.module_id).unwrap().name, "Mechanics");
        assert_eq!(r.entries_for_topic(topic.id).count(), 1);
        assert_eq!(r.entries_on(date(2026, 6, 1)).count(), 1);
        assert_eq!(r.total_planned_hours(), 3.5);
    }

    #[test]
    fn complete_and_miss_entries() {
        let mut r = sample_roadmap();
        let first = r.plan[0].id;
        let second = r.plan[1].id;
        r.complete_entry(first).unwrap();
        r.miss_entry(second).unwrap();
        assert_eq!(r.entry(first).unwrap().status, EntryStatus::Completed);
        assert_eq!(r.entry(second).unwrap().status, EntryStatus::Missed);
        assert!(matches!(
            r.complete_entry(first),
            Err(ModelError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn unknown_ids_are_typed_errors() {
        let mut r = sample_roadmap();
        assert!(matches!(
            r.complete_entry(sp_core::EntryId::generate()),
            Err(ModelError::EntryNotFound(_))
        ));
        assert!(matches!(
            r.set_topic_mastered(TopicId::generate(), true),
            Err(ModelError::TopicNotFound(_))
        ));
    }

    #[test]
    fn mastery_flag_flips() {
        let mut r = sample_roadmap();
        let id = r.topics[0].id;
        assert!(!r.topic(id).unwrap().mastered);
        r.set_topic_mastered(id, true).unwrap();
        assert!(r.topic(id).unwrap().mastered);
    }

    #[test]
    fn record_progress_appends() {
        let mut r = sample_roadmap();
        let entry = r.plan[0].id;
        r.complete_entry(entry).unwrap();
        let pid = r.record_progress(entry, date(2026, 6, 1), 1.5, 4).unwrap();
        assert_eq!(r.progress.len(), 1);
        assert_eq!(r.progress[0].id, pid);
        assert_eq!(r.progress[0].entry_id, entry);
    }

    #[test]
    fn record_progress_validates() {
        let mut r = sample_roadmap();
        let entry = r.plan[0].id;
        assert!(matches!(
            r.record_progress(sp_core::EntryId::generate(), date(2026, 6, 1), 1.0, 3),
            Err(ModelError::EntryNotFound(_))
        ));
        assert!(matches!(
            r.record_progress(entry, date(2026, 6, 1), 1.0, 0),
            Err(ModelError::ConfidenceOutOfRange(0))
        ));
    }

    #[test]
    fn validate_catches_dangling_references() {
        let mut r = sample_roadmap();
        r.validate().unwrap();

        let mut broken = r.clone();
        broken.plan[0].topic_id = TopicId::generate();
        assert!(matches!(broken.validate(), Err(ModelError::DanglingTopic { .. })));

        r.topics[0].module_id = ModuleId::generate();
        assert!(matches!(r.validate(), Err(ModelError::DanglingModule { .. })));
    }

    #[test]
    fn syllabus_status_toggles() {
        let mut r = sample_roadmap();
        assert!(r.syllabus.is_active());
        r.syllabus.archive();
        assert_eq!(r.syllabus.status, SyllabusStatus::Archived);
        r.syllabus.reactivate();
        assert!(r.syllabus.is_active());
    }
}
