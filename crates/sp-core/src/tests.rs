//! Unit tests for sp-core.

use chrono::NaiveDate;

use crate::{EntryId, PlanClock, TopicId, add_days, days_between, hours_gt, round_tenths};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── IDs ───────────────────────────────────────────────────────────────────────

mod ids {
    use super::*;

    #[test]
    fn generate_is_unique() {
        let a = TopicId::generate();
        let b = TopicId::generate();
        assert_ne!(a, b);
        assert_ne!(a, TopicId::NIL);
    }

    #[test]
    fn default_is_nil() {
        assert_eq!(EntryId::default(), EntryId::NIL);
    }

    #[test]
    fn display_parse_round_trip() {
        let id = TopicId::generate();
        let parsed = TopicId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(TopicId::parse("not-a-uuid").is_err());
    }
}

// ── Calendar arithmetic ───────────────────────────────────────────────────────

mod time {
    use super::*;

    #[test]
    fn days_between_forward_and_backward() {
        let mon = date(2026, 3, 2);
        let fri = date(2026, 3, 6);
        assert_eq!(days_between(mon, fri), 4);
        assert_eq!(days_between(fri, mon), -4);
        assert_eq!(days_between(mon, mon), 0);
    }

    #[test]
    fn add_days_crosses_month_boundary() {
        assert_eq!(add_days(date(2026, 1, 30), 3), date(2026, 2, 2));
        assert_eq!(add_days(date(2026, 3, 1), -1), date(2026, 2, 28));
    }

    #[test]
    fn fixed_clock_offsets() {
        let clock = PlanClock::fixed(date(2026, 5, 1));
        assert_eq!(clock.today(), date(2026, 5, 1));
        assert_eq!(clock.date_at(0), date(2026, 5, 1));
        assert_eq!(clock.date_at(9), date(2026, 5, 10));
        assert_eq!(clock.days_until(date(2026, 5, 11)), 10);
        assert_eq!(clock.days_until(date(2026, 4, 30)), -1);
    }

    #[test]
    fn date_ordering_matches_iso_strings() {
        // NaiveDate::Ord must agree with ISO string order so a date sort
        // is also a chronological sort.
        let a = date(2026, 9, 30);
        let b = date(2026, 10, 1);
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }
}

// ── Hour arithmetic ───────────────────────────────────────────────────────────

mod hours {
    use super::*;

    #[test]
    fn round_tenths_basic() {
        assert_eq!(round_tenths(1.25), 1.3);
        assert_eq!(round_tenths(1.24), 1.2);
        assert_eq!(round_tenths(2.0), 2.0);
        assert_eq!(round_tenths(0.449999), 0.4);
    }

    #[test]
    fn hours_gt_absorbs_float_residue() {
        // 0.1 summed ten times is not exactly 1.0 in f64.
        let sum = (0..10).fold(0.0_f64, |acc, _| acc + 0.1);
        assert!(!hours_gt(sum, 1.0));
        assert!(hours_gt(1.2, 1.0));
        assert!(!hours_gt(1.0, 1.0));
    }
}
