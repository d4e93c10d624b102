//! Time-conditional surge multiplier resolution.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::SurgeRule;

/// The multiplier chosen for a pickup time.
///
/// Defaults to a multiplier of 1 and an empty name when no rule applies.
#[derive(Debug, Clone, PartialEq)]
pub struct SurgeSelection {
    pub multiplier: Decimal,
    pub name: String,
}

impl Default for SurgeSelection {
    fn default() -> Self {
        SurgeSelection {
            multiplier: Decimal::ONE,
            name: String::new(),
        }
    }
}

/// Whether a rule applies at the given pickup time.
///
/// Inactive rules never apply. Configured conditions are conjunctive:
/// every one present must hold. Time windows are inclusive on both ends
/// and do not wrap around midnight - a window with `start > end` matches
/// nothing (known limitation, kept for parity with existing bookings).
fn rule_applies(rule: &SurgeRule, at: NaiveDateTime) -> bool {
    if !rule.is_active {
        return false;
    }

    if let Some(days) = &rule.days_of_week {
        let weekday = at.weekday().num_days_from_sunday() as u8;
        if !days.contains(&weekday) {
            return false;
        }
    }

    if let (Some(start), Some(end)) = (rule.start_time, rule.end_time) {
        let time = at.time();
        if time < start || time > end {
            return false;
        }
    }

    if let (Some(start), Some(end)) = (rule.start_date, rule.end_date) {
        let date = at.date();
        if date < start || date > end {
            return false;
        }
    }

    if !rule.specific_dates.is_empty() && !rule.specific_dates.contains(&at.date()) {
        return false;
    }

    true
}

/// Pick the surge multiplier for a pickup time.
///
/// Among all applicable rules the highest priority wins; when priorities
/// tie, the rule appearing later in the list wins (consistently).
pub fn resolve_surge(at: NaiveDateTime, rules: &[SurgeRule]) -> SurgeSelection {
    rules
        .iter()
        .filter(|rule| rule_applies(rule, at))
        .max_by_key(|rule| rule.priority)
        .map(|rule| SurgeSelection {
            multiplier: rule.multiplier,
            name: rule.name.clone(),
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal_macros::dec;

    fn rule(name: &str, multiplier: Decimal, priority: i32) -> SurgeRule {
        SurgeRule {
            name: name.to_string(),
            multiplier,
            is_active: true,
            days_of_week: None,
            start_time: None,
            end_time: None,
            start_date: None,
            end_date: None,
            specific_dates: vec![],
            priority,
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_no_rules_defaults_to_one() {
        let selection = resolve_surge(at(2026, 3, 14, 9, 0), &[]);
        assert_eq!(selection.multiplier, Decimal::ONE);
        assert_eq!(selection.name, "");
    }

    #[test]
    fn test_inactive_rule_never_applies() {
        let mut r = rule("Off", dec!(2.0), 10);
        r.is_active = false;
        let selection = resolve_surge(at(2026, 3, 14, 9, 0), &[r]);
        assert_eq!(selection.multiplier, Decimal::ONE);
    }

    #[test]
    fn test_unconditional_active_rule_always_applies() {
        let selection = resolve_surge(at(2026, 3, 14, 9, 0), &[rule("Flat", dec!(1.1), 0)]);
        assert_eq!(selection.multiplier, dec!(1.1));
        assert_eq!(selection.name, "Flat");
    }

    #[test]
    fn test_highest_priority_wins() {
        let rules = vec![rule("Low", dec!(1.2), 1), rule("High", dec!(1.5), 2)];
        let selection = resolve_surge(at(2026, 3, 14, 9, 0), &rules);
        assert_eq!(selection.multiplier, dec!(1.5));
        assert_eq!(selection.name, "High");
    }

    #[test]
    fn test_priority_tie_later_rule_wins() {
        let rules = vec![rule("First", dec!(1.2), 3), rule("Second", dec!(1.4), 3)];
        let selection = resolve_surge(at(2026, 3, 14, 9, 0), &rules);
        assert_eq!(selection.name, "Second");
    }

    #[test]
    fn test_day_of_week_condition() {
        // 2026-03-15 is a Sunday (weekday 0)
        let mut weekend = rule("Weekend", dec!(1.3), 1);
        weekend.days_of_week = Some(vec![0, 6]);

        let sunday = resolve_surge(at(2026, 3, 15, 9, 0), std::slice::from_ref(&weekend));
        assert_eq!(sunday.multiplier, dec!(1.3));

        let monday = resolve_surge(at(2026, 3, 16, 9, 0), &[weekend]);
        assert_eq!(monday.multiplier, Decimal::ONE);
    }

    #[test]
    fn test_time_window_is_inclusive() {
        let mut rush = rule("Morning rush", dec!(1.25), 1);
        rush.start_time = Some(hm(6, 0));
        rush.end_time = Some(hm(9, 30));

        for (h, m, expected) in [
            (6, 0, dec!(1.25)),
            (9, 30, dec!(1.25)),
            (8, 15, dec!(1.25)),
            (5, 59, dec!(1)),
            (9, 31, dec!(1)),
        ] {
            let selection = resolve_surge(at(2026, 3, 16, h, m), std::slice::from_ref(&rush));
            assert_eq!(selection.multiplier, expected, "at {h:02}:{m:02}");
        }
    }

    #[test]
    fn test_midnight_crossing_window_matches_nothing() {
        // start > end is an empty window; late-night rules configured this
        // way silently never fire
        let mut late = rule("Late night", dec!(1.5), 1);
        late.start_time = Some(hm(22, 0));
        late.end_time = Some(hm(2, 0));

        let at_23 = resolve_surge(at(2026, 3, 16, 23, 0), std::slice::from_ref(&late));
        let at_01 = resolve_surge(at(2026, 3, 16, 1, 0), &[late]);
        assert_eq!(at_23.multiplier, Decimal::ONE);
        assert_eq!(at_01.multiplier, Decimal::ONE);
    }

    #[test]
    fn test_date_range_condition() {
        let mut holidays = rule("Holiday season", dec!(1.4), 1);
        holidays.start_date = NaiveDate::from_ymd_opt(2026, 12, 20);
        holidays.end_date = NaiveDate::from_ymd_opt(2027, 1, 2);

        let inside = resolve_surge(at(2026, 12, 25, 12, 0), std::slice::from_ref(&holidays));
        assert_eq!(inside.multiplier, dec!(1.4));

        let boundary = resolve_surge(at(2027, 1, 2, 23, 0), std::slice::from_ref(&holidays));
        assert_eq!(boundary.multiplier, dec!(1.4));

        let outside = resolve_surge(at(2027, 1, 3, 0, 0), &[holidays]);
        assert_eq!(outside.multiplier, Decimal::ONE);
    }

    #[test]
    fn test_specific_dates_condition() {
        let mut event = rule("Game day", dec!(1.6), 1);
        event.specific_dates = vec![
            NaiveDate::from_ymd_opt(2026, 4, 4).unwrap(),
            NaiveDate::from_ymd_opt(2026, 4, 18).unwrap(),
        ];

        let on_day = resolve_surge(at(2026, 4, 18, 15, 0), std::slice::from_ref(&event));
        assert_eq!(on_day.multiplier, dec!(1.6));

        let off_day = resolve_surge(at(2026, 4, 19, 15, 0), &[event]);
        assert_eq!(off_day.multiplier, Decimal::ONE);
    }

    #[test]
    fn test_conditions_are_conjunctive() {
        // Saturday rule limited to a morning window: Saturday afternoon
        // fails the time condition even though the day matches
        let mut r = rule("Saturday morning", dec!(1.2), 1);
        r.days_of_week = Some(vec![6]);
        r.start_time = Some(hm(6, 0));
        r.end_time = Some(hm(12, 0));

        // 2026-03-14 is a Saturday
        let morning = resolve_surge(at(2026, 3, 14, 8, 0), std::slice::from_ref(&r));
        assert_eq!(morning.multiplier, dec!(1.2));

        let afternoon = resolve_surge(at(2026, 3, 14, 15, 0), &[r]);
        assert_eq!(afternoon.multiplier, Decimal::ONE);
    }
}
