//! Tests for report assembly: alternating inside/outside periods and the
//! closing figures carried through for the shell.

use chrono::NaiveDate;
use settled_core::{
    assemble_report, evaluate_continuity, ContinuityAssessment, ContinuityPolicy, Presence,
    ResidenceInterval,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn assess(history: &[ResidenceInterval], today: NaiveDate) -> ContinuityAssessment {
    evaluate_continuity(history, today, &ContinuityPolicy::default()).unwrap()
}

#[test]
fn periods_alternate_inside_and_outside() {
    let history = [
        ResidenceInterval::new(d(2020, 1, 1), d(2020, 1, 10)),
        ResidenceInterval::open(d(2020, 2, 1)),
    ];
    let today = d(2021, 1, 15);
    let assessment = assess(&history, today);

    let report = assemble_report(&history, today, &assessment, d(2025, 1, 1));

    assert_eq!(report.periods.len(), 3);

    assert_eq!(report.periods[0].from, d(2020, 1, 1));
    assert_eq!(report.periods[0].to, d(2020, 1, 10));
    assert_eq!(report.periods[0].days, 9);
    assert_eq!(report.periods[0].presence, Presence::Inside);

    assert_eq!(report.periods[1].from, d(2020, 1, 10));
    assert_eq!(report.periods[1].to, d(2020, 2, 1));
    assert_eq!(report.periods[1].days, 22);
    assert_eq!(report.periods[1].presence, Presence::Outside);

    // The open stay runs to today.
    assert_eq!(report.periods[2].from, d(2020, 2, 1));
    assert_eq!(report.periods[2].to, d(2021, 1, 15));
    assert_eq!(report.periods[2].days, 349);
    assert_eq!(report.periods[2].presence, Presence::Inside);
}

#[test]
fn single_interval_yields_one_inside_period() {
    let history = [ResidenceInterval::new(d(2020, 1, 1), d(2020, 3, 1))];
    let today = d(2020, 6, 1);
    let assessment = assess(&history, today);

    let report = assemble_report(&history, today, &assessment, d(2025, 1, 3));

    assert_eq!(report.periods.len(), 1);
    assert_eq!(report.periods[0].days, 60);
    assert_eq!(report.periods[0].presence, Presence::Inside);
}

#[test]
fn closing_figures_are_carried_through() {
    let history = [
        ResidenceInterval::new(d(2020, 1, 1), d(2020, 1, 10)),
        ResidenceInterval::open(d(2020, 2, 1)),
    ];
    let today = d(2021, 1, 15);
    let assessment = assess(&history, today);

    let report = assemble_report(&history, today, &assessment, d(2025, 1, 1));

    assert_eq!(report.assessment, assessment);
    assert_eq!(report.earliest_application, d(2025, 1, 1));
}

#[test]
fn broken_history_report_keeps_the_break_list() {
    let history = [
        ResidenceInterval::new(d(2019, 1, 1), d(2019, 6, 1)),
        ResidenceInterval::open(d(2023, 7, 1)),
    ];
    let today = d(2024, 7, 1);
    let assessment = assess(&history, today);

    let report = assemble_report(&history, today, &assessment, d(2024, 1, 2));

    assert!(!report.assessment.rule_maintained);
    assert_eq!(report.assessment.breaks.len(), 1);
    assert_eq!(report.assessment.breaks[0].days_outside, 1491);
    // Inside 2019, the 1491-day absence, then the stay running to today.
    assert_eq!(report.periods.len(), 3);
    assert_eq!(report.periods[1].days, 1491);
    assert_eq!(report.periods[1].presence, Presence::Outside);
}

#[test]
fn report_serializes_for_the_json_surface() {
    let history = [
        ResidenceInterval::new(d(2020, 1, 1), d(2020, 1, 10)),
        ResidenceInterval::open(d(2020, 2, 1)),
    ];
    let today = d(2021, 1, 15);
    let assessment = assess(&history, today);

    let report = assemble_report(&history, today, &assessment, d(2025, 1, 1));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["assessment"]["rule_maintained"], true);
    assert_eq!(json["assessment"]["days_remaining_in_window"], 164);
    assert_eq!(json["earliest_application"], "2025-01-01");
    assert_eq!(json["periods"][1]["presence"], "Outside");
    assert_eq!(json["periods"][1]["days"], 22);
}
