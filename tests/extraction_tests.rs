use chrono::{DateTime, Local, NaiveDate, Utc};
use coursedates::config::ExtractorConfig;
use coursedates::extract::find_important_dates;
use coursedates::model::{RawSource, SourceOrigin};
use coursedates::pipeline;

fn test_config() -> ExtractorConfig {
    ExtractorConfig {
        reference_date: NaiveDate::from_ymd_opt(2024, 9, 1),
        ..Default::default()
    }
}

fn local_noon_utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_local_timezone(Local)
        .earliest()
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn test_exam_with_textual_date() {
    let config = test_config();
    let events = find_important_dates(
        "Final Exam: December 15, 2024",
        "CS101",
        SourceOrigin::Html,
        &config,
    );

    // Several contextual patterns hit the same phrase; they collapse to one
    // event after finalize because course, date and title all agree.
    let events = pipeline::finalize(events);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].course, "CS101");
    assert_eq!(events[0].title, "Exam");
    assert_eq!(events[0].date, local_noon_utc(2024, 12, 15));
}

#[test]
fn test_assignment_with_slash_date() {
    let config = test_config();
    let events = pipeline::finalize(find_important_dates(
        "Assignment 3 - 10/20/2024",
        "CS101",
        SourceOrigin::Html,
        &config,
    ));

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "3");
    assert_eq!(events[0].date, local_noon_utc(2024, 10, 20));
    assert_eq!(events[0].raw_text, "Assignment 3 - 10/20/2024");
}

#[test]
fn test_tier_two_runs_only_when_tier_one_is_empty() {
    let config = test_config();

    // No keyword anywhere: the generic tier picks up the bare ISO date.
    let events = find_important_dates(
        "Spring semester begins 2025-01-13 on campus",
        "CS101",
        SourceOrigin::Html,
        &config,
    );
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].date, local_noon_utc(2025, 1, 13));

    // A tier-1 hit suppresses the generic tier entirely: the bare ISO date
    // on the second line is never matched by any contextual pattern, so its
    // absence proves tier 2 did not run.
    let text = "Midterm exam - 10/15/2024\nterm ends 2024-12-20";
    let events = find_important_dates(text, "CS101", SourceOrigin::Html, &config);
    assert!(!events.is_empty());
    assert!(events.iter().all(|e| e.date == local_noon_utc(2024, 10, 15)));
}

#[test]
fn test_generic_tier_year_window() {
    let config = test_config();
    // Parseable and in the global year range, but four years from the
    // reference date: suppressed as a likely citation year.
    let events = find_important_dates(
        "Based on lecture notes published September 10, 2020",
        "CS101",
        SourceOrigin::Html,
        &config,
    );
    assert!(events.is_empty());
}

#[test]
fn test_short_text_yields_nothing() {
    let config = test_config();
    assert!(find_important_dates("10/20/24", "CS101", SourceOrigin::Html, &config).is_empty());
    assert!(find_important_dates("", "CS101", SourceOrigin::Html, &config).is_empty());
}

#[test]
fn test_unparseable_dates_drop_silently() {
    let config = test_config();
    let events = find_important_dates(
        "Assignment 1 - 3/45/2024",
        "CS101",
        SourceOrigin::Html,
        &config,
    );
    // The contextual pattern matches but the day is invalid; tier 2 then
    // runs and finds nothing parseable either.
    assert!(events.is_empty());
}

#[test]
fn test_batch_merges_and_sorts_across_courses() {
    let config = test_config();
    let sources = vec![
        RawSource::new(
            "Final Exam: December 15, 2024",
            "CS101",
            SourceOrigin::Html,
        ),
        RawSource::new("Homework 2 - 10/20/2024", "MATH240", SourceOrigin::Pdf),
    ];

    let events = pipeline::extract_batch(&sources, &config);
    assert_eq!(events.len(), 2);
    // Ascending by date, regardless of course input order.
    assert_eq!(events[0].course, "MATH240");
    assert_eq!(events[1].course, "CS101");
}

#[test]
fn test_one_bad_course_never_aborts_the_batch() {
    let config = test_config();
    let sources = vec![
        RawSource::new("", "EMPTY101", SourceOrigin::Html),
        RawSource::new(
            "Quiz 1 - 9/20/2024",
            "CS101",
            SourceOrigin::Html,
        ),
    ];

    let events = pipeline::extract_batch(&sources, &config);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].course, "CS101");
}

#[test]
fn test_pdf_origin_scans_multiline_text() {
    let config = test_config();
    let text = "CS101 Syllabus\nProf. Example, Fall 2024\nMidterm exam - 10/15/2024\nFinal project due: December 10, 2024\n";
    let events = pipeline::finalize(find_important_dates(
        text,
        "CS101",
        SourceOrigin::Pdf,
        &config,
    ));

    let dates: Vec<DateTime<Utc>> = events.iter().map(|e| e.date).collect();
    assert!(dates.contains(&local_noon_utc(2024, 10, 15)));
    assert!(dates.contains(&local_noon_utc(2024, 12, 10)));
}
