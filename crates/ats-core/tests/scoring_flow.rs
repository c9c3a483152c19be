use ats_core::date::{RangeWindow, RegexDateSource};
use ats_core::embedding::{EmbeddingConfig, HashEmbedder};
use ats_core::matching::{AtsScorer, ScoringConfig};
use ats_core::JobRequirement;
use chrono::NaiveDate;

const RESUME: &str = "\
Jane Doe
Bachelor of Technology in Computer Science
Python, SQL and Docker. Based in Bangalore.

Acme Corp — Data Analyst
Jan 2019 - Dec 2020

Beta Ltd — Software Engineer
Mar 2021 - Present
";

fn scorer() -> AtsScorer {
    AtsScorer::new(
        Box::new(HashEmbedder::new(EmbeddingConfig { dimension: 128 })),
        Box::new(RegexDateSource::new(RangeWindow::default())),
        ScoringConfig::default(),
    )
}

fn job() -> JobRequirement {
    JobRequirement {
        skills_required: vec!["Python".into(), "SQL".into(), "Kubernetes".into()],
        experience_required: 4.0,
        qualification: vec!["btech".into(), "mca".into()],
        location: "Bangalore, Mumbai".into(),
        job_description: "Looking for a Python developer with SQL skills in Bangalore".into(),
    }
}

#[test]
fn scores_a_realistic_resume_end_to_end() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let result = scorer().score_at(RESUME, &job(), today);

    // 24 months + 37 months, well past the 4-year requirement
    assert_eq!(result.breakdown.experience, 1.0);
    assert_eq!(result.details.experience_years, "5 year(s), 1 month(s)");

    assert_eq!(
        result.details.skills_matched,
        vec!["Python".to_string(), "SQL".to_string()]
    );
    assert!((result.breakdown.skills - 2.0 / 3.0).abs() < 1e-9);

    assert!(result.details.education_matched);
    assert!(result.details.location_matched);

    assert!(result.score > 0.0);
    assert!(result.score <= 100.0);
}

#[test]
fn open_ranges_track_the_processing_date() {
    let scorer = scorer();
    let job = job();

    let early = NaiveDate::from_ymd_opt(2022, 3, 15).unwrap();
    let late = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

    let early_result = scorer.score_at(RESUME, &job, early);
    let late_result = scorer.score_at(RESUME, &job, late);

    // Two more years of "Present" tenure must change the tally.
    assert_ne!(
        early_result.details.experience_years,
        late_result.details.experience_years
    );
}

#[test]
fn scoring_twice_is_idempotent() {
    let scorer = scorer();
    let job = job();
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

    let first = scorer.score_at(RESUME, &job, today);
    let second = scorer.score_at(RESUME, &job, today);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn garbage_input_never_panics_and_scores_zeroish() {
    let scorer = scorer();
    let job = job();
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

    for text in [
        "",
        "………",
        "0000-00 - 0000-00",
        "jan - feb",
        "to to to to",
        "9999-99 – present",
        "\u{0}\u{1}\u{2}",
    ] {
        let result = scorer.score_at(text, &job, today);
        assert!(result.score >= 0.0);
        assert!(result.score <= 100.0);
    }
}
