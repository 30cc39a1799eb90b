//! The sample harness against the reference sample lists.

use isomatch_test::app::harness::{cartesian_inputs, run};
use isomatch_test::app::report::ReportFormat;
use isomatch_test::shared::config::{SamplesConfig, Settings};
use isomatch_test::grammar::Matcher;

#[test_log::test]
fn every_reference_sample_matches() {
    let inputs = cartesian_inputs(&SamplesConfig::default());
    let lines = run(&Matcher::default(), &inputs, ReportFormat::Text).unwrap();

    assert_eq!(lines.len(), 144);
    assert!(lines.iter().all(|line| !line.ends_with("not matched")));
}

#[test]
fn reference_lines() {
    let inputs = cartesian_inputs(&SamplesConfig::default());
    let lines = run(&Matcher::default(), &inputs, ReportFormat::Text).unwrap();

    assert_eq!(
        lines[0],
        "2020-01-02T12:34:56: date=2020-01-02, time=12:34:56, tzinfo=None"
    );
    assert_eq!(
        lines[1],
        "2020-01-02T12:34:56Z: date=2020-01-02, time=12:34:56, tzinfo=Z"
    );
    assert!(lines.contains(
        &"2020W012T123456.123456+1234: date=2020W012, time=123456.123456, tzinfo=+1234"
            .to_string()
    ));
    assert!(lines.contains(
        &"2020-123T12:34:56.123456+12: date=2020-123, time=12:34:56.123456, tzinfo=+12"
            .to_string()
    ));
}

#[test]
fn configured_samples_and_json_report() {
    let settings = Settings::from_toml(
        r#"
        [report]
        format = "json"

        [samples]
        dates = ["2020-0102", "2020-W01-2"]
        times = ["12"]
        tzinfos = ["", "\u2212"]
        "#,
    )
    .unwrap();

    let inputs = cartesian_inputs(&settings.samples);
    let lines = run(
        &Matcher::from_config(&settings.matcher),
        &inputs,
        settings.report.format,
    )
    .unwrap();

    let matched: Vec<bool> = lines
        .iter()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .map(|value| value["matched"] == true)
        .collect();

    // A bare sign is not an offset
    assert_eq!(matched, vec![false, false, true, false]);
}

#[test]
fn configured_length_cap() {
    let settings = Settings::from_toml(
        r"
        [matcher]
        max_input_len = 12
        ",
    )
    .unwrap();

    let lines = run(
        &Matcher::from_config(&settings.matcher),
        &["2020-01-02T12", "2020123T12Z"],
        settings.report.format,
    )
    .unwrap();

    assert_eq!(
        lines,
        vec![
            "2020-01-02T12: not matched".to_string(),
            "2020123T12Z: date=2020123, time=12, tzinfo=Z".to_string(),
        ]
    );
}
