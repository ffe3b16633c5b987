//! End-to-end rollout resolution scenarios.

use chrono::{DateTime, TimeZone, Utc};
use pennant_core::{
    Experimentation, FlagData, Progressive, ProgressivePercentage, ReleaseRamp, Rollout,
    ScheduledRollout, ScheduledStep, Variation,
};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn step(date: DateTime<Utc>, rule: &str) -> ScheduledStep {
    ScheduledStep {
        data: FlagData {
            rule: Some(rule.to_string()),
            ..Default::default()
        },
        date: Some(date),
    }
}

#[test]
fn progressive_ramp_halfway_through() {
    let rollout = Rollout {
        progressive: Some(Progressive {
            percentage: ProgressivePercentage {
                initial: Some(0.0),
                end: Some(100.0),
            },
            release_ramp: ReleaseRamp {
                start: Some(day(2024, 1, 1)),
                end: Some(day(2024, 1, 11)),
            },
        }),
        ..Default::default()
    };

    let effective = rollout.resolve(day(2024, 1, 6));
    let pct = effective.effective_percentage.unwrap();
    assert!((pct - 50.0).abs() < 1e-9, "expected ~50, got {pct}");
}

#[test]
fn expired_experimentation_serves_default() {
    let rollout = Rollout {
        experimentation: Some(Experimentation {
            start: Some(day(2024, 2, 1)),
            end: Some(day(2024, 2, 10)),
        }),
        ..Default::default()
    };

    let effective = rollout.resolve(day(2024, 2, 15));
    assert!(effective.serve_default);
}

#[test]
fn scheduled_step_not_yet_superseded() {
    let rollout = Rollout {
        scheduled: Some(ScheduledRollout {
            steps: vec![
                step(day(2024, 1, 1), "a"),
                step(day(2024, 1, 5), "b"),
            ],
        }),
        ..Default::default()
    };

    let effective = rollout.resolve(day(2024, 1, 3));
    let rule = effective.override_data.and_then(|d| d.rule);
    assert_eq!(rule.as_deref(), Some("a"));
}

#[test]
fn scheduled_steps_sharing_a_date_resolve_last_wins() {
    let rollout = Rollout {
        scheduled: Some(ScheduledRollout {
            steps: vec![
                step(day(2024, 1, 5), "a"),
                step(day(2024, 1, 5), "b"),
            ],
        }),
        ..Default::default()
    };

    let effective = rollout.resolve(day(2024, 1, 6));
    let rule = effective.override_data.and_then(|d| d.rule);
    assert_eq!(rule.as_deref(), Some("b"));
}

#[test]
fn ramp_without_end_falls_back_to_base_percentage() {
    let rollout = Rollout {
        progressive: Some(Progressive {
            percentage: ProgressivePercentage {
                initial: Some(0.0),
                end: Some(100.0),
            },
            release_ramp: ReleaseRamp {
                start: Some(day(2024, 1, 1)),
                end: None,
            },
        }),
        ..Default::default()
    };

    let effective = rollout.resolve(day(2024, 1, 6));
    assert_eq!(effective.effective_percentage, None);
    assert!(effective.is_noop());
}

#[test]
fn scheduled_override_and_ramp_combine() {
    let rollout = Rollout {
        experimentation: Some(Experimentation {
            start: Some(day(2024, 1, 1)),
            end: None,
        }),
        progressive: Some(Progressive {
            percentage: ProgressivePercentage::default(),
            release_ramp: ReleaseRamp {
                start: Some(day(2024, 1, 1)),
                end: Some(day(2024, 1, 21)),
            },
        }),
        scheduled: Some(ScheduledRollout {
            steps: vec![step(day(2024, 1, 2), "internal eq true")],
        }),
    };

    let effective = rollout.resolve(day(2024, 1, 11));
    assert!(!effective.serve_default);
    assert_eq!(
        effective.override_data.and_then(|d| d.rule).as_deref(),
        Some("internal eq true")
    );
    assert_eq!(effective.effective_percentage, Some(50.0));
}

#[test]
fn overriding_a_base_definition() {
    let base = FlagData {
        rule: Some("beta eq true".to_string()),
        percentage: Some(10.0),
        true_variation: Some(Variation::boolean(true)),
        false_variation: Some(Variation::boolean(false)),
        default_variation: Some(Variation::boolean(false)),
        ..Default::default()
    };
    let rollout = Rollout {
        scheduled: Some(ScheduledRollout {
            steps: vec![ScheduledStep {
                data: FlagData {
                    rule: Some(String::new()),
                    percentage: Some(100.0),
                    ..Default::default()
                },
                date: Some(day(2024, 5, 21)),
            }],
        }),
        ..Default::default()
    };

    let effective = rollout.resolve(day(2024, 6, 1));
    let merged = effective.override_data.unwrap().overlay(&base);

    // Step fields win, untouched base fields survive.
    assert_eq!(merged.rule.as_deref(), Some(""));
    assert_eq!(merged.percentage, Some(100.0));
    assert_eq!(merged.true_variation, Some(Variation::boolean(true)));
}

#[test]
fn rollout_decodes_from_yaml_config() {
    let yaml = r#"
experimentation:
  start: 2024-01-01T00:00:00Z
  end: 2024-03-01T00:00:00Z
progressive:
  percentage:
    initial: 5
    end: 95
  releaseRamp:
    start: 2024-01-10T00:00:00Z
    end: 2024-02-10T00:00:00Z
scheduled:
  steps:
    - date: 2024-01-15T00:00:00Z
      rule: internal eq true
      percentage: 100
"#;

    let rollout: Rollout = serde_yaml::from_str(yaml).unwrap();
    assert!(rollout.validate().is_ok());

    let effective = rollout.resolve(day(2024, 1, 20));
    assert!(!effective.serve_default);
    assert_eq!(
        effective
            .override_data
            .and_then(|d| d.rule)
            .as_deref(),
        Some("internal eq true")
    );
    assert!(effective.effective_percentage.is_some());
}
