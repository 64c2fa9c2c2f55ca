mod test_utils;

use montage_core::ImageResult;
use montage_error::{ImageErrorKind, MontageErrorKind};
use montage_pipeline::{FanOutPolicy, fan_out};
use serde_json::json;
use std::time::Duration;
use test_utils::MockImageGenerator;

fn prompts(count: usize) -> Vec<String> {
    (1..=count).map(|n| format!("shot {}", n)).collect()
}

#[tokio::test(start_paused = true)]
async fn results_follow_prompt_order_not_completion_order() {
    let images = MockImageGenerator::new()
        .delay("shot 1", Duration::from_millis(300))
        .delay("shot 2", Duration::from_millis(200))
        .delay("shot 3", Duration::from_millis(100));

    let results = fan_out(&images, &prompts(3), Duration::from_secs(10), FanOutPolicy::AllOrNothing)
        .await
        .unwrap();

    assert_eq!(images.completion_order(), vec!["shot 3", "shot 2", "shot 1"]);
    assert_eq!(
        results,
        vec![
            ImageResult::Generated(json!({ "prompt": "shot 1" })),
            ImageResult::Generated(json!({ "prompt": "shot 2" })),
            ImageResult::Generated(json!({ "prompt": "shot 3" })),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn requests_run_concurrently() {
    let images = MockImageGenerator::new()
        .delay("shot 1", Duration::from_secs(1))
        .delay("shot 2", Duration::from_secs(1))
        .delay("shot 3", Duration::from_secs(1));
    let started = tokio::time::Instant::now();

    fan_out(&images, &prompts(3), Duration::from_secs(10), FanOutPolicy::AllOrNothing)
        .await
        .unwrap();

    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn slow_request_times_out_individually() {
    let images = MockImageGenerator::new().delay("shot 2", Duration::from_secs(600));

    let results = fan_out(&images, &prompts(3), Duration::from_secs(30), FanOutPolicy::Partial)
        .await
        .unwrap();

    assert!(results[0].is_generated());
    assert_eq!(
        results[1],
        ImageResult::Failed {
            index: 1,
            error: "image request timed out".to_string(),
        }
    );
    assert!(results[2].is_generated());
}

#[tokio::test(start_paused = true)]
async fn timeout_fails_all_or_nothing_fan_out() {
    let images = MockImageGenerator::new().delay("shot 1", Duration::from_secs(600));

    let err = fan_out(&images, &prompts(2), Duration::from_secs(30), FanOutPolicy::AllOrNothing)
        .await
        .unwrap_err();

    match err.kind() {
        MontageErrorKind::Image(e) => match &e.kind {
            ImageErrorKind::FanOut { failures, .. } => {
                assert_eq!(failures[0].index, 0);
                assert!(failures[0].reason.contains("timed out after 30s"));
            }
            other => panic!("unexpected image error: {other}"),
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test(start_paused = true)]
async fn sub_second_deadline_is_reported_precisely() {
    let images = MockImageGenerator::new().delay("shot 1", Duration::from_secs(5));

    let err = fan_out(&images, &prompts(1), Duration::from_millis(250), FanOutPolicy::AllOrNothing)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("timed out after 250ms"));
}

#[tokio::test]
async fn failure_reasons_name_every_failed_index() {
    let images = MockImageGenerator::new().fail_on("shot 1").fail_on("shot 4");

    let err = fan_out(&images, &prompts(4), Duration::from_secs(10), FanOutPolicy::AllOrNothing)
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("2 of 4 image requests failed"));
    assert!(message.contains("[0] HTTP 500 error: mock failure for shot 1"));
    assert!(message.contains("[3] HTTP 500 error: mock failure for shot 4"));
}

#[tokio::test]
async fn empty_prompt_list_yields_no_results() {
    let images = MockImageGenerator::new();

    let results = fan_out(&images, &[], Duration::from_secs(10), FanOutPolicy::AllOrNothing)
        .await
        .unwrap();

    assert!(results.is_empty());
    assert_eq!(images.call_count(), 0);
}

#[test]
fn policy_names_round_trip_through_strings() {
    assert_eq!(FanOutPolicy::AllOrNothing.to_string(), "all_or_nothing");
    assert_eq!("partial".parse::<FanOutPolicy>().unwrap(), FanOutPolicy::Partial);
    assert_eq!(FanOutPolicy::default(), FanOutPolicy::AllOrNothing);
}
