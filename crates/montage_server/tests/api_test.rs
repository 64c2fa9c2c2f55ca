mod test_utils;

use axum::{body::Body, http::Request};
use serde_json::json;
use test_utils::{MockImages, MockText, montage_json, post_montage, router, send};

#[tokio::test]
async fn health_reports_ok() {
    let app = router(MockText::answering(montage_json(2)), MockImages::new());
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body) = send(app, request).await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn valid_request_returns_montage_and_outputs() {
    let images = MockImages::new();
    let app = router(MockText::answering(montage_json(3)), images.clone());

    let (status, body) = post_montage(app, r#"{"text": "neon city at night"}"#).await;

    assert_eq!(status, 200);
    assert_eq!(body["montage"]["montageTitle"], "City at night");
    assert_eq!(body["montage"]["segments"][0]["segmentTitle"], "Beat 1");
    assert_eq!(body["montage"]["segments"][2]["prompt"], "shot 3");
    assert!(body["montage"].get("voiceover").is_none());
    assert!(body["montage"]["segments"][0].get("onScreenText").is_none());
    assert_eq!(
        body["falOutputs"],
        json!([
            { "url": "shot 1.png" },
            { "url": "shot 2.png" },
            { "url": "shot 3.png" }
        ])
    );
    assert_eq!(images.call_count(), 3);
}

#[tokio::test]
async fn long_montage_caps_image_outputs_at_five() {
    let images = MockImages::new();
    let app = router(MockText::answering(montage_json(7)), images.clone());

    let (status, body) = post_montage(app, r#"{"text": "seven beats"}"#).await;

    assert_eq!(status, 200);
    assert_eq!(body["montage"]["segments"].as_array().unwrap().len(), 7);
    assert_eq!(body["falOutputs"].as_array().unwrap().len(), 5);
    assert_eq!(images.call_count(), 5);
}

#[tokio::test]
async fn unusable_bodies_are_rejected_without_outbound_calls() {
    let bodies = [
        "",
        "not json at all",
        "{}",
        r#"{"prompt": "wrong field"}"#,
        r#"{"text": 42}"#,
        r#"{"text": null}"#,
        r#"{"text": ""}"#,
        r#"{"text": "   \n\t"}"#,
        r#"["text"]"#,
    ];

    for raw in bodies {
        let text = MockText::answering(montage_json(2));
        let images = MockImages::new();
        let app = router(text.clone(), images.clone());

        let (status, body) = post_montage(app, raw).await;

        assert_eq!(status, 400, "body {:?}", raw);
        assert_eq!(body, json!({ "error": "`text` field is required" }), "body {:?}", raw);
        assert_eq!(text.call_count(), 0, "body {:?}", raw);
        assert_eq!(images.call_count(), 0, "body {:?}", raw);
    }
}

#[tokio::test]
async fn missing_content_type_is_still_accepted() {
    let app = router(MockText::answering(montage_json(2)), MockImages::new());
    let request = Request::builder()
        .method("POST")
        .uri("/api/montage")
        .body(Body::from(r#"{"text": "plain body"}"#))
        .unwrap();

    let (status, _) = send(app, request).await;

    assert_eq!(status, 200);
}

#[tokio::test]
async fn unparsable_generation_output_is_a_500() {
    let images = MockImages::new();
    let app = router(MockText::answering("Sure! Here is your montage."), images.clone());

    let (status, body) = post_montage(app, r#"{"text": "anything"}"#).await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Generation service returned invalid JSON" }));
    assert_eq!(images.call_count(), 0);
}

#[tokio::test]
async fn empty_generation_output_is_invalid_json() {
    let images = MockImages::new();
    let app = router(MockText::answering("   "), images.clone());

    let (status, body) = post_montage(app, r#"{"text": "anything"}"#).await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Generation service returned invalid JSON" }));
    assert_eq!(images.call_count(), 0);
}

#[tokio::test]
async fn schema_violation_is_a_500() {
    let images = MockImages::new();
    let app = router(MockText::answering(montage_json(1)), images.clone());

    let (status, body) = post_montage(app, r#"{"text": "anything"}"#).await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Generation service returned an invalid montage" }));
    assert_eq!(images.call_count(), 0);
}

#[tokio::test]
async fn image_failure_is_a_generic_500() {
    let app = router(MockText::answering(montage_json(2)), MockImages::failing());

    let (status, body) = post_montage(app, r#"{"text": "anything"}"#).await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
}

#[tokio::test]
async fn missing_credential_is_a_generic_500() {
    let images = MockImages::new();
    let app = router(MockText::unconfigured(), images.clone());

    let (status, body) = post_montage(app, r#"{"text": "anything"}"#).await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
    assert_eq!(images.call_count(), 0);
}

#[tokio::test]
async fn get_on_montage_route_is_not_allowed() {
    let app = router(MockText::answering(montage_json(2)), MockImages::new());
    let request = Request::builder()
        .uri("/api/montage")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(app, request).await;

    assert_eq!(status, 405);
}
