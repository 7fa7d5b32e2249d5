use std::time;

use wiremock::matchers::{any, body_string, header, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{json_body, TestApp, PROVIDER_FORM_PATH};

#[tokio::test]
async fn subscribe_returns_a_200_and_forwards_a_valid_signup() {
    let app = TestApp::spawn().await;

    Mock::given(path(PROVIDER_FORM_PATH))
        .and(header(
            "Content-Type",
            "application/x-www-form-urlencoded; charset=UTF-8",
        ))
        .and(body_string(
            "EMAIL=user%40example.com&locale=en&email_address_check=",
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.provider_server)
        .await;

    let response = app
        .post_newsletter(&serde_json::json!({ "email": "user@example.com" }))
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(json_body(response).await, serde_json::json!({ "success": true }));
}

#[tokio::test]
async fn subscribe_trims_the_email_and_passes_the_locale_through() {
    let app = TestApp::spawn().await;

    Mock::given(body_string(
        "EMAIL=user%40example.com&locale=ne&email_address_check=",
    ))
    .respond_with(ResponseTemplate::new(200))
    .expect(1)
    .mount(&app.provider_server)
    .await;

    let response = app
        .post_newsletter(&serde_json::json!({
            "email": "  user@example.com\n",
            "locale": "ne",
            "email_address_check": ""
        }))
        .await;

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn subscribe_silently_accepts_bots_without_forwarding() {
    let app = TestApp::spawn().await;
    app.provider_responds_with(ResponseTemplate::new(200), 0)
        .await;

    let test_cases = vec![
        serde_json::json!("bot"),
        serde_json::json!(null),
        serde_json::json!(true),
    ];
    for honeypot in test_cases {
        let response = app
            .post_newsletter(&serde_json::json!({
                "email": "user@example.com",
                "email_address_check": honeypot.clone()
            }))
            .await;

        assert_eq!(response.status(), 200, "honeypot {honeypot}");
        assert_eq!(json_body(response).await, serde_json::json!({ "success": true }));
    }
}

#[tokio::test]
async fn subscribe_returns_a_400_when_the_email_is_unusable() {
    let app = TestApp::spawn().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.provider_server)
        .await;

    let test_cases = vec![
        (serde_json::json!({}), "missing the email"),
        (serde_json::json!({ "email": "" }), "empty email"),
        (serde_json::json!({ "email": "   " }), "blank email"),
        (serde_json::json!({ "email": 42 }), "non-string email"),
        (serde_json::json!({ "locale": "en" }), "only a locale"),
    ];

    for (body, description) in test_cases {
        let response = app.post_newsletter(&body).await;

        assert_eq!(
            400,
            response.status(),
            "The API did not fail with 400 Bad Request when the payload was {description}"
        );
        assert_eq!(
            json_body(response).await,
            serde_json::json!({ "error": "Please provide a valid email address." })
        );
    }
}

#[tokio::test]
async fn subscribe_returns_a_400_for_malformed_json() {
    let app = TestApp::spawn().await;

    let response = app.post_newsletter_raw("{ email: ").await;

    assert_eq!(response.status(), 400);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "error": "Please provide a valid email address." })
    );
}

#[tokio::test]
async fn subscribe_does_not_check_the_email_shape() {
    let app = TestApp::spawn().await;
    app.provider_responds_with(ResponseTemplate::new(200), 1)
        .await;

    let response = app
        .post_newsletter(&serde_json::json!({ "email": "not-an-email" }))
        .await;

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn subscribe_passes_the_provider_status_through_on_rejection() {
    let app = TestApp::spawn().await;
    app.provider_responds_with(
        ResponseTemplate::new(503).set_body_string("internal provider detail"),
        1,
    )
    .await;

    let response = app
        .post_newsletter(&serde_json::json!({ "email": "user@example.com" }))
        .await;

    assert_eq!(response.status(), 503);
    let body = json_body(response).await;
    assert_eq!(
        body,
        serde_json::json!({ "error": "Brevo rejected the subscription request." })
    );
    assert!(!body.to_string().contains("internal provider detail"));
}

#[tokio::test]
async fn subscribe_returns_a_500_when_the_provider_times_out() {
    let app = TestApp::spawn().await;
    app.provider_responds_with(
        ResponseTemplate::new(200).set_delay(time::Duration::from_secs(5)),
        1,
    )
    .await;

    let response = app
        .post_newsletter(&serde_json::json!({ "email": "user@example.com" }))
        .await;

    assert_eq!(response.status(), 500);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "error": "We couldn't reach the subscription service. Please try again." })
    );
}

#[tokio::test]
async fn subscribe_does_not_retry_failed_forwards() {
    let app = TestApp::spawn().await;
    app.provider_responds_with(ResponseTemplate::new(500), 1)
        .await;

    let response = app
        .post_newsletter(&serde_json::json!({ "email": "user@example.com" }))
        .await;

    assert_eq!(response.status(), 500);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "error": "Brevo rejected the subscription request." })
    );
}
