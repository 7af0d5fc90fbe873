
use std::time::Duration;

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;
use test_utils::*;

use portfolio_site::{
    entities::contact::{
        ContactFormData, FailureKind, SubmissionResult, INVALID_EMAIL_MESSAGE,
        MISSING_FIELDS_MESSAGE, NOT_CONFIGURED_MESSAGE, REJECTED_MESSAGE, SENT_MESSAGE,
        TRANSPORT_MESSAGE,
    },
    errors::{ContactError, ValidationFailure},
    relays::contact::{ContactRelay, HttpRelay},
    settings::{AppConfig, RelayEncoding},
    use_cases::contact::ContactHandler,
    Portfolio,
};

mock! {
    pub Relay {}

    #[async_trait]
    impl ContactRelay for Relay {
        async fn deliver(&self, form: &ContactFormData) -> Result<(), ContactError>;
    }
}

fn valid_form() -> ContactFormData {
    ContactFormData::new("Ada Lovelace", "ada@example.com", "Hello there")
}

fn silent_relay() -> MockRelay {
    let mut relay = MockRelay::new();
    relay.expect_deliver().never();
    relay
}

#[actix_rt::test]
async fn empty_field_short_circuits_before_relay() {
    let handler = ContactHandler::new(Some(silent_relay()));

    let result = handler
        .submit(&ContactFormData::new("", "a@b.com", "hi"))
        .await;

    assert_eq!(
        result,
        SubmissionResult::failed(FailureKind::Validation, MISSING_FIELDS_MESSAGE)
    );
}

#[actix_rt::test]
async fn invalid_email_short_circuits_before_relay() {
    let handler = ContactHandler::new(Some(silent_relay()));

    let result = handler
        .submit(&ContactFormData::new("A", "not-an-email", "hi"))
        .await;

    assert!(!result.success);
    assert_eq!(result.message, INVALID_EMAIL_MESSAGE);
}

#[actix_rt::test]
async fn try_submit_exposes_failure_kind() {
    let handler = ContactHandler::new(Some(silent_relay()));

    let err = handler
        .try_submit(&ContactFormData::new("A", "a@b", "hi"))
        .await
        .unwrap_err();

    assert_eq!(err, ContactError::Validation(ValidationFailure::InvalidEmail));
}

#[actix_rt::test]
async fn missing_endpoint_is_reported_without_io() {
    let handler: ContactHandler<MockRelay> = ContactHandler::new(None);

    let result = handler.submit(&valid_form()).await;

    assert!(!handler.is_configured());
    assert_eq!(result.message, NOT_CONFIGURED_MESSAGE);
    assert_eq!(result.failure, Some(FailureKind::Configuration));
}

#[actix_rt::test]
async fn validation_runs_before_configuration_check() {
    let handler: ContactHandler<MockRelay> = ContactHandler::new(None);

    let result = handler.submit(&ContactFormData::default()).await;

    assert_eq!(result.message, MISSING_FIELDS_MESSAGE);
}

#[actix_rt::test]
async fn relay_error_is_normalized() {
    let mut relay = MockRelay::new();
    relay
        .expect_deliver()
        .times(1)
        .returning(|_| Err(ContactError::Transport("connection reset by peer".into())));

    let result = ContactHandler::new(Some(relay)).submit(&valid_form()).await;

    assert!(!result.success);
    assert_eq!(result.message, TRANSPORT_MESSAGE);
}

#[actix_rt::test]
async fn each_submit_makes_one_independent_attempt() {
    let mut relay = MockRelay::new();
    relay.expect_deliver().times(2).returning(|_| Ok(()));
    let handler = ContactHandler::new(Some(relay));

    assert!(handler.submit(&valid_form()).await.success);
    assert!(handler.submit(&valid_form()).await.success);
}

#[actix_rt::test]
async fn json_submission_reaches_endpoint() {
    let stub = RelayStub::spawn(200).await;
    let handler = ContactHandler::new(Some(stub.relay(RelayEncoding::Json)));

    let result = handler.submit(&valid_form()).await;

    assert_eq!(result, SubmissionResult::sent());
    assert_eq!(result.message, SENT_MESSAGE);

    let hits = stub.hits();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path, "/f/test-form");
    assert!(hits[0].content_type.starts_with("application/json"));

    let body: Value = serde_json::from_str(&hits[0].body).unwrap();
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["message"], "Hello there");
}

#[actix_rt::test]
async fn form_submission_carries_form_name() {
    let stub = RelayStub::spawn(200).await;
    let handler = ContactHandler::new(Some(stub.relay(RelayEncoding::Form)));

    let result = handler.submit(&valid_form()).await;
    assert!(result.success);

    let hits = stub.hits();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].content_type.starts_with("application/x-www-form-urlencoded"));
    assert!(hits[0].body.starts_with("form-name=contact"));
    assert!(hits[0].body.contains("name=Ada+Lovelace"));
    assert!(hits[0].body.contains("email=ada%40example.com"));
    assert!(hits[0].body.contains("message=Hello+there"));
}

#[actix_rt::test]
async fn relayed_email_is_the_validated_address() {
    let form = ContactFormData::new("Ada Lovelace", "  ada@example.com ", "Hello there");
    assert_eq!(form.check(), Ok(()));

    let stub = RelayStub::spawn(200).await;
    assert!(stub.relay(RelayEncoding::Json).deliver(&form).await.is_ok());
    assert!(stub.relay(RelayEncoding::Form).deliver(&form).await.is_ok());

    let hits = stub.hits();
    assert_eq!(hits.len(), 2);

    let body: Value = serde_json::from_str(&hits[0].body).unwrap();
    assert_eq!(body["email"], "ada@example.com");
    assert!(hits[1].body.contains("email=ada%40example.com&"));
}

#[actix_rt::test]
async fn non_success_status_is_a_failed_send() {
    let stub = RelayStub::spawn(422).await;
    let relay = stub.relay(RelayEncoding::Json);

    let err = relay.deliver(&valid_form()).await.unwrap_err();
    assert_eq!(err, ContactError::Rejected(422));

    let result = ContactHandler::new(Some(relay)).submit(&valid_form()).await;
    assert_eq!(result.message, REJECTED_MESSAGE);
    assert_eq!(stub.hits().len(), 2);
}

#[actix_rt::test]
async fn refused_connection_resolves_to_generic_error() {
    let relay = relay_for(&closed_endpoint(), RelayEncoding::Json, Duration::from_secs(2));

    let result = ContactHandler::new(Some(relay)).submit(&valid_form()).await;

    assert!(!result.success);
    assert_eq!(result.message, TRANSPORT_MESSAGE);
    assert_eq!(result.failure, Some(FailureKind::Transport));
}

#[actix_rt::test]
async fn slow_endpoint_hits_configured_timeout() {
    let stub = RelayStub::spawn_with_delay(200, Duration::from_secs(3)).await;
    let relay = relay_for(&stub.endpoint(), RelayEncoding::Json, Duration::from_millis(300));

    let err = relay.deliver(&valid_form()).await.unwrap_err();

    assert!(matches!(err, ContactError::Transport(_)));
}

#[actix_rt::test]
async fn portfolio_wires_configured_relay() {
    let stub = RelayStub::spawn(201).await;
    let config = AppConfig {
        contact_endpoint: Some(stub.endpoint()),
        ..AppConfig::default()
    };

    let portfolio = Portfolio::new(&config).expect("Failed to build portfolio");
    assert!(portfolio.contact_handler.is_configured());

    let result = portfolio.submit_contact(&valid_form()).await;
    assert!(result.success);
    assert_eq!(stub.hits().len(), 1);
}

#[actix_rt::test]
async fn portfolio_without_endpoint_refuses_submissions() {
    let portfolio = Portfolio::new(&AppConfig::default()).expect("Failed to build portfolio");

    let result = portfolio.submit_contact(&valid_form()).await;

    assert_eq!(result.failure, Some(FailureKind::Configuration));
}

#[test]
fn portfolio_rejects_malformed_endpoint() {
    let config = AppConfig {
        contact_endpoint: Some("mailto:someone@example.com".into()),
        ..AppConfig::default()
    };

    assert!(Portfolio::new(&config).is_err());
}

#[actix_rt::test]
async fn http_relay_keeps_its_settings() {
    let relay: HttpRelay = relay_for("https://formspree.io/f/xyz", RelayEncoding::Form, Duration::from_secs(1));

    assert_eq!(relay.endpoint().as_str(), "https://formspree.io/f/xyz");
    assert_eq!(relay.encoding(), RelayEncoding::Form);
}
