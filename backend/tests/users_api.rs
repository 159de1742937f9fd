//! Black-box tests for the users REST API over the in-memory repository.

use std::collections::HashSet;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{App, test, web};
use rstest::rstest;
use serde_json::{Value, json};

use admin_backend::Trace;
use admin_backend::domain::{TRACE_ID_HEADER, TraceId, UsersService};
use admin_backend::inbound::http::error::json_error_handler;
use admin_backend::inbound::http::health::{HealthState, live, ready};
use admin_backend::inbound::http::state::HttpState;
use admin_backend::inbound::http::users;
use admin_backend::outbound::memory::InMemoryUserRepository;

fn app(
    health: web::Data<HealthState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let service = UsersService::new(Arc::new(InMemoryUserRepository::new()));
    App::new()
        .app_data(health)
        .app_data(web::Data::new(HttpState::from_service(Arc::new(service))))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(NormalizePath::new(TrailingSlash::Trim))
        .wrap(Trace)
        .service(users::scope())
        .service(ready)
        .service(live)
}

fn user_payload(name: &str, email: &str) -> Value {
    json!({ "name": name, "email": email, "password": "Passw0rd!" })
}

fn ids_of(list: &Value) -> Vec<i64> {
    list.as_array()
        .expect("list is an array")
        .iter()
        .filter_map(|user| user.get("id").and_then(Value::as_i64))
        .collect()
}

#[actix_web::test]
async fn created_ids_are_unique_even_after_deletes() {
    let app = test::init_service(app(web::Data::new(HealthState::new()))).await;
    let mut seen = HashSet::new();

    for round in 0..4 {
        let created: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/api/users/")
                .set_json(user_payload(&format!("User {round}"), "u@x.com"))
                .to_request(),
        )
        .await;
        let id = created.get("id").and_then(Value::as_i64).expect("id");
        assert!(seen.insert(id), "id {id} was reused");

        let deleted = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/users/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    }
}

#[actix_web::test]
async fn update_stores_exactly_the_submitted_fields() {
    let app = test::init_service(app(web::Data::new(HealthState::new()))).await;
    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(user_payload("Ann", "ann@x.com"))
            .to_request(),
    )
    .await;
    let id = created.get("id").and_then(Value::as_i64).expect("id");

    let replacement = json!({
        "id": id,
        "name": "Bea",
        "email": "bea@y.org",
        "password": "N3w!Secret"
    });
    let updated: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/users/{id}"))
            .set_json(&replacement)
            .to_request(),
    )
    .await;
    assert_eq!(updated, replacement);

    let fetched: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/users/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(fetched, replacement);
}

#[rstest]
#[case(test::TestRequest::put().uri("/api/users/99").set_json(user_payload("X", "x@x.com")))]
#[case(test::TestRequest::delete().uri("/api/users/99"))]
#[actix_web::test]
async fn missing_targets_leave_collection_unchanged(#[case] request: test::TestRequest) {
    let app = test::init_service(app(web::Data::new(HealthState::new()))).await;
    for name in ["Ann", "Bob"] {
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/users")
                .set_json(user_payload(name, "a@x.com"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    let before: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/users").to_request(),
    )
    .await;

    let response = test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let after: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/users").to_request(),
    )
    .await;
    assert_eq!(before, after);
    assert_eq!(ids_of(&after), vec![1, 2]);
}

#[actix_web::test]
async fn invalid_email_reports_the_email_field() {
    let app = test::init_service(app(web::Data::new(HealthState::new()))).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(user_payload("Ann", "not-an-email"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body.pointer("/details/field").and_then(Value::as_str),
        Some("email")
    );
}

#[rstest]
#[case(test::TestRequest::get().uri("/api/users"))]
#[case(test::TestRequest::get().uri("/api/users/7"))]
#[case(test::TestRequest::post().uri("/api/users").set_json(json!({})))]
#[case(test::TestRequest::get().uri("/health/live"))]
#[actix_web::test]
async fn every_response_carries_a_trace_id(#[case] request: test::TestRequest) {
    let app = test::init_service(app(web::Data::new(HealthState::new()))).await;
    let response = test::call_service(&app, request.to_request()).await;
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .expect("trace-id header");
    assert!(header.parse::<TraceId>().is_ok());
}

#[actix_web::test]
async fn error_bodies_echo_the_trace_header() {
    let app = test::init_service(app(web::Data::new(HealthState::new()))).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/users/7").to_request(),
    )
    .await;
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body.get("traceId").and_then(Value::as_str),
        Some(header.as_str())
    );
}

#[actix_web::test]
async fn readiness_follows_health_state() {
    let health = web::Data::new(HealthState::new());
    let app = test::init_service(app(health.clone())).await;

    let before = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;
    assert_eq!(before.status(), StatusCode::SERVICE_UNAVAILABLE);

    health.mark_ready();
    let after = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;
    assert_eq!(after.status(), StatusCode::OK);
}
