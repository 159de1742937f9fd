//! Tests for users API handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::UsersService;
use crate::domain::ports::{MockUsersCommand, MockUsersQuery};
use crate::inbound::http::error::json_error_handler;
use crate::outbound::memory::InMemoryUserRepository;

fn memory_state() -> HttpState {
    let service = UsersService::new(Arc::new(InMemoryUserRepository::new()));
    HttpState::from_service(Arc::new(service))
}

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(NormalizePath::new(TrailingSlash::Trim))
        .service(scope())
}

fn ann() -> Value {
    json!({ "name": "Ann", "email": "ann@x.com", "password": "Passw0rd!" })
}

fn detail(body: &Value, key: &str) -> Option<String> {
    body.get("details")
        .and_then(|details| details.get(key))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[actix_web::test]
async fn create_then_rename_is_reflected_in_list() {
    let app = actix_test::init_service(test_app(memory_state())).await;

    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/users/")
            .set_json(ann())
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(
        created
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/api/users/1")
    );
    let created: Value = actix_test::read_body_json(created).await;
    assert_eq!(
        created,
        json!({ "id": 1, "name": "Ann", "email": "ann@x.com", "password": "Passw0rd!" })
    );

    let listed: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/api/users").to_request(),
    )
    .await;
    assert_eq!(listed, json!([created]));

    let updated = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/users/1")
            .set_json(json!({
                "id": 1,
                "name": "Anna",
                "email": "ann@x.com",
                "password": "Passw0rd!"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);

    let fetched: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/api/users/1").to_request(),
    )
    .await;
    assert_eq!(fetched.get("name").and_then(Value::as_str), Some("Anna"));
}

#[rstest]
#[case("/api/users")]
#[case("/api/users/")]
#[actix_web::test]
async fn post_accepts_both_collection_paths(#[case] uri: &str) {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post().uri(uri).set_json(ann()).to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn delete_removes_user_from_list() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    for _ in 0..2 {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/users")
                .set_json(ann())
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/api/users/1").to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let listed: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/api/users").to_request(),
    )
    .await;
    let ids: Vec<i64> = listed
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|user| user.get("id").and_then(Value::as_i64))
        .collect();
    assert_eq!(ids, vec![2]);
}

#[rstest]
#[case(actix_test::TestRequest::get().uri("/api/users/42"))]
#[case(actix_test::TestRequest::delete().uri("/api/users/42"))]
#[case(actix_test::TestRequest::put().uri("/api/users/42").set_json(ann()))]
#[actix_web::test]
async fn missing_users_yield_not_found(#[case] request: actix_test::TestRequest) {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("code").and_then(Value::as_str), Some("not_found"));

    let listed: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/api/users").to_request(),
    )
    .await;
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn put_with_mismatched_id_is_rejected() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/users/1")
            .set_json(json!({
                "id": 2,
                "name": "Ann",
                "email": "ann@x.com",
                "password": "Passw0rd!"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(detail(&body, "code").as_deref(), Some("id_mismatch"));
}

#[rstest]
#[case(json!({ "name": "  ", "email": "ann@x.com", "password": "p" }), "name", "empty_name")]
#[case(json!({ "email": "ann@x.com", "password": "p" }), "name", "empty_name")]
#[case(json!({ "name": "Ann", "email": "", "password": "p" }), "email", "empty_email")]
#[case(json!({ "name": "Ann", "email": "ann@", "password": "p" }), "email", "invalid_email")]
#[case(json!({ "name": "Ann", "email": "ann@x.com" }), "password", "missing_field")]
#[actix_web::test]
async fn invalid_payloads_report_field_and_code(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("code").and_then(Value::as_str), Some("invalid_request"));
    assert_eq!(detail(&body, "field").as_deref(), Some(field));
    assert_eq!(detail(&body, "code").as_deref(), Some(code));
}

#[rstest]
#[case("/api/users/abc")]
#[case("/api/users/0")]
#[actix_web::test]
async fn malformed_ids_are_invalid_requests(#[case] uri: &str) {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
            .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(detail(&body, "code").as_deref(), Some("invalid_id"));
}

#[actix_web::test]
async fn malformed_json_is_an_invalid_request() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("code").and_then(Value::as_str), Some("invalid_request"));
}

#[actix_web::test]
async fn internal_errors_are_redacted() {
    let mut query = MockUsersQuery::new();
    query
        .expect_list_users()
        .times(1)
        .return_once(|| Err(Error::internal("relation \"users\" does not exist")));
    let state = HttpState::new(Arc::new(query), Arc::new(MockUsersCommand::new()));

    let app = actix_test::init_service(test_app(state)).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/users").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("message").and_then(Value::as_str), Some("Internal server error"));
}

#[actix_web::test]
async fn unavailable_storage_maps_to_503() {
    let mut command = MockUsersCommand::new();
    command
        .expect_delete_user()
        .times(1)
        .return_once(|_| Err(Error::service_unavailable("user repository unavailable")));
    let state = HttpState::new(Arc::new(MockUsersQuery::new()), Arc::new(command));

    let app = actix_test::init_service(test_app(state)).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/api/users/3").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
