//! End-to-end tests for the employee API, driven through the router without a
//! listening socket. Each test gets its own in-memory store.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use bson::oid::ObjectId;
use http_body_util::BodyExt;
use tower::ServiceExt;

use roster_core::store::DocumentStore;
use roster_memory::InMemoryStore;
use roster_server::{employee::Employee, handlers};

fn app() -> Router {
    handlers::router(Arc::new(DocumentStore::new(InMemoryStore::new())))
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn bare_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, body)
}

async fn create(app: &Router, body: &str) -> Employee {
    let (status, body) = send(app, json_request("POST", "/employee", body)).await;
    assert_eq!(status, StatusCode::CREATED);

    serde_json::from_slice(&body).unwrap()
}

async fn list(app: &Router) -> Vec<Employee> {
    let (status, body) = send(app, bare_request("GET", "/employee")).await;
    assert_eq!(status, StatusCode::OK);

    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn listing_an_empty_collection_returns_an_empty_array() {
    let app = app();

    let (status, body) = send(&app, bare_request("GET", "/employee")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"[]");
}

#[tokio::test]
async fn created_employees_round_trip_through_a_listing() {
    let app = app();

    let created = create(&app, r#"{"name":"Ana","salary":50000,"age":30}"#).await;

    assert!(created.id.is_some());
    assert_eq!(created.name, "Ana");
    assert_eq!(created.salary, 50000.0);
    assert_eq!(created.age, 30.0);

    assert_eq!(list(&app).await, vec![created]);
}

#[tokio::test]
async fn supplied_identifiers_are_ignored_on_create() {
    let app = app();
    let supplied = "0123456789abcdef01234567";

    let created = create(
        &app,
        &format!(r#"{{"id":"{supplied}","name":"Ana","salary":50000,"age":30}}"#),
    )
    .await;

    let id = created.id.unwrap();
    assert_ne!(id, supplied);
    assert!(ObjectId::parse_str(&id).is_ok());
}

#[tokio::test]
async fn missing_fields_decode_as_zero_values() {
    let app = app();

    let created = create(&app, r#"{"name":"Bo"}"#).await;

    assert_eq!(created.name, "Bo");
    assert_eq!(created.salary, 0.0);
    assert_eq!(created.age, 0.0);
}

#[tokio::test]
async fn undecodable_create_bodies_are_rejected_before_any_write() {
    let app = app();

    let (status, _) = send(&app, json_request("POST", "/employee", "{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        json_request("POST", "/employee", r#"{"name":"Ana","salary":"lots"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn update_replaces_fields_and_echoes_the_path_identifier() {
    let app = app();
    let created = create(&app, r#"{"name":"Ana","salary":50000,"age":30}"#).await;
    let id = created.id.unwrap();

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/employee/{id}"),
            r#"{"name":"Ana","salary":55000,"age":31}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated: Employee = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated.id.as_deref(), Some(id.as_str()));
    assert_eq!(updated.salary, 55000.0);
    assert_eq!(updated.age, 31.0);

    assert_eq!(list(&app).await, vec![updated]);
}

#[tokio::test]
async fn repeated_updates_converge_on_the_same_state() {
    let app = app();
    let created = create(&app, r#"{"name":"Ana","salary":50000,"age":30}"#).await;
    let id = created.id.unwrap();
    let request = || {
        json_request(
            "PUT",
            &format!("/employee/{id}"),
            r#"{"name":"Ana","salary":55000,"age":31}"#,
        )
    };

    let (first_status, first_body) = send(&app, request()).await;
    let (second_status, second_body) = send(&app, request()).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first_body, second_body);
    assert_eq!(list(&app).await.len(), 1);
}

#[tokio::test]
async fn update_of_an_unknown_identifier_is_a_client_error() {
    let app = app();

    let (status, _) = send(
        &app,
        json_request(
            "PUT",
            &format!("/employee/{}", ObjectId::new().to_hex()),
            r#"{"name":"Ana","salary":50000,"age":30}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn undecodable_update_bodies_leave_the_employee_untouched() {
    let app = app();
    let created = create(&app, r#"{"name":"Ana","salary":50000,"age":30}"#).await;
    let id = created.id.clone().unwrap();

    let (status, _) = send(
        &app,
        json_request("PUT", &format!("/employee/{id}"), "{not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(list(&app).await, vec![created]);
}

#[tokio::test]
async fn deleted_employees_stay_gone() {
    let app = app();
    let created = create(&app, r#"{"name":"Ana","salary":50000,"age":30}"#).await;
    let id = created.id.unwrap();

    let (status, body) = send(&app, bare_request("DELETE", &format!("/employee/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_slice::<String>(&body).unwrap(),
        "Record Deleted"
    );

    let (status, _) = send(&app, bare_request("DELETE", &format!("/employee/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn malformed_identifiers_never_reach_the_store() {
    let app = app();
    let created = create(&app, r#"{"name":"Ana","salary":50000,"age":30}"#).await;

    for uri in ["/employee/not-hex", "/employee/0123"] {
        let (status, _) = send(
            &app,
            json_request("PUT", uri, r#"{"name":"Eve","salary":1,"age":1}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, bare_request("DELETE", uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    assert_eq!(list(&app).await, vec![created]);
}

#[tokio::test]
async fn an_employee_lifecycle_runs_end_to_end() {
    let app = app();

    let created = create(&app, r#"{"name":"Ana","salary":50000,"age":30}"#).await;
    let id = created.id.clone().unwrap();

    assert_eq!(list(&app).await, vec![created]);

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/employee/{id}"),
            r#"{"name":"Ana","salary":55000,"age":31}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated: Employee = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated.id.as_deref(), Some(id.as_str()));

    let (status, body) = send(&app, bare_request("DELETE", &format!("/employee/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_slice::<String>(&body).unwrap(),
        "Record Deleted"
    );

    let (status, _) = send(&app, bare_request("DELETE", &format!("/employee/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
