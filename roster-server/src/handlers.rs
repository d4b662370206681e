//! Employee resource handlers and router assembly.
//!
//! Four operations over one collection: list, create, update by identifier,
//! delete by identifier. Handlers are stateless between requests; the only
//! shared resource is the injected [`DocumentStore`], which is safe for
//! concurrent use. Each handler validates its inputs before any store access
//! and returns on the first terminal condition.
//!
//! Request bodies are read raw and decoded here rather than through an
//! extractor, so every decode failure surfaces as status 400 with the
//! decoder's message as the body.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use bson::oid::ObjectId;
use tower_http::trace::TraceLayer;

use roster_core::{backend::StoreBackend, document::Document, store::DocumentStore};

use crate::{employee::Employee, error::ApiError};

/// Builds the employee router over the given store.
pub fn router<B: StoreBackend + 'static>(store: Arc<DocumentStore<B>>) -> Router {
    Router::new()
        .route(
            "/employee",
            get(list_employees::<B>).post(create_employee::<B>),
        )
        .route(
            "/employee/:id",
            put(update_employee::<B>).delete(delete_employee::<B>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// GET /employee: the full collection as a JSON array.
async fn list_employees<B: StoreBackend>(
    State(store): State<Arc<DocumentStore<B>>>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = store.collection::<Employee>().all().await?;

    Ok(Json(employees))
}

/// POST /employee: decode, insert, and re-read the canonical stored form.
///
/// Any identifier in the body is discarded so the store assigns a fresh one.
async fn create_employee<B: StoreBackend>(
    State(store): State<Arc<DocumentStore<B>>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let mut employee = decode_employee(&body)?;
    employee.id = None;

    let employees = store.collection::<Employee>();
    let id = employees.insert(&employee).await?;
    let created = employees
        .get(id)
        .await?
        .ok_or_else(|| ApiError::ReadBackFailed(id.to_hex()))?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /employee/:id: replaces name, salary, and age of the addressed document.
///
/// The response echoes the request entity with the path identifier attached.
async fn update_employee<B: StoreBackend>(
    State(store): State<Arc<DocumentStore<B>>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Employee>, ApiError> {
    let id = parse_id(&id)?;
    let employee = decode_employee(&body)?;

    if !store.collection::<Employee>().update(id, &employee).await? {
        return Err(ApiError::UnknownId(id.to_hex()));
    }

    Ok(Json(employee.with_id(id)))
}

/// DELETE /employee/:id: removes the addressed document.
async fn delete_employee<B: StoreBackend>(
    State(store): State<Arc<DocumentStore<B>>>,
    Path(id): Path<String>,
) -> Result<Json<&'static str>, ApiError> {
    let id = parse_id(&id)?;

    if store.collection::<Employee>().delete(id).await? == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(Json("Record Deleted"))
}

/// Validates a path identifier before any store access happens.
fn parse_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|e| ApiError::InvalidId(e.to_string()))
}

/// Decodes a request body into an employee; any failure is a client error.
fn decode_employee(body: &Bytes) -> Result<Employee, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}
