//! Record endpoints: existence check, update, read, delete, create.
//!
//! "Nothing matched" outcomes are normal 200 responses with
//! `success: false`; only validation and store failures become errors.

use crate::error::{ApiError, ApiResult, OperationContext};
use crate::extract::{OperationRequest, RequestBody};
use crate::operation::Operation;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use roster_core::{Record, normalize_lookup_name};
use roster_store::RecordRow;
use serde::{Deserialize, Serialize};

const NAME_NOT_FOUND: &str = "Name not found!";
const UPDATED: &str = "Data updated successfully!";
const NO_DATA: &str = "No data found.";
const DELETED: &str = "Record deleted successfully!";
const NOTHING_TO_DELETE: &str = "No record found with this name.";
const INSERTED: &str = "Data inserted successfully!";

/// Response envelope for every operation except create.
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<RecordRow>>,
}

impl RecordResponse {
    fn ok() -> Self {
        Self {
            success: true,
            message: None,
            data: None,
        }
    }

    fn ok_with(message: &'static str) -> Self {
        Self {
            message: Some(message),
            ..Self::ok()
        }
    }

    fn rows(data: Vec<RecordRow>) -> Self {
        Self {
            data: Some(data),
            ..Self::ok()
        }
    }

    fn unmatched(message: &'static str) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

/// Response for create: a bare message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Body of POST /proceed.
#[derive(Debug, Deserialize)]
pub struct CheckExistsRequest {
    pub oldname: Option<String>,
}

impl OperationRequest for CheckExistsRequest {
    const OPERATION: Operation = Operation::CheckExists;
}

/// Body of POST /update. `oldname` selects the rows to overwrite.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub oldname: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub state: Option<String>,
}

impl OperationRequest for UpdateRequest {
    const OPERATION: Operation = Operation::Update;
}

/// Body of POST /delete.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub name: Option<String>,
}

impl OperationRequest for DeleteRequest {
    const OPERATION: Operation = Operation::Delete;
}

/// Body of POST /create. Absent or null fields count as empty and fail
/// validation.
#[derive(Debug, Default, Deserialize)]
pub struct CreateRequest {
    pub name: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub state: Option<String>,
}

impl OperationRequest for CreateRequest {
    const OPERATION: Operation = Operation::Create;
}

fn required(
    value: Option<String>,
    operation: Operation,
    field: &'static str,
) -> ApiResult<String> {
    value.ok_or(ApiError::MissingField { operation, field })
}

/// POST /proceed - Check whether any record has the given name.
pub async fn check_exists(
    State(state): State<AppState>,
    RequestBody(body): RequestBody<CheckExistsRequest>,
) -> ApiResult<Json<RecordResponse>> {
    let operation = Operation::CheckExists;
    let oldname = normalize_lookup_name(&required(body.oldname, operation, "oldname")?);

    let exists = state
        .store
        .record_exists(&oldname)
        .await
        .during(operation)?;

    if !exists {
        return Ok(Json(RecordResponse::unmatched(NAME_NOT_FOUND)));
    }

    Ok(Json(RecordResponse::ok()))
}

/// POST /update - Overwrite every record named `oldname`.
///
/// The new values go through the same normalization and character rules as
/// create.
pub async fn update_record(
    State(state): State<AppState>,
    RequestBody(body): RequestBody<UpdateRequest>,
) -> ApiResult<Json<RecordResponse>> {
    let operation = Operation::Update;
    let oldname = required(body.oldname, operation, "oldname")?;
    if oldname.is_empty() {
        return Err(ApiError::MissingField {
            operation,
            field: "oldname",
        });
    }
    let oldname = normalize_lookup_name(&oldname);

    let record = Record::parse(
        body.name.as_deref().unwrap_or_default(),
        body.city.as_deref().unwrap_or_default(),
        body.address.as_deref().unwrap_or_default(),
        body.state.as_deref().unwrap_or_default(),
    )
    .during(operation)?;

    let updated = state
        .store
        .update_records_by_name(&oldname, &RecordRow::from(record))
        .await
        .during(operation)?;

    if updated == 0 {
        return Ok(Json(RecordResponse::unmatched(NAME_NOT_FOUND)));
    }

    tracing::info!(rows = updated, "Records updated");
    Ok(Json(RecordResponse::ok_with(UPDATED)))
}

/// GET /read - List every record.
pub async fn read_records(State(state): State<AppState>) -> ApiResult<Json<RecordResponse>> {
    let rows = state.store.list_records().await.during(Operation::Read)?;

    if rows.is_empty() {
        return Ok(Json(RecordResponse::unmatched(NO_DATA)));
    }

    Ok(Json(RecordResponse::rows(rows)))
}

/// POST /delete - Delete every record with the given name.
pub async fn delete_record(
    State(state): State<AppState>,
    RequestBody(body): RequestBody<DeleteRequest>,
) -> ApiResult<Json<RecordResponse>> {
    let operation = Operation::Delete;
    let name = normalize_lookup_name(&required(body.name, operation, "name")?);

    let deleted = state
        .store
        .delete_records_by_name(&name)
        .await
        .during(operation)?;

    if deleted == 0 {
        return Ok(Json(RecordResponse::unmatched(NOTHING_TO_DELETE)));
    }

    tracing::info!(rows = deleted, "Records deleted");
    Ok(Json(RecordResponse::ok_with(DELETED)))
}

/// POST /create - Insert a new record.
pub async fn create_record(
    State(state): State<AppState>,
    RequestBody(body): RequestBody<CreateRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let operation = Operation::Create;
    let record = Record::parse(
        body.name.as_deref().unwrap_or_default(),
        body.city.as_deref().unwrap_or_default(),
        body.address.as_deref().unwrap_or_default(),
        body.state.as_deref().unwrap_or_default(),
    )
    .during(operation)?;

    state
        .store
        .insert_record(&RecordRow::from(record))
        .await
        .during(operation)?;

    tracing::info!("Record inserted");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse { message: INSERTED }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_response_shape() {
        let json = serde_json::to_value(RecordResponse::unmatched(NO_DATA)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "No data found."})
        );
    }

    #[test]
    fn test_ok_response_has_only_success() {
        let json = serde_json::to_value(RecordResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"success": true}));
    }

    #[test]
    fn test_create_request_treats_missing_and_null_alike() {
        let body: CreateRequest =
            serde_json::from_str(r#"{"name":"john","city":null}"#).unwrap();
        assert_eq!(body.name.as_deref(), Some("john"));
        assert!(body.city.is_none());
        assert!(body.state.is_none());
    }
}
