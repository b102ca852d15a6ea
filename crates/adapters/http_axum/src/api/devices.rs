//! JSON REST handlers for devices and parameter writes.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use hearth_app::ports::{DeviceDriver, DeviceRegistry, EventPublisher, ValueStore};
use hearth_domain::device::Device;
use hearth_domain::error::{HearthError, ValidationError};
use hearth_domain::id::DeviceId;
use hearth_domain::value::ParamValue;
use hearth_domain::write::{WriteBatch, WriteReport, WriteSource};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for a batched write.
#[derive(Deserialize)]
pub struct WriteBatchRequest {
    #[serde(default)]
    pub source: WriteSource,
    pub writes: Vec<WriteEntryRequest>,
}

/// One entry of a batched write.
#[derive(Deserialize)]
pub struct WriteEntryRequest {
    pub param: String,
    pub value: ParamValue,
}

/// Request body for a single-parameter write.
#[derive(Deserialize)]
pub struct SingleWriteRequest {
    pub value: ParamValue,
    #[serde(default)]
    pub source: WriteSource,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Device>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the write endpoints.
pub enum WriteResponse {
    Ok(Json<WriteReport>),
}

impl IntoResponse for WriteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_device_id(id: &str) -> Result<DeviceId, ApiError> {
    DeviceId::from_str(id)
        .map_err(|_| ApiError::from(HearthError::from(ValidationError::InvalidId(id.to_string()))))
}

/// `GET /api/devices`
pub async fn list<R, D, VS, EP>(
    State(state): State<AppState<R, D, VS, EP>>,
) -> Result<ListResponse, ApiError>
where
    R: DeviceRegistry + Send + Sync + 'static,
    D: DeviceDriver + Send + Sync + 'static,
    VS: ValueStore + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /api/devices/{id}`
pub async fn get<R, D, VS, EP>(
    State(state): State<AppState<R, D, VS, EP>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: DeviceRegistry + Send + Sync + 'static,
    D: DeviceDriver + Send + Sync + 'static,
    VS: ValueStore + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let device_id = parse_device_id(&id)?;
    let device = state.device_service.get_device(device_id).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `POST /api/devices/{id}/write`
///
/// Applies an ordered write batch and returns the per-entry report.
/// Rejected entries are reported in the body; the response is still `200`
/// because the batch itself was processed.
pub async fn write<R, D, VS, EP>(
    State(state): State<AppState<R, D, VS, EP>>,
    Path(id): Path<String>,
    Json(req): Json<WriteBatchRequest>,
) -> Result<WriteResponse, ApiError>
where
    R: DeviceRegistry + Send + Sync + 'static,
    D: DeviceDriver + Send + Sync + 'static,
    VS: ValueStore + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let device_id = parse_device_id(&id)?;

    let mut batch = WriteBatch::new(req.source);
    for entry in req.writes {
        batch = batch.with(entry.param, entry.value);
    }

    let report = state.dispatcher.dispatch(device_id, batch).await?;
    Ok(WriteResponse::Ok(Json(report)))
}

/// `PUT /api/devices/{id}/params/{param}`
///
/// Single-parameter variant of the write endpoint.
pub async fn write_param<R, D, VS, EP>(
    State(state): State<AppState<R, D, VS, EP>>,
    Path((id, param)): Path<(String, String)>,
    Json(req): Json<SingleWriteRequest>,
) -> Result<WriteResponse, ApiError>
where
    R: DeviceRegistry + Send + Sync + 'static,
    D: DeviceDriver + Send + Sync + 'static,
    VS: ValueStore + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let device_id = parse_device_id(&id)?;
    let report = state
        .dispatcher
        .dispatch_single(device_id, &param, req.value, req.source)
        .await?;
    Ok(WriteResponse::Ok(Json(report)))
}
