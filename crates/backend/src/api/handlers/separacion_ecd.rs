use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use contracts::domain::separacion_ecd::actions::ProcessActionInfo;
use contracts::domain::separacion_ecd::columns::PROCESS_COLUMNS;
use contracts::domain::separacion_ecd::dto::{
    ActionRequest, ActionResponse, ErrorBody, SeparacionEcdQuery, ValidateRequest,
};
use contracts::domain::separacion_ecd::{
    ProcessAction, ProcessColumn, SeparacionEcdData, ValidationResult,
};
use contracts::enums::ActionMode;

use crate::domain::separacion_ecd::service::{self, ServiceError};
use crate::routes::AppState;

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(e: ServiceError) -> ApiError {
    let status = match e {
        ServiceError::InvalidDate(_)
        | ServiceError::InvalidRange { .. }
        | ServiceError::EmptySelection => StatusCode::BAD_REQUEST,
        ServiceError::Source(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!("Separación ECD: {}", e);
    } else {
        tracing::warn!("Separación ECD: {}", e);
    }
    (status, Json(ErrorBody { error: e.to_string() }))
}

/// GET /api/separacion-ecd?start_date=01/01/2025&end_date=31/01/2025
pub async fn get_data(
    State(state): State<AppState>,
    Query(query): Query<SeparacionEcdQuery>,
) -> Result<Json<SeparacionEcdData>, ApiError> {
    tracing::info!(
        "Separación ECD: loading data for {:?} - {:?}",
        query.start_date,
        query.end_date
    );

    let data = service::get_data(state.source.as_ref(), &state.data, &query)
        .await
        .map_err(api_error)?;

    tracing::info!(
        "Separación ECD: returning {} subcuentas, progress {}%",
        data.subcuentas.len(),
        data.progress
    );
    Ok(Json(data))
}

/// GET /api/separacion-ecd/columns
pub async fn list_columns() -> Json<Vec<ProcessColumn>> {
    Json(PROCESS_COLUMNS.to_vec())
}

/// GET /api/separacion-ecd/actions
pub async fn list_actions() -> Json<Vec<ProcessActionInfo>> {
    Json(ProcessAction::all().into_iter().map(ProcessActionInfo::from).collect())
}

/// POST /api/separacion-ecd/validate
pub async fn validate(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<Vec<ValidationResult>>, ApiError> {
    let results = service::validate(state.source.as_ref(), &state.data, &request)
        .await
        .map_err(api_error)?;
    tracing::info!(
        "Separación ECD: validated {} subcuentas for {}, {} valid",
        results.len(),
        request.mode,
        results.iter().filter(|r| r.is_valid).count()
    );
    Ok(Json(results))
}

/// POST /api/separacion-ecd/execute
pub async fn execute(
    State(state): State<AppState>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    submit(state, request, ActionMode::Execute).await
}

/// POST /api/separacion-ecd/delete
pub async fn delete(
    State(state): State<AppState>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    submit(state, request, ActionMode::Delete).await
}

async fn submit(
    state: AppState,
    request: ActionRequest,
    mode: ActionMode,
) -> Result<Json<ActionResponse>, ApiError> {
    service::submit(state.source.as_ref(), &state.data, &request, mode)
        .await
        .map(Json)
        .map_err(api_error)
}
