use chrono::NaiveDate;
use contracts::domain::separacion_ecd::dto::{
    ActionRequest, ActionResponse, SeparacionEcdQuery, ValidateRequest,
};
use contracts::domain::separacion_ecd::summary::status_stats;
use contracts::domain::separacion_ecd::validation::validate_by_names;
use contracts::domain::separacion_ecd::{SeparacionEcdData, Subcuenta, ValidationResult};
use contracts::enums::ActionMode;
use contracts::shared::date_input::{parse_date, to_storage};
use thiserror::Error;
use uuid::Uuid;

use super::data_source::ProcessDataSource;
use crate::shared::config::DataConfig;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Fecha inválida: '{0}'")]
    InvalidDate(String),
    #[error("La fecha de inicio {start} es posterior a la fecha de fin {end}")]
    InvalidRange { start: String, end: String },
    #[error("No hay subcuentas seleccionadas")]
    EmptySelection,
    #[error("Error al obtener los datos: {0}")]
    Source(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

fn parse_or_default(value: Option<&str>, default: &str) -> Result<NaiveDate, ServiceError> {
    let value = value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default);
    parse_date(value).map_err(|_| ServiceError::InvalidDate(value.to_string()))
}

/// Range of a request; missing or empty dates take the configured defaults
pub fn resolve_range(
    query: &SeparacionEcdQuery,
    defaults: &DataConfig,
) -> Result<DateRange, ServiceError> {
    let start = parse_or_default(query.start_date.as_deref(), &defaults.start_date)?;
    let end = parse_or_default(query.end_date.as_deref(), &defaults.end_date)?;
    if start > end {
        return Err(ServiceError::InvalidRange {
            start: to_storage(start),
            end: to_storage(end),
        });
    }
    Ok(DateRange { start, end })
}

/// Table payload for the requested range
pub async fn get_data(
    source: &dyn ProcessDataSource,
    defaults: &DataConfig,
    query: &SeparacionEcdQuery,
) -> Result<SeparacionEcdData, ServiceError> {
    let range = resolve_range(query, defaults)?;
    let subcuentas = source.fetch(range.start, range.end).await?;
    let progress = status_stats(&subcuentas).completed_pct();

    Ok(SeparacionEcdData {
        start_date: to_storage(range.start),
        end_date: to_storage(range.end),
        subcuentas,
        progress,
    })
}

/// Rows of the range the client selected from
async fn rows_for(
    source: &dyn ProcessDataSource,
    defaults: &DataConfig,
    range: &SeparacionEcdQuery,
) -> Result<Vec<Subcuenta>, ServiceError> {
    let range = resolve_range(range, defaults)?;
    Ok(source.fetch(range.start, range.end).await?)
}

/// Run the validation engine against the dataset of the request's range
pub async fn validate(
    source: &dyn ProcessDataSource,
    defaults: &DataConfig,
    request: &ValidateRequest,
) -> Result<Vec<ValidationResult>, ServiceError> {
    if request.ids.is_empty() {
        return Err(ServiceError::EmptySelection);
    }
    let rows = rows_for(source, defaults, &request.range()).await?;
    Ok(validate_by_names(&rows, &request.ids, &request.actions, request.mode))
}

/// Record an execute/delete intent.
///
/// Eligibility is checked again here; accepted ids are only logged.
pub async fn submit(
    source: &dyn ProcessDataSource,
    defaults: &DataConfig,
    request: &ActionRequest,
    mode: ActionMode,
) -> Result<ActionResponse, ServiceError> {
    if request.ids.is_empty() {
        return Err(ServiceError::EmptySelection);
    }

    let rows = rows_for(source, defaults, &request.range()).await?;
    let results = validate_by_names(&rows, &request.ids, &request.actions, mode);
    let (accepted, rejected): (Vec<ValidationResult>, Vec<ValidationResult>) =
        results.into_iter().partition(|r| r.is_valid);
    let accepted: Vec<String> = accepted.into_iter().map(|r| r.account_id).collect();

    let batch_id = Uuid::new_v4();
    tracing::info!(
        "Separación ECD: {} batch {} accepted {:?} for actions {:?}",
        mode,
        batch_id,
        accepted,
        request.actions
    );
    for r in &rejected {
        tracing::warn!(
            "Separación ECD: {} batch {} rejected {} ({}): {}",
            mode,
            batch_id,
            r.account_code,
            r.account_id,
            r.reason.as_deref().unwrap_or("")
        );
    }

    Ok(ActionResponse {
        batch_id,
        mode,
        accepted,
        rejected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::separacion_ecd::data_source::MockDataSource;
    use async_trait::async_trait;
    use contracts::domain::separacion_ecd::aggregate::StatusColumns;
    use contracts::domain::separacion_ecd::columns::ECD_DATASET;
    use contracts::domain::separacion_ecd::validation::validate as validate_rows;
    use contracts::domain::separacion_ecd::{ProcessAction, StatusCell};
    use contracts::enums::ProcessStatus;
    use chrono::Datelike;

    /// One account whose dataset step is done only from February on
    struct MonthlySource;

    #[async_trait]
    impl ProcessDataSource for MonthlySource {
        async fn fetch(&self, start: NaiveDate, _end: NaiveDate) -> anyhow::Result<Vec<Subcuenta>> {
            let status = if start.month() >= 2 {
                ProcessStatus::Success
            } else {
                ProcessStatus::Pending
            };
            let mut columns = StatusColumns::new();
            columns.insert(ECD_DATASET.to_string(), StatusCell::single(status));
            Ok(vec![Subcuenta {
                id: "1".into(),
                code: "SUB-001".into(),
                is_expanded: false,
                is_selected: false,
                columns,
                clients: Vec::new(),
            }])
        }
    }

    fn defaults() -> DataConfig {
        DataConfig {
            start_date: "01/01/2025".into(),
            end_date: "31/01/2025".into(),
        }
    }

    fn query(start: Option<&str>, end: Option<&str>) -> SeparacionEcdQuery {
        SeparacionEcdQuery {
            start_date: start.map(String::from),
            end_date: end.map(String::from),
        }
    }

    #[test]
    fn test_resolve_range_defaults_and_formats() {
        let range = resolve_range(&SeparacionEcdQuery::default(), &defaults()).unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());

        let range = resolve_range(&query(Some("2025-02-01"), Some("")), &defaults());
        assert!(matches!(range, Err(ServiceError::InvalidRange { .. })));

        let range = resolve_range(&query(Some("2025-01-10"), Some("15/01/2025")), &defaults()).unwrap();
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn test_resolve_range_rejects_bad_date() {
        let err = resolve_range(&query(Some("32/01/2025"), None), &defaults()).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidDate(ref v) if v == "32/01/2025"));
    }

    #[tokio::test]
    async fn test_get_data_echoes_range_and_progress() {
        let data = get_data(&MockDataSource, &defaults(), &query(Some("2025-01-05"), None))
            .await
            .unwrap();
        assert_eq!(data.start_date, "05/01/2025");
        assert_eq!(data.end_date, "31/01/2025");
        assert_eq!(data.progress, status_stats(&data.subcuentas).completed_pct());
        assert!(!data.subcuentas.is_empty());
    }

    #[tokio::test]
    async fn test_validate_requires_selection() {
        let request = ValidateRequest {
            ids: Vec::new(),
            actions: vec![ProcessAction::TablasMem.name().to_string()],
            mode: ActionMode::Execute,
            start_date: None,
            end_date: None,
        };
        let err = validate(&MockDataSource, &defaults(), &request).await.unwrap_err();
        assert!(matches!(err, ServiceError::EmptySelection));
    }

    #[tokio::test]
    async fn test_validate_tablas_mem() {
        // SUB-001 has ecd_dataset done, SUB-002 pending, "99" does not exist
        let request = ValidateRequest {
            ids: vec!["2".into(), "99".into(), "1".into()],
            actions: vec![ProcessAction::TablasMem.name().to_string()],
            mode: ActionMode::Execute,
            start_date: None,
            end_date: None,
        };
        let results = validate(&MockDataSource, &defaults(), &request).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].account_id, "2");
        assert!(!results[0].is_valid);
        assert!(results[0]
            .reason
            .as_deref()
            .unwrap()
            .contains("ECD Dataset no está completado"));
        assert!(results[1].is_valid);
    }

    #[tokio::test]
    async fn test_submit_splits_accepted_and_rejected() {
        // SUB-004 medicion in progress blocks delete
        let request = ActionRequest {
            ids: vec!["1".into(), "4".into()],
            actions: vec![ProcessAction::SegregacionMediciones.name().to_string()],
            start_date: None,
            end_date: None,
        };
        let response = submit(&MockDataSource, &defaults(), &request, ActionMode::Delete)
            .await
            .unwrap();
        assert_eq!(response.mode, ActionMode::Delete);
        assert_eq!(response.accepted, vec!["1".to_string()]);
        assert_eq!(response.rejected.len(), 1);
        assert_eq!(response.rejected[0].account_code, "SUB-004");
    }

    #[tokio::test]
    async fn test_submit_checks_the_requested_range() {
        let data = get_data(
            &MonthlySource,
            &defaults(),
            &query(Some("01/02/2025"), Some("28/02/2025")),
        )
        .await
        .unwrap();
        let ids = vec!["1".to_string()];
        let local = validate_rows(
            &data.subcuentas,
            &ids,
            &[ProcessAction::TablasMem],
            ActionMode::Execute,
        );
        assert!(local[0].is_valid);

        let request = ActionRequest {
            ids: ids.clone(),
            actions: vec![ProcessAction::TablasMem.name().to_string()],
            start_date: Some(data.start_date.clone()),
            end_date: Some(data.end_date.clone()),
        };
        let response = submit(&MonthlySource, &defaults(), &request, ActionMode::Execute)
            .await
            .unwrap();
        assert_eq!(response.accepted, ids);
        assert!(response.rejected.is_empty());

        // Without dates the configured January range applies
        let request = ActionRequest {
            start_date: None,
            end_date: None,
            ..request
        };
        let response = submit(&MonthlySource, &defaults(), &request, ActionMode::Execute)
            .await
            .unwrap();
        assert!(response.accepted.is_empty());
        assert_eq!(response.rejected.len(), 1);
    }

    #[tokio::test]
    async fn test_validate_uses_the_requested_range() {
        let request = ValidateRequest {
            ids: vec!["1".into()],
            actions: vec![ProcessAction::TablasMem.name().to_string()],
            mode: ActionMode::Execute,
            start_date: Some("2025-02-01".into()),
            end_date: Some("2025-02-28".into()),
        };
        let results = validate(&MonthlySource, &defaults(), &request).await.unwrap();
        assert!(results[0].is_valid);

        let reversed = ValidateRequest {
            start_date: Some("2025-02-28".into()),
            end_date: Some("2025-02-01".into()),
            ..request
        };
        let err = validate(&MonthlySource, &defaults(), &reversed).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRange { .. }));
    }
}
