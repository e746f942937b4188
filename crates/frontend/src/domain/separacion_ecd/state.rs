//! Page store: the reducer state in a signal plus the async plumbing around it.
//!
//! Provided as context by the page and read by the filter panel, the actions
//! bar and the table.

use super::api;
use contracts::domain::separacion_ecd::dto::{ActionRequest, ActionResponse};
use contracts::domain::separacion_ecd::summary::{column_stats, status_stats};
use contracts::domain::separacion_ecd::{
    ColumnStats, ProcessAction, SeparacionEcdEvent, SeparacionEcdState, StatusStats, Subcuenta,
    ValidationResult,
};
use contracts::enums::ActionMode;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Sequence of data requests; only the newest response may be applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Token of a new request, superseding every earlier one
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

#[derive(Clone, Copy)]
pub struct SeparacionEcdStore {
    pub state: RwSignal<SeparacionEcdState>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Text of the search box
    pub search: RwSignal<String>,
    requests: StoredValue<RequestSeq>,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Intent body; carries the range the selection was made on
pub fn action_request(
    ids: Vec<String>,
    actions: &[ProcessAction],
    start_date: &str,
    end_date: &str,
) -> ActionRequest {
    ActionRequest {
        ids,
        actions: actions.iter().map(|a| a.name().to_string()).collect(),
        start_date: non_empty(start_date),
        end_date: non_empty(end_date),
    }
}

/// Banner text for accounts the server refused, `None` when all were accepted
pub fn rejection_message(response: &ActionResponse) -> Option<String> {
    if response.rejected.is_empty() {
        return None;
    }
    let details: Vec<String> = response
        .rejected
        .iter()
        .map(|r| match r.reason.as_deref() {
            Some(reason) => format!("{} ({})", r.account_code, reason),
            None => r.account_code.clone(),
        })
        .collect();
    Some(format!(
        "No se pudo {} {} subcuenta(s): {}",
        response.mode.verb().to_lowercase(),
        response.rejected.len(),
        details.join("; ")
    ))
}

impl SeparacionEcdStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SeparacionEcdState::default()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            search: RwSignal::new(String::new()),
            requests: StoredValue::new(RequestSeq::default()),
        }
    }

    /// Fetch the dataset for the current range.
    ///
    /// A response that arrives after a newer request was started is dropped.
    pub fn load(&self) {
        let store = *self;
        let (start, end) = self
            .state
            .with_untracked(|s| (s.start_date.clone(), s.end_date.clone()));
        let mut token = 0;
        store.requests.update_value(|seq| token = seq.next());
        store.loading.set(true);
        store.error.set(None);

        spawn_local(async move {
            let result = api::fetch_data(&start, &end).await;
            if !store.requests.with_value(|seq| seq.is_current(token)) {
                log::debug!("separacion_ecd: dropped stale response #{}", token);
                return;
            }
            match result {
                Ok(data) => {
                    log::debug!(
                        "separacion_ecd: loaded {} subcuentas ({} - {})",
                        data.subcuentas.len(),
                        data.start_date,
                        data.end_date
                    );
                    store.dispatch(SeparacionEcdEvent::ReplaceData(data));
                }
                Err(e) => {
                    log::error!("separacion_ecd: failed to load data: {}", e);
                    store.error.set(Some(e));
                }
            }
            store.loading.set(false);
        });
    }

    pub fn dispatch(&self, event: SeparacionEcdEvent) {
        self.state.update(|s| s.apply(event));
    }

    /// Store the new range and reload
    pub fn set_date_range(&self, start: String, end: String) {
        self.dispatch(SeparacionEcdEvent::SetDateRange { start, end });
        self.load();
    }

    /// Rows matching the search box
    pub fn visible(&self) -> Vec<Subcuenta> {
        let query = self.search.get();
        self.state.with(|s| s.visible(&query))
    }

    pub fn stats(&self) -> StatusStats {
        self.state.with(|s| status_stats(&s.subcuentas))
    }

    pub fn column_stats(&self) -> Vec<ColumnStats> {
        self.state.with(|s| column_stats(&s.subcuentas))
    }

    pub fn validate(&self, actions: &[ProcessAction], mode: ActionMode) -> Vec<ValidationResult> {
        self.state.with_untracked(|s| s.validate(actions, mode))
    }

    pub async fn execute_action(
        &self,
        ids: Vec<String>,
        actions: &[ProcessAction],
    ) -> Result<ActionResponse, String> {
        self.submit(ActionMode::Execute, ids, actions).await
    }

    pub async fn delete_action(
        &self,
        ids: Vec<String>,
        actions: &[ProcessAction],
    ) -> Result<ActionResponse, String> {
        self.submit(ActionMode::Delete, ids, actions).await
    }

    /// Post an intent; ids the server refuses end up in the error banner
    async fn submit(
        &self,
        mode: ActionMode,
        ids: Vec<String>,
        actions: &[ProcessAction],
    ) -> Result<ActionResponse, String> {
        let request = self
            .state
            .with_untracked(|s| action_request(ids, actions, &s.start_date, &s.end_date));
        log::info!(
            "separacion_ecd: {} {:?} on {:?}",
            mode,
            request.actions,
            request.ids
        );
        let response = match mode {
            ActionMode::Execute => api::execute(&request).await?,
            ActionMode::Delete => api::delete(&request).await?,
        };
        log::info!(
            "separacion_ecd: batch {} accepted {}, rejected {}",
            response.batch_id,
            response.accepted.len(),
            response.rejected.len()
        );
        if let Some(message) = rejection_message(&response) {
            log::warn!("separacion_ecd: {}", message);
            self.error.set(Some(message));
        }
        Ok(response)
    }
}

impl Default for SeparacionEcdStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_store() -> SeparacionEcdStore {
    let store = SeparacionEcdStore::new();
    provide_context(store);
    store
}

pub fn use_store() -> SeparacionEcdStore {
    use_context::<SeparacionEcdStore>().expect("SeparacionEcdStore not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn response(rejected: Vec<ValidationResult>) -> ActionResponse {
        ActionResponse {
            batch_id: Uuid::nil(),
            mode: ActionMode::Delete,
            accepted: vec!["1".into()],
            rejected,
        }
    }

    #[test]
    fn test_action_request_uses_display_names_and_range() {
        let request = action_request(
            vec!["1".into(), "5".into()],
            &[ProcessAction::TablasMem, ProcessAction::Revision],
            "01/02/2025",
            "28/02/2025",
        );
        assert_eq!(request.ids, vec!["1", "5"]);
        assert_eq!(
            request.actions,
            vec!["Ejecución de Tablas MEM".to_string(), "Revisión".to_string()]
        );
        assert_eq!(request.start_date.as_deref(), Some("01/02/2025"));
        assert_eq!(request.end_date.as_deref(), Some("28/02/2025"));
    }

    #[test]
    fn test_action_request_leaves_empty_range_to_server() {
        let request = action_request(vec!["1".into()], &[ProcessAction::Revision], "", " ");
        assert_eq!(request.start_date, None);
        assert_eq!(request.end_date, None);
    }

    #[test]
    fn test_rejection_message() {
        assert_eq!(rejection_message(&response(Vec::new())), None);

        let message = rejection_message(&response(vec![ValidationResult {
            account_id: "3".into(),
            account_code: "SUB-003".into(),
            is_valid: false,
            reason: Some("ECD Dataset en progreso, no se puede eliminar".into()),
        }]))
        .unwrap();
        assert_eq!(
            message,
            "No se pudo eliminar 1 subcuenta(s): SUB-003 (ECD Dataset en progreso, no se puede eliminar)"
        );
    }

    #[test]
    fn test_request_seq_only_latest_is_current() {
        let mut seq = RequestSeq::default();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
