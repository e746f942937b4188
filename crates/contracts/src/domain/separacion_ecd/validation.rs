use super::actions::ProcessAction;
use super::aggregate::Subcuenta;
use crate::enums::ActionMode;
use serde::{Deserialize, Serialize};

/// Verdict for one selected account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub account_id: String,
    pub account_code: String,
    pub is_valid: bool,
    /// Failure messages of every rejecting action, joined with ", "
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Validate the selected accounts against the chosen actions.
///
/// One result per selected id, in selection order. Ids that match no account
/// are skipped.
pub fn validate<'a, I>(
    accounts: &[Subcuenta],
    selected_ids: I,
    actions: &[ProcessAction],
    mode: ActionMode,
) -> Vec<ValidationResult>
where
    I: IntoIterator<Item = &'a String>,
{
    selected_ids
        .into_iter()
        .filter_map(|id| accounts.iter().find(|a| &a.id == id))
        .map(|account| validate_account(account, actions, mode))
        .collect()
}

/// Same as [`validate`] but takes action names; unknown names are ignored
pub fn validate_by_names<'a, I>(
    accounts: &[Subcuenta],
    selected_ids: I,
    action_names: &[String],
    mode: ActionMode,
) -> Vec<ValidationResult>
where
    I: IntoIterator<Item = &'a String>,
{
    let actions: Vec<ProcessAction> = action_names
        .iter()
        .filter_map(|name| ProcessAction::from_name(name))
        .collect();
    validate(accounts, selected_ids, &actions, mode)
}

pub fn validate_account(
    account: &Subcuenta,
    actions: &[ProcessAction],
    mode: ActionMode,
) -> ValidationResult {
    let reasons: Vec<String> = actions
        .iter()
        .filter_map(|action| {
            action
                .check(account.status_of(action.column_id()), mode)
                .err()
        })
        .collect();

    ValidationResult {
        account_id: account.id.clone(),
        account_code: account.code.clone(),
        is_valid: reasons.is_empty(),
        reason: if reasons.is_empty() {
            None
        } else {
            Some(reasons.join(", "))
        },
    }
}

/// What the confirmation modal shows for a batch of results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationSummary {
    pub mode: ActionMode,
    pub total: usize,
    pub valid_ids: Vec<String>,
    pub invalid: Vec<ValidationResult>,
}

impl ConfirmationSummary {
    pub fn new(results: &[ValidationResult], mode: ActionMode) -> Self {
        let (valid, invalid): (Vec<&ValidationResult>, Vec<&ValidationResult>) =
            results.iter().partition(|r| r.is_valid);
        Self {
            mode,
            total: results.len(),
            valid_ids: valid.into_iter().map(|r| r.account_id.clone()).collect(),
            invalid: invalid.into_iter().cloned().collect(),
        }
    }

    pub fn valid_count(&self) -> usize {
        self.valid_ids.len()
    }

    pub fn excluded_count(&self) -> usize {
        self.invalid.len()
    }

    /// Confirm is blocked only when nothing is eligible
    pub fn can_confirm(&self) -> bool {
        !self.valid_ids.is_empty()
    }

    pub fn confirm_label(&self) -> String {
        if !self.can_confirm() {
            "Sin subcuentas válidas".to_string()
        } else if self.invalid.is_empty() {
            self.mode.verb().to_string()
        } else {
            let n = self.valid_count();
            format!(
                "{} {} válida{}",
                self.mode.verb(),
                n,
                if n == 1 { "" } else { "s" }
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::separacion_ecd::aggregate::{StatusCell, StatusColumns};
    use crate::domain::separacion_ecd::columns::{ECD_DATASET, MEDICION};
    use crate::enums::ProcessStatus;

    fn account(id: &str, cells: &[(&str, ProcessStatus)]) -> Subcuenta {
        let mut columns = StatusColumns::new();
        for (col, status) in cells {
            columns.insert(col.to_string(), StatusCell::single(*status));
        }
        Subcuenta {
            id: id.to_string(),
            code: format!("SUB-{}", id),
            is_expanded: false,
            is_selected: false,
            columns,
            clients: Vec::new(),
        }
    }

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_error_medicion_blocks_segregation() {
        let accounts = vec![account("1", &[(MEDICION, ProcessStatus::Error)])];
        let results = validate(
            &accounts,
            &ids(&["1"]),
            &[ProcessAction::SegregacionMediciones],
            ActionMode::Execute,
        );
        assert_eq!(results.len(), 1);
        assert!(!results[0].is_valid);
        assert_eq!(results[0].reason.as_deref(), Some("Medición con error"));
    }

    #[test]
    fn test_missing_column_execute_vs_delete() {
        let accounts = vec![account("1", &[])];
        let selected = ids(&["1"]);

        let exec = validate(&accounts, &selected, &[ProcessAction::TablasMem], ActionMode::Execute);
        assert!(!exec[0].is_valid);
        assert!(exec[0].reason.as_deref().unwrap().contains("Sin datos"));

        let del = validate(&accounts, &selected, &[ProcessAction::TablasMem], ActionMode::Delete);
        assert!(del[0].is_valid);
        assert_eq!(del[0].reason, None);
    }

    #[test]
    fn test_three_accounts_one_pending_dataset() {
        let accounts = vec![
            account("1", &[(ECD_DATASET, ProcessStatus::Success)]),
            account("2", &[(ECD_DATASET, ProcessStatus::Pending)]),
            account("3", &[(ECD_DATASET, ProcessStatus::Success)]),
        ];
        let results = validate_by_names(
            &accounts,
            &ids(&["1", "2", "3"]),
            &ids(&["Ejecución de Tablas MEM"]),
            ActionMode::Execute,
        );
        let verdicts: Vec<(&str, bool)> = results
            .iter()
            .map(|r| (r.account_id.as_str(), r.is_valid))
            .collect();
        assert_eq!(verdicts, vec![("1", true), ("2", false), ("3", true)]);
        assert!(results[1]
            .reason
            .as_deref()
            .unwrap()
            .contains("ECD Dataset no está completado"));
    }

    #[test]
    fn test_reasons_joined_in_action_order() {
        let accounts = vec![account("1", &[(MEDICION, ProcessStatus::InProgress)])];
        let results = validate(
            &accounts,
            &ids(&["1"]),
            &[ProcessAction::SegregacionMediciones, ProcessAction::TablasMem],
            ActionMode::Execute,
        );
        assert_eq!(
            results[0].reason.as_deref(),
            Some("Medición en progreso, Sin datos de ECD Dataset")
        );
    }

    #[test]
    fn test_result_order_follows_selection_and_skips_unknown() {
        let accounts = vec![account("1", &[]), account("2", &[])];
        let results = validate(
            &accounts,
            &ids(&["2", "ghost", "1"]),
            &[ProcessAction::Revision],
            ActionMode::Delete,
        );
        let order: Vec<&str> = results.iter().map(|r| r.account_id.as_str()).collect();
        assert_eq!(order, vec!["2", "1"]);
    }

    #[test]
    fn test_unknown_action_names_are_skipped() {
        let accounts = vec![account("1", &[])];
        let results = validate_by_names(
            &accounts,
            &ids(&["1"]),
            &ids(&["No existe"]),
            ActionMode::Execute,
        );
        assert!(results[0].is_valid);
    }

    #[test]
    fn test_summary_all_invalid_disables_confirm() {
        let results = vec![
            ValidationResult {
                account_id: "1".into(),
                account_code: "SUB-1".into(),
                is_valid: false,
                reason: Some("x".into()),
            },
            ValidationResult {
                account_id: "2".into(),
                account_code: "SUB-2".into(),
                is_valid: false,
                reason: Some("y".into()),
            },
        ];
        let summary = ConfirmationSummary::new(&results, ActionMode::Execute);
        assert!(!summary.can_confirm());
        assert_eq!(summary.confirm_label(), "Sin subcuentas válidas");
        assert_eq!(summary.excluded_count(), 2);
    }

    #[test]
    fn test_summary_partial_and_full() {
        let ok = ValidationResult {
            account_id: "1".into(),
            account_code: "SUB-1".into(),
            is_valid: true,
            reason: None,
        };
        let bad = ValidationResult {
            account_id: "2".into(),
            account_code: "SUB-2".into(),
            is_valid: false,
            reason: Some("Oferta con error".into()),
        };

        let partial = ConfirmationSummary::new(&[ok.clone(), bad], ActionMode::Delete);
        assert!(partial.can_confirm());
        assert_eq!(partial.valid_ids, vec!["1".to_string()]);
        assert_eq!(partial.confirm_label(), "Eliminar 1 válida");

        let full = ConfirmationSummary::new(&[ok], ActionMode::Execute);
        assert_eq!(full.confirm_label(), "Ejecutar");
    }
}
