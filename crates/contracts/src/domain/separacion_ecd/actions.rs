use super::columns::{self, column_label};
use crate::enums::{ActionMode, ProcessStatus};
use serde::{Deserialize, Serialize};

/// Named bulk action offered in the actions bar.
///
/// Each action is governed by exactly one process column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessAction {
    SegregacionMediciones,
    ValidacionOferta,
    TablasMem,
    ValidacionEcyp,
    Revision,
}

impl ProcessAction {
    pub fn all() -> [ProcessAction; 5] {
        [
            ProcessAction::SegregacionMediciones,
            ProcessAction::ValidacionOferta,
            ProcessAction::TablasMem,
            ProcessAction::ValidacionEcyp,
            ProcessAction::Revision,
        ]
    }

    /// Name shown to users and sent by clients
    pub fn name(&self) -> &'static str {
        match self {
            ProcessAction::SegregacionMediciones => "Segregación Automática de Mediciones",
            ProcessAction::ValidacionOferta => "Validación Automática de Oferta",
            ProcessAction::TablasMem => "Ejecución de Tablas MEM",
            ProcessAction::ValidacionEcyp => "Validación de ECyP",
            ProcessAction::Revision => "Revisión",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|a| a.name() == name)
    }

    /// Column whose status decides eligibility
    pub fn column_id(&self) -> &'static str {
        match self {
            ProcessAction::SegregacionMediciones => columns::MEDICION,
            ProcessAction::ValidacionOferta => columns::OFERTA,
            ProcessAction::TablasMem => columns::ECD_DATASET,
            ProcessAction::ValidacionEcyp => columns::ECYP,
            ProcessAction::Revision => columns::VALIDACION,
        }
    }

    /// Precondition check for one account.
    ///
    /// `status` is the primary status of the governing column, `None` when the
    /// account has no data for it. Returns the failure message on rejection.
    pub fn check(&self, status: Option<ProcessStatus>, mode: ActionMode) -> Result<(), String> {
        use ProcessStatus::*;

        let label = column_label(self.column_id());
        match (mode, self, status) {
            (ActionMode::Execute, _, None) => Err(format!("Sin datos de {}", label)),
            (ActionMode::Execute, ProcessAction::SegregacionMediciones, Some(Error)) => {
                Err(format!("{} con error", label))
            }
            (ActionMode::Execute, ProcessAction::SegregacionMediciones, Some(InProgress)) => {
                Err(format!("{} en progreso", label))
            }
            (ActionMode::Execute, ProcessAction::ValidacionOferta, Some(Error)) => {
                Err(format!("{} con error", label))
            }
            (ActionMode::Execute, ProcessAction::TablasMem, Some(s)) if s != Success => {
                Err(format!("{} no está completado", label))
            }
            (ActionMode::Execute, ProcessAction::ValidacionEcyp, Some(Error)) => {
                Err(format!("{} con error", label))
            }
            (ActionMode::Execute, ProcessAction::Revision, Some(s)) if s != Success => {
                Err(format!("{} no está completada", label))
            }
            (ActionMode::Delete, _, Some(InProgress)) => {
                Err(format!("{} en progreso, no se puede eliminar", label))
            }
            _ => Ok(()),
        }
    }
}

/// Action descriptor served to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessActionInfo {
    pub id: ProcessAction,
    pub name: String,
    pub column_id: String,
    pub column_label: String,
}

impl From<ProcessAction> for ProcessActionInfo {
    fn from(action: ProcessAction) -> Self {
        Self {
            id: action,
            name: action.name().to_string(),
            column_id: action.column_id().to_string(),
            column_label: column_label(action.column_id()).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ProcessStatus::*;

    const STATUSES: [Option<ProcessStatus>; 5] =
        [Some(Success), Some(Pending), Some(InProgress), Some(Error), None];

    fn accepted(action: ProcessAction, mode: ActionMode) -> Vec<Option<ProcessStatus>> {
        STATUSES
            .into_iter()
            .filter(|s| action.check(*s, mode).is_ok())
            .collect()
    }

    #[test]
    fn test_execute_table() {
        let mode = ActionMode::Execute;
        assert_eq!(
            accepted(ProcessAction::SegregacionMediciones, mode),
            vec![Some(Success), Some(Pending)]
        );
        assert_eq!(
            accepted(ProcessAction::ValidacionOferta, mode),
            vec![Some(Success), Some(Pending), Some(InProgress)]
        );
        assert_eq!(accepted(ProcessAction::TablasMem, mode), vec![Some(Success)]);
        assert_eq!(
            accepted(ProcessAction::ValidacionEcyp, mode),
            vec![Some(Success), Some(Pending), Some(InProgress)]
        );
        assert_eq!(accepted(ProcessAction::Revision, mode), vec![Some(Success)]);
    }

    #[test]
    fn test_delete_rejects_only_in_progress() {
        for action in ProcessAction::all() {
            assert_eq!(
                accepted(action, ActionMode::Delete),
                vec![Some(Success), Some(Pending), Some(Error), None],
                "{:?}",
                action
            );
        }
    }

    #[test]
    fn test_no_data_reason_uses_column_label() {
        let err = ProcessAction::TablasMem
            .check(None, ActionMode::Execute)
            .unwrap_err();
        assert_eq!(err, "Sin datos de ECD Dataset");
    }

    #[test]
    fn test_reason_texts() {
        assert_eq!(
            ProcessAction::TablasMem.check(Some(Pending), ActionMode::Execute),
            Err("ECD Dataset no está completado".to_string())
        );
        assert_eq!(
            ProcessAction::SegregacionMediciones.check(Some(InProgress), ActionMode::Execute),
            Err("Medición en progreso".to_string())
        );
        assert_eq!(
            ProcessAction::Revision.check(Some(InProgress), ActionMode::Delete),
            Err("Validación en progreso, no se puede eliminar".to_string())
        );
    }

    #[test]
    fn test_names_round_trip() {
        for action in ProcessAction::all() {
            assert_eq!(ProcessAction::from_name(action.name()), Some(action));
        }
        assert_eq!(ProcessAction::from_name("Borrar todo"), None);
    }
}
