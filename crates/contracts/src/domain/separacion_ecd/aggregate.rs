use crate::enums::ProcessStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One status slot of a cell: the status and who produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub status: ProcessStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executed_by: Option<String>,
}

impl StatusEntry {
    pub fn new(status: ProcessStatus) -> Self {
        Self {
            status,
            executed_by: None,
        }
    }

    pub fn by(status: ProcessStatus, executed_by: &str) -> Self {
        Self {
            status,
            executed_by: Some(executed_by.to_string()),
        }
    }
}

/// Status slots of a column cell.
///
/// `Dual` is used when a step runs against two parallel sources
/// (e.g. two measurement providers). The primary slot always comes first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellStatus {
    Single {
        primary: StatusEntry,
    },
    Dual {
        primary: StatusEntry,
        secondary: StatusEntry,
    },
}

/// Status of one process column for an account or a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCell {
    pub slots: CellStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<NaiveDateTime>,
}

impl StatusCell {
    pub fn single(status: ProcessStatus) -> Self {
        Self {
            slots: CellStatus::Single {
                primary: StatusEntry::new(status),
            },
            last_update: None,
        }
    }

    pub fn dual(primary: ProcessStatus, secondary: ProcessStatus) -> Self {
        Self {
            slots: CellStatus::Dual {
                primary: StatusEntry::new(primary),
                secondary: StatusEntry::new(secondary),
            },
            last_update: None,
        }
    }

    pub fn with_last_update(mut self, at: NaiveDateTime) -> Self {
        self.last_update = Some(at);
        self
    }

    pub fn primary(&self) -> &StatusEntry {
        match &self.slots {
            CellStatus::Single { primary } => primary,
            CellStatus::Dual { primary, .. } => primary,
        }
    }

    pub fn secondary(&self) -> Option<&StatusEntry> {
        match &self.slots {
            CellStatus::Single { .. } => None,
            CellStatus::Dual { secondary, .. } => Some(secondary),
        }
    }

    /// Status of the primary slot; this is what eligibility and counts use
    pub fn status(&self) -> ProcessStatus {
        self.primary().status
    }

    pub fn is_dual(&self) -> bool {
        matches!(self.slots, CellStatus::Dual { .. })
    }
}

/// Column id -> status cell
pub type StatusColumns = BTreeMap<String, StatusCell>;

/// Client nested under an account. Has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub columns: StatusColumns,
}

/// Account ("subcuenta") row of the process table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcuenta {
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub is_expanded: bool,
    #[serde(default)]
    pub is_selected: bool,
    #[serde(default)]
    pub columns: StatusColumns,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clients: Vec<ClientData>,
}

impl Subcuenta {
    /// Status of a column, `None` when the account has no data for it
    pub fn status_of(&self, column_id: &str) -> Option<ProcessStatus> {
        self.columns.get(column_id).map(StatusCell::status)
    }

    pub fn has_clients(&self) -> bool {
        !self.clients.is_empty()
    }

    /// Case-insensitive match on the account code or any client name
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.code.to_lowercase().contains(&query)
            || self
                .clients
                .iter()
                .any(|c| c.name.to_lowercase().contains(&query))
    }
}

/// Payload served by the data provider for a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparacionEcdData {
    /// Start of the range, `dd/mm/yyyy`
    pub start_date: String,
    /// End of the range, `dd/mm/yyyy`
    pub end_date: String,
    pub subcuentas: Vec<Subcuenta>,
    /// Completed percentage across all cells
    pub progress: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dual_cell_keeps_primary_first() {
        let cell = StatusCell::dual(ProcessStatus::Success, ProcessStatus::Error);
        assert_eq!(cell.status(), ProcessStatus::Success);
        assert_eq!(cell.secondary().map(|s| s.status), Some(ProcessStatus::Error));
        assert!(cell.is_dual());
        assert!(StatusCell::single(ProcessStatus::Pending).secondary().is_none());
    }

    #[test]
    fn test_cell_serialization_is_tagged() {
        let cell = StatusCell::single(ProcessStatus::InProgress);
        let json = serde_json::to_value(&cell).unwrap();
        assert_eq!(json["slots"]["kind"], "single");
        assert_eq!(json["slots"]["primary"]["status"], "in-progress");
        let back: StatusCell = serde_json::from_value(json).unwrap();
        assert_eq!(back, cell);
    }

    #[test]
    fn test_matches_search_on_code_and_clients() {
        let sub = Subcuenta {
            id: "1".into(),
            code: "SUB-001".into(),
            is_expanded: false,
            is_selected: false,
            columns: StatusColumns::new(),
            clients: vec![ClientData {
                id: "1-1".into(),
                name: "Cementos del Norte".into(),
                columns: StatusColumns::new(),
            }],
        };
        assert!(sub.matches_search(""));
        assert!(sub.matches_search("sub-0"));
        assert!(sub.matches_search("NORTE"));
        assert!(!sub.matches_search("sur"));
    }
}
