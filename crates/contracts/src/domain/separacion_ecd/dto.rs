use super::validation::ValidationResult;
use crate::enums::ActionMode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query of GET /api/separacion-ecd
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparacionEcdQuery {
    /// `dd/mm/yyyy` or `yyyy-mm-dd`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Body of POST /api/separacion-ecd/validate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub ids: Vec<String>,
    /// Action display names; unknown names are ignored
    pub actions: Vec<String>,
    pub mode: ActionMode,
    /// Range the selection was made on; missing dates take the server defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl ValidateRequest {
    pub fn range(&self) -> SeparacionEcdQuery {
        SeparacionEcdQuery {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

/// Body of POST /api/separacion-ecd/execute and /delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub ids: Vec<String>,
    pub actions: Vec<String>,
    /// Range the selection was made on; missing dates take the server defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl ActionRequest {
    pub fn range(&self) -> SeparacionEcdQuery {
        SeparacionEcdQuery {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

/// Acknowledgement of an execute/delete intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub batch_id: Uuid,
    pub mode: ActionMode,
    pub accepted: Vec<String>,
    pub rejected: Vec<ValidationResult>,
}

/// JSON error body returned with 4xx responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_request_range_is_optional() {
        let request: ActionRequest =
            serde_json::from_value(json!({ "ids": ["1"], "actions": [] })).unwrap();
        assert_eq!(request.range(), SeparacionEcdQuery::default());

        let request: ActionRequest = serde_json::from_value(json!({
            "ids": ["1"],
            "actions": [],
            "start_date": "01/02/2025",
            "end_date": "28/02/2025"
        }))
        .unwrap();
        assert_eq!(request.range().start_date.as_deref(), Some("01/02/2025"));
        assert_eq!(request.range().end_date.as_deref(), Some("28/02/2025"));
    }
}
