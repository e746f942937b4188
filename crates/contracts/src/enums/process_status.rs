use serde::{Deserialize, Serialize};

/// Status of one process step for an account or client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcessStatus {
    Success,
    Pending,
    InProgress,
    Error,
}

impl ProcessStatus {
    /// Wire code, also used as CSS modifier
    pub fn code(&self) -> &'static str {
        match self {
            ProcessStatus::Success => "success",
            ProcessStatus::Pending => "pending",
            ProcessStatus::InProgress => "in-progress",
            ProcessStatus::Error => "error",
        }
    }

    /// Short label shown in legends and summary cards
    pub fn display_name(&self) -> &'static str {
        match self {
            ProcessStatus::Success => "Éxito",
            ProcessStatus::Pending => "Pendiente",
            ProcessStatus::InProgress => "En Progreso",
            ProcessStatus::Error => "Error",
        }
    }

    /// Tooltip shown when hovering a status icon in the table
    pub fn tooltip(&self) -> &'static str {
        match self {
            ProcessStatus::Success => "Enviado correctamente",
            ProcessStatus::Pending => "Esperando procesamiento",
            ProcessStatus::InProgress => "Procesando datos...",
            ProcessStatus::Error => "Error en el procesamiento",
        }
    }

    /// Long description for the legend modal
    pub fn description(&self) -> &'static str {
        match self {
            ProcessStatus::Success => "El proceso se completó correctamente sin errores.",
            ProcessStatus::Pending => "El proceso está en espera de ser ejecutado.",
            ProcessStatus::InProgress => "El proceso se está ejecutando en este momento.",
            ProcessStatus::Error => "El proceso falló durante la ejecución.",
        }
    }

    /// Chart colour (hex)
    pub fn color(&self) -> &'static str {
        match self {
            ProcessStatus::Success => "#16A34A",
            ProcessStatus::Pending => "#EA8C00",
            ProcessStatus::InProgress => "#0EA5E9",
            ProcessStatus::Error => "#DC2626",
        }
    }

    /// Chart and legend order: success, in-progress, pending, error
    pub fn chart_order() -> [ProcessStatus; 4] {
        [
            ProcessStatus::Success,
            ProcessStatus::InProgress,
            ProcessStatus::Pending,
            ProcessStatus::Error,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "success" => Some(ProcessStatus::Success),
            "pending" => Some(ProcessStatus::Pending),
            "in-progress" => Some(ProcessStatus::InProgress),
            "error" => Some(ProcessStatus::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
