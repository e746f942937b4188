use serde::{Deserialize, Serialize};

/// Bulk action mode chosen in the actions bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionMode {
    Execute,
    Delete,
}

impl ActionMode {
    pub fn code(&self) -> &'static str {
        match self {
            ActionMode::Execute => "execute",
            ActionMode::Delete => "delete",
        }
    }

    /// Verb used on buttons
    pub fn verb(&self) -> &'static str {
        match self {
            ActionMode::Execute => "Ejecutar",
            ActionMode::Delete => "Eliminar",
        }
    }

    pub fn modal_title(&self) -> &'static str {
        match self {
            ActionMode::Execute => "Ejecutar Acciones",
            ActionMode::Delete => "Eliminar Acciones",
        }
    }

    pub fn modal_message(&self) -> &'static str {
        match self {
            ActionMode::Execute => "Estás a punto de ejecutar las acciones seleccionadas. Este proceso puede tomar algunos minutos.",
            ActionMode::Delete => "Estás a punto de eliminar las acciones seleccionadas de forma permanente.",
        }
    }

    /// Heading of the dropdown listing the actions
    pub fn dropdown_heading(&self) -> &'static str {
        match self {
            ActionMode::Execute => "Selecciona acciones a ejecutar",
            ActionMode::Delete => "Selecciona acciones para eliminar",
        }
    }
}

impl std::fmt::Display for ActionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
