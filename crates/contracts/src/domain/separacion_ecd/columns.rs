use serde::Serialize;

/// Visual header band grouping several columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnGroup {
    Insumos,
    Procesamiento,
    Cierre,
}

impl ColumnGroup {
    pub fn label(&self) -> &'static str {
        match self {
            ColumnGroup::Insumos => "Insumos",
            ColumnGroup::Procesamiento => "Procesamiento",
            ColumnGroup::Cierre => "Cierre",
        }
    }
}

/// One step of the ECD pipeline, rendered as a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessColumn {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub group: ColumnGroup,
}

pub const MEDICION: &str = "medicion";
pub const OFERTA: &str = "oferta";
pub const ECD_DATASET: &str = "ecd_dataset";
pub const ECYP: &str = "ecyp";
pub const CONCILIACION: &str = "conciliacion";
pub const VALIDACION: &str = "validacion";
pub const ENVIO: &str = "envio";

/// Fixed, ordered column catalogue
pub const PROCESS_COLUMNS: &[ProcessColumn] = &[
    ProcessColumn {
        id: MEDICION,
        label: "Medición",
        description: "Segregación de mediciones por proveedor",
        group: ColumnGroup::Insumos,
    },
    ProcessColumn {
        id: OFERTA,
        label: "Oferta",
        description: "Validación de la oferta presentada al mercado",
        group: ColumnGroup::Insumos,
    },
    ProcessColumn {
        id: ECD_DATASET,
        label: "ECD Dataset",
        description: "Generación del dataset del estado de cuenta diario",
        group: ColumnGroup::Procesamiento,
    },
    ProcessColumn {
        id: ECYP,
        label: "ECyP",
        description: "Estado de cuenta y pagos",
        group: ColumnGroup::Procesamiento,
    },
    ProcessColumn {
        id: CONCILIACION,
        label: "Conciliación",
        description: "Conciliación contra liquidación del operador",
        group: ColumnGroup::Procesamiento,
    },
    ProcessColumn {
        id: VALIDACION,
        label: "Validación",
        description: "Revisión final del estado de cuenta",
        group: ColumnGroup::Cierre,
    },
    ProcessColumn {
        id: ENVIO,
        label: "Envío",
        description: "Envío del estado de cuenta al cliente",
        group: ColumnGroup::Cierre,
    },
];

pub fn find_column(id: &str) -> Option<&'static ProcessColumn> {
    PROCESS_COLUMNS.iter().find(|c| c.id == id)
}

/// Human label of a column, falling back to its id
pub fn column_label(id: &str) -> &str {
    find_column(id).map(|c| c.label).unwrap_or(id)
}

/// Header bands: each group with the number of consecutive columns it spans
pub fn column_groups() -> Vec<(ColumnGroup, usize)> {
    let mut bands: Vec<(ColumnGroup, usize)> = Vec::new();
    for column in PROCESS_COLUMNS {
        match bands.last_mut() {
            Some((group, span)) if *group == column.group => *span += 1,
            _ => bands.push((column.group, 1)),
        }
    }
    bands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_ids_are_unique() {
        let mut ids: Vec<&str> = PROCESS_COLUMNS.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PROCESS_COLUMNS.len());
    }

    #[test]
    fn test_groups_span_all_columns() {
        let bands = column_groups();
        assert_eq!(
            bands,
            vec![
                (ColumnGroup::Insumos, 2),
                (ColumnGroup::Procesamiento, 3),
                (ColumnGroup::Cierre, 2),
            ]
        );
        let total: usize = bands.iter().map(|(_, span)| span).sum();
        assert_eq!(total, PROCESS_COLUMNS.len());
    }

    #[test]
    fn test_column_label_fallback() {
        assert_eq!(column_label(ECD_DATASET), "ECD Dataset");
        assert_eq!(column_label("desconocida"), "desconocida");
    }
}
