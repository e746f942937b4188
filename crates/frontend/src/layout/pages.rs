//! Navigation entries of the PowerSphere sidebar.

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// (id, label, icon)
    pub items: Vec<(&'static str, &'static str, &'static str)>,
}

impl MenuGroup {
    pub fn contains(&self, key: &str) -> bool {
        self.items.iter().any(|(id, _, _)| *id == key)
    }
}

pub fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "procesos_mem",
            label: "Procesos MEM",
            icon: "bar-chart",
            items: vec![
                ("separacion_ecd", "Separación ECD", "file-text"),
                ("resumen_mensual", "Resumen Mensual", "file-text"),
                ("liquidacion_suministro", "Liquidación Suministro", "file-text"),
                ("monitor_documentos", "Monitor de documentos", "file-text"),
                ("parametros", "Parámetros", "settings"),
                ("validaciones_generacion", "Validaciones Generación", "file-text"),
            ],
        },
        MenuGroup {
            id: "nominaciones",
            label: "Nominaciones",
            icon: "users",
            items: vec![],
        },
        MenuGroup {
            id: "generacion_distribuida",
            label: "Generación Distribuida",
            icon: "zap",
            items: vec![],
        },
        MenuGroup {
            id: "importacion_datos",
            label: "Importación de datos",
            icon: "send",
            items: vec![],
        },
        MenuGroup {
            id: "finanzas",
            label: "Finanzas",
            icon: "file-text",
            items: vec![],
        },
        MenuGroup {
            id: "eyotr",
            label: "EyOTR",
            icon: "more-vertical",
            items: vec![],
        },
        MenuGroup {
            id: "ercot",
            label: "ERCOT",
            icon: "more-vertical",
            items: vec![],
        },
    ]
}

/// Label of a page key, the key itself when unknown
pub fn page_label(key: &str) -> &str {
    for group in menu_groups() {
        if group.id == key {
            return group.label;
        }
        if let Some((_, label, _)) = group.items.iter().find(|(id, _, _)| *id == key) {
            return label;
        }
    }
    key
}

/// Groups that start expanded: the ones holding the active page
pub fn initially_expanded(active: &str) -> Vec<String> {
    menu_groups()
        .into_iter()
        .filter(|g| g.contains(active))
        .map(|g| g.id.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_label() {
        assert_eq!(page_label("separacion_ecd"), "Separación ECD");
        assert_eq!(page_label("ercot"), "ERCOT");
        assert_eq!(page_label("desconocido"), "desconocido");
    }

    #[test]
    fn test_active_group_starts_expanded() {
        assert_eq!(initially_expanded("separacion_ecd"), vec!["procesos_mem".to_string()]);
        assert!(initially_expanded("finanzas").is_empty());
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = Vec::new();
        for g in menu_groups() {
            keys.push(g.id);
            keys.extend(g.items.iter().map(|(id, _, _)| *id));
        }
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}
