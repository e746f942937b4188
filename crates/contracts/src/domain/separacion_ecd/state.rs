//! Dashboard state container and its reducer.
//!
//! The frontend keeps one `SeparacionEcdState` in a signal and funnels every
//! user interaction through [`SeparacionEcdState::apply`].

use super::actions::ProcessAction;
use super::aggregate::{SeparacionEcdData, Subcuenta};
use super::validation::{self, ValidationResult};
use crate::enums::ActionMode;
use indexmap::IndexSet;

#[derive(Debug, Clone, PartialEq)]
pub enum SeparacionEcdEvent {
    ToggleExpand(String),
    ToggleSelect(String),
    SelectAll(bool),
    SetDateRange { start: String, end: String },
    /// Fresh data from the provider; expansion and selection survive for ids
    /// that still exist
    ReplaceData(SeparacionEcdData),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeparacionEcdState {
    pub subcuentas: Vec<Subcuenta>,
    /// Selected account ids in insertion order
    pub selected_ids: IndexSet<String>,
    pub start_date: String,
    pub end_date: String,
}

impl SeparacionEcdState {
    pub fn new(subcuentas: Vec<Subcuenta>, start_date: &str, end_date: &str) -> Self {
        let mut state = Self {
            subcuentas,
            selected_ids: IndexSet::new(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        };
        state.sync_selected_flags();
        state
    }

    pub fn from_data(data: SeparacionEcdData) -> Self {
        Self::new(data.subcuentas, &data.start_date, &data.end_date)
    }

    pub fn apply(&mut self, event: SeparacionEcdEvent) {
        match event {
            SeparacionEcdEvent::ToggleExpand(id) => self.toggle_expand(&id),
            SeparacionEcdEvent::ToggleSelect(id) => self.toggle_select(&id),
            SeparacionEcdEvent::SelectAll(checked) => self.select_all(checked),
            SeparacionEcdEvent::SetDateRange { start, end } => self.set_date_range(start, end),
            SeparacionEcdEvent::ReplaceData(data) => self.replace_data(data),
        }
    }

    /// Flip `is_expanded` for the matching account only
    pub fn toggle_expand(&mut self, id: &str) {
        if let Some(sub) = self.subcuentas.iter_mut().find(|s| s.id == id) {
            sub.is_expanded = !sub.is_expanded;
        }
    }

    pub fn toggle_select(&mut self, id: &str) {
        if !self.selected_ids.shift_remove(id) {
            self.selected_ids.insert(id.to_string());
        }
        self.sync_selected_flags();
    }

    pub fn select_all(&mut self, checked: bool) {
        self.selected_ids = if checked {
            self.subcuentas.iter().map(|s| s.id.clone()).collect()
        } else {
            IndexSet::new()
        };
        self.sync_selected_flags();
    }

    pub fn set_date_range(&mut self, start: String, end: String) {
        self.start_date = start;
        self.end_date = end;
    }

    pub fn replace_data(&mut self, data: SeparacionEcdData) {
        let expanded: Vec<String> = self
            .subcuentas
            .iter()
            .filter(|s| s.is_expanded)
            .map(|s| s.id.clone())
            .collect();

        self.subcuentas = data.subcuentas;
        for sub in self.subcuentas.iter_mut() {
            if expanded.contains(&sub.id) {
                sub.is_expanded = true;
            }
        }

        let existing: IndexSet<&str> = self.subcuentas.iter().map(|s| s.id.as_str()).collect();
        self.selected_ids.retain(|id| existing.contains(id.as_str()));
        self.start_date = data.start_date;
        self.end_date = data.end_date;
        self.sync_selected_flags();
    }

    /// Derived, never stored
    pub fn all_selected(&self) -> bool {
        !self.subcuentas.is_empty() && self.selected_ids.len() == self.subcuentas.len()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected_ids.len()
    }

    pub fn selected_vec(&self) -> Vec<String> {
        self.selected_ids.iter().cloned().collect()
    }

    /// Run the validation engine on the current selection
    pub fn validate(&self, actions: &[ProcessAction], mode: ActionMode) -> Vec<ValidationResult> {
        validation::validate(&self.subcuentas, &self.selected_ids, actions, mode)
    }

    /// Accounts whose code or clients match the search text, in table order
    pub fn visible(&self, query: &str) -> Vec<Subcuenta> {
        self.subcuentas
            .iter()
            .filter(|s| s.matches_search(query))
            .cloned()
            .collect()
    }

    fn sync_selected_flags(&mut self) {
        for sub in self.subcuentas.iter_mut() {
            sub.is_selected = self.selected_ids.contains(&sub.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::separacion_ecd::aggregate::StatusColumns;

    fn sub(id: &str) -> Subcuenta {
        Subcuenta {
            id: id.to_string(),
            code: format!("SUB-{}", id),
            is_expanded: false,
            is_selected: false,
            columns: StatusColumns::new(),
            clients: Vec::new(),
        }
    }

    fn state() -> SeparacionEcdState {
        SeparacionEcdState::new(vec![sub("a"), sub("b"), sub("c")], "01/01/2025", "31/01/2025")
    }

    #[test]
    fn test_toggle_expand_touches_one_row() {
        let mut s = state();
        s.apply(SeparacionEcdEvent::ToggleExpand("b".into()));
        let flags: Vec<bool> = s.subcuentas.iter().map(|x| x.is_expanded).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(s.selected_count(), 0);

        s.apply(SeparacionEcdEvent::ToggleExpand("b".into()));
        assert!(s.subcuentas.iter().all(|x| !x.is_expanded));
    }

    #[test]
    fn test_toggle_select_twice_is_identity() {
        let mut s = state();
        s.toggle_select("c");
        s.toggle_select("a");
        let before = s.selected_ids.clone();

        s.toggle_select("b");
        s.toggle_select("b");
        assert_eq!(s.selected_ids, before);
        assert_eq!(s.selected_vec(), vec!["c".to_string(), "a".to_string()]);
        assert!(s.subcuentas[0].is_selected);
        assert!(!s.subcuentas[1].is_selected);
    }

    #[test]
    fn test_select_all_then_none_is_empty() {
        let mut s = state();
        s.toggle_select("b");
        s.apply(SeparacionEcdEvent::SelectAll(true));
        assert!(s.all_selected());
        assert_eq!(s.selected_count(), 3);

        s.apply(SeparacionEcdEvent::SelectAll(false));
        assert!(s.selected_ids.is_empty());
        assert!(!s.all_selected());
        assert!(s.subcuentas.iter().all(|x| !x.is_selected));
    }

    #[test]
    fn test_all_selected_false_on_empty_table() {
        let mut s = SeparacionEcdState::default();
        s.select_all(true);
        assert!(!s.all_selected());
    }

    #[test]
    fn test_replace_data_keeps_surviving_state() {
        let mut s = state();
        s.toggle_expand("a");
        s.toggle_select("a");
        s.toggle_select("c");

        s.apply(SeparacionEcdEvent::ReplaceData(SeparacionEcdData {
            start_date: "01/02/2025".into(),
            end_date: "28/02/2025".into(),
            subcuentas: vec![sub("a"), sub("b")],
            progress: 0,
        }));

        assert!(s.subcuentas[0].is_expanded);
        assert_eq!(s.selected_vec(), vec!["a".to_string()]);
        assert!(s.subcuentas[0].is_selected);
        assert_eq!(s.start_date, "01/02/2025");
    }

    #[test]
    fn test_set_date_range() {
        let mut s = state();
        s.apply(SeparacionEcdEvent::SetDateRange {
            start: "05/01/2025".into(),
            end: "10/01/2025".into(),
        });
        assert_eq!(s.start_date, "05/01/2025");
        assert_eq!(s.end_date, "10/01/2025");
    }
}
