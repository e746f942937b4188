//! Status aggregation for the filter panel and the detail modal.
//!
//! Every column cell, of accounts and of their clients, counts once by its
//! primary status.

use super::aggregate::{StatusColumns, Subcuenta};
use super::columns::{ProcessColumn, PROCESS_COLUMNS};
use crate::enums::ProcessStatus;
use serde::{Deserialize, Serialize};

/// Radius of the small donut in the filter panel
pub const SMALL_DONUT_RADIUS: f64 = 42.0;
/// Radius of the donut in the detail modal
pub const LARGE_DONUT_RADIUS: f64 = 80.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusStats {
    pub success: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub error: usize,
    pub total: usize,
}

impl StatusStats {
    pub fn add(&mut self, status: ProcessStatus) {
        match status {
            ProcessStatus::Success => self.success += 1,
            ProcessStatus::Pending => self.pending += 1,
            ProcessStatus::InProgress => self.in_progress += 1,
            ProcessStatus::Error => self.error += 1,
        }
        self.total += 1;
    }

    pub fn count(&self, status: ProcessStatus) -> usize {
        match status {
            ProcessStatus::Success => self.success,
            ProcessStatus::Pending => self.pending,
            ProcessStatus::InProgress => self.in_progress,
            ProcessStatus::Error => self.error,
        }
    }

    /// Rounded share of `status`, 0 when there is nothing to count
    pub fn percentage(&self, status: ProcessStatus) -> u32 {
        progress_percentage(self.total, self.count(status))
    }

    pub fn completed_pct(&self) -> u32 {
        self.percentage(ProcessStatus::Success)
    }

    /// Unrounded share in percent, for stacked bar widths
    pub fn width_pct(&self, status: ProcessStatus) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(status) as f64 / self.total as f64 * 100.0
        }
    }

    /// Arc segments of a donut chart with the given radius
    pub fn donut_segments(&self, radius: f64) -> Vec<DonutSegment> {
        if self.total == 0 {
            return Vec::new();
        }
        let circumference = circumference(radius);
        let mut offset = 0.0;
        ProcessStatus::chart_order()
            .into_iter()
            .filter(|s| self.count(*s) > 0)
            .map(|status| {
                let count = self.count(status);
                let pct = count as f64 / self.total as f64;
                let dash = circumference * pct;
                let segment = DonutSegment {
                    status,
                    count,
                    pct,
                    dash,
                    offset,
                };
                offset += dash;
                segment
            })
            .collect()
    }
}

/// One coloured arc of a donut chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutSegment {
    pub status: ProcessStatus,
    pub count: usize,
    /// Share in 0..=1
    pub pct: f64,
    /// Arc length
    pub dash: f64,
    /// Arc length already used by previous segments
    pub offset: f64,
}

impl DonutSegment {
    /// SVG `stroke-dasharray` value
    pub fn dash_array(&self, radius: f64) -> String {
        format!("{} {}", self.dash, circumference(radius) - self.dash)
    }
}

/// Breakdown of one process column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub column: ProcessColumn,
    pub stats: StatusStats,
}

pub fn circumference(radius: f64) -> f64 {
    2.0 * std::f64::consts::PI * radius
}

pub fn progress_percentage(total: usize, completed: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u32
}

fn cell_groups(subcuentas: &[Subcuenta]) -> impl Iterator<Item = &StatusColumns> {
    subcuentas.iter().flat_map(|sub| {
        std::iter::once(&sub.columns).chain(sub.clients.iter().map(|c| &c.columns))
    })
}

/// Totals across every cell of every account and client
pub fn status_stats(subcuentas: &[Subcuenta]) -> StatusStats {
    let mut stats = StatusStats::default();
    for columns in cell_groups(subcuentas) {
        for cell in columns.values() {
            stats.add(cell.status());
        }
    }
    stats
}

/// Per-column totals in catalogue order
pub fn column_stats(subcuentas: &[Subcuenta]) -> Vec<ColumnStats> {
    PROCESS_COLUMNS
        .iter()
        .map(|column| {
            let mut stats = StatusStats::default();
            for columns in cell_groups(subcuentas) {
                if let Some(cell) = columns.get(column.id) {
                    stats.add(cell.status());
                }
            }
            ColumnStats {
                column: *column,
                stats,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::separacion_ecd::aggregate::{ClientData, StatusCell};
    use crate::domain::separacion_ecd::columns::{ECYP, MEDICION, OFERTA};

    fn columns(cells: &[(&str, ProcessStatus)]) -> StatusColumns {
        cells
            .iter()
            .map(|(id, s)| (id.to_string(), StatusCell::single(*s)))
            .collect()
    }

    fn sample() -> Vec<Subcuenta> {
        vec![
            Subcuenta {
                id: "1".into(),
                code: "SUB-1".into(),
                is_expanded: false,
                is_selected: false,
                columns: columns(&[
                    (MEDICION, ProcessStatus::Success),
                    (OFERTA, ProcessStatus::Error),
                ]),
                clients: vec![ClientData {
                    id: "1-a".into(),
                    name: "Cliente A".into(),
                    columns: columns(&[(MEDICION, ProcessStatus::Pending)]),
                }],
            },
            Subcuenta {
                id: "2".into(),
                code: "SUB-2".into(),
                is_expanded: true,
                is_selected: false,
                columns: {
                    let mut c = columns(&[(ECYP, ProcessStatus::InProgress)]);
                    c.insert(
                        MEDICION.to_string(),
                        StatusCell::dual(ProcessStatus::Success, ProcessStatus::Error),
                    );
                    c
                },
                clients: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_counts_sum_to_total() {
        let stats = status_stats(&sample());
        assert_eq!(stats.total, 5);
        assert_eq!(
            stats.success + stats.pending + stats.in_progress + stats.error,
            stats.total
        );
        assert_eq!(stats.success, 2);
        assert_eq!(stats.error, 1);
    }

    #[test]
    fn test_percentages_round_and_handle_empty() {
        let stats = status_stats(&sample());
        assert_eq!(stats.completed_pct(), 40);
        assert_eq!(stats.percentage(ProcessStatus::Pending), 20);
        assert_eq!(StatusStats::default().completed_pct(), 0);
        assert_eq!(progress_percentage(3, 2), 67);
        assert_eq!(progress_percentage(0, 0), 0);
    }

    #[test]
    fn test_donut_segments_order_and_offsets() {
        let mut stats = StatusStats::default();
        stats.add(ProcessStatus::Error);
        stats.add(ProcessStatus::Success);
        stats.add(ProcessStatus::Success);
        stats.add(ProcessStatus::Success);

        let segments = stats.donut_segments(SMALL_DONUT_RADIUS);
        let order: Vec<ProcessStatus> = segments.iter().map(|s| s.status).collect();
        assert_eq!(order, vec![ProcessStatus::Success, ProcessStatus::Error]);

        let c = circumference(SMALL_DONUT_RADIUS);
        assert!((segments[0].dash - c * 0.75).abs() < 1e-9);
        assert_eq!(segments[0].offset, 0.0);
        assert!((segments[1].offset - segments[0].dash).abs() < 1e-9);
        let used: f64 = segments.iter().map(|s| s.dash).sum();
        assert!((used - c).abs() < 1e-9);
    }

    #[test]
    fn test_donut_empty_without_data() {
        assert!(StatusStats::default().donut_segments(LARGE_DONUT_RADIUS).is_empty());
    }

    #[test]
    fn test_column_stats_follow_catalogue() {
        let per_column = column_stats(&sample());
        assert_eq!(per_column.len(), PROCESS_COLUMNS.len());

        let medicion = &per_column[0];
        assert_eq!(medicion.column.id, MEDICION);
        assert_eq!(medicion.stats.total, 3);
        assert_eq!(medicion.stats.success, 2);
        assert_eq!(medicion.stats.pending, 1);
        assert!((medicion.stats.width_pct(ProcessStatus::Pending) - 100.0 / 3.0).abs() < 1e-9);

        let envio = per_column.last().unwrap();
        assert_eq!(envio.stats.total, 0);
        assert_eq!(envio.stats.width_pct(ProcessStatus::Success), 0.0);
    }
}
