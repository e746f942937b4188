//! Separación ECD: daily account statement separation process.
//!
//! Shared between backend and frontend:
//! - `aggregate` - accounts, clients and their per-column status cells
//! - `columns` - fixed catalogue of process steps
//! - `actions` - bulk actions and their eligibility table
//! - `validation` - per-account verdicts for a chosen set of actions
//! - `state` - selection/expansion reducer used by the dashboard
//! - `summary` - status counts and donut chart geometry
//! - `dto` - HTTP request/response bodies

pub mod actions;
pub mod aggregate;
pub mod columns;
pub mod dto;
pub mod state;
pub mod summary;
pub mod validation;

pub use actions::ProcessAction;
pub use aggregate::{CellStatus, ClientData, SeparacionEcdData, StatusCell, StatusEntry, Subcuenta};
pub use columns::{ColumnGroup, ProcessColumn};
pub use state::{SeparacionEcdEvent, SeparacionEcdState};
pub use summary::{ColumnStats, DonutSegment, StatusStats};
pub use validation::{ConfirmationSummary, ValidationResult};
