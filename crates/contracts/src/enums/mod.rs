pub mod action_mode;
pub mod process_status;

pub use action_mode::ActionMode;
pub use process_status::ProcessStatus;
