pub mod data_source;
pub mod service;

pub use data_source::{MockDataSource, ProcessDataSource};
pub use service::ServiceError;
