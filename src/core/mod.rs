pub mod client;
pub mod formatter;
pub mod query;

pub use crate::domain::model::{PageResponse, SearchFilter, Vehicle};
pub use crate::utils::error::Result;
