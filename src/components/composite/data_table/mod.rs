//! DataTable Component
//!
//! A keyed data table with a loading overlay and page navigation.

pub mod column;
pub mod data_table;
pub mod pagination;

pub use column::Column;
pub use data_table::DataTable;
pub use pagination::Pagination;
