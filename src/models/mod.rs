pub mod activity_logs;
pub mod classes;
pub mod common;
pub mod dashboard;
pub mod evaluations;
pub mod password;
pub mod periods;
pub mod school_years;
pub mod students;
pub mod teachers;
pub mod user_accounts;

pub use common::{ApiResponse, ErrorCode, ListParams, PaginatedResponse, PaginationInfo};
