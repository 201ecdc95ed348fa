use chrono::NaiveDateTime;
use serde::Serialize;
use ts_rs::TS;

use crate::models::common::PaginationInfo;

// 操作日志行
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity_log.ts")]
pub struct ActivityLogRow {
    pub id: i64,
    pub user_id: Option<i64>,
    pub user_name: String,
    pub type_code: u8,
    pub type_label: String,
    pub note: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

// 操作日志列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity_log.ts")]
pub struct ActivityLogListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<ActivityLogRow>,
}
