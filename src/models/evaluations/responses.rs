use chrono::NaiveDateTime;
use serde::Serialize;
use ts_rs::TS;

use crate::models::common::PaginationInfo;

// 评价列表行
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationRow {
    pub id: i64,
    pub period_id: i64,
    pub period_label: String,
    pub class_id: Option<i64>,
    pub class_name: String,
    pub subject_name: String,
    pub content: String,
    pub activity_id: Option<i64>,
    pub activity_type: String,
    pub is_negative: bool,
    pub student_count: usize,
    // "Cả lớp" 或 "N học sinh"
    pub student_label: String,
    pub created_at: Option<NaiveDateTime>,
}

// 评价列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<EvaluationRow>,
}
