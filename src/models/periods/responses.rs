use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

use crate::models::evaluations::responses::EvaluationRow;

// 课时详情
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/period.ts")]
pub struct PeriodDetailResponse {
    pub id: i64,
    pub period_no: u8,
    pub period_date: NaiveDate,
    pub label: String,
    pub class_id: Option<i64>,
    pub class_name: String,
    pub subject_id: Option<i64>,
    pub subject_name: String,
    pub teacher_id: Option<i64>,
    pub teacher_name: String,
    pub evaluations: Vec<EvaluationRow>,
}
