use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 创建评价请求
//
// content 为空时回退为所选活动类型的名称
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct CreateEvaluationRequest {
    pub period_id: Option<i64>,
    pub activity_id: Option<i64>,
    pub content: Option<String>,
    #[serde(default)]
    pub students: Vec<i64>,
}

// 发往上游的评价数据
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationPayload {
    pub period_id: i64,
    pub activity_id: Option<i64>,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub students: Vec<i64>,
}
