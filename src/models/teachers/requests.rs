use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 更新教师请求（目前仅支持调整任教科目）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherRequest {
    pub id: i64,
    pub user_id: Option<i64>,
    pub subject_id: Option<i64>,
}

// 发往上游的教师数据
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherPayload {
    pub id: i64,
    pub user_id: Option<i64>,
    pub subject_id: i64,
}
