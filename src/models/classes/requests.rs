use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 创建班级请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub name: String,
    pub teacher_homeroom_id: Option<i64>,
    pub school_year_id: Option<i64>,
}

// 发往上游的班级数据
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassPayload {
    pub name: String,
    pub teacher_homeroom_id: i64,
    pub school_year_id: i64,
}

// 花名册查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct RosterParams {
    pub refresh: Option<bool>,
}
