use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

// 家长视角下的子女摘要
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct ChildSummary {
    pub id: i64,
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub class_id: Option<i64>,
    pub class_name: String,
}

// 子女列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct ChildrenResponse {
    pub parent_id: i64,
    pub children: Vec<ChildSummary>,
}
