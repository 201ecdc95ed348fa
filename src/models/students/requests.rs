use serde::Deserialize;
use ts_rs::TS;

// 家长子女列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct ChildrenParams {
    pub refresh: Option<bool>,
}
