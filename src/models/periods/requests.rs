use serde::Deserialize;
use ts_rs::TS;

// 课时详情查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/period.ts")]
pub struct PeriodDetailParams {
    pub refresh: Option<bool>,
}
