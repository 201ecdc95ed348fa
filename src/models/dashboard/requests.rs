use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

// 家长课表查询参数
//
// - student_id 为空时默认选第一个子女
// - date 为空时使用当天，所在周按周一至周日计算
// - 切换周只改 date，不会重新拉取上游数据
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct TimetableParams {
    pub student_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub refresh: Option<bool>,
}
