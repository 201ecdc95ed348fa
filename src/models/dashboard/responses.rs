use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use ts_rs::TS;

use crate::models::students::responses::ChildSummary;

// 节次定义
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct SlotView {
    pub period: u8,
    pub label: String,
    pub start: String,
    pub end: String,
}

// 课表单元格
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct TimetableCell {
    pub period_id: i64,
    pub period_no: u8,
    pub subject_id: Option<i64>,
    pub subject_name: String,
    pub class_id: Option<i64>,
    pub class_name: String,
}

// 一天的课表列，cells 与 slots 一一对应
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DayColumn {
    pub date: NaiveDate,
    pub weekday: String,
    pub cells: Vec<Option<TimetableCell>>,
}

// 周信息
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct WeekInfo {
    pub reference_date: NaiveDate,
    pub week_start: NaiveDateTime,
    pub week_end: NaiveDateTime,
    pub previous_date: NaiveDate,
    pub next_date: NaiveDate,
}

// 家长课表响应
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct TimetableResponse {
    pub parent_id: i64,
    pub children: Vec<ChildSummary>,
    pub student: Option<ChildSummary>,
    pub week: WeekInfo,
    pub slots: Vec<SlotView>,
    pub days: Vec<DayColumn>,
}
