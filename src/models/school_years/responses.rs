use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

use crate::models::common::PaginationInfo;

// 学期视图
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school_year.ts")]
pub struct SemesterView {
    pub id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub school_year_id: Option<i64>,
    pub school_year: String,
}

// 学年视图（包含其下的学期）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school_year.ts")]
pub struct SchoolYearView {
    pub id: i64,
    pub year: String,
    pub semesters: Vec<SemesterView>,
}

// 学年列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school_year.ts")]
pub struct SchoolYearListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<SchoolYearView>,
}

// 学期列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school_year.ts")]
pub struct SemesterListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<SemesterView>,
}
