use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

use crate::models::common::PaginationInfo;

// 班级列表行
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassRow {
    pub id: i64,
    pub name: String,
    pub homeroom_teacher_id: Option<i64>,
    pub homeroom_teacher_name: String,
    pub school_year_id: Option<i64>,
    pub school_year: String,
    pub student_count: usize,
}

// 班级列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<ClassRow>,
}

// 花名册中的学生及家长联系方式
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct RosterStudent {
    pub id: i64,
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub parent_id: Option<i64>,
    pub parent_name: String,
    pub parent_email: Option<String>,
    pub parent_phone: Option<String>,
}

// 班级花名册响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassRosterResponse {
    pub class: ClassRow,
    pub students: Vec<RosterStudent>,
}
