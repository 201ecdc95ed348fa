use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::common::serde_helpers::date_prefix;
use crate::readmodel::resolver::{Keyed, Labeled};

// 学年（上游 /api/SchoolYear），year 形如 "2024-2025"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolYear {
    pub id: i64,
    #[serde(alias = "yearName", alias = "schoolYear")]
    pub year: String,
}

impl Keyed for SchoolYear {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Labeled for SchoolYear {
    const PLACEHOLDER: &'static str = "Năm học";

    fn label(&self) -> String {
        self.year.clone()
    }
}

// 学期（上游 /api/Semester）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    pub id: i64,
    #[serde(alias = "semesterName")]
    pub name: String,
    #[serde(alias = "startdate", deserialize_with = "date_prefix")]
    pub start_date: NaiveDate,
    #[serde(alias = "enddate", deserialize_with = "date_prefix")]
    pub end_date: NaiveDate,
    #[serde(default, alias = "schoolyearid")]
    pub school_year_id: Option<i64>,
}

impl Keyed for Semester {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Labeled for Semester {
    const PLACEHOLDER: &'static str = "Học kỳ";

    fn label(&self) -> String {
        self.name.clone()
    }
}
