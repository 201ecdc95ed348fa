use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::common::serde_helpers::date_prefix;
use crate::readmodel::resolver::{Keyed, Labeled};

// 课时（上游 /api/Period）：某班级某天的第 N 节课
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub id: i64,
    // 1..=8
    #[serde(alias = "periodno")]
    pub period_no: u8,
    #[serde(alias = "perioddate", alias = "date", deserialize_with = "date_prefix")]
    pub period_date: NaiveDate,
    #[serde(default, alias = "classid")]
    pub class_id: Option<i64>,
    #[serde(default, alias = "subjectid")]
    pub subject_id: Option<i64>,
    #[serde(default, alias = "teacherid")]
    pub teacher_id: Option<i64>,
}

impl Keyed for Period {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Labeled for Period {
    const PLACEHOLDER: &'static str = "Tiết học";

    fn label(&self) -> String {
        format!(
            "Tiết {} - {}",
            self.period_no,
            self.period_date.format("%d/%m/%Y")
        )
    }
}

// 科目（上游 /api/Subject）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: i64,
    #[serde(alias = "subjectName", alias = "subjectname")]
    pub name: String,
}

impl Keyed for Subject {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Labeled for Subject {
    const PLACEHOLDER: &'static str = "Môn";

    fn label(&self) -> String {
        self.name.clone()
    }
}
