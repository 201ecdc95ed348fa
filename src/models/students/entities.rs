use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::common::serde_helpers::optional_date_prefix;
use crate::readmodel::resolver::{Keyed, Labeled};

// 学生（上游 /api/Student）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    #[serde(alias = "fullName", alias = "studentName")]
    pub name: String,
    #[serde(
        default,
        alias = "dateofbirth",
        alias = "dob",
        deserialize_with = "optional_date_prefix"
    )]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, alias = "classid")]
    pub class_id: Option<i64>,
    // 家长账号（UserAccount.id）
    #[serde(default, alias = "parentid")]
    pub parent_id: Option<i64>,
}

impl Keyed for Student {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Labeled for Student {
    const PLACEHOLDER: &'static str = "Học sinh";

    fn label(&self) -> String {
        self.name.clone()
    }
}
