use serde::{Deserialize, Serialize};

use crate::readmodel::resolver::{Keyed, Labeled};

// 教师（上游 /api/Teacher），姓名等信息在关联的用户账号上
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: i64,
    #[serde(default, alias = "userid")]
    pub user_id: Option<i64>,
    #[serde(default, alias = "subjectid")]
    pub subject_id: Option<i64>,
}

impl Keyed for Teacher {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Labeled for Teacher {
    const PLACEHOLDER: &'static str = "Giáo viên";

    fn label(&self) -> String {
        format!("{} {}", Self::PLACEHOLDER, self.id)
    }
}
