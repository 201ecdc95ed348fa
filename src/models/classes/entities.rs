use serde::{Deserialize, Serialize};

use crate::readmodel::resolver::{Keyed, Labeled};

// 班级（上游 /api/Class）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: i64,
    #[serde(alias = "className", alias = "classname")]
    pub name: String,
    // 班主任（Teacher.id）
    #[serde(default, alias = "teacherhomeroomid", alias = "teacherHomeRoomId")]
    pub teacher_homeroom_id: Option<i64>,
    #[serde(default, alias = "schoolyearid")]
    pub school_year_id: Option<i64>,
}

impl Keyed for Class {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Labeled for Class {
    const PLACEHOLDER: &'static str = "Lớp";

    fn label(&self) -> String {
        self.name.clone()
    }
}
