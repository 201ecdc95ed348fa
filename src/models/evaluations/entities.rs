use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::common::serde_helpers::optional_datetime;
use crate::readmodel::resolver::{Keyed, Labeled};

// 评价（上游 /api/Evaluation），students 只保存学生 ID 的交叉引用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: i64,
    #[serde(alias = "periodid")]
    pub period_id: i64,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, alias = "activityid")]
    pub activity_id: Option<i64>,
    #[serde(default, alias = "createdat", deserialize_with = "optional_datetime")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "student_ids")]
    pub students: Vec<i64>,
}

impl Keyed for Evaluation {
    fn key(&self) -> i64 {
        self.id
    }
}

// 上游可能返回纯 ID，也可能返回学生对象
#[derive(Deserialize)]
#[serde(untagged)]
enum StudentRef {
    Id(i64),
    Object {
        #[serde(alias = "studentId", alias = "studentid")]
        id: i64,
    },
}

fn student_ids<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let refs = Option::<Vec<StudentRef>>::deserialize(deserializer)?;
    Ok(refs
        .unwrap_or_default()
        .into_iter()
        .map(|r| match r {
            StudentRef::Id(id) => id,
            StudentRef::Object { id } => id,
        })
        .collect())
}

// 评价活动类型（上游 /api/Activity）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    #[serde(alias = "activitytype", alias = "name")]
    pub activity_type: String,
    #[serde(default, alias = "isnegative")]
    pub is_negative: bool,
}

impl Keyed for Activity {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Labeled for Activity {
    const PLACEHOLDER: &'static str = "Hoạt động";

    fn label(&self) -> String {
        self.activity_type.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_accepts_both_student_shapes() {
        let json = r#"[
            {"id": 1, "periodId": 3, "content": "Phát biểu tốt", "activityId": 2,
             "createdAt": "2024-06-03T08:00:00", "students": [4, 5]},
            {"id": 2, "periodid": 3, "students": [{"studentId": 9}, {"id": 10}]},
            {"id": 3, "periodId": 4, "students": null}
        ]"#;
        let evaluations: Vec<Evaluation> = serde_json::from_str(json).unwrap();
        assert_eq!(evaluations[0].students, vec![4, 5]);
        assert_eq!(evaluations[1].students, vec![9, 10]);
        assert!(evaluations[2].students.is_empty());
        assert!(evaluations[1].created_at.is_none());
    }
}
