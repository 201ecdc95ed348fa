//! 学生接口

use super::HttpUpstream;
use crate::errors::Result;
use crate::models::students::entities::Student;

impl HttpUpstream {
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        self.get_json("/api/Student").await
    }

    /// 家长名下的学生
    pub async fn list_students_by_parent_impl(&self, parent_id: i64) -> Result<Vec<Student>> {
        self.get_json(&format!("/api/Student/GetStudentsByParentId/{parent_id}"))
            .await
    }
}
