//! 课时与科目接口

use super::HttpUpstream;
use crate::errors::Result;
use crate::models::periods::entities::{Period, Subject};

const PERIOD_PATH: &str = "/api/Period";

impl HttpUpstream {
    pub async fn list_periods_impl(&self) -> Result<Vec<Period>> {
        self.get_json(PERIOD_PATH).await
    }

    pub async fn get_period_impl(&self, id: i64) -> Result<Option<Period>> {
        self.get_optional_json(&format!("{PERIOD_PATH}/{id}")).await
    }

    /// 某个学生所在班级的全部课时
    pub async fn list_periods_by_student_impl(&self, student_id: i64) -> Result<Vec<Period>> {
        self.get_json(&format!("{PERIOD_PATH}/GetPeriodsByStudentId/{student_id}"))
            .await
    }

    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        self.get_json("/api/Subject").await
    }
}
