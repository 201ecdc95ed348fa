//! 上游 REST 后端
//!
//! 每个方法对应后端的一个接口。本服务只消费这些接口，不拥有协议本身。

use std::sync::Arc;

use crate::config::UpstreamConfig;
use crate::errors::Result;
use crate::models::{
    activity_logs::entities::ActivityLog,
    classes::{entities::Class, requests::ClassPayload},
    evaluations::{
        entities::{Activity, Evaluation},
        requests::EvaluationPayload,
    },
    password::requests::{PasswordResetEmailPayload, ResetPasswordPayload},
    periods::entities::{Period, Subject},
    school_years::{
        entities::{SchoolYear, Semester},
        requests::{SchoolYearPayload, SemesterPayload},
    },
    students::entities::Student,
    teachers::{entities::Teacher, requests::TeacherPayload},
    user_accounts::{
        entities::UserAccount,
        requests::{RegisterUserAccountPayload, UpdateUserAccountPayload},
    },
};

pub mod http_upstream;

#[cfg(test)]
pub mod fake;

#[async_trait::async_trait]
pub trait Upstream: Send + Sync {
    /// 班级
    // GET /api/Class
    async fn list_classes(&self) -> Result<Vec<Class>>;
    // POST /api/Class
    async fn create_class(&self, class: ClassPayload) -> Result<()>;

    /// 教师
    // GET /api/Teacher
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    // PUT /api/Teacher
    async fn update_teacher(&self, teacher: TeacherPayload) -> Result<()>;

    /// 用户账号
    // GET /api/UserAccount/GetAllUserAccounts
    async fn list_user_accounts(&self) -> Result<Vec<UserAccount>>;
    // GET /api/UserAccount/GetUserAccount/{id}
    async fn get_user_account(&self, id: i64) -> Result<Option<UserAccount>>;
    // POST /api/UserAccount/register
    async fn register_user_account(&self, account: RegisterUserAccountPayload) -> Result<()>;
    // PUT /api/UserAccount/update/{id}
    async fn update_user_account(&self, id: i64, account: UpdateUserAccountPayload)
    -> Result<()>;
    // DELETE /api/UserAccount/{id}
    async fn delete_user_account(&self, id: i64) -> Result<()>;

    /// 学年
    async fn list_school_years(&self) -> Result<Vec<SchoolYear>>;
    async fn create_school_year(&self, year: SchoolYearPayload) -> Result<()>;
    async fn update_school_year(&self, id: i64, year: SchoolYearPayload) -> Result<()>;
    async fn delete_school_year(&self, id: i64) -> Result<()>;

    /// 学期
    async fn list_semesters(&self) -> Result<Vec<Semester>>;
    async fn create_semester(&self, semester: SemesterPayload) -> Result<()>;
    async fn update_semester(&self, id: i64, semester: SemesterPayload) -> Result<()>;
    async fn delete_semester(&self, id: i64) -> Result<()>;

    /// 学生
    // GET /api/Student
    async fn list_students(&self) -> Result<Vec<Student>>;
    // GET /api/Student/GetStudentsByParentId/{parentId}
    async fn list_students_by_parent(&self, parent_id: i64) -> Result<Vec<Student>>;

    /// 课时与科目
    // GET /api/Period
    async fn list_periods(&self) -> Result<Vec<Period>>;
    // GET /api/Period/{id}
    async fn get_period(&self, id: i64) -> Result<Option<Period>>;
    // GET /api/Period/GetPeriodsByStudentId/{studentId}
    async fn list_periods_by_student(&self, student_id: i64) -> Result<Vec<Period>>;
    // GET /api/Subject
    async fn list_subjects(&self) -> Result<Vec<Subject>>;

    /// 评价
    async fn list_evaluations(&self) -> Result<Vec<Evaluation>>;
    async fn create_evaluation(&self, evaluation: EvaluationPayload) -> Result<()>;
    async fn list_activities(&self) -> Result<Vec<Activity>>;

    /// 操作日志
    // GET /api/LogActivity
    async fn list_activity_logs(&self) -> Result<Vec<ActivityLog>>;

    /// 密码找回
    // POST /api/emails/password-reset
    async fn send_password_reset_email(&self, request: PasswordResetEmailPayload) -> Result<()>;
    // POST /api/user-accounts/reset-password
    async fn reset_password(&self, request: ResetPasswordPayload) -> Result<()>;
}

pub fn create_upstream(config: &UpstreamConfig) -> Result<Arc<dyn Upstream>> {
    let upstream = http_upstream::HttpUpstream::new(config)?;
    Ok(Arc::new(upstream))
}
