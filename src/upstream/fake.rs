//! 测试用的内存上游

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::NaiveDate;
use serde::Serialize;

use super::Upstream;
use crate::errors::{PortalError, Result};
use crate::models::{
    activity_logs::entities::{ActivityLog, LogActivityType},
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

/// 内存上游：集合按构造顺序返回，可以让任意接口失败，并记录写请求
#[derive(Default)]
pub struct FakeUpstream {
    pub classes: Vec<Class>,
    pub teachers: Vec<Teacher>,
    pub user_accounts: Vec<UserAccount>,
    pub school_years: Vec<SchoolYear>,
    pub semesters: Vec<Semester>,
    pub students: Vec<Student>,
    pub periods: Vec<Period>,
    pub subjects: Vec<Subject>,
    pub evaluations: Vec<Evaluation>,
    pub activities: Vec<Activity>,
    pub activity_logs: Vec<ActivityLog>,
    failing: Mutex<HashSet<&'static str>>,
    calls: Mutex<Vec<&'static str>>,
    sent: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

impl FakeUpstream {
    /// 一所小学校的完整数据
    pub fn school() -> Self {
        let account = |id: i64, name: &str, role_id: i64| UserAccount {
            id,
            full_name: name.to_string(),
            email: Some(format!("user{id}@school.vn")),
            phone: Some(format!("09000000{id:02}")),
            role_id: Some(role_id),
        };
        let student = |id: i64, name: &str, class_id: i64, parent_id: i64| Student {
            id,
            name: name.to_string(),
            date_of_birth: Some(date(2010, 1, id as u32)),
            class_id: Some(class_id),
            parent_id: Some(parent_id),
        };
        let period = |id: i64, day: NaiveDate, no: u8, class_id: i64, subject_id: i64| Period {
            id,
            period_no: no,
            period_date: day,
            class_id: Some(class_id),
            subject_id: Some(subject_id),
            teacher_id: Some(if subject_id == 2 { 10 } else { 11 }),
        };

        Self {
            classes: vec![
                Class {
                    id: 5,
                    name: "10A5".to_string(),
                    teacher_homeroom_id: Some(10),
                    school_year_id: Some(1),
                },
                Class {
                    id: 6,
                    name: "10A6".to_string(),
                    teacher_homeroom_id: Some(11),
                    school_year_id: Some(2),
                },
            ],
            teachers: vec![
                Teacher {
                    id: 10,
                    user_id: Some(100),
                    subject_id: Some(2),
                },
                Teacher {
                    id: 11,
                    user_id: Some(101),
                    subject_id: Some(3),
                },
            ],
            user_accounts: vec![
                account(1, "Quản trị viên", 1),
                account(100, "Nguyễn Văn An", 2),
                account(101, "Trần Thị Bình", 2),
                account(200, "Lê Văn Cường", 3),
                account(201, "Phạm Thị Dung", 3),
            ],
            school_years: vec![
                SchoolYear {
                    id: 1,
                    year: "2023-2024".to_string(),
                },
                SchoolYear {
                    id: 2,
                    year: "2024-2025".to_string(),
                },
            ],
            semesters: vec![
                Semester {
                    id: 2,
                    name: "Học kỳ 2".to_string(),
                    start_date: date(2024, 1, 15),
                    end_date: date(2024, 5, 31),
                    school_year_id: Some(1),
                },
                Semester {
                    id: 1,
                    name: "Học kỳ 1".to_string(),
                    start_date: date(2023, 9, 5),
                    end_date: date(2024, 1, 10),
                    school_year_id: Some(1),
                },
                Semester {
                    id: 3,
                    name: "Học kỳ 1".to_string(),
                    start_date: date(2024, 9, 5),
                    end_date: date(2025, 1, 10),
                    school_year_id: Some(2),
                },
            ],
            students: vec![
                student(1, "Lê Minh Khang", 5, 200),
                student(2, "Lê Thu Hà", 6, 200),
                student(3, "Phạm Gia Huy", 5, 201),
                student(4, "Phạm Bảo Ngọc", 5, 201),
            ],
            periods: vec![
                period(1, date(2024, 6, 3), 1, 5, 2),
                period(2, date(2024, 6, 4), 3, 5, 3),
                period(3, date(2024, 6, 3), 2, 6, 3),
                period(4, date(2024, 6, 10), 1, 5, 2),
            ],
            subjects: vec![
                Subject {
                    id: 2,
                    name: "Toán".to_string(),
                },
                Subject {
                    id: 3,
                    name: "Ngữ văn".to_string(),
                },
            ],
            evaluations: vec![
                Evaluation {
                    id: 1,
                    period_id: 1,
                    content: Some("Cả lớp tích cực phát biểu".to_string()),
                    activity_id: Some(1),
                    created_at: Some(date(2024, 6, 3).and_hms_opt(8, 0, 0).unwrap()),
                    students: vec![1, 3, 4],
                },
                Evaluation {
                    id: 2,
                    period_id: 2,
                    content: None,
                    activity_id: Some(2),
                    created_at: Some(date(2024, 6, 4).and_hms_opt(9, 0, 0).unwrap()),
                    students: vec![3],
                },
            ],
            activities: vec![
                Activity {
                    id: 1,
                    activity_type: "Phát biểu xây dựng bài".to_string(),
                    is_negative: false,
                },
                Activity {
                    id: 2,
                    activity_type: "Không làm bài tập".to_string(),
                    is_negative: true,
                },
            ],
            activity_logs: [1u8, 2, 3, 2, 5]
                .into_iter()
                .enumerate()
                .map(|(i, code)| ActivityLog {
                    id: i as i64 + 1,
                    user_id: Some(if i % 2 == 0 { 1 } else { 100 }),
                    log_activity_type: LogActivityType::from(code),
                    note: None,
                    created_at: Some(date(2024, 6, 1).and_hms_opt(7, i as u32, 0).unwrap()),
                })
                .collect(),
            ..Default::default()
        }
    }

    /// 让指定接口（方法名）返回 500
    pub fn fail(&self, endpoint: &'static str) {
        self.failing.lock().unwrap().insert(endpoint);
    }

    pub fn recover(&self, endpoint: &'static str) {
        self.failing.lock().unwrap().remove(endpoint);
    }

    /// 指定接口被调用的次数
    pub fn calls_to(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|name| **name == endpoint)
            .count()
    }

    /// 已发送的写请求
    pub fn sent(&self) -> Vec<(&'static str, serde_json::Value)> {
        self.sent.lock().unwrap().clone()
    }

    fn check(&self, endpoint: &'static str) -> Result<()> {
        self.calls.lock().unwrap().push(endpoint);
        if self.failing.lock().unwrap().contains(endpoint) {
            return Err(PortalError::upstream_status(format!(
                "{endpoint} returned 500 Internal Server Error"
            )));
        }
        Ok(())
    }

    fn read<T: Clone>(&self, endpoint: &'static str, items: &[T]) -> Result<Vec<T>> {
        self.check(endpoint)?;
        Ok(items.to_vec())
    }

    fn write<B: Serialize>(&self, endpoint: &'static str, body: &B) -> Result<()> {
        self.check(endpoint)?;
        let value = serde_json::to_value(body)?;
        self.sent.lock().unwrap().push((endpoint, value));
        Ok(())
    }
}

#[async_trait::async_trait]
impl Upstream for FakeUpstream {
    async fn list_classes(&self) -> Result<Vec<Class>> {
        self.read("list_classes", &self.classes)
    }

    async fn create_class(&self, class: ClassPayload) -> Result<()> {
        self.write("create_class", &class)
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.read("list_teachers", &self.teachers)
    }

    async fn update_teacher(&self, teacher: TeacherPayload) -> Result<()> {
        self.write("update_teacher", &teacher)
    }

    async fn list_user_accounts(&self) -> Result<Vec<UserAccount>> {
        self.read("list_user_accounts", &self.user_accounts)
    }

    async fn get_user_account(&self, id: i64) -> Result<Option<UserAccount>> {
        self.check("get_user_account")?;
        Ok(self.user_accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn register_user_account(&self, account: RegisterUserAccountPayload) -> Result<()> {
        self.write("register_user_account", &account)
    }

    async fn update_user_account(
        &self,
        _id: i64,
        account: UpdateUserAccountPayload,
    ) -> Result<()> {
        self.write("update_user_account", &account)
    }

    async fn delete_user_account(&self, id: i64) -> Result<()> {
        self.write("delete_user_account", &id)
    }

    async fn list_school_years(&self) -> Result<Vec<SchoolYear>> {
        self.read("list_school_years", &self.school_years)
    }

    async fn create_school_year(&self, year: SchoolYearPayload) -> Result<()> {
        self.write("create_school_year", &year)
    }

    async fn update_school_year(&self, _id: i64, year: SchoolYearPayload) -> Result<()> {
        self.write("update_school_year", &year)
    }

    async fn delete_school_year(&self, id: i64) -> Result<()> {
        self.write("delete_school_year", &id)
    }

    async fn list_semesters(&self) -> Result<Vec<Semester>> {
        self.read("list_semesters", &self.semesters)
    }

    async fn create_semester(&self, semester: SemesterPayload) -> Result<()> {
        self.write("create_semester", &semester)
    }

    async fn update_semester(&self, _id: i64, semester: SemesterPayload) -> Result<()> {
        self.write("update_semester", &semester)
    }

    async fn delete_semester(&self, id: i64) -> Result<()> {
        self.write("delete_semester", &id)
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.read("list_students", &self.students)
    }

    async fn list_students_by_parent(&self, parent_id: i64) -> Result<Vec<Student>> {
        self.check("list_students_by_parent")?;
        Ok(self
            .students
            .iter()
            .filter(|s| s.parent_id == Some(parent_id))
            .cloned()
            .collect())
    }

    async fn list_periods(&self) -> Result<Vec<Period>> {
        self.read("list_periods", &self.periods)
    }

    async fn get_period(&self, id: i64) -> Result<Option<Period>> {
        self.check("get_period")?;
        Ok(self.periods.iter().find(|p| p.id == id).cloned())
    }

    async fn list_periods_by_student(&self, student_id: i64) -> Result<Vec<Period>> {
        self.check("list_periods_by_student")?;
        let class_id = self
            .students
            .iter()
            .find(|s| s.id == student_id)
            .and_then(|s| s.class_id);
        Ok(self
            .periods
            .iter()
            .filter(|p| class_id.is_some() && p.class_id == class_id)
            .cloned()
            .collect())
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.read("list_subjects", &self.subjects)
    }

    async fn list_evaluations(&self) -> Result<Vec<Evaluation>> {
        self.read("list_evaluations", &self.evaluations)
    }

    async fn create_evaluation(&self, evaluation: EvaluationPayload) -> Result<()> {
        self.write("create_evaluation", &evaluation)
    }

    async fn list_activities(&self) -> Result<Vec<Activity>> {
        self.read("list_activities", &self.activities)
    }

    async fn list_activity_logs(&self) -> Result<Vec<ActivityLog>> {
        self.read("list_activity_logs", &self.activity_logs)
    }

    async fn send_password_reset_email(&self, request: PasswordResetEmailPayload) -> Result<()> {
        self.write("send_password_reset_email", &request)
    }

    async fn reset_password(&self, request: ResetPasswordPayload) -> Result<()> {
        self.write("reset_password", &request)
    }
}
