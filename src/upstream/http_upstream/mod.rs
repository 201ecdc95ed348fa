//! 基于 reqwest 的上游实现
//!
//! 非 2xx 状态码映射为 `UpstreamStatus`，响应体无法解析映射为 `Serialization`，
//! 传输层错误映射为 `Network`。不做重试。

mod accounts;
mod classes;
mod evaluations;
mod periods;
mod school_years;
mod students;

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::UpstreamConfig;
use crate::errors::{PortalError, Result};

/// HTTP 上游实现
#[derive(Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpUpstream {
    /// 创建新的上游客户端
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        reqwest::Url::parse(&config.base_url).map_err(|e| {
            PortalError::configuration(format!(
                "Invalid upstream base url '{}': {e}",
                config.base_url
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout))
            .connect_timeout(Duration::from_millis(config.connect_timeout))
            .build()
            .map_err(|e| PortalError::configuration(format!("Failed to build HTTP client: {e}")))?;

        let bearer_token = Some(config.bearer_token.trim())
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer_token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn ensure_success(method: &Method, path: &str, response: &Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        warn!("Upstream {} {} returned {}", method, path, status);
        Err(PortalError::upstream_status(format!(
            "{method} {path} returned {status}"
        )))
    }

    async fn read_json<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
        Self::ensure_success(&Method::GET, path, &response)?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Upstream GET {} returned an unreadable body: {}", path, e);
            PortalError::serialization(format!("GET {path}: {e}"))
        })
    }

    /// GET 并解析 JSON
    #[instrument(name = "upstream_get", skip(self))]
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("Fetching {}", path);
        let response = self.request(Method::GET, path).send().await?;
        Self::read_json(path, response).await
    }

    /// GET 单个资源，404 视为不存在
    #[instrument(name = "upstream_get_one", skip(self))]
    pub(crate) async fn get_optional_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>> {
        debug!("Fetching {}", path);
        let response = self.request(Method::GET, path).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::read_json(path, response).await.map(Some)
    }

    /// 发送 JSON 请求体，响应体忽略
    #[instrument(name = "upstream_send", skip(self, body))]
    pub(crate) async fn send_json<B>(&self, method: Method, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + Sync + ?Sized,
    {
        debug!("Sending {} {}", method, path);
        let response = self.request(method.clone(), path).json(body).send().await?;
        Self::ensure_success(&method, path, &response)
    }

    #[instrument(name = "upstream_delete", skip(self))]
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        debug!("Sending DELETE {}", path);
        let response = self.request(Method::DELETE, path).send().await?;
        Self::ensure_success(&Method::DELETE, path, &response)
    }
}

// Upstream trait 实现
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
use crate::upstream::Upstream;

#[async_trait::async_trait]
impl Upstream for HttpUpstream {
    async fn list_classes(&self) -> Result<Vec<Class>> {
        self.list_classes_impl().await
    }

    async fn create_class(&self, class: ClassPayload) -> Result<()> {
        self.create_class_impl(class).await
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.list_teachers_impl().await
    }

    async fn update_teacher(&self, teacher: TeacherPayload) -> Result<()> {
        self.update_teacher_impl(teacher).await
    }

    async fn list_user_accounts(&self) -> Result<Vec<UserAccount>> {
        self.list_user_accounts_impl().await
    }

    async fn get_user_account(&self, id: i64) -> Result<Option<UserAccount>> {
        self.get_user_account_impl(id).await
    }

    async fn register_user_account(&self, account: RegisterUserAccountPayload) -> Result<()> {
        self.register_user_account_impl(account).await
    }

    async fn update_user_account(
        &self,
        id: i64,
        account: UpdateUserAccountPayload,
    ) -> Result<()> {
        self.update_user_account_impl(id, account).await
    }

    async fn delete_user_account(&self, id: i64) -> Result<()> {
        self.delete_user_account_impl(id).await
    }

    async fn list_school_years(&self) -> Result<Vec<SchoolYear>> {
        self.list_school_years_impl().await
    }

    async fn create_school_year(&self, year: SchoolYearPayload) -> Result<()> {
        self.create_school_year_impl(year).await
    }

    async fn update_school_year(&self, id: i64, year: SchoolYearPayload) -> Result<()> {
        self.update_school_year_impl(id, year).await
    }

    async fn delete_school_year(&self, id: i64) -> Result<()> {
        self.delete_school_year_impl(id).await
    }

    async fn list_semesters(&self) -> Result<Vec<Semester>> {
        self.list_semesters_impl().await
    }

    async fn create_semester(&self, semester: SemesterPayload) -> Result<()> {
        self.create_semester_impl(semester).await
    }

    async fn update_semester(&self, id: i64, semester: SemesterPayload) -> Result<()> {
        self.update_semester_impl(id, semester).await
    }

    async fn delete_semester(&self, id: i64) -> Result<()> {
        self.delete_semester_impl(id).await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn list_students_by_parent(&self, parent_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_parent_impl(parent_id).await
    }

    async fn list_periods(&self) -> Result<Vec<Period>> {
        self.list_periods_impl().await
    }

    async fn get_period(&self, id: i64) -> Result<Option<Period>> {
        self.get_period_impl(id).await
    }

    async fn list_periods_by_student(&self, student_id: i64) -> Result<Vec<Period>> {
        self.list_periods_by_student_impl(student_id).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn list_evaluations(&self) -> Result<Vec<Evaluation>> {
        self.list_evaluations_impl().await
    }

    async fn create_evaluation(&self, evaluation: EvaluationPayload) -> Result<()> {
        self.create_evaluation_impl(evaluation).await
    }

    async fn list_activities(&self) -> Result<Vec<Activity>> {
        self.list_activities_impl().await
    }

    async fn list_activity_logs(&self) -> Result<Vec<ActivityLog>> {
        self.list_activity_logs_impl().await
    }

    async fn send_password_reset_email(&self, request: PasswordResetEmailPayload) -> Result<()> {
        self.send_password_reset_email_impl(request).await
    }

    async fn reset_password(&self, request: ResetPasswordPayload) -> Result<()> {
        self.reset_password_impl(request).await
    }
}
