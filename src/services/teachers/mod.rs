pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::lazy_service;
use crate::errors::Result;
use crate::models::{
    ListParams,
    periods::entities::Subject,
    teachers::{entities::Teacher, requests::UpdateTeacherRequest, responses::TeacherRow},
    user_accounts::entities::UserAccount,
};
use crate::readmodel::fetcher::fetch_batch;
use crate::readmodel::{Index, Labeled};
use crate::upstream::Upstream;
use crate::utils::SessionKey;

lazy_service!(TeacherService);

impl TeacherService {
    pub async fn list_teachers(
        &self,
        request: &HttpRequest,
        session: SessionKey,
        params: ListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_teachers(self, request, session, params).await
    }

    // 更新教师任教科目
    pub async fn update_teacher(
        &self,
        request: &HttpRequest,
        teacher_data: UpdateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_teacher(self, request, teacher_data).await
    }
}

/// 教师页快照
#[derive(Debug)]
pub struct TeachersSnapshot {
    pub teachers: Index<Teacher>,
    pub accounts: Index<UserAccount>,
    pub subjects: Index<Subject>,
}

impl TeachersSnapshot {
    pub async fn fetch(upstream: &dyn Upstream) -> Result<Self> {
        let (teachers, accounts, subjects) = fetch_batch!(
            teachers = upstream.list_teachers(),
            accounts = upstream.list_user_accounts(),
            subjects = upstream.list_subjects(),
        )?;

        Ok(Self {
            teachers: Index::build(teachers),
            accounts: Index::build(accounts),
            subjects: Index::build(subjects),
        })
    }

    pub fn rows(&self) -> Vec<TeacherRow> {
        self.teachers
            .iter()
            .map(|teacher| {
                let account = self.accounts.resolve(teacher.user_id);
                TeacherRow {
                    id: teacher.id,
                    user_id: teacher.user_id,
                    // 账号缺失时显示教师自身的占位名
                    full_name: account
                        .map(|a| a.full_name.clone())
                        .unwrap_or_else(|| teacher.label()),
                    email: account.and_then(|a| a.email.clone()),
                    phone: account.and_then(|a| a.phone.clone()),
                    subject_id: teacher.subject_id,
                    subject_name: self.subjects.label(teacher.subject_id),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{Value, json};

    use crate::services::init_test_app;
    use crate::upstream::fake::FakeUpstream;

    #[actix_web::test]
    async fn test_list_teachers_joins_account_and_subject() {
        let mut school = FakeUpstream::school();
        school.teachers.push(crate::models::teachers::entities::Teacher {
            id: 12,
            user_id: Some(555),
            subject_id: None,
        });
        let fake = Arc::new(school);
        let app = init_test_app!(fake);

        let req = test::TestRequest::get().uri("/api/v1/teachers").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 3);

        // 按姓名升序：占位名 "Giáo viên 12" 排在最前
        assert_eq!(items[0]["full_name"], "Giáo viên 12");
        assert_eq!(items[0]["subject_name"], "Chưa xác định");
        assert_eq!(items[1]["full_name"], "Nguyễn Văn An");
        assert_eq!(items[1]["subject_name"], "Toán");
        assert_eq!(items[1]["email"], "user100@school.vn");
    }

    #[actix_web::test]
    async fn test_filter_by_subject() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let req = test::TestRequest::get()
            .uri("/api/v1/teachers?filter=3")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["full_name"], "Trần Thị Bình");
    }

    #[actix_web::test]
    async fn test_update_teacher_requires_subject() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let req = test::TestRequest::put()
            .uri("/api/v1/teachers")
            .set_json(json!({ "id": 10, "user_id": 100 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri("/api/v1/teachers")
            .set_json(json!({ "id": 10, "user_id": 100, "subject_id": 3 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            fake.sent()[0].1,
            json!({ "id": 10, "userId": 100, "subjectId": 3 })
        );
    }

    #[actix_web::test]
    async fn test_update_rejected_upstream_is_reported() {
        let fake = Arc::new(FakeUpstream::school());
        fake.fail("update_teacher");
        let app = init_test_app!(fake);

        let req = test::TestRequest::put()
            .uri("/api/v1/teachers")
            .set_json(json!({ "id": 10, "subject_id": 3 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
