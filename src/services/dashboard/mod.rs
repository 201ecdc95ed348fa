pub mod children;
pub mod timetable;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::lazy_service;
use crate::errors::Result;
use crate::models::{
    classes::entities::Class,
    dashboard::requests::TimetableParams,
    periods::entities::{Period, Subject},
    students::{entities::Student, responses::ChildSummary},
};
use crate::readmodel::Index;
use crate::readmodel::fetcher::fetch_batch;
use crate::upstream::Upstream;
use crate::utils::SessionKey;

lazy_service!(DashboardService);

impl DashboardService {
    // 家长的子女列表
    pub async fn list_children(
        &self,
        request: &HttpRequest,
        session: SessionKey,
        parent_id: i64,
        refresh: bool,
    ) -> ActixResult<HttpResponse> {
        children::list_children(self, request, session, parent_id, refresh).await
    }

    // 子女的周课表
    pub async fn get_timetable(
        &self,
        request: &HttpRequest,
        session: SessionKey,
        parent_id: i64,
        params: TimetableParams,
    ) -> ActixResult<HttpResponse> {
        timetable::get_timetable(self, request, session, parent_id, params).await
    }
}

/// 家长子女快照
#[derive(Debug)]
pub struct ChildrenSnapshot {
    pub students: Vec<Student>,
    pub classes: Index<Class>,
}

impl ChildrenSnapshot {
    pub async fn fetch(upstream: &dyn Upstream, parent_id: i64) -> Result<Self> {
        let (students, classes) = fetch_batch!(
            students = upstream.list_students_by_parent(parent_id),
            classes = upstream.list_classes(),
        )?;
        Ok(Self {
            students,
            classes: Index::build(classes),
        })
    }

    pub fn summary(&self, student: &Student) -> ChildSummary {
        ChildSummary {
            id: student.id,
            name: student.name.clone(),
            date_of_birth: student.date_of_birth,
            class_id: student.class_id,
            class_name: self.classes.label(student.class_id),
        }
    }

    pub fn summaries(&self) -> Vec<ChildSummary> {
        self.students
            .iter()
            .map(|student| self.summary(student))
            .collect()
    }
}

/// 某个子女的课时快照，切换周时复用
#[derive(Debug)]
pub struct TimetableSnapshot {
    pub periods: Vec<Period>,
    pub subjects: Index<Subject>,
}

impl TimetableSnapshot {
    pub async fn fetch(upstream: &dyn Upstream, student_id: i64) -> Result<Self> {
        let (periods, subjects) = fetch_batch!(
            periods = upstream.list_periods_by_student(student_id),
            subjects = upstream.list_subjects(),
        )?;
        Ok(Self {
            periods,
            subjects: Index::build(subjects),
        })
    }
}

/// 家长维度的视图键
pub fn parent_scope(session: &SessionKey, parent_id: i64) -> String {
    session.scoped(format!("parent:{parent_id}"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::Value;

    use crate::models::ErrorCode;
    use crate::services::init_test_app;
    use crate::upstream::fake::FakeUpstream;

    #[actix_web::test]
    async fn test_children_of_parent() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let req = test::TestRequest::get()
            .uri("/api/v1/parents/200/children")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["parent_id"], 200);
        let children = body["data"]["children"].as_array().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0]["name"], "Lê Minh Khang");
        assert_eq!(children[0]["class_name"], "10A5");
        assert_eq!(children[1]["class_name"], "10A6");
    }

    #[actix_web::test]
    async fn test_week_of_wednesday_scenario() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let req = test::TestRequest::get()
            .uri("/api/v1/parents/200/timetable?date=2024-06-05")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let data = &body["data"];

        // 未指定子女时默认第一个
        assert_eq!(data["student"]["id"], 1);
        assert_eq!(data["week"]["week_start"], "2024-06-03T00:00:00");
        assert_eq!(data["week"]["week_end"], "2024-06-09T23:59:59.999");
        assert_eq!(data["slots"].as_array().unwrap().len(), 8);

        let days = data["days"].as_array().unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0]["date"], "2024-06-03");
        assert_eq!(days[0]["cells"][0]["subject_name"], "Toán");
        assert_eq!(days[0]["cells"][0]["class_name"], "10A5");
        assert_eq!(days[1]["cells"][2]["subject_name"], "Ngữ văn");

        let filled = days
            .iter()
            .flat_map(|day| day["cells"].as_array().unwrap())
            .filter(|cell| !cell.is_null())
            .count();
        assert_eq!(filled, 2);
    }

    #[actix_web::test]
    async fn test_week_navigation_reuses_snapshot() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let req = test::TestRequest::get()
            .uri("/api/v1/parents/200/timetable?date=2024-06-05")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let next = body["data"]["week"]["next_date"].as_str().unwrap().to_string();
        assert_eq!(next, "2024-06-12");

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/parents/200/timetable?date={next}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let cell = &body["data"]["days"][0]["cells"][0];
        assert_eq!(cell["period_id"], 4);

        assert_eq!(fake.calls_to("list_periods_by_student"), 1);
        assert_eq!(fake.calls_to("list_students_by_parent"), 1);
    }

    #[actix_web::test]
    async fn test_selecting_other_child() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let req = test::TestRequest::get()
            .uri("/api/v1/parents/200/timetable?date=2024-06-05&student_id=2")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["student"]["class_name"], "10A6");
        assert_eq!(body["data"]["days"][0]["cells"][1]["subject_name"], "Ngữ văn");

        // 不是该家长的子女
        let req = test::TestRequest::get()
            .uri("/api/v1/parents/200/timetable?student_id=3")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_parent_without_children_gets_empty_grid() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let req = test::TestRequest::get()
            .uri("/api/v1/parents/100/timetable?date=2024-06-05")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"]["student"].is_null());
        assert_eq!(body["data"]["days"].as_array().unwrap().len(), 7);
        assert_eq!(fake.calls_to("list_periods_by_student"), 0);
    }

    #[actix_web::test]
    async fn test_children_failure_is_reported() {
        let fake = Arc::new(FakeUpstream::school());
        fake.fail("list_students_by_parent");
        let app = init_test_app!(fake);

        let req = test::TestRequest::get()
            .uri("/api/v1/parents/200/timetable")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(fake.calls_to("list_periods_by_student"), 0);
    }

    #[actix_web::test]
    async fn test_date_at_calendar_edge_is_rejected() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        // 可表示的最后一天，其所在周越界
        let req = test::TestRequest::get()
            .uri("/api/v1/parents/200/timetable?date=%2B262142-12-31")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::ValidationFailed as i32);
        assert_eq!(fake.calls_to("list_students_by_parent"), 0);

        // 服务仍可继续处理请求
        let req = test::TestRequest::get()
            .uri("/api/v1/parents/200/timetable?date=2024-06-05")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
