pub mod list;
pub mod semesters;
pub mod years;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::lazy_service;
use crate::errors::Result;
use crate::models::{
    ListParams,
    school_years::{
        entities::{SchoolYear, Semester},
        requests::{SchoolYearRequest, SemesterRequest},
        responses::{SchoolYearView, SemesterView},
    },
};
use crate::readmodel::Index;
use crate::readmodel::fetcher::fetch_batch;
use crate::readmodel::listing::{SortOrder, sort_by_key};
use crate::upstream::Upstream;
use crate::utils::SessionKey;

lazy_service!(SchoolYearService);

impl SchoolYearService {
    pub async fn list_school_years(
        &self,
        request: &HttpRequest,
        session: SessionKey,
        params: ListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_school_years(self, request, session, params).await
    }

    pub async fn list_semesters(
        &self,
        request: &HttpRequest,
        session: SessionKey,
        params: ListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_semesters(self, request, session, params).await
    }

    pub async fn save_school_year(
        &self,
        request: &HttpRequest,
        year_id: Option<i64>,
        year_data: SchoolYearRequest,
    ) -> ActixResult<HttpResponse> {
        years::save_school_year(self, request, year_id, year_data).await
    }

    pub async fn delete_school_year(
        &self,
        request: &HttpRequest,
        year_id: i64,
    ) -> ActixResult<HttpResponse> {
        years::delete_school_year(self, request, year_id).await
    }

    pub async fn save_semester(
        &self,
        request: &HttpRequest,
        semester_id: Option<i64>,
        semester_data: SemesterRequest,
    ) -> ActixResult<HttpResponse> {
        semesters::save_semester(self, request, semester_id, semester_data).await
    }

    pub async fn delete_semester(
        &self,
        request: &HttpRequest,
        semester_id: i64,
    ) -> ActixResult<HttpResponse> {
        semesters::delete_semester(self, request, semester_id).await
    }
}

/// 学年与学期快照，学年页与学期页各自持有一份
#[derive(Debug)]
pub struct SchoolYearsSnapshot {
    pub years: Index<SchoolYear>,
    pub semesters: Vec<Semester>,
}

impl SchoolYearsSnapshot {
    pub async fn fetch(upstream: &dyn Upstream) -> Result<Self> {
        let (years, semesters) = fetch_batch!(
            years = upstream.list_school_years(),
            semesters = upstream.list_semesters(),
        )?;

        Ok(Self {
            years: Index::build(years),
            semesters,
        })
    }

    pub fn semester_rows(&self) -> Vec<SemesterView> {
        self.semesters
            .iter()
            .map(|semester| SemesterView {
                id: semester.id,
                name: semester.name.clone(),
                start_date: semester.start_date,
                end_date: semester.end_date,
                school_year_id: semester.school_year_id,
                school_year: self.years.label(semester.school_year_id),
            })
            .collect()
    }

    /// 学年及其下的学期，学期按开始日期排序
    pub fn year_rows(&self) -> Vec<SchoolYearView> {
        let semesters = self.semester_rows();
        self.years
            .iter()
            .map(|year| {
                let mut nested: Vec<SemesterView> = semesters
                    .iter()
                    .filter(|s| s.school_year_id == Some(year.id))
                    .cloned()
                    .collect();
                sort_by_key(&mut nested, SortOrder::Asc, |s| s.start_date);
                SchoolYearView {
                    id: year.id,
                    year: year.year.clone(),
                    semesters: nested,
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
    async fn test_years_nest_semesters_by_start_date() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let req = test::TestRequest::get()
            .uri("/api/v1/school-years?order=desc")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items[0]["year"], "2024-2025");
        assert_eq!(items[1]["year"], "2023-2024");

        let nested = items[1]["semesters"].as_array().unwrap();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0]["name"], "Học kỳ 1");
        assert_eq!(nested[0]["start_date"], "2023-09-05");
        assert_eq!(nested[1]["name"], "Học kỳ 2");
    }

    #[actix_web::test]
    async fn test_semesters_filter_by_year() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let req = test::TestRequest::get()
            .uri("/api/v1/semesters?filter=1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], 1);
        assert_eq!(items[0]["school_year"], "2023-2024");
    }

    #[actix_web::test]
    async fn test_create_school_year_checks_format() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let req = test::TestRequest::post()
            .uri("/api/v1/school-years")
            .set_json(json!({ "year": "2025-2027" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/v1/school-years")
            .set_json(json!({ "year": "2025-2026" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(fake.sent()[0].1, json!({ "year": "2025-2026" }));

        let req = test::TestRequest::put()
            .uri("/api/v1/school-years/2")
            .set_json(json!({ "year": "2024-2025" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(fake.sent()[1].1, json!({ "id": 2, "year": "2024-2025" }));
    }

    #[actix_web::test]
    async fn test_semester_requires_ordered_dates() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let req = test::TestRequest::post()
            .uri("/api/v1/semesters")
            .set_json(json!({
                "name": "Học kỳ 2",
                "start_date": "2025-05-31",
                "end_date": "2025-01-15",
                "school_year_id": 2
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/v1/semesters")
            .set_json(json!({
                "name": "Học kỳ 2",
                "start_date": "2025-01-15",
                "end_date": "2025-05-31",
                "school_year_id": 2
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            fake.sent()[0].1,
            json!({
                "name": "Học kỳ 2",
                "startDate": "2025-01-15",
                "endDate": "2025-05-31",
                "schoolYearId": 2
            })
        );

        let req = test::TestRequest::delete()
            .uri("/api/v1/semesters/3")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
