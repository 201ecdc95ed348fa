//! 学年与学期接口

use reqwest::Method;

use super::HttpUpstream;
use crate::errors::Result;
use crate::models::school_years::{
    entities::{SchoolYear, Semester},
    requests::{SchoolYearPayload, SemesterPayload},
};

const SCHOOL_YEAR_PATH: &str = "/api/SchoolYear";
const SEMESTER_PATH: &str = "/api/Semester";

impl HttpUpstream {
    pub async fn list_school_years_impl(&self) -> Result<Vec<SchoolYear>> {
        self.get_json(SCHOOL_YEAR_PATH).await
    }

    pub async fn create_school_year_impl(&self, year: SchoolYearPayload) -> Result<()> {
        self.send_json(Method::POST, SCHOOL_YEAR_PATH, &year).await
    }

    pub async fn update_school_year_impl(&self, id: i64, year: SchoolYearPayload) -> Result<()> {
        self.send_json(Method::PUT, &format!("{SCHOOL_YEAR_PATH}/{id}"), &year)
            .await
    }

    pub async fn delete_school_year_impl(&self, id: i64) -> Result<()> {
        self.delete(&format!("{SCHOOL_YEAR_PATH}/{id}")).await
    }

    pub async fn list_semesters_impl(&self) -> Result<Vec<Semester>> {
        self.get_json(SEMESTER_PATH).await
    }

    pub async fn create_semester_impl(&self, semester: SemesterPayload) -> Result<()> {
        self.send_json(Method::POST, SEMESTER_PATH, &semester).await
    }

    pub async fn update_semester_impl(&self, id: i64, semester: SemesterPayload) -> Result<()> {
        self.send_json(Method::PUT, &format!("{SEMESTER_PATH}/{id}"), &semester)
            .await
    }

    pub async fn delete_semester_impl(&self, id: i64) -> Result<()> {
        self.delete(&format!("{SEMESTER_PATH}/{id}")).await
    }
}
