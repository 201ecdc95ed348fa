pub mod create;
pub mod list;
pub mod roster;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::lazy_service;
use crate::errors::Result;
use crate::models::{
    ListParams,
    classes::{entities::Class, requests::CreateClassRequest, responses::ClassRow},
    school_years::entities::SchoolYear,
    students::entities::Student,
    teachers::entities::Teacher,
    user_accounts::entities::UserAccount,
};
use crate::readmodel::Index;
use crate::readmodel::fetcher::fetch_batch;
use crate::readmodel::resolver::label_through;
use crate::upstream::Upstream;
use crate::utils::SessionKey;

lazy_service!(ClassService);

impl ClassService {
    // 获取班级列表
    pub async fn list_classes(
        &self,
        request: &HttpRequest,
        session: SessionKey,
        params: ListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_classes(self, request, session, params).await
    }

    // 班级花名册（学生及家长联系方式）
    pub async fn get_roster(
        &self,
        request: &HttpRequest,
        session: SessionKey,
        class_id: i64,
        refresh: bool,
    ) -> ActixResult<HttpResponse> {
        roster::get_roster(self, request, session, class_id, refresh).await
    }

    pub async fn create_class(
        &self,
        request: &HttpRequest,
        class_data: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, request, class_data).await
    }
}

/// 班级页快照，列表与花名册共用
#[derive(Debug)]
pub struct ClassesSnapshot {
    pub classes: Index<Class>,
    pub teachers: Index<Teacher>,
    pub accounts: Index<UserAccount>,
    pub school_years: Index<SchoolYear>,
    pub students: Vec<Student>,
}

impl ClassesSnapshot {
    pub async fn fetch(upstream: &dyn Upstream) -> Result<Self> {
        let (classes, teachers, accounts, school_years, students) = fetch_batch!(
            classes = upstream.list_classes(),
            teachers = upstream.list_teachers(),
            accounts = upstream.list_user_accounts(),
            school_years = upstream.list_school_years(),
            students = upstream.list_students(),
        )?;

        Ok(Self {
            classes: Index::build(classes),
            teachers: Index::build(teachers),
            accounts: Index::build(accounts),
            school_years: Index::build(school_years),
            students,
        })
    }

    pub fn students_of(&self, class_id: i64) -> impl Iterator<Item = &Student> {
        self.students
            .iter()
            .filter(move |student| student.class_id == Some(class_id))
    }

    pub fn row(&self, class: &Class) -> ClassRow {
        ClassRow {
            id: class.id,
            name: class.name.clone(),
            homeroom_teacher_id: class.teacher_homeroom_id,
            // 班级 → 教师 → 账号
            homeroom_teacher_name: label_through(
                &self.teachers,
                class.teacher_homeroom_id,
                |teacher| teacher.user_id,
                &self.accounts,
            ),
            school_year_id: class.school_year_id,
            school_year: self.school_years.label(class.school_year_id),
            student_count: self.students_of(class.id).count(),
        }
    }

    pub fn rows(&self) -> Vec<ClassRow> {
        self.classes.iter().map(|class| self.row(class)).collect()
    }
}
