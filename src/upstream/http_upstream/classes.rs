//! 班级与教师接口

use reqwest::Method;

use super::HttpUpstream;
use crate::errors::Result;
use crate::models::{
    classes::{entities::Class, requests::ClassPayload},
    teachers::{entities::Teacher, requests::TeacherPayload},
};

const CLASS_PATH: &str = "/api/Class";
const TEACHER_PATH: &str = "/api/Teacher";

impl HttpUpstream {
    /// 获取全部班级
    pub async fn list_classes_impl(&self) -> Result<Vec<Class>> {
        self.get_json(CLASS_PATH).await
    }

    /// 创建班级
    pub async fn create_class_impl(&self, class: ClassPayload) -> Result<()> {
        self.send_json(Method::POST, CLASS_PATH, &class).await
    }

    /// 获取全部教师
    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        self.get_json(TEACHER_PATH).await
    }

    /// 更新教师任教科目（主键在请求体中）
    pub async fn update_teacher_impl(&self, teacher: TeacherPayload) -> Result<()> {
        self.send_json(Method::PUT, TEACHER_PATH, &teacher).await
    }
}
