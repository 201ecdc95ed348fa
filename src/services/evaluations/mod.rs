pub mod create;
pub mod list;

use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::lazy_service;
use crate::errors::Result;
use crate::models::{
    ListParams,
    classes::entities::Class,
    evaluations::{
        entities::{Activity, Evaluation},
        requests::CreateEvaluationRequest,
        responses::EvaluationRow,
    },
    periods::entities::{Period, Subject},
    students::entities::Student,
};
use crate::readmodel::fetcher::fetch_batch;
use crate::readmodel::{Index, Labeled};
use crate::upstream::Upstream;
use crate::utils::SessionKey;

/// 评价覆盖全班时的预览文本
pub const WHOLE_CLASS_LABEL: &str = "Cả lớp";
/// 评价未关联任何学生时的预览文本
pub const NO_STUDENT_LABEL: &str = "Không có học sinh";

lazy_service!(EvaluationService);

impl EvaluationService {
    pub async fn list_evaluations(
        &self,
        request: &HttpRequest,
        session: SessionKey,
        params: ListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_evaluations(self, request, session, params).await
    }

    pub async fn create_evaluation(
        &self,
        request: &HttpRequest,
        evaluation_data: CreateEvaluationRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_evaluation(self, request, evaluation_data).await
    }
}

/// 学生预览文本：人数等于班级人数时显示“全班”
pub fn student_label(count: usize, class_size: usize) -> String {
    if count == 0 {
        NO_STUDENT_LABEL.to_string()
    } else if count == class_size {
        WHOLE_CLASS_LABEL.to_string()
    } else {
        format!("{count} học sinh")
    }
}

/// 评价内容：为空时回退为活动类型名称
pub fn effective_content(
    content: Option<&str>,
    activity_id: Option<i64>,
    activities: &Index<Activity>,
) -> Option<String> {
    match content.map(str::trim).filter(|c| !c.is_empty()) {
        Some(content) => Some(content.to_string()),
        None => activities.resolve(activity_id).map(Labeled::label),
    }
}

/// 各班级的学生人数
pub fn class_sizes(students: &[Student]) -> HashMap<i64, usize> {
    let mut sizes = HashMap::new();
    for class_id in students.iter().filter_map(|s| s.class_id) {
        *sizes.entry(class_id).or_insert(0) += 1;
    }
    sizes
}

/// 评价行投影所需的关联集合
#[derive(Debug)]
pub struct EvaluationLookup {
    pub periods: Index<Period>,
    pub classes: Index<Class>,
    pub subjects: Index<Subject>,
    pub activities: Index<Activity>,
    pub class_sizes: HashMap<i64, usize>,
}

impl EvaluationLookup {
    pub fn row(&self, evaluation: &Evaluation) -> EvaluationRow {
        let period = self.periods.get(evaluation.period_id);
        let class_id = period.and_then(|p| p.class_id);
        let subject_id = period.and_then(|p| p.subject_id);
        let activity = self.activities.resolve(evaluation.activity_id);
        let class_size = class_id
            .and_then(|id| self.class_sizes.get(&id).copied())
            .unwrap_or(0);

        EvaluationRow {
            id: evaluation.id,
            period_id: evaluation.period_id,
            period_label: self.periods.label(Some(evaluation.period_id)),
            class_id,
            class_name: self.classes.label(class_id),
            subject_name: self.subjects.label(subject_id),
            content: effective_content(
                evaluation.content.as_deref(),
                evaluation.activity_id,
                &self.activities,
            )
            .unwrap_or_default(),
            activity_id: evaluation.activity_id,
            activity_type: self.activities.label(evaluation.activity_id),
            is_negative: activity.is_some_and(|a| a.is_negative),
            student_count: evaluation.students.len(),
            student_label: student_label(evaluation.students.len(), class_size),
            created_at: evaluation.created_at,
        }
    }
}

/// 评价页快照
#[derive(Debug)]
pub struct EvaluationsSnapshot {
    pub evaluations: Vec<Evaluation>,
    pub lookup: EvaluationLookup,
}

impl EvaluationsSnapshot {
    pub async fn fetch(upstream: &dyn Upstream) -> Result<Self> {
        let (evaluations, periods, subjects, classes, activities, students) = fetch_batch!(
            evaluations = upstream.list_evaluations(),
            periods = upstream.list_periods(),
            subjects = upstream.list_subjects(),
            classes = upstream.list_classes(),
            activities = upstream.list_activities(),
            students = upstream.list_students(),
        )?;

        Ok(Self {
            evaluations,
            lookup: EvaluationLookup {
                periods: Index::build(periods),
                classes: Index::build(classes),
                subjects: Index::build(subjects),
                activities: Index::build(activities),
                class_sizes: class_sizes(&students),
            },
        })
    }

    pub fn rows(&self) -> Vec<EvaluationRow> {
        self.evaluations
            .iter()
            .map(|evaluation| self.lookup.row(evaluation))
            .collect()
    }
}
