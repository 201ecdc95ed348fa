use std::collections::HashSet;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::{EvaluationService, effective_content};
use crate::errors::{PortalError, Result};
use crate::models::{
    evaluations::{
        entities::Activity,
        requests::{CreateEvaluationRequest, EvaluationPayload},
    },
    periods::entities::Period,
    students::entities::Student,
};
use crate::readmodel::Index;
use crate::readmodel::fetcher::fetch_batch;
use crate::services::render::{error_response, mutation_response};
use crate::upstream::Upstream;
use crate::utils::validate::require_selection;

pub async fn create_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_data: CreateEvaluationRequest,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);
    let views = service.get_views(request);

    let payload = match build_payload(upstream.as_ref(), evaluation_data).await {
        Ok(payload) => payload,
        Err(e) => return Ok(error_response(&e)),
    };

    let result = upstream.create_evaluation(payload).await;
    Ok(mutation_response(
        result,
        &views,
        StatusCode::CREATED,
        "Evaluation created successfully",
    ))
}

/// 校验表单并组装上游请求
///
/// 本地校验先于任何上游请求；之后再确认课时存在、学生属于该课时的班级。
async fn build_payload(
    upstream: &dyn Upstream,
    evaluation_data: CreateEvaluationRequest,
) -> Result<EvaluationPayload> {
    let period_id = require_selection(evaluation_data.period_id, "Vui lòng chọn tiết học")?;

    let student_ids = dedupe_students(&evaluation_data.students);
    if student_ids.is_empty() {
        return Err(PortalError::validation(
            "Vui lòng chọn ít nhất một học sinh",
        ));
    }

    let (period, students, activities) = fetch_batch!(
        period = upstream.get_period(period_id),
        students = upstream.list_students(),
        activities = upstream.list_activities(),
    )?;
    let period = period
        .ok_or_else(|| PortalError::not_found(format!("Period {period_id} not found")))?;
    let students = Index::build(students);
    let activities = Index::build(activities);

    check_students_in_class(&period, &student_ids, &students)?;
    let content = resolve_content(&evaluation_data, &activities)?;

    Ok(EvaluationPayload {
        period_id,
        activity_id: evaluation_data.activity_id,
        content,
        created_at: chrono::Local::now().naive_local(),
        students: student_ids,
    })
}

/// 去重并保留首次出现的顺序
fn dedupe_students(ids: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

fn check_students_in_class(
    period: &Period,
    student_ids: &[i64],
    students: &Index<Student>,
) -> Result<()> {
    let outsider = student_ids.iter().find(|id| {
        students
            .get(**id)
            .is_none_or(|student| period.class_id.is_none() || student.class_id != period.class_id)
    });
    if let Some(id) = outsider {
        debug!("Student {} is not in class {:?}", id, period.class_id);
        return Err(PortalError::validation(
            "Học sinh được chọn không thuộc lớp của tiết học",
        ));
    }
    Ok(())
}

fn resolve_content(
    evaluation_data: &CreateEvaluationRequest,
    activities: &Index<Activity>,
) -> Result<String> {
    if let Some(activity_id) = evaluation_data.activity_id {
        if !activities.contains(activity_id) {
            return Err(PortalError::validation("Hoạt động không hợp lệ"));
        }
    }
    effective_content(
        evaluation_data.content.as_deref(),
        evaluation_data.activity_id,
        activities,
    )
    .ok_or_else(|| PortalError::validation("Vui lòng nhập nội dung hoặc chọn hoạt động"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_students_keeps_first_occurrence() {
        assert_eq!(dedupe_students(&[3, 1, 3, 4, 1]), vec![3, 1, 4]);
        assert!(dedupe_students(&[]).is_empty());
    }

    #[test]
    fn test_dedupe_large_selection() {
        // 20 万个 ID，只有 4 个不同值
        let ids: Vec<i64> = (0..200_000).map(|i| i % 4 + 1).collect();
        assert_eq!(dedupe_students(&ids), vec![1, 2, 3, 4]);

        let distinct: Vec<i64> = (1..=200_000).collect();
        assert_eq!(dedupe_students(&distinct).len(), 200_000);
    }
}
