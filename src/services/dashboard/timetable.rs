use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use super::{ChildrenSnapshot, DashboardService, TimetableSnapshot, parent_scope};
use crate::errors::{PortalError, Result};
use crate::models::ApiResponse;
use crate::models::dashboard::{
    requests::TimetableParams,
    responses::{TimetableResponse, WeekInfo},
};
use crate::models::students::entities::Student;
use crate::readmodel::ViewPhase;
use crate::readmodel::schedule::{WeekBounds, project_week, slot_views, week_bounds, week_info};
use crate::services::render::{error_response, render};
use crate::utils::SessionKey;

const MESSAGE: &str = "Timetable retrieved successfully";

pub async fn get_timetable(
    service: &DashboardService,
    request: &HttpRequest,
    session: SessionKey,
    parent_id: i64,
    params: TimetableParams,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let refresh = params.refresh.unwrap_or(false);
    let reference = params
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    // 日期越界时在拉取任何数据之前拒绝
    let resolved = week_bounds(reference).and_then(|bounds| Ok((bounds, week_info(reference)?)));
    let (bounds, week) = match resolved {
        Ok(resolved) => resolved,
        Err(e) => return Ok(error_response(&e)),
    };
    let parent_key = parent_scope(&session, parent_id);

    // 先确定子女，再按子女拉取课时
    let children_upstream = upstream.clone();
    let children = views
        .children
        .load(&parent_key, refresh, || async move {
            ChildrenSnapshot::fetch(children_upstream.as_ref(), parent_id).await
        })
        .await;

    let children = match (children.phase, children.snapshot.clone()) {
        (ViewPhase::Ready, Some(snapshot)) => snapshot,
        _ => {
            return Ok(render(children, MESSAGE, |snapshot| {
                Ok(empty_week(parent_id, snapshot, &bounds, week.clone()))
            }));
        }
    };

    let student = match select_student(&children, params.student_id) {
        Ok(Some(student)) => student.clone(),
        Ok(None) => {
            let view = empty_week(parent_id, &children, &bounds, week);
            return Ok(HttpResponse::Ok().json(ApiResponse::success(view, MESSAGE)));
        }
        Err(e) => return Ok(error_response(&e)),
    };

    let student_id = student.id;
    let key = format!("{parent_key}:student:{student_id}");
    let outcome = views
        .timetables
        .load(&key, refresh, || async move {
            TimetableSnapshot::fetch(upstream.as_ref(), student_id).await
        })
        .await;

    Ok(render(outcome, MESSAGE, |timetable| {
        Ok(TimetableResponse {
            parent_id,
            children: children.summaries(),
            student: Some(children.summary(&student)),
            week: week.clone(),
            slots: slot_views(),
            days: project_week(
                &timetable.periods,
                &bounds,
                student.class_id,
                &children.classes,
                &timetable.subjects,
            ),
        })
    }))
}

/// 选择子女：未指定时取第一个，指定的子女不属于该家长时返回 NotFound
fn select_student(
    children: &ChildrenSnapshot,
    student_id: Option<i64>,
) -> Result<Option<&Student>> {
    match student_id {
        None => Ok(children.students.first()),
        Some(id) => children
            .students
            .iter()
            .find(|student| student.id == id)
            .map(Some)
            .ok_or_else(|| {
                PortalError::not_found(format!("Student {id} is not a child of parent"))
            }),
    }
}

/// 没有可显示的子女时返回空课表
fn empty_week(
    parent_id: i64,
    children: &ChildrenSnapshot,
    bounds: &WeekBounds,
    week: WeekInfo,
) -> TimetableResponse {
    TimetableResponse {
        parent_id,
        children: children.summaries(),
        student: None,
        week,
        slots: slot_views(),
        days: project_week(
            &[],
            bounds,
            None,
            &children.classes,
            &Default::default(),
        ),
    }
}
