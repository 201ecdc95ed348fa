use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TeacherService, TeachersSnapshot};
use crate::models::{ListParams, teachers::responses::TeacherListResponse};
use crate::readmodel::listing::optional_key;
use crate::services::render::{list_page, render};
use crate::utils::SessionKey;

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
    session: SessionKey,
    params: ListParams,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let key = session.as_str();

    let outcome = views
        .teachers
        .load(key, params.wants_refresh(), || async move {
            TeachersSnapshot::fetch(upstream.as_ref()).await
        })
        .await;

    // 筛选：科目；排序：姓名
    Ok(render(outcome, "Teacher list retrieved successfully", |snapshot| {
        let (items, pagination) = list_page(
            &views.teachers,
            key,
            &params,
            views.limits(),
            snapshot.rows(),
            |row| optional_key(row.subject_id),
            |row| row.full_name.clone(),
        );
        Ok(TeacherListResponse { pagination, items })
    }))
}
