use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SchoolYearService, SchoolYearsSnapshot};
use crate::models::{
    ListParams,
    school_years::responses::{SchoolYearListResponse, SemesterListResponse},
};
use crate::readmodel::listing::optional_key;
use crate::services::render::{list_page, render};
use crate::utils::SessionKey;

pub async fn list_school_years(
    service: &SchoolYearService,
    request: &HttpRequest,
    session: SessionKey,
    params: ListParams,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let key = session.as_str();

    let outcome = views
        .school_years
        .load(key, params.wants_refresh(), || async move {
            SchoolYearsSnapshot::fetch(upstream.as_ref()).await
        })
        .await;

    // 筛选：学年文本；排序：学年
    Ok(render(outcome, "School year list retrieved successfully", |snapshot| {
        let (items, pagination) = list_page(
            &views.school_years,
            key,
            &params,
            views.limits(),
            snapshot.year_rows(),
            |row| row.year.clone(),
            |row| row.year.clone(),
        );
        Ok(SchoolYearListResponse { pagination, items })
    }))
}

pub async fn list_semesters(
    service: &SchoolYearService,
    request: &HttpRequest,
    session: SessionKey,
    params: ListParams,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let key = session.as_str();

    let outcome = views
        .semesters
        .load(key, params.wants_refresh(), || async move {
            SchoolYearsSnapshot::fetch(upstream.as_ref()).await
        })
        .await;

    // 筛选：所属学年；排序：开始日期
    Ok(render(outcome, "Semester list retrieved successfully", |snapshot| {
        let (items, pagination) = list_page(
            &views.semesters,
            key,
            &params,
            views.limits(),
            snapshot.semester_rows(),
            |row| optional_key(row.school_year_id),
            |row| row.start_date,
        );
        Ok(SemesterListResponse { pagination, items })
    }))
}
