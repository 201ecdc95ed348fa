use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ClassService, ClassesSnapshot};
use crate::models::{ListParams, classes::responses::ClassListResponse};
use crate::readmodel::listing::optional_key;
use crate::services::render::{list_page, render};
use crate::utils::SessionKey;

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    session: SessionKey,
    params: ListParams,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let key = session.as_str();

    let outcome = views
        .classes
        .load(key, params.wants_refresh(), || async move {
            ClassesSnapshot::fetch(upstream.as_ref()).await
        })
        .await;

    // 筛选：学年；排序：班级名称
    Ok(render(outcome, "Class list retrieved successfully", |snapshot| {
        let (items, pagination) = list_page(
            &views.classes,
            key,
            &params,
            views.limits(),
            snapshot.rows(),
            |row| optional_key(row.school_year_id),
            |row| row.name.clone(),
        );
        Ok(ClassListResponse { pagination, items })
    }))
}
