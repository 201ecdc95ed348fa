use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{EvaluationService, EvaluationsSnapshot};
use crate::models::{ListParams, evaluations::responses::EvaluationListResponse};
use crate::readmodel::listing::optional_key;
use crate::services::render::{list_page, render};
use crate::utils::SessionKey;

pub async fn list_evaluations(
    service: &EvaluationService,
    request: &HttpRequest,
    session: SessionKey,
    params: ListParams,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let key = session.as_str();

    let outcome = views
        .evaluations
        .load(key, params.wants_refresh(), || async move {
            EvaluationsSnapshot::fetch(upstream.as_ref()).await
        })
        .await;

    // 筛选：班级；排序：创建时间
    Ok(render(outcome, "Evaluation list retrieved successfully", |snapshot| {
        let (items, pagination) = list_page(
            &views.evaluations,
            key,
            &params,
            views.limits(),
            snapshot.rows(),
            |row| optional_key(row.class_id),
            |row| row.created_at,
        );
        Ok(EvaluationListResponse { pagination, items })
    }))
}
