use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ActivityLogService, ActivityLogsSnapshot};
use crate::models::{ListParams, activity_logs::responses::ActivityLogListResponse};
use crate::services::render::{list_page, render};
use crate::utils::SessionKey;

pub async fn list_activity_logs(
    service: &ActivityLogService,
    request: &HttpRequest,
    session: SessionKey,
    params: ListParams,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let key = session.as_str();

    let outcome = views
        .activity_logs
        .load(key, params.wants_refresh(), || async move {
            ActivityLogsSnapshot::fetch(upstream.as_ref()).await
        })
        .await;

    // 筛选：日志类型代码；排序：时间
    Ok(render(outcome, "Activity logs retrieved successfully", |snapshot| {
        let (items, pagination) = list_page(
            &views.activity_logs,
            key,
            &params,
            views.limits(),
            snapshot.rows(),
            |row| row.type_code,
            |row| row.created_at,
        );
        Ok(ActivityLogListResponse { pagination, items })
    }))
}
