use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ChildrenSnapshot, DashboardService, parent_scope};
use crate::models::students::responses::ChildrenResponse;
use crate::services::render::render;
use crate::utils::SessionKey;

pub async fn list_children(
    service: &DashboardService,
    request: &HttpRequest,
    session: SessionKey,
    parent_id: i64,
    refresh: bool,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let key = parent_scope(&session, parent_id);

    let outcome = views
        .children
        .load(&key, refresh, || async move {
            ChildrenSnapshot::fetch(upstream.as_ref(), parent_id).await
        })
        .await;

    Ok(render(outcome, "Children retrieved successfully", |snapshot| {
        Ok(ChildrenResponse {
            parent_id,
            children: snapshot.summaries(),
        })
    }))
}
