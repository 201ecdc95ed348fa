use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ListParams;
use crate::services::ActivityLogService;
use crate::utils::SessionKey;

static ACTIVITY_LOG_SERVICE: Lazy<ActivityLogService> = Lazy::new(ActivityLogService::new_lazy);

pub async fn list_activity_logs(
    req: HttpRequest,
    session: SessionKey,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    ACTIVITY_LOG_SERVICE
        .list_activity_logs(&req, session, query.into_inner())
        .await
}

// 只读
pub fn configure_activity_logs_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/activity-logs")
            .service(web::resource("").route(web::get().to(list_activity_logs))),
    );
}
