use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::dashboard::requests::TimetableParams;
use crate::models::students::requests::ChildrenParams;
use crate::services::DashboardService;
use crate::utils::{SafeParentIdI64, SessionKey};

// 懒加载的全局 DASHBOARD_SERVICE 实例
static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn list_children(
    req: HttpRequest,
    session: SessionKey,
    parent_id: SafeParentIdI64,
    query: web::Query<ChildrenParams>,
) -> ActixResult<HttpResponse> {
    let refresh = query.refresh.unwrap_or(false);
    DASHBOARD_SERVICE
        .list_children(&req, session, parent_id.0, refresh)
        .await
}

pub async fn get_timetable(
    req: HttpRequest,
    session: SessionKey,
    parent_id: SafeParentIdI64,
    query: web::Query<TimetableParams>,
) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE
        .get_timetable(&req, session, parent_id.0, query.into_inner())
        .await
}

// 家长首页：父账号 ID 由路径显式传入
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/parents/{parent_id}")
            .route("/children", web::get().to(list_children))
            .route("/timetable", web::get().to(get_timetable)),
    );
}
