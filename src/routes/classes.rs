use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ListParams;
use crate::models::classes::requests::{CreateClassRequest, RosterParams};
use crate::services::ClassService;
use crate::utils::{SafeIdI64, SessionKey};

// 懒加载的全局 CLASS_SERVICE 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序
pub async fn list_classes(
    req: HttpRequest,
    session: SessionKey,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .list_classes(&req, session, query.into_inner())
        .await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

pub async fn get_roster(
    req: HttpRequest,
    session: SessionKey,
    class_id: SafeIdI64,
    query: web::Query<RosterParams>,
) -> ActixResult<HttpResponse> {
    let refresh = query.refresh.unwrap_or(false);
    CLASS_SERVICE
        .get_roster(&req, session, class_id.0, refresh)
        .await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .service(
                web::resource("")
                    .route(web::get().to(list_classes))
                    .route(web::post().to(create_class)),
            )
            // 班级学生及家长联系方式
            .service(web::resource("/{id}/roster").route(web::get().to(get_roster))),
    );
}
