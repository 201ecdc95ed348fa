use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ListParams;
use crate::models::teachers::requests::UpdateTeacherRequest;
use crate::services::TeacherService;
use crate::utils::SessionKey;

static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

pub async fn list_teachers(
    req: HttpRequest,
    session: SessionKey,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .list_teachers(&req, session, query.into_inner())
        .await
}

pub async fn update_teacher(
    req: HttpRequest,
    teacher_data: web::Json<UpdateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .update_teacher(&req, teacher_data.into_inner())
        .await
}

pub fn configure_teachers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers").service(
            web::resource("")
                .route(web::get().to(list_teachers))
                // 上游按请求体中的 id 更新
                .route(web::put().to(update_teacher)),
        ),
    );
}
