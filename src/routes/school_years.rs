use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ListParams;
use crate::models::school_years::requests::{SchoolYearRequest, SemesterRequest};
use crate::services::SchoolYearService;
use crate::utils::{SafeIdI64, SessionKey};

// 学年与学期共用一个服务
static SCHOOL_YEAR_SERVICE: Lazy<SchoolYearService> = Lazy::new(SchoolYearService::new_lazy);

pub async fn list_school_years(
    req: HttpRequest,
    session: SessionKey,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE
        .list_school_years(&req, session, query.into_inner())
        .await
}

pub async fn create_school_year(
    req: HttpRequest,
    year_data: web::Json<SchoolYearRequest>,
) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE
        .save_school_year(&req, None, year_data.into_inner())
        .await
}

pub async fn update_school_year(
    req: HttpRequest,
    id: SafeIdI64,
    year_data: web::Json<SchoolYearRequest>,
) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE
        .save_school_year(&req, Some(id.0), year_data.into_inner())
        .await
}

pub async fn delete_school_year(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE.delete_school_year(&req, id.0).await
}

pub async fn list_semesters(
    req: HttpRequest,
    session: SessionKey,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE
        .list_semesters(&req, session, query.into_inner())
        .await
}

pub async fn create_semester(
    req: HttpRequest,
    semester_data: web::Json<SemesterRequest>,
) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE
        .save_semester(&req, None, semester_data.into_inner())
        .await
}

pub async fn update_semester(
    req: HttpRequest,
    id: SafeIdI64,
    semester_data: web::Json<SemesterRequest>,
) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE
        .save_semester(&req, Some(id.0), semester_data.into_inner())
        .await
}

pub async fn delete_semester(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE.delete_semester(&req, id.0).await
}

// 配置路由
pub fn configure_school_years_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/school-years")
            .service(
                web::resource("")
                    .route(web::get().to(list_school_years))
                    .route(web::post().to(create_school_year)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_school_year))
                    .route(web::delete().to(delete_school_year)),
            ),
    )
    .service(
        web::scope("/api/v1/semesters")
            .service(
                web::resource("")
                    .route(web::get().to(list_semesters))
                    .route(web::post().to(create_semester)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_semester))
                    .route(web::delete().to(delete_semester)),
            ),
    );
}
