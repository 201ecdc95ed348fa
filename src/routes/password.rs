use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::password::requests::{ForgotPasswordRequest, ResetPasswordRequest};
use crate::services::PasswordService;

static PASSWORD_SERVICE: Lazy<PasswordService> = Lazy::new(PasswordService::new_lazy);

pub async fn forgot_password(
    req: HttpRequest,
    forgot_data: web::Json<ForgotPasswordRequest>,
) -> ActixResult<HttpResponse> {
    PASSWORD_SERVICE
        .forgot_password(&req, forgot_data.into_inner())
        .await
}

pub async fn reset_password(
    req: HttpRequest,
    reset_data: web::Json<ResetPasswordRequest>,
) -> ActixResult<HttpResponse> {
    PASSWORD_SERVICE
        .reset_password(&req, reset_data.into_inner())
        .await
}

pub fn configure_password_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/password")
            .route("/forgot", web::post().to(forgot_password))
            .route("/reset", web::post().to(reset_password)),
    );
}
