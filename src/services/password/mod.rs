//! 忘记密码与重置密码
//!
//! 两个写操作都不影响任何页面快照，成功后不标记视图过期。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::lazy_service;
use super::render::error_response;
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::password::requests::{
    ForgotPasswordRequest, PasswordResetEmailPayload, ResetPasswordPayload, ResetPasswordRequest,
};
use crate::utils::validate::{require_text, validate_email, validate_new_password};

lazy_service!(PasswordService);

impl PasswordService {
    pub async fn forgot_password(
        &self,
        request: &HttpRequest,
        forgot_data: ForgotPasswordRequest,
    ) -> ActixResult<HttpResponse> {
        let email = forgot_data.email.trim().to_string();
        if let Err(e) = validate_email(&email) {
            return Ok(error_response(&e));
        }

        let upstream = self.get_upstream(request);
        let result = upstream
            .send_password_reset_email(PasswordResetEmailPayload { email })
            .await;
        Ok(respond(result, "Password reset email sent"))
    }

    pub async fn reset_password(
        &self,
        request: &HttpRequest,
        reset_data: ResetPasswordRequest,
    ) -> ActixResult<HttpResponse> {
        let payload = match build_reset_payload(reset_data) {
            Ok(payload) => payload,
            Err(e) => return Ok(error_response(&e)),
        };

        let upstream = self.get_upstream(request);
        let result = upstream.reset_password(payload).await;
        Ok(respond(result, "Password reset successfully"))
    }
}

fn build_reset_payload(reset_data: ResetPasswordRequest) -> Result<ResetPasswordPayload> {
    let token = require_text(&reset_data.token, "Vui lòng nhập mã xác nhận")?;
    validate_new_password(&reset_data.new_password, &reset_data.confirm_password)?;
    Ok(ResetPasswordPayload {
        token: token.to_string(),
        new_password: reset_data.new_password,
    })
}

fn respond(result: Result<()>, message: &str) -> HttpResponse {
    match result {
        Ok(()) => {
            info!("{}", message);
            HttpResponse::Ok().json(ApiResponse::success_empty(message))
        }
        Err(e) => error_response(&e),
    }
}
