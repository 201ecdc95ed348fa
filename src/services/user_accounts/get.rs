use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::UserAccountService;
use crate::errors::PortalError;
use crate::models::{ApiResponse, user_accounts::responses::UserAccountRow};
use crate::services::render::error_response;

// 编辑表单回填，不经过列表快照
pub async fn get_user_account(
    service: &UserAccountService,
    request: &HttpRequest,
    account_id: i64,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);

    match upstream.get_user_account(account_id).await {
        Ok(Some(account)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserAccountRow::from(&account),
            "User account retrieved successfully",
        ))),
        Ok(None) => {
            debug!("User account {} not found", account_id);
            Ok(error_response(&PortalError::not_found(format!(
                "User account {account_id} not found"
            ))))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
