use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{UserAccountService, optional_text, require_role};
use crate::errors::Result;
use crate::models::user_accounts::requests::{UpdateUserAccountPayload, UpdateUserAccountRequest};
use crate::services::render::{error_response, mutation_response};
use crate::utils::validate::{require_text, validate_email};

pub async fn update_user_account(
    service: &UserAccountService,
    request: &HttpRequest,
    account_id: i64,
    account_data: UpdateUserAccountRequest,
) -> ActixResult<HttpResponse> {
    let payload = match build_payload(account_id, account_data) {
        Ok(payload) => payload,
        Err(e) => return Ok(error_response(&e)),
    };

    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let result = upstream.update_user_account(account_id, payload).await;

    Ok(mutation_response(
        result,
        &views,
        StatusCode::OK,
        "User account updated successfully",
    ))
}

fn build_payload(
    account_id: i64,
    account_data: UpdateUserAccountRequest,
) -> Result<UpdateUserAccountPayload> {
    let full_name = require_text(&account_data.full_name, "Vui lòng nhập họ tên")?;
    validate_email(&account_data.email)?;
    let role_id = require_role(account_data.role_id)?;

    Ok(UpdateUserAccountPayload {
        id: account_id,
        full_name: full_name.to_string(),
        email: account_data.email.trim().to_string(),
        phone: optional_text(account_data.phone),
        role_id,
    })
}
