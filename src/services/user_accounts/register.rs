use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{UserAccountService, optional_text, require_role};
use crate::errors::Result;
use crate::models::user_accounts::requests::{
    RegisterUserAccountPayload, RegisterUserAccountRequest,
};
use crate::services::render::{error_response, mutation_response};
use crate::utils::validate::{require_text, validate_email, validate_new_password};

pub async fn register_user_account(
    service: &UserAccountService,
    request: &HttpRequest,
    account_data: RegisterUserAccountRequest,
) -> ActixResult<HttpResponse> {
    let payload = match build_payload(account_data) {
        Ok(payload) => payload,
        Err(e) => return Ok(error_response(&e)),
    };

    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let result = upstream.register_user_account(payload).await;

    Ok(mutation_response(
        result,
        &views,
        StatusCode::CREATED,
        "User account registered successfully",
    ))
}

fn build_payload(account_data: RegisterUserAccountRequest) -> Result<RegisterUserAccountPayload> {
    let full_name = require_text(&account_data.full_name, "Vui lòng nhập họ tên")?;
    validate_email(&account_data.email)?;
    validate_new_password(&account_data.password, &account_data.confirm_password)?;
    let role_id = require_role(account_data.role_id)?;

    Ok(RegisterUserAccountPayload {
        full_name: full_name.to_string(),
        email: account_data.email.trim().to_string(),
        phone: optional_text(account_data.phone),
        password: account_data.password,
        role_id,
    })
}
