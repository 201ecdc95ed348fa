use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserAccountService;
use crate::services::render::mutation_response;

pub async fn delete_user_account(
    service: &UserAccountService,
    request: &HttpRequest,
    account_id: i64,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let result = upstream.delete_user_account(account_id).await;

    Ok(mutation_response(
        result,
        &views,
        StatusCode::OK,
        "User account deleted successfully",
    ))
}
