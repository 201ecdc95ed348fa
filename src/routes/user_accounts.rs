use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ListParams;
use crate::models::user_accounts::requests::{RegisterUserAccountRequest, UpdateUserAccountRequest};
use crate::services::UserAccountService;
use crate::utils::{SafeIdI64, SessionKey};

// 懒加载的全局 USER_ACCOUNT_SERVICE 实例
static USER_ACCOUNT_SERVICE: Lazy<UserAccountService> = Lazy::new(UserAccountService::new_lazy);

pub async fn list_user_accounts(
    req: HttpRequest,
    session: SessionKey,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    USER_ACCOUNT_SERVICE
        .list_user_accounts(&req, session, query.into_inner())
        .await
}

pub async fn register_user_account(
    req: HttpRequest,
    account_data: web::Json<RegisterUserAccountRequest>,
) -> ActixResult<HttpResponse> {
    USER_ACCOUNT_SERVICE
        .register_user_account(&req, account_data.into_inner())
        .await
}

pub async fn get_user_account(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    USER_ACCOUNT_SERVICE.get_user_account(&req, id.0).await
}

pub async fn update_user_account(
    req: HttpRequest,
    id: SafeIdI64,
    account_data: web::Json<UpdateUserAccountRequest>,
) -> ActixResult<HttpResponse> {
    USER_ACCOUNT_SERVICE
        .update_user_account(&req, id.0, account_data.into_inner())
        .await
}

pub async fn delete_user_account(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    USER_ACCOUNT_SERVICE.delete_user_account(&req, id.0).await
}

// 配置路由
pub fn configure_user_accounts_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/user-accounts")
            .service(
                web::resource("")
                    .route(web::get().to(list_user_accounts))
                    .route(web::post().to(register_user_account)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_user_account))
                    .route(web::put().to(update_user_account))
                    .route(web::delete().to(delete_user_account)),
            ),
    );
}
