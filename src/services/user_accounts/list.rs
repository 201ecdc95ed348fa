use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserAccountService;
use crate::models::{
    ListParams,
    user_accounts::responses::{UserAccountListResponse, UserAccountRow},
};
use crate::readmodel::Index;
use crate::readmodel::listing::optional_key;
use crate::services::render::{list_page, render};
use crate::utils::SessionKey;

pub async fn list_user_accounts(
    service: &UserAccountService,
    request: &HttpRequest,
    session: SessionKey,
    params: ListParams,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let key = session.as_str();

    let outcome = views
        .user_accounts
        .load(key, params.wants_refresh(), || async move {
            upstream.list_user_accounts().await.map(Index::build)
        })
        .await;

    // 筛选：角色；排序：姓名
    Ok(render(outcome, "User account list retrieved successfully", |accounts| {
        let rows = accounts.iter().map(UserAccountRow::from).collect();
        let (items, pagination) = list_page(
            &views.user_accounts,
            key,
            &params,
            views.limits(),
            rows,
            |row: &UserAccountRow| optional_key(row.role_id),
            |row: &UserAccountRow| row.full_name.clone(),
        );
        Ok(UserAccountListResponse { pagination, items })
    }))
}
