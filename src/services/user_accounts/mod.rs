pub mod delete;
pub mod get;
pub mod list;
pub mod register;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::lazy_service;
use crate::errors::{PortalError, Result};
use crate::models::{
    ListParams,
    user_accounts::{
        entities::UserRole,
        requests::{RegisterUserAccountRequest, UpdateUserAccountRequest},
    },
};
use crate::utils::SessionKey;

lazy_service!(UserAccountService);

impl UserAccountService {
    pub async fn list_user_accounts(
        &self,
        request: &HttpRequest,
        session: SessionKey,
        params: ListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_user_accounts(self, request, session, params).await
    }

    pub async fn get_user_account(
        &self,
        request: &HttpRequest,
        account_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_user_account(self, request, account_id).await
    }

    pub async fn register_user_account(
        &self,
        request: &HttpRequest,
        account_data: RegisterUserAccountRequest,
    ) -> ActixResult<HttpResponse> {
        register::register_user_account(self, request, account_data).await
    }

    pub async fn update_user_account(
        &self,
        request: &HttpRequest,
        account_id: i64,
        account_data: UpdateUserAccountRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_user_account(self, request, account_id, account_data).await
    }

    pub async fn delete_user_account(
        &self,
        request: &HttpRequest,
        account_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_user_account(self, request, account_id).await
    }
}

/// 角色必须选择且为已知角色
pub(crate) fn require_role(role_id: Option<i64>) -> Result<i64> {
    role_id
        .filter(|id| UserRole::from_id(*id).is_some())
        .ok_or_else(|| PortalError::validation("Vui lòng chọn vai trò"))
}

/// 可选字段：空白视为未填写
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test::{TestRequest, call_and_read_body_json, call_service, read_body_json};
    use serde_json::{Value, json};

    use super::*;
    use crate::services::init_test_app;
    use crate::upstream::fake::FakeUpstream;

    #[test]
    fn test_require_role() {
        assert_eq!(require_role(Some(3)).unwrap(), 3);
        assert!(require_role(Some(9)).is_err());
        assert!(require_role(None).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(Some("  ".to_string())), None);
        assert_eq!(
            optional_text(Some(" 0901 ".to_string())),
            Some("0901".to_string())
        );
    }

    #[actix_web::test]
    async fn test_list_filters_by_role_and_labels_roles() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let req = TestRequest::get()
            .uri("/api/v1/user-accounts?filter=3")
            .to_request();
        let body: Value = call_and_read_body_json(&app, req).await;
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i["role"] == "Phụ huynh"));
        assert_eq!(items[0]["full_name"], "Lê Văn Cường");
    }

    #[actix_web::test]
    async fn test_paging_is_remembered_per_session() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let req = TestRequest::get()
            .uri("/api/v1/user-accounts?size=2&page=2")
            .insert_header(("X-Session-Id", "tab-a"))
            .to_request();
        let body: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["pagination"]["page"], 2);
        assert_eq!(body["data"]["pagination"]["total_pages"], 3);

        // 越界页码：当前页不变
        let req = TestRequest::get()
            .uri("/api/v1/user-accounts?size=2&page=4")
            .insert_header(("X-Session-Id", "tab-a"))
            .to_request();
        let body: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["pagination"]["page"], 2);

        // 其他会话从第一页开始
        let req = TestRequest::get()
            .uri("/api/v1/user-accounts?size=2")
            .insert_header(("X-Session-Id", "tab-b"))
            .to_request();
        let body: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["pagination"]["page"], 1);
    }

    #[actix_web::test]
    async fn test_get_account() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let req = TestRequest::get()
            .uri("/api/v1/user-accounts/100")
            .to_request();
        let body: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["full_name"], "Nguyễn Văn An");
        assert_eq!(body["data"]["role"], "Giáo viên");

        let req = TestRequest::get()
            .uri("/api/v1/user-accounts/404")
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = TestRequest::get()
            .uri("/api/v1/user-accounts/abc")
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_register_checks_password_confirmation() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let mut account = json!({
            "full_name": "Võ Thị Em",
            "email": "em@school.vn",
            "phone": "",
            "password": "matkhau123",
            "confirm_password": "matkhau321",
            "role_id": 3
        });
        let req = TestRequest::post()
            .uri("/api/v1/user-accounts")
            .set_json(&account)
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["message"], "Mật khẩu xác nhận không khớp");

        account["confirm_password"] = json!("matkhau123");
        let req = TestRequest::post()
            .uri("/api/v1/user-accounts")
            .set_json(&account)
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let (endpoint, sent) = fake.sent().remove(0);
        assert_eq!(endpoint, "register_user_account");
        assert_eq!(sent["fullName"], "Võ Thị Em");
        assert_eq!(sent["roleId"], 3);
        assert!(sent.get("confirmPassword").is_none());
        assert!(sent["phone"].is_null());
    }

    #[actix_web::test]
    async fn test_update_and_delete() {
        let fake = Arc::new(FakeUpstream::school());
        let app = init_test_app!(fake);

        let req = TestRequest::put()
            .uri("/api/v1/user-accounts/200")
            .set_json(json!({
                "full_name": "Lê Văn Cường",
                "email": "sai-dinh-dang",
                "role_id": 3
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = TestRequest::put()
            .uri("/api/v1/user-accounts/200")
            .set_json(json!({
                "full_name": "Lê Văn Cường",
                "email": "cuong@school.vn",
                "phone": "0912345678",
                "role_id": 3
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(fake.sent()[0].1["id"], 200);

        let req = TestRequest::delete()
            .uri("/api/v1/user-accounts/200")
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(fake.sent()[1], ("delete_user_account", json!(200)));
    }
}
