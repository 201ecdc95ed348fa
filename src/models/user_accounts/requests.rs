use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 注册账号请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user_account.ts")]
pub struct RegisterUserAccountRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub confirm_password: String,
    pub role_id: Option<i64>,
}

// 更新账号请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user_account.ts")]
pub struct UpdateUserAccountRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role_id: Option<i64>,
}

// 发往上游的注册数据（不包含确认密码）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserAccountPayload {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub role_id: i64,
}

// 发往上游的账号更新数据
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserAccountPayload {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role_id: i64,
}
