use serde::Serialize;
use ts_rs::TS;

use super::entities::{UserAccount, UserRole};
use crate::models::common::PaginationInfo;

// 账号列表行
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user_account.ts")]
pub struct UserAccountRow {
    pub id: i64,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role_id: Option<i64>,
    pub role: String,
}

impl From<&UserAccount> for UserAccountRow {
    fn from(account: &UserAccount) -> Self {
        Self {
            id: account.id,
            full_name: account.full_name.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            role_id: account.role_id,
            role: UserRole::label_for(account.role_id),
        }
    }
}

// 账号列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user_account.ts")]
pub struct UserAccountListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<UserAccountRow>,
}
