//! 用户账号、操作日志与密码找回接口

use reqwest::Method;

use super::HttpUpstream;
use crate::errors::Result;
use crate::models::{
    activity_logs::entities::ActivityLog,
    password::requests::{PasswordResetEmailPayload, ResetPasswordPayload},
    user_accounts::{
        entities::UserAccount,
        requests::{RegisterUserAccountPayload, UpdateUserAccountPayload},
    },
};

const ACCOUNT_PATH: &str = "/api/UserAccount";

impl HttpUpstream {
    pub async fn list_user_accounts_impl(&self) -> Result<Vec<UserAccount>> {
        self.get_json(&format!("{ACCOUNT_PATH}/GetAllUserAccounts"))
            .await
    }

    pub async fn get_user_account_impl(&self, id: i64) -> Result<Option<UserAccount>> {
        self.get_optional_json(&format!("{ACCOUNT_PATH}/GetUserAccount/{id}"))
            .await
    }

    pub async fn register_user_account_impl(
        &self,
        account: RegisterUserAccountPayload,
    ) -> Result<()> {
        self.send_json(Method::POST, &format!("{ACCOUNT_PATH}/register"), &account)
            .await
    }

    pub async fn update_user_account_impl(
        &self,
        id: i64,
        account: UpdateUserAccountPayload,
    ) -> Result<()> {
        self.send_json(Method::PUT, &format!("{ACCOUNT_PATH}/update/{id}"), &account)
            .await
    }

    pub async fn delete_user_account_impl(&self, id: i64) -> Result<()> {
        self.delete(&format!("{ACCOUNT_PATH}/{id}")).await
    }

    /// 获取全部操作日志
    pub async fn list_activity_logs_impl(&self) -> Result<Vec<ActivityLog>> {
        self.get_json("/api/LogActivity").await
    }

    /// 发送重置密码邮件
    pub async fn send_password_reset_email_impl(
        &self,
        request: PasswordResetEmailPayload,
    ) -> Result<()> {
        self.send_json(Method::POST, "/api/emails/password-reset", &request)
            .await
    }

    /// 使用邮件中的令牌重置密码
    pub async fn reset_password_impl(&self, request: ResetPasswordPayload) -> Result<()> {
        self.send_json(Method::POST, "/api/user-accounts/reset-password", &request)
            .await
    }
}
