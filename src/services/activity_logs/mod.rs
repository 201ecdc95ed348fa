pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::lazy_service;
use crate::errors::Result;
use crate::models::{
    ListParams,
    activity_logs::{entities::ActivityLog, responses::ActivityLogRow},
    user_accounts::entities::UserAccount,
};
use crate::readmodel::Index;
use crate::readmodel::fetcher::fetch_batch;
use crate::upstream::Upstream;
use crate::utils::SessionKey;

lazy_service!(ActivityLogService);

impl ActivityLogService {
    pub async fn list_activity_logs(
        &self,
        request: &HttpRequest,
        session: SessionKey,
        params: ListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_activity_logs(self, request, session, params).await
    }
}

/// 操作日志页快照
#[derive(Debug)]
pub struct ActivityLogsSnapshot {
    pub logs: Vec<ActivityLog>,
    pub accounts: Index<UserAccount>,
}

impl ActivityLogsSnapshot {
    pub async fn fetch(upstream: &dyn Upstream) -> Result<Self> {
        let (logs, accounts) = fetch_batch!(
            logs = upstream.list_activity_logs(),
            accounts = upstream.list_user_accounts(),
        )?;
        Ok(Self {
            logs,
            accounts: Index::build(accounts),
        })
    }

    pub fn rows(&self) -> Vec<ActivityLogRow> {
        self.logs
            .iter()
            .map(|log| ActivityLogRow {
                id: log.id,
                user_id: log.user_id,
                user_name: self.accounts.label(log.user_id),
                type_code: log.log_activity_type.code(),
                type_label: log.log_activity_type.label(),
                note: log.note.clone(),
                created_at: log.created_at,
            })
            .collect()
    }
}
