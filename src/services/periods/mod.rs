pub mod detail;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::evaluations::{EvaluationLookup, class_sizes};
use super::lazy_service;
use crate::errors::{PortalError, Result};
use crate::models::{
    evaluations::entities::Evaluation,
    periods::entities::Period,
    teachers::entities::Teacher,
    user_accounts::entities::UserAccount,
};
use crate::readmodel::Index;
use crate::readmodel::fetcher::fetch_batch;
use crate::upstream::Upstream;
use crate::utils::SessionKey;

lazy_service!(PeriodService);

impl PeriodService {
    // 课时详情及该课时的评价
    pub async fn get_period(
        &self,
        request: &HttpRequest,
        session: SessionKey,
        period_id: i64,
        refresh: bool,
    ) -> ActixResult<HttpResponse> {
        detail::get_period(self, request, session, period_id, refresh).await
    }
}

/// 课时详情快照
#[derive(Debug)]
pub struct PeriodSnapshot {
    pub period: Period,
    pub teachers: Index<Teacher>,
    pub accounts: Index<UserAccount>,
    pub evaluations: Vec<Evaluation>,
    pub lookup: EvaluationLookup,
}

impl PeriodSnapshot {
    pub async fn fetch(upstream: &dyn Upstream, period_id: i64) -> Result<Self> {
        let (
            period,
            classes,
            subjects,
            teachers,
            accounts,
            evaluations,
            activities,
            students,
        ) = fetch_batch!(
            period = upstream.get_period(period_id),
            classes = upstream.list_classes(),
            subjects = upstream.list_subjects(),
            teachers = upstream.list_teachers(),
            accounts = upstream.list_user_accounts(),
            evaluations = upstream.list_evaluations(),
            activities = upstream.list_activities(),
            students = upstream.list_students(),
        )?;
        let period = period
            .ok_or_else(|| PortalError::not_found(format!("Period {period_id} not found")))?;

        let evaluations = evaluations
            .into_iter()
            .filter(|evaluation| evaluation.period_id == period_id)
            .collect();

        Ok(Self {
            lookup: EvaluationLookup {
                periods: Index::build(vec![period.clone()]),
                classes: Index::build(classes),
                subjects: Index::build(subjects),
                activities: Index::build(activities),
                class_sizes: class_sizes(&students),
            },
            period,
            teachers: Index::build(teachers),
            accounts: Index::build(accounts),
            evaluations,
        })
    }
}
