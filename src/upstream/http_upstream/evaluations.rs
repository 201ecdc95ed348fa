//! 评价与活动类型接口

use reqwest::Method;

use super::HttpUpstream;
use crate::errors::Result;
use crate::models::evaluations::{
    entities::{Activity, Evaluation},
    requests::EvaluationPayload,
};

const EVALUATION_PATH: &str = "/api/Evaluation";

impl HttpUpstream {
    pub async fn list_evaluations_impl(&self) -> Result<Vec<Evaluation>> {
        self.get_json(EVALUATION_PATH).await
    }

    pub async fn create_evaluation_impl(&self, evaluation: EvaluationPayload) -> Result<()> {
        self.send_json(Method::POST, EVALUATION_PATH, &evaluation)
            .await
    }

    pub async fn list_activities_impl(&self) -> Result<Vec<Activity>> {
        self.get_json("/api/Activity").await
    }
}
