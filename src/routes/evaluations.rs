use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ListParams;
use crate::models::evaluations::requests::CreateEvaluationRequest;
use crate::services::EvaluationService;
use crate::utils::SessionKey;

static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

pub async fn list_evaluations(
    req: HttpRequest,
    session: SessionKey,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .list_evaluations(&req, session, query.into_inner())
        .await
}

pub async fn create_evaluation(
    req: HttpRequest,
    evaluation_data: web::Json<CreateEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .create_evaluation(&req, evaluation_data.into_inner())
        .await
}

pub fn configure_evaluations_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/evaluations").service(
            web::resource("")
                .route(web::get().to(list_evaluations))
                .route(web::post().to(create_evaluation)),
        ),
    );
}
