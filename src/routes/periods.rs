use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::periods::requests::PeriodDetailParams;
use crate::services::PeriodService;
use crate::utils::{SafeIdI64, SessionKey};

static PERIOD_SERVICE: Lazy<PeriodService> = Lazy::new(PeriodService::new_lazy);

pub async fn get_period(
    req: HttpRequest,
    session: SessionKey,
    id: SafeIdI64,
    query: web::Query<PeriodDetailParams>,
) -> ActixResult<HttpResponse> {
    let refresh = query.refresh.unwrap_or(false);
    PERIOD_SERVICE.get_period(&req, session, id.0, refresh).await
}

pub fn configure_periods_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/periods")
            .service(web::resource("/{id}").route(web::get().to(get_period))),
    );
}
