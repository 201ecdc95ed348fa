use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PeriodService, PeriodSnapshot};
use crate::errors::Result;
use crate::models::periods::responses::PeriodDetailResponse;
use crate::readmodel::Labeled;
use crate::readmodel::resolver::label_through;
use crate::services::render::render;
use crate::utils::SessionKey;

pub async fn get_period(
    service: &PeriodService,
    request: &HttpRequest,
    session: SessionKey,
    period_id: i64,
    refresh: bool,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let key = session.scoped(format!("period:{period_id}"));

    let outcome = views
        .periods
        .load(&key, refresh, || async move {
            PeriodSnapshot::fetch(upstream.as_ref(), period_id).await
        })
        .await;

    Ok(render(outcome, "Period retrieved successfully", project_detail))
}

fn project_detail(snapshot: &PeriodSnapshot) -> Result<PeriodDetailResponse> {
    let period = &snapshot.period;
    let lookup = &snapshot.lookup;

    Ok(PeriodDetailResponse {
        id: period.id,
        period_no: period.period_no,
        period_date: period.period_date,
        label: period.label(),
        class_id: period.class_id,
        class_name: lookup.classes.label(period.class_id),
        subject_id: period.subject_id,
        subject_name: lookup.subjects.label(period.subject_id),
        teacher_id: period.teacher_id,
        teacher_name: label_through(
            &snapshot.teachers,
            period.teacher_id,
            |teacher| teacher.user_id,
            &snapshot.accounts,
        ),
        evaluations: snapshot
            .evaluations
            .iter()
            .map(|evaluation| lookup.row(evaluation))
            .collect(),
    })
}
