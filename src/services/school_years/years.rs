use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolYearService;
use crate::models::school_years::requests::{SchoolYearPayload, SchoolYearRequest};
use crate::services::render::{error_response, mutation_response};
use crate::utils::validate::validate_school_year;

/// 新增（`year_id` 为空）或修改学年
pub async fn save_school_year(
    service: &SchoolYearService,
    request: &HttpRequest,
    year_id: Option<i64>,
    year_data: SchoolYearRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = validate_school_year(&year_data.year) {
        return Ok(error_response(&e));
    }

    let payload = SchoolYearPayload {
        id: year_id,
        year: year_data.year.trim().to_string(),
    };

    let upstream = service.get_upstream(request);
    let views = service.get_views(request);

    let response = match year_id {
        Some(id) => mutation_response(
            upstream.update_school_year(id, payload).await,
            &views,
            StatusCode::OK,
            "School year updated successfully",
        ),
        None => mutation_response(
            upstream.create_school_year(payload).await,
            &views,
            StatusCode::CREATED,
            "School year created successfully",
        ),
    };
    Ok(response)
}

pub async fn delete_school_year(
    service: &SchoolYearService,
    request: &HttpRequest,
    year_id: i64,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let result = upstream.delete_school_year(year_id).await;

    Ok(mutation_response(
        result,
        &views,
        StatusCode::OK,
        "School year deleted successfully",
    ))
}
