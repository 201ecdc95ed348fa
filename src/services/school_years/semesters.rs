use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolYearService;
use crate::errors::Result;
use crate::models::school_years::requests::{SemesterPayload, SemesterRequest};
use crate::services::render::{error_response, mutation_response};
use crate::utils::validate::{require_selection, require_text, validate_date_range};

/// 新增（`semester_id` 为空）或修改学期
pub async fn save_semester(
    service: &SchoolYearService,
    request: &HttpRequest,
    semester_id: Option<i64>,
    semester_data: SemesterRequest,
) -> ActixResult<HttpResponse> {
    let payload = match build_payload(semester_id, semester_data) {
        Ok(payload) => payload,
        Err(e) => return Ok(error_response(&e)),
    };

    let upstream = service.get_upstream(request);
    let views = service.get_views(request);

    let response = match semester_id {
        Some(id) => mutation_response(
            upstream.update_semester(id, payload).await,
            &views,
            StatusCode::OK,
            "Semester updated successfully",
        ),
        None => mutation_response(
            upstream.create_semester(payload).await,
            &views,
            StatusCode::CREATED,
            "Semester created successfully",
        ),
    };
    Ok(response)
}

pub async fn delete_semester(
    service: &SchoolYearService,
    request: &HttpRequest,
    semester_id: i64,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let result = upstream.delete_semester(semester_id).await;

    Ok(mutation_response(
        result,
        &views,
        StatusCode::OK,
        "Semester deleted successfully",
    ))
}

fn build_payload(semester_id: Option<i64>, semester_data: SemesterRequest) -> Result<SemesterPayload> {
    let name = require_text(&semester_data.name, "Vui lòng nhập tên học kỳ")?;
    let start_date = require_selection(semester_data.start_date, "Vui lòng chọn ngày bắt đầu")?;
    let end_date = require_selection(semester_data.end_date, "Vui lòng chọn ngày kết thúc")?;
    validate_date_range(start_date, end_date)?;
    let school_year_id = require_selection(semester_data.school_year_id, "Vui lòng chọn năm học")?;

    Ok(SemesterPayload {
        id: semester_id,
        name: name.to_string(),
        start_date,
        end_date,
        school_year_id,
    })
}
