use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::errors::Result;
use crate::models::classes::requests::{ClassPayload, CreateClassRequest};
use crate::services::render::{error_response, mutation_response};
use crate::utils::validate::{require_selection, require_text};

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let payload = match build_payload(class_data) {
        Ok(payload) => payload,
        Err(e) => return Ok(error_response(&e)),
    };

    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let result = upstream.create_class(payload).await;

    Ok(mutation_response(
        result,
        &views,
        StatusCode::CREATED,
        "Class created successfully",
    ))
}

fn build_payload(class_data: CreateClassRequest) -> Result<ClassPayload> {
    let name = require_text(&class_data.name, "Vui lòng nhập tên lớp")?;
    let teacher_homeroom_id = require_selection(
        class_data.teacher_homeroom_id,
        "Vui lòng chọn giáo viên chủ nhiệm",
    )?;
    let school_year_id = require_selection(class_data.school_year_id, "Vui lòng chọn năm học")?;

    Ok(ClassPayload {
        name: name.to_string(),
        teacher_homeroom_id,
        school_year_id,
    })
}
