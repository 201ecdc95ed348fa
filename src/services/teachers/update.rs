use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::teachers::requests::{TeacherPayload, UpdateTeacherRequest};
use crate::services::render::{error_response, mutation_response};
use crate::utils::validate::require_selection;

pub async fn update_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_data: UpdateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let subject_id = match require_selection(teacher_data.subject_id, "Vui lòng chọn môn học") {
        Ok(id) => id,
        Err(e) => return Ok(error_response(&e)),
    };

    let payload = TeacherPayload {
        id: teacher_data.id,
        user_id: teacher_data.user_id,
        subject_id,
    };

    let upstream = service.get_upstream(request);
    let views = service.get_views(request);
    let result = upstream.update_teacher(payload).await;

    Ok(mutation_response(
        result,
        &views,
        StatusCode::OK,
        "Teacher updated successfully",
    ))
}
