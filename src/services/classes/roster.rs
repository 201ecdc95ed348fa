use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ClassService, ClassesSnapshot};
use crate::errors::{PortalError, Result};
use crate::models::classes::responses::{ClassRosterResponse, RosterStudent};
use crate::services::render::render;
use crate::utils::SessionKey;

pub async fn get_roster(
    service: &ClassService,
    request: &HttpRequest,
    session: SessionKey,
    class_id: i64,
    refresh: bool,
) -> ActixResult<HttpResponse> {
    let upstream = service.get_upstream(request);
    let views = service.get_views(request);

    // 与班级列表共用同一份快照
    let outcome = views
        .classes
        .load(session.as_str(), refresh, || async move {
            ClassesSnapshot::fetch(upstream.as_ref()).await
        })
        .await;

    Ok(render(outcome, "Class roster retrieved successfully", |snapshot| {
        project_roster(snapshot, class_id)
    }))
}

fn project_roster(snapshot: &ClassesSnapshot, class_id: i64) -> Result<ClassRosterResponse> {
    let class = snapshot
        .classes
        .get(class_id)
        .ok_or_else(|| PortalError::not_found(format!("Class {class_id} not found")))?;

    let students = snapshot
        .students_of(class_id)
        .map(|student| {
            let parent = snapshot.accounts.resolve(student.parent_id);
            RosterStudent {
                id: student.id,
                name: student.name.clone(),
                date_of_birth: student.date_of_birth,
                parent_id: student.parent_id,
                parent_name: snapshot.accounts.label(student.parent_id),
                parent_email: parent.and_then(|p| p.email.clone()),
                parent_phone: parent.and_then(|p| p.phone.clone()),
            }
        })
        .collect();

    Ok(ClassRosterResponse {
        class: snapshot.row(class),
        students,
    })
}
