//! 视图结果到 HTTP 响应的渲染
//!
//! - Ready：200，`data` 为投影后的视图
//! - Failed：按错误类型返回 400/404/502，`data` 中带上一次成功的（可能已过期的）视图
//! - Loading：202，本次结果已被更新的加载取代

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::config::ViewConfig;
use crate::errors::{GENERIC_USER_MESSAGE, PortalError, Result};
use crate::models::{ApiResponse, ErrorCode, ListParams, PaginationInfo};
use crate::readmodel::listing::{filter_eq, sort_by_key};
use crate::readmodel::{Pager, ViewOutcome, ViewPhase, ViewStore};

use super::ViewStores;

pub const LOADING_MESSAGE: &str = "Dữ liệu đang được tải, vui lòng thử lại.";

pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Success => StatusCode::OK,
        ErrorCode::Loading => StatusCode::ACCEPTED,
        ErrorCode::BadRequest | ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::UpstreamUnavailable
        | ErrorCode::UpstreamRejected
        | ErrorCode::UpstreamMalformed => StatusCode::BAD_GATEWAY,
        ErrorCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// 单个错误的响应，不带数据
pub fn error_response(err: &PortalError) -> HttpResponse {
    let code = ErrorCode::from(err);
    if err.is_upstream() {
        warn!("Upstream request failed: {}", err);
    } else {
        debug!("Request rejected: {}", err);
    }
    HttpResponse::build(status_for(code)).json(ApiResponse::error_empty(code, err.user_message()))
}

/// 渲染一次视图加载的结果
pub fn render<S, V, F>(outcome: ViewOutcome<S>, message: &str, project: F) -> HttpResponse
where
    V: Serialize + TS,
    F: FnOnce(&S) -> Result<V>,
{
    let ViewOutcome {
        phase,
        snapshot,
        error,
        ..
    } = outcome;

    match (phase, snapshot) {
        (ViewPhase::Ready, Some(snapshot)) => match project(&snapshot) {
            Ok(view) => HttpResponse::Ok().json(ApiResponse::success(view, message)),
            Err(err) => error_response(&err),
        },
        (ViewPhase::Failed, snapshot) => {
            let err = error.unwrap_or_else(|| PortalError::network(GENERIC_USER_MESSAGE));
            let code = ErrorCode::from(&err);
            let stale = snapshot.and_then(|snapshot| project(&snapshot).ok());
            HttpResponse::build(status_for(code)).json(ApiResponse::error_with(
                code,
                stale,
                err.user_message(),
            ))
        }
        (_, snapshot) => {
            let current = snapshot.and_then(|snapshot| project(&snapshot).ok());
            HttpResponse::Accepted().json(ApiResponse::error_with(
                ErrorCode::Loading,
                current,
                LOADING_MESSAGE,
            ))
        }
    }
}

/// 写操作的响应；成功后所有视图标记为过期
pub fn mutation_response(
    result: Result<()>,
    views: &ViewStores,
    status: StatusCode,
    message: &str,
) -> HttpResponse {
    match result {
        Ok(()) => {
            views.mark_all_dirty();
            info!("{}", message);
            HttpResponse::build(status).json(ApiResponse::success_empty(message))
        }
        Err(err) => error_response(&err),
    }
}

/// 本次请求的每页条数，限制在 `[1, max_page_size]`
pub fn page_size(params: &ListParams, limits: &ViewConfig) -> usize {
    let max = limits.max_page_size.max(1);
    match params.size {
        Some(size) if size > 0 => usize::try_from(size).unwrap_or(max).min(max),
        _ => limits.default_page_size.clamp(1, max),
    }
}

/// 在快照投影出的行上筛选、排序、分页，并记住该视图键的当前页
///
/// 未指定 `page` 时沿用上次的页码；指定的页码超出范围时当前页不变。
pub fn list_page<S, R, FK, F, K, G>(
    store: &ViewStore<S>,
    key: &str,
    params: &ListParams,
    limits: &ViewConfig,
    rows: Vec<R>,
    filter_key: F,
    sort_key: G,
) -> (Vec<R>, PaginationInfo)
where
    S: Send + Sync + 'static,
    R: Clone,
    FK: ToString,
    F: Fn(&R) -> FK,
    K: Ord,
    G: Fn(&R) -> K,
{
    let mut rows = filter_eq(rows, params.filter_value(), filter_key);
    sort_by_key(&mut rows, params.order.unwrap_or_default(), sort_key);

    let mut pager = Pager::new(page_size(params, limits), rows.len(), store.page(key));
    if let Some(page) = params.page {
        if !pager.go_to(usize::try_from(page).unwrap_or(0)) {
            debug!("Page {} out of range for view '{}', keeping {}", page, key, pager.current());
        }
    }
    store.set_page(key, pager.current());

    (pager.slice(&rows).to_vec(), pager.info())
}
