//! 请求提取器

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

/// 未携带会话头时使用的视图键
pub const ANONYMOUS_SESSION: &str = "anonymous";

const SESSION_HEADER: &str = "X-Session-Id";
const MAX_SESSION_LEN: usize = 128;

/// 浏览器会话标识，用作列表页视图状态的键
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKey(pub String);

impl SessionKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 附加页面维度的视图键，例如 `abc:period:7`
    pub fn scoped(&self, scope: impl std::fmt::Display) -> String {
        format!("{}:{}", self.0, scope)
    }

    fn from_header(value: Option<&str>) -> Self {
        let key = value
            .map(str::trim)
            .filter(|v| !v.is_empty() && v.len() <= MAX_SESSION_LEN)
            .unwrap_or(ANONYMOUS_SESSION);
        Self(key.to_string())
    }
}

impl FromRequest for SessionKey {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let header = req
            .headers()
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok());
        ready(Ok(Self::from_header(header)))
    }
}

fn invalid_id(name: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        "Mã định danh không hợp lệ",
    ));
    InternalError::from_response(format!("invalid path parameter '{name}'"), response).into()
}

fn parse_positive_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.parse::<i64>().ok())
        .filter(|id| *id > 0)
}

/// 定义从路径参数中提取正整数 ID 的提取器
macro_rules! define_safe_id {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                ready(
                    parse_positive_id(req.match_info().get($param))
                        .map($name)
                        .ok_or_else(|| invalid_id($param)),
                )
            }
        }
    };
}

define_safe_id!(SafeIdI64, "id");
define_safe_id!(SafeParentIdI64, "parent_id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_session_key_defaults_to_anonymous() {
        assert_eq!(SessionKey::from_header(None).as_str(), ANONYMOUS_SESSION);
        assert_eq!(SessionKey::from_header(Some("  ")).as_str(), ANONYMOUS_SESSION);
        let long = "x".repeat(MAX_SESSION_LEN + 1);
        assert_eq!(SessionKey::from_header(Some(&long)).as_str(), ANONYMOUS_SESSION);
        assert_eq!(SessionKey::from_header(Some(" tab-1 ")).as_str(), "tab-1");
    }

    #[test]
    fn test_scoped_key() {
        let key = SessionKey("tab-1".to_string());
        assert_eq!(key.scoped("period:7"), "tab-1:period:7");
    }

    #[actix_web::test]
    async fn test_session_key_from_header() {
        let req = TestRequest::default()
            .insert_header((SESSION_HEADER, "tab-9"))
            .to_http_request();
        let key = SessionKey::extract(&req).await.unwrap();
        assert_eq!(key.as_str(), "tab-9");
    }

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id(Some("12")), Some(12));
        assert_eq!(parse_positive_id(Some("0")), None);
        assert_eq!(parse_positive_id(Some("-3")), None);
        assert_eq!(parse_positive_id(Some("abc")), None);
        assert_eq!(parse_positive_id(None), None);
    }
}
