use serde::Serialize;
use ts_rs::TS;

use crate::errors::PortalError;

// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,
    Loading = 202,
    BadRequest = 1000,
    ValidationFailed = 1001,
    NotFound = 1004,
    InternalServerError = 5000,
    UpstreamUnavailable = 5002,
    UpstreamRejected = 5003,
    UpstreamMalformed = 5004,
}

impl From<&PortalError> for ErrorCode {
    fn from(err: &PortalError) -> Self {
        match err {
            PortalError::Validation(_) | PortalError::DateParse(_) => ErrorCode::ValidationFailed,
            PortalError::NotFound(_) => ErrorCode::NotFound,
            PortalError::Network(_) => ErrorCode::UpstreamUnavailable,
            PortalError::UpstreamStatus(_) => ErrorCode::UpstreamRejected,
            PortalError::Serialization(_) => ErrorCode::UpstreamMalformed,
            PortalError::Configuration(_) => ErrorCode::InternalServerError,
        }
    }
}
