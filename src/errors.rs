//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 所有错误在页面边界被转换为本地化提示，不会向上层继续抛出。

use std::fmt;

/// 面向用户的通用错误提示（网络、状态码、解析失败统一使用）
pub const GENERIC_USER_MESSAGE: &str = "Không thể tải dữ liệu, vui lòng thử lại sau.";

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_portal_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum PortalError {
            $($variant(String),)*
        }

        impl PortalError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(PortalError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl PortalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PortalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_portal_errors! {
    Network("E001", "Upstream Network Error"),
    UpstreamStatus("E002", "Upstream Status Error"),
    Serialization("E003", "Serialization Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Configuration("E006", "Configuration Error"),
    DateParse("E007", "Date Parse Error"),
}

impl PortalError {
    /// 返回给页面的本地化提示
    ///
    /// 校验错误的详情本身就是本地化文本，直接透出；
    /// 传输、状态码、解析失败对用户不作区分。
    pub fn user_message(&self) -> String {
        match self {
            PortalError::Validation(msg) => msg.clone(),
            PortalError::NotFound(_) => "Không tìm thấy dữ liệu yêu cầu.".to_string(),
            _ => GENERIC_USER_MESSAGE.to_string(),
        }
    }

    /// 是否为上游服务导致的失败
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            PortalError::Network(_) | PortalError::UpstreamStatus(_) | PortalError::Serialization(_)
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PortalError {}

// 为常见的错误类型实现 From trait
impl From<reqwest::Error> for PortalError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PortalError::Serialization(err.to_string())
        } else {
            PortalError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for PortalError {
    fn from(err: chrono::ParseError) -> Self {
        PortalError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
