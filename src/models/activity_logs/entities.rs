use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::common::serde_helpers::optional_datetime;
use crate::readmodel::resolver::Keyed;

// 操作日志类型（上游以 1..=5 的整数表示）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogActivityType {
    Login,  // 登录
    Logout, // 登出
    Create, // 新增
    Update, // 修改
    Delete, // 删除
    Other(u8),
}

impl LogActivityType {
    pub fn code(&self) -> u8 {
        match self {
            LogActivityType::Login => 1,
            LogActivityType::Logout => 2,
            LogActivityType::Create => 3,
            LogActivityType::Update => 4,
            LogActivityType::Delete => 5,
            LogActivityType::Other(code) => *code,
        }
    }

    pub fn label(&self) -> String {
        match self {
            LogActivityType::Login => "Đăng nhập".to_string(),
            LogActivityType::Logout => "Đăng xuất".to_string(),
            LogActivityType::Create => "Thêm mới".to_string(),
            LogActivityType::Update => "Cập nhật".to_string(),
            LogActivityType::Delete => "Xóa".to_string(),
            LogActivityType::Other(code) => format!("Loại {code}"),
        }
    }
}

impl From<u8> for LogActivityType {
    fn from(code: u8) -> Self {
        match code {
            1 => LogActivityType::Login,
            2 => LogActivityType::Logout,
            3 => LogActivityType::Create,
            4 => LogActivityType::Update,
            5 => LogActivityType::Delete,
            other => LogActivityType::Other(other),
        }
    }
}

impl Serialize for LogActivityType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for LogActivityType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = u8::deserialize(deserializer)?;
        Ok(LogActivityType::from(code))
    }
}

impl std::fmt::Display for LogActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// 操作日志（上游 /api/LogActivity）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: i64,
    #[serde(default, alias = "userid")]
    pub user_id: Option<i64>,
    #[serde(alias = "logactivitytype", alias = "type")]
    pub log_activity_type: LogActivityType,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, alias = "createdat", deserialize_with = "optional_datetime")]
    pub created_at: Option<NaiveDateTime>,
}

impl Keyed for ActivityLog {
    fn key(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_type_roundtrips_through_code() {
        let log: ActivityLog = serde_json::from_str(
            r#"{"id": 7, "userId": 2, "logActivityType": 4, "note": "Sửa lớp 10A1", "createdAt": "2024-06-03T08:00:00"}"#,
        )
        .unwrap();
        assert_eq!(log.log_activity_type, LogActivityType::Update);
        assert_eq!(log.log_activity_type.to_string(), "4");
        assert_eq!(log.log_activity_type.label(), "Cập nhật");

        let unknown = LogActivityType::from(9);
        assert_eq!(unknown.code(), 9);
        assert_eq!(unknown.label(), "Loại 9");
    }
}
