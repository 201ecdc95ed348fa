use serde::{Deserialize, Serialize};

use crate::readmodel::resolver::{Keyed, Labeled};

// 用户角色（上游以数字 roleId 表示）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,   // 管理员
    Teacher, // 教师
    Parent,  // 家长
}

impl UserRole {
    pub const ADMIN: i64 = 1;
    pub const TEACHER: i64 = 2;
    pub const PARENT: i64 = 3;

    pub fn from_id(role_id: i64) -> Option<Self> {
        match role_id {
            Self::ADMIN => Some(UserRole::Admin),
            Self::TEACHER => Some(UserRole::Teacher),
            Self::PARENT => Some(UserRole::Parent),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Quản trị viên",
            UserRole::Teacher => "Giáo viên",
            UserRole::Parent => "Phụ huynh",
        }
    }

    /// 未知角色编号回退为 "Vai trò {id}"
    pub fn label_for(role_id: Option<i64>) -> String {
        match role_id {
            Some(id) => Self::from_id(id)
                .map(|role| role.label().to_string())
                .unwrap_or_else(|| format!("Vai trò {id}")),
            None => "Chưa xác định".to_string(),
        }
    }
}

// 用户账号（上游 /api/UserAccount）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: i64,
    #[serde(alias = "fullname")]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "phoneNumber")]
    pub phone: Option<String>,
    #[serde(default, alias = "roleid")]
    pub role_id: Option<i64>,
}

impl Keyed for UserAccount {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Labeled for UserAccount {
    const PLACEHOLDER: &'static str = "Người dùng";

    fn label(&self) -> String {
        self.full_name.clone()
    }
}
