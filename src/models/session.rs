use serde::{Deserialize, Serialize};

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Employee,
    Admin,
}

/// 会话记录 (键 "user" 下的 JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "type")]
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
}

impl SessionRecord {
    pub fn new(role: Role, email: impl Into<String>) -> Self {
        Self {
            role,
            email: Some(email.into()),
        }
    }
}
