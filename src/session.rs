use std::sync::Arc;

use crate::error::SessionError;
use crate::models::SessionRecord;
use crate::store::KeyValueStorage;

/// 会话记录在键值存储中的键
pub const USER_KEY: &str = "user";

/// 当前用户会话, 显式传给路由和容器
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn KeyValueStorage>,
}

impl Session {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// 读取会话记录, 键不存在时返回 Ok(None)
    pub fn try_current(&self) -> Result<Option<SessionRecord>, SessionError> {
        match self.storage.get(USER_KEY) {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// 读取会话记录, 无法解析的记录视为未登录
    pub fn current(&self) -> Option<SessionRecord> {
        match self.try_current() {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Ignoring stored session: {}", e);
                None
            }
        }
    }

    pub fn email(&self) -> Option<String> {
        self.current().and_then(|r| r.email)
    }

    pub fn login(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let raw = serde_json::to_string(record)?;
        self.storage.set(USER_KEY, raw);
        tracing::info!("Session opened as {:?}", record.role);
        Ok(())
    }

    pub fn logout(&self) {
        self.storage.remove(USER_KEY);
    }
}
