pub mod fixtures;
pub mod mock;
pub mod storage;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Bill, BillDraft, FileSelection, Role, SessionRecord, StoredFile};

pub use mock::MockStore;
pub use storage::{KeyValueStorage, MemoryStorage};

/// 账单查询范围: 管理员查看全部, 员工只看自己的
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillScope {
    All,
    Owner(String),
}

impl BillScope {
    /// 根据会话确定范围; 员工缺少邮箱时不匹配任何账单
    pub fn for_record(record: Option<&SessionRecord>) -> Self {
        match record {
            Some(SessionRecord { role: Role::Admin, .. }) => BillScope::All,
            Some(SessionRecord { email, .. }) => BillScope::Owner(email.clone().unwrap_or_default()),
            None => BillScope::Owner(String::new()),
        }
    }

    pub fn includes(&self, bill: &Bill) -> bool {
        match self {
            BillScope::All => true,
            BillScope::Owner(email) => &bill.email == email,
        }
    }
}

/// 后端协作方 (REST 风格接口或其模拟实现)
#[async_trait]
pub trait Store: Send + Sync {
    /// 查询账单列表
    async fn list_bills(&self, scope: &BillScope) -> Result<Vec<Bill>, StoreError>;

    /// 创建账单, 返回带ID的持久化记录
    async fn create_bill(&self, draft: BillDraft) -> Result<Bill, StoreError>;

    /// 上传票据文件
    async fn upload_file(&self, file: &FileSelection, email: &str) -> Result<StoredFile, StoreError>;
}
