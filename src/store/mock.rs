use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use super::{fixtures, BillScope, Store};
use crate::error::StoreError;
use crate::models::{Bill, BillDraft, FileSelection, StoredFile};

const FILE_BASE_URL: &str = "https://localhost:3456/images";

/// 下一次调用需要返回的错误 (一次性)
#[derive(Debug, Default)]
struct PendingFailures {
    list: Option<StoreError>,
    create: Option<StoreError>,
    upload: Option<StoreError>,
}

/// 内存模拟后端: 保序存储账单, 支持注入失败与调用计数
#[derive(Debug, Default)]
pub struct MockStore {
    bills: RwLock<IndexMap<String, Bill>>,
    failures: Mutex<PendingFailures>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    upload_calls: AtomicUsize,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用预置账单初始化
    pub fn with_fixtures() -> Self {
        Self::with_bills(fixtures::bills())
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        let map = bills.into_iter().map(|b| (b.id.clone(), b)).collect();
        Self {
            bills: RwLock::new(map),
            ..Self::default()
        }
    }

    pub async fn fail_next_list(&self, err: StoreError) {
        self.failures.lock().await.list = Some(err);
    }

    pub async fn fail_next_create(&self, err: StoreError) {
        self.failures.lock().await.create = Some(err);
    }

    pub async fn fail_next_upload(&self, err: StoreError) {
        self.failures.lock().await.upload = Some(err);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.bills.read().await.len()
    }

    pub async fn get(&self, id: &str) -> Option<Bill> {
        self.bills.read().await.get(id).cloned()
    }
}

#[async_trait]
impl Store for MockStore {
    async fn list_bills(&self, scope: &BillScope) -> Result<Vec<Bill>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.failures.lock().await.list.take() {
            tracing::warn!("Mock list_bills failing with {}", err);
            return Err(err);
        }

        let bills = self.bills.read().await;
        let result: Vec<Bill> = bills.values().filter(|b| scope.includes(b)).cloned().collect();
        tracing::debug!("Mock list_bills {:?}: {} bills", scope, result.len());
        Ok(result)
    }

    async fn create_bill(&self, draft: BillDraft) -> Result<Bill, StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.failures.lock().await.create.take() {
            tracing::warn!("Mock create_bill failing with {}", err);
            return Err(err);
        }

        let id = Uuid::new_v4().simple().to_string();
        let bill = draft.into_bill(id.clone());
        self.bills.write().await.insert(id.clone(), bill.clone());
        tracing::info!("Mock bill {} created for {}", id, bill.email);
        Ok(bill)
    }

    async fn upload_file(&self, file: &FileSelection, email: &str) -> Result<StoredFile, StoreError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.failures.lock().await.upload.take() {
            tracing::warn!("Mock upload_file failing with {}", err);
            return Err(err);
        }

        let key = Uuid::new_v4().simple().to_string();
        tracing::info!(
            "Mock upload {} ({} bytes) for {}, key {}",
            file.name,
            file.content.len(),
            email,
            key
        );
        Ok(StoredFile {
            file_url: format!("{}/{}-{}", FILE_BASE_URL, key, file.name),
            key,
        })
    }
}
