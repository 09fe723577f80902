use std::sync::Arc;

use crate::error::StoreError;
use crate::models::Bill;
use crate::routes::Route;
use crate::session::Session;
use crate::store::{BillScope, Store};
use crate::utils::{format_date, sort_by_date_desc};
use crate::views::{bills_ui, dashboard_ui, BillsState, Chrome, ReceiptPreview};

/// 点击预览图标时携带的数据
#[derive(Debug, Clone, PartialEq)]
pub struct EyeClick {
    pub bill_id: String,
    pub file_url: String,
}

/// 账单列表容器 (员工列表与管理员总览共用)
pub struct BillsContainer {
    store: Arc<dyn Store>,
    scope: BillScope,
    modal_width: u32,
    state: BillsState,
}

impl BillsContainer {
    pub fn new(store: Arc<dyn Store>, session: &Session, modal_width: u32) -> Self {
        Self {
            store,
            scope: BillScope::for_record(session.current().as_ref()),
            modal_width,
            state: BillsState::loading(),
        }
    }

    pub fn state(&self) -> &BillsState {
        &self.state
    }

    /// 查询账单, 按原始日期降序排列后格式化日期;
    /// 单条日期格式错误时保留原值并记录, 不影响其他记录
    pub async fn get_bills(&self) -> Result<Vec<Bill>, StoreError> {
        let mut bills = self.store.list_bills(&self.scope).await.map_err(|e| {
            tracing::error!("Fetching bills for {:?} failed: {}", self.scope, e);
            e
        })?;

        sort_by_date_desc(&mut bills);

        let bills = bills
            .into_iter()
            .map(|mut bill| {
                match format_date(&bill.date) {
                    Ok(formatted) => bill.date = formatted,
                    Err(e) => tracing::warn!("Bill {}: {}, keeping raw value", bill.id, e),
                }
                bill
            })
            .collect();
        Ok(bills)
    }

    /// 加载数据并更新页面状态, 后端错误转为错误页
    pub async fn load(&mut self) {
        self.state = BillsState::loading();
        self.state = match self.get_bills().await {
            Ok(bills) => {
                tracing::info!("Loaded {} bills", bills.len());
                BillsState::loaded(bills)
            }
            Err(e) => BillsState::error(e.page_message()),
        };
    }

    pub fn handle_click_new_bill(&self) -> Route {
        Route::NewBill
    }

    /// 打开票据预览弹窗
    pub fn handle_click_icon_eye(&mut self, click: EyeClick) -> &ReceiptPreview {
        tracing::debug!("Previewing receipt of bill {}", click.bill_id);
        self.state
            .preview
            .insert(ReceiptPreview::from_url(&click.file_url, self.modal_width))
    }

    pub fn close_preview(&mut self) {
        self.state.preview = None;
    }

    pub fn render(&self, chrome: &Chrome) -> String {
        bills_ui(&self.state, chrome)
    }

    pub fn render_dashboard(&self, chrome: &Chrome) -> String {
        dashboard_ui(&self.state, chrome)
    }
}
