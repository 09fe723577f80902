use std::sync::Arc;

use crate::error::{FormError, ValidationError};
use crate::models::{Bill, FileSelection, NewBillForm, StoredFile};
use crate::routes::Route;
use crate::session::Session;
use crate::store::Store;
use crate::views::{new_bill_ui, Chrome, NewBillState};

/// 表单状态机
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    FileStaged,
    ReadyToSubmit,
    Submitting,
    Done,
}

/// 已上传的票据
#[derive(Debug, Clone, PartialEq)]
pub struct StagedUpload {
    pub file_name: String,
    pub stored: StoredFile,
}

/// 新账单表单容器
pub struct NewBillContainer {
    store: Arc<dyn Store>,
    session: Session,
    accepted_extensions: Vec<String>,
    phase: FormPhase,
    upload: Option<StagedUpload>,
    state: NewBillState,
}

impl NewBillContainer {
    pub fn new(store: Arc<dyn Store>, session: Session, accepted_extensions: Vec<String>) -> Self {
        Self {
            store,
            session,
            accepted_extensions,
            phase: FormPhase::Idle,
            upload: None,
            state: NewBillState::default(),
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn upload(&self) -> Option<&StagedUpload> {
        self.upload.as_ref()
    }

    pub fn state(&self) -> &NewBillState {
        &self.state
    }

    /// 扩展名在白名单内且 MIME 为 image/*
    fn validate_file(&self, file: &FileSelection) -> Result<(), ValidationError> {
        let extension = file.extension();
        let accepted = self
            .accepted_extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(&extension));
        if accepted && file.mime.to_ascii_lowercase().starts_with("image/") {
            Ok(())
        } else {
            Err(ValidationError::UnsupportedFile {
                file_name: file.name.clone(),
            })
        }
    }

    /// 选择文件: 格式不符时清空选择并提示, 不发起上传
    pub async fn handle_change_file(&mut self, file: FileSelection) -> Result<StoredFile, FormError> {
        self.state.warning = None;
        self.state.error = None;
        self.upload = None;

        if let Err(e) = self.validate_file(&file) {
            tracing::warn!("Rejected receipt {} ({}): {}", file.name, file.mime, e);
            self.phase = FormPhase::Idle;
            self.state.file_name = None;
            self.state.warning = Some(e.to_string());
            return Err(e.into());
        }

        self.phase = FormPhase::FileStaged;
        self.state.file_name = Some(file.name.clone());

        let email = self.session.email().unwrap_or_default();
        match self.store.upload_file(&file, &email).await {
            Ok(stored) => {
                tracing::info!("Receipt {} uploaded as {}", file.name, stored.key);
                self.phase = FormPhase::ReadyToSubmit;
                self.upload = Some(StagedUpload {
                    file_name: file.name,
                    stored: stored.clone(),
                });
                Ok(stored)
            }
            Err(e) => {
                tracing::error!("Uploading receipt {} failed: {}", file.name, e);
                self.phase = FormPhase::Idle;
                self.state.file_name = None;
                self.state.error = Some(e.page_message().to_string());
                Err(e.into())
            }
        }
    }

    /// 提交表单: 校验通过且票据已上传才发起创建请求, 成功后返回列表页
    pub async fn handle_submit(&mut self, form: NewBillForm) -> Result<Route, FormError> {
        self.state.values = form;
        self.state.error = None;

        let parsed = match self.state.values.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!("Submit blocked by form validation: {}", e);
                self.state.error = Some(e.to_string());
                return Err(e.into());
            }
        };

        let upload = match (&self.phase, &self.upload) {
            (FormPhase::ReadyToSubmit, Some(upload)) => upload.clone(),
            _ => {
                tracing::debug!("Submit blocked in phase {:?}", self.phase);
                self.state.warning = Some(ValidationError::MissingFile.to_string());
                return Err(ValidationError::MissingFile.into());
            }
        };

        let email = self.session.email().unwrap_or_else(|| {
            tracing::warn!("Submitting bill without an owner email");
            String::new()
        });
        let draft = parsed.into_draft(email, upload.stored.file_url, upload.file_name);

        self.phase = FormPhase::Submitting;
        let result: Result<Bill, _> = self.store.create_bill(draft).await;

        match result {
            Ok(bill) => {
                tracing::info!("Bill {} submitted", bill.id);
                self.phase = FormPhase::Done;
                Ok(Route::Bills)
            }
            Err(e) => {
                tracing::error!("Creating bill failed: {}", e);
                self.phase = FormPhase::ReadyToSubmit;
                self.state.error = Some(e.page_message().to_string());
                Err(e.into())
            }
        }
    }

    pub fn render(&self, chrome: &Chrome) -> String {
        new_bill_ui(&self.state, chrome)
    }
}
