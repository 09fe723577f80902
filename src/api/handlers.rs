use crate::containers::EyeClick;
use crate::error::ApiError;
use crate::models::{FileSelection, NewBillForm, Role};
use crate::router::{Router, UiEvent};
use axum::{
    extract::{Json, Query, State},
    response::Html,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// 共享状态: 单个界面实例, 事件逐个处理
pub type SharedRouter = Arc<Mutex<Router>>;

/// 导航请求参数
#[derive(Debug, Deserialize)]
pub struct NavigateQuery {
    pub path: String,
}

/// 上传文件 (内容为 base64)
#[derive(Debug, Deserialize)]
pub struct FilePayload {
    pub name: String,
    pub mime: String,
    #[serde(default)]
    pub content: String,
}

/// 事件请求体
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventRequest {
    Navigate { path: String },
    Login { role: Role, email: String },
    Logout,
    ClickNewBill,
    ClickIconEye { bill_id: String, file_url: String },
    CloseModal,
    ChangeFile { file: FilePayload },
    SubmitNewBill { form: NewBillForm },
}

impl TryFrom<EventRequest> for UiEvent {
    type Error = ApiError;

    fn try_from(req: EventRequest) -> Result<Self, Self::Error> {
        Ok(match req {
            EventRequest::Navigate { path } => UiEvent::Navigate { path },
            EventRequest::Login { role, email } => UiEvent::Login { role, email },
            EventRequest::Logout => UiEvent::Logout,
            EventRequest::ClickNewBill => UiEvent::ClickNewBill,
            EventRequest::ClickIconEye { bill_id, file_url } => {
                UiEvent::ClickIconEye(EyeClick { bill_id, file_url })
            }
            EventRequest::CloseModal => UiEvent::CloseModal,
            EventRequest::ChangeFile { file } => {
                let content = STANDARD
                    .decode(file.content.as_bytes())
                    .map_err(|e| ApiError::MalformedPayload(format!("file content: {}", e)))?;
                UiEvent::ChangeFile(FileSelection::new(file.name, file.mime, content))
            }
            EventRequest::SubmitNewBill { form } => UiEvent::SubmitNewBill(form),
        })
    }
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 当前屏幕
pub async fn current_screen(State(router): State<SharedRouter>) -> Html<String> {
    Html(router.lock().await.screen().html())
}

/// 导航到指定路径
pub async fn navigate(
    State(router): State<SharedRouter>,
    Query(query): Query<NavigateQuery>,
) -> Html<String> {
    let mut router = router.lock().await;
    Html(router.navigate(&query.path).await.html())
}

/// 分发界面事件
pub async fn dispatch_event(
    State(router): State<SharedRouter>,
    Json(req): Json<EventRequest>,
) -> Result<Html<String>, ApiError> {
    let event = UiEvent::try_from(req)?;
    tracing::debug!("Dispatching {:?}", event);
    let mut router = router.lock().await;
    Ok(Html(router.dispatch(event).await.html()))
}
