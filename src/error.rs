use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// 后端协作方错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Erreur 404")]
    NotFound,

    #[error("Erreur 500: {0}")]
    ServerError(String),
}

impl StoreError {
    /// 页面级错误提示 (包含错误类别)
    pub fn page_message(&self) -> &'static str {
        match self {
            StoreError::NotFound => "Erreur 404",
            StoreError::ServerError(_) => "Erreur 500",
        }
    }
}

/// 本地校验错误, 只在表单内提示, 不升级为页面错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Le fichier {file_name} n'est pas au bon format (jpg, jpeg ou png)")]
    UnsupportedFile { file_name: String },

    #[error("Champ obligatoire manquant: {0}")]
    MissingField(&'static str),

    #[error("Valeur invalide pour {field}: '{value}'")]
    InvalidField { field: &'static str, value: String },

    #[error("Aucun justificatif téléchargé")]
    MissingFile,
}

/// 日期无法解析
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Malformed date: '{0}'")]
pub struct MalformedDate(pub String);

/// 会话记录无法解析
#[derive(Error, Debug)]
#[error("Invalid session record: {0}")]
pub struct SessionError(#[from] pub serde_json::Error);

/// 新账单表单操作失败 (上传或提交)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// HTTP 接口错误
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MalformedPayload { .. } => StatusCode::BAD_REQUEST,
        };

        (status, self.to_string()).into_response()
    }
}
