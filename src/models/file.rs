use serde::{Deserialize, Serialize};

/// 文件输入框选中的文件
#[derive(Debug, Clone, PartialEq)]
pub struct FileSelection {
    pub name: String,
    pub mime: String,
    pub content: Vec<u8>,
}

impl FileSelection {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            content,
        }
    }

    /// 小写扩展名 (无扩展名时为空)
    pub fn extension(&self) -> String {
        match self.name.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => String::new(),
        }
    }
}

/// 上传后后端返回的文件引用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub file_url: String,
    pub key: String,
}
