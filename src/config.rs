use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub upload: UploadConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// 票据弹窗宽度 (像素), 预览图片取其一半
    pub modal_width: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub accepted_extensions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// 启动时是否载入预置账单
    pub seed_fixtures: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            ui: UiConfig { modal_width: 800 },
            upload: UploadConfig {
                accepted_extensions: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
            },
            store: StoreConfig { seed_fixtures: true },
        }
    }
}

impl AppConfig {
    /// 默认值 + 环境变量覆盖, 例如 BILLED__SERVER__PORT=9000,
    /// BILLED__UPLOAD__ACCEPTED_EXTENSIONS=jpg,png
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("ui.modal_width", i64::from(defaults.ui.modal_width))?
            .set_default("upload.accepted_extensions", defaults.upload.accepted_extensions)?
            .set_default("store.seed_fixtures", defaults.store.seed_fixtures)?
            .add_source(
                Environment::with_prefix("BILLED")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("upload.accepted_extensions")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
