use billed_app::{api, AppConfig, MemoryStorage, MockStore, Router, Session};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env()?;
    info!("Starting server with config: {:?}", config);

    // 后端与会话存储
    let store = if config.store.seed_fixtures {
        Arc::new(MockStore::with_fixtures())
    } else {
        Arc::new(MockStore::new())
    };
    let session = Session::new(Arc::new(MemoryStorage::new()));

    // 界面实例, 从当前会话对应的页面开始
    let mut router = Router::new(store, session, &config);
    router.navigate("/").await;
    let shared = Arc::new(Mutex::new(router));

    let app = api::app(shared).layer(ServiceBuilder::new());

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("Endpoints:");
    info!("  GET  /navigate?path=<route>  - navigate and render");
    info!("  POST /events                 - dispatch a UI event");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
