use std::sync::Arc;

use crate::config::{AppConfig, UiConfig, UploadConfig};
use crate::containers::{BillsContainer, EyeClick, NewBillContainer};
use crate::models::{FileSelection, NewBillForm, Role, SessionRecord};
use crate::routes::Route;
use crate::session::Session;
use crate::store::Store;
use crate::views::{document, login_ui, Chrome, NavIcon, NAV_LINKS};

/// 界面事件 (显式携带所需数据)
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Navigate { path: String },
    Login { role: Role, email: String },
    Logout,
    ClickNewBill,
    ClickIconEye(EyeClick),
    CloseModal,
    ChangeFile(FileSelection),
    SubmitNewBill(NewBillForm),
}

/// 当前屏幕: 地址片段, 高亮图标, 内容区域 HTML
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub location: String,
    pub active: Option<NavIcon>,
    pub content: String,
}

impl Screen {
    pub fn html(&self) -> String {
        document(&self.location, &self.content)
    }
}

/// 已挂载的页面容器
enum Page {
    Login,
    Bills(BillsContainer),
    NewBill(NewBillContainer),
    Dashboard(BillsContainer),
}

/// 根据地址比较每个导航链接的目标, 返回需要高亮的图标
pub fn active_icon(location: &str) -> Option<NavIcon> {
    NAV_LINKS
        .iter()
        .find(|link| link.target.path() == location)
        .map(|link| link.icon)
}

/// 鉴权: 无会话去登录页; 未知路径或角色不符去角色首页
pub fn authorize(requested: Option<Route>, record: Option<&SessionRecord>) -> Route {
    let Some(record) = record else {
        return Route::Login;
    };
    match requested {
        None => Route::home_for(record.role),
        Some(route) => match route.descriptor().role {
            Some(role) if role != record.role => Route::home_for(record.role),
            _ => route,
        },
    }
}

/// 基于地址片段的路由器, 持有会话与后端
pub struct Router {
    store: Arc<dyn Store>,
    session: Session,
    ui: UiConfig,
    upload: UploadConfig,
    page: Page,
    screen: Screen,
}

impl Router {
    pub fn new(store: Arc<dyn Store>, session: Session, config: &AppConfig) -> Self {
        Self {
            store,
            session,
            ui: config.ui.clone(),
            upload: config.upload.clone(),
            page: Page::Login,
            screen: Screen::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn current_route(&self) -> Route {
        match self.page {
            Page::Login => Route::Login,
            Page::Bills(_) => Route::Bills,
            Page::NewBill(_) => Route::NewBill,
            Page::Dashboard(_) => Route::Dashboard,
        }
    }

    fn chrome(&self) -> Chrome {
        Chrome {
            role: self.session.current().map(|r| r.role),
            active: self.screen.active,
        }
    }

    /// 导航到指定路径; 所有结果都渲染为页面, 不返回错误
    pub async fn navigate(&mut self, path: &str) -> &Screen {
        let requested = Route::resolve(path);
        let record = self.session.current();
        let route = authorize(requested, record.as_ref());
        if requested != Some(route) {
            tracing::info!("Navigation to '{}' resolved to {:?}", path, route);
        }

        self.screen.location = route.path().to_string();
        self.screen.active = active_icon(&self.screen.location);
        let chrome = self.chrome();

        match route {
            Route::Login => {
                self.page = Page::Login;
                self.screen.content = login_ui();
            }
            Route::Bills | Route::Dashboard => {
                let mut container =
                    BillsContainer::new(self.store.clone(), &self.session, self.ui.modal_width);
                container.load().await;
                self.screen.content = render_bills(route, &container, &chrome);
                self.page = if route == Route::Bills {
                    Page::Bills(container)
                } else {
                    Page::Dashboard(container)
                };
            }
            Route::NewBill => {
                let container = NewBillContainer::new(
                    self.store.clone(),
                    self.session.clone(),
                    self.upload.accepted_extensions.clone(),
                );
                self.screen.content = container.render(&chrome);
                self.page = Page::NewBill(container);
            }
        }

        &self.screen
    }

    /// 将事件分发给当前容器, 处理导航或重新渲染
    pub async fn dispatch(&mut self, event: UiEvent) -> &Screen {
        let next: Option<Route> = match event {
            UiEvent::Navigate { path } => return self.navigate(&path).await,
            UiEvent::Login { role, email } => {
                let record = SessionRecord::new(role, email);
                match self.session.login(&record) {
                    Ok(()) => Some(Route::home_for(role)),
                    Err(e) => {
                        tracing::error!("Login failed: {}", e);
                        Some(Route::Login)
                    }
                }
            }
            UiEvent::Logout => {
                self.session.logout();
                Some(Route::Login)
            }
            UiEvent::ClickNewBill => match &self.page {
                Page::Bills(container) => Some(container.handle_click_new_bill()),
                _ => ignored("ClickNewBill"),
            },
            UiEvent::ClickIconEye(click) => match &mut self.page {
                Page::Bills(container) | Page::Dashboard(container) => {
                    container.handle_click_icon_eye(click);
                    None
                }
                _ => ignored("ClickIconEye"),
            },
            UiEvent::CloseModal => match &mut self.page {
                Page::Bills(container) | Page::Dashboard(container) => {
                    container.close_preview();
                    None
                }
                _ => ignored("CloseModal"),
            },
            UiEvent::ChangeFile(file) => match &mut self.page {
                Page::NewBill(container) => {
                    if let Err(e) = container.handle_change_file(file).await {
                        tracing::debug!("File change not staged: {}", e);
                    }
                    None
                }
                _ => ignored("ChangeFile"),
            },
            UiEvent::SubmitNewBill(form) => match &mut self.page {
                Page::NewBill(container) => container.handle_submit(form).await.ok(),
                _ => ignored("SubmitNewBill"),
            },
        };

        if let Some(route) = next {
            return self.navigate(route.path()).await;
        }

        self.rerender();
        &self.screen
    }

    fn rerender(&mut self) {
        let chrome = self.chrome();
        self.screen.content = match &self.page {
            Page::Login => login_ui(),
            Page::Bills(container) => container.render(&chrome),
            Page::Dashboard(container) => container.render_dashboard(&chrome),
            Page::NewBill(container) => container.render(&chrome),
        };
    }
}

fn render_bills(route: Route, container: &BillsContainer, chrome: &Chrome) -> String {
    if route == Route::Dashboard {
        container.render_dashboard(chrome)
    } else {
        container.render(chrome)
    }
}

fn ignored(event: &str) -> Option<Route> {
    tracing::warn!("{} ignored: no matching page mounted", event);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_icon() {
        assert_eq!(active_icon("#employee/bills"), Some(NavIcon::Window));
        assert_eq!(active_icon("#employee/bill/new"), Some(NavIcon::Mail));
        assert_eq!(active_icon("#admin/dashboard"), None);
        assert_eq!(active_icon("/"), None);
    }

    #[test]
    fn test_authorize() {
        let employee = SessionRecord::new(Role::Employee, "e@e");
        let admin = SessionRecord::new(Role::Admin, "a@a");

        assert_eq!(authorize(Some(Route::Bills), None), Route::Login);
        assert_eq!(authorize(None, None), Route::Login);
        assert_eq!(authorize(Some(Route::Bills), Some(&employee)), Route::Bills);
        assert_eq!(authorize(None, Some(&employee)), Route::Bills);
        assert_eq!(authorize(Some(Route::Dashboard), Some(&employee)), Route::Bills);
        assert_eq!(authorize(Some(Route::NewBill), Some(&admin)), Route::Dashboard);
        assert_eq!(authorize(None, Some(&admin)), Route::Dashboard);
        assert_eq!(authorize(Some(Route::Login), Some(&admin)), Route::Login);
    }
}
