use maud::{html, Markup};

use crate::models::Role;
use crate::routes::Route;

/// 侧边导航图标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Window,
    Mail,
}

/// 导航链接: 图标与目标页面
#[derive(Debug)]
pub struct NavLink {
    pub icon: NavIcon,
    pub test_id: &'static str,
    pub target: Route,
}

pub static NAV_LINKS: [NavLink; 2] = [
    NavLink {
        icon: NavIcon::Window,
        test_id: "icon-window",
        target: Route::Bills,
    },
    NavLink {
        icon: NavIcon::Mail,
        test_id: "icon-mail",
        target: Route::NewBill,
    },
];

/// 页面外框信息 (由路由计算)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chrome {
    pub role: Option<Role>,
    pub active: Option<NavIcon>,
}

impl Chrome {
    pub fn employee() -> Self {
        Self {
            role: Some(Role::Employee),
            active: None,
        }
    }
}

/// 左侧竖向导航栏, 员工可见导航图标
pub fn vertical_layout(height_vh: u32, chrome: &Chrome) -> Markup {
    html! {
        div.vertical-navbar style={ "height: " (height_vh) "vh;" } {
            div.layout-title { span { "Billed" } }
            @if chrome.role == Some(Role::Employee) {
                @for (idx, link) in NAV_LINKS.iter().enumerate() {
                    div id={ "layout-icon" (idx + 1) }
                        class=[(chrome.active == Some(link.icon)).then_some("active-icon")]
                        data-testid=(link.test_id)
                        data-href=(link.target.path()) {}
                }
            }
            @if chrome.role.is_some() {
                div #layout-disconnect .layout-disconnect data-testid="layout-disconnect" {}
            }
        }
    }
}
