use serde::{Deserialize, Serialize};

use crate::models::Role;

/// 逻辑页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

/// 路由描述: 逻辑名称, 路径, 访问所需角色
#[derive(Debug)]
pub struct RouteDescriptor {
    pub name: &'static str,
    pub path: &'static str,
    pub route: Route,
    pub role: Option<Role>,
}

/// 路由表
pub static ROUTES: [RouteDescriptor; 4] = [
    RouteDescriptor {
        name: "Login",
        path: "/",
        route: Route::Login,
        role: None,
    },
    RouteDescriptor {
        name: "Bills",
        path: "#employee/bills",
        route: Route::Bills,
        role: Some(Role::Employee),
    },
    RouteDescriptor {
        name: "NewBill",
        path: "#employee/bill/new",
        route: Route::NewBill,
        role: Some(Role::Employee),
    },
    RouteDescriptor {
        name: "Dashboard",
        path: "#admin/dashboard",
        route: Route::Dashboard,
        role: Some(Role::Admin),
    },
];

impl Route {
    pub fn descriptor(&self) -> &'static RouteDescriptor {
        match self {
            Route::Login => &ROUTES[0],
            Route::Bills => &ROUTES[1],
            Route::NewBill => &ROUTES[2],
            Route::Dashboard => &ROUTES[3],
        }
    }

    pub fn path(&self) -> &'static str {
        self.descriptor().path
    }

    /// 解析路径; 接受带或不带 '#' 前缀与结尾 '/' 的写法
    pub fn resolve(path: &str) -> Option<Route> {
        let normalized = normalize(path);
        ROUTES
            .iter()
            .find(|d| normalize(d.path) == normalized)
            .map(|d| d.route)
    }

    /// 角色的首页
    pub fn home_for(role: Role) -> Route {
        match role {
            Role::Employee => Route::Bills,
            Role::Admin => Route::Dashboard,
        }
    }
}

fn normalize(path: &str) -> &str {
    path.trim().trim_start_matches('#').trim_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        assert_eq!(Route::resolve("#employee/bills"), Some(Route::Bills));
        assert_eq!(Route::resolve("employee/bills/"), Some(Route::Bills));
        assert_eq!(Route::resolve("#employee/bill/new"), Some(Route::NewBill));
        assert_eq!(Route::resolve("#admin/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::resolve("/"), Some(Route::Login));
        assert_eq!(Route::resolve(""), Some(Route::Login));
    }

    #[test]
    fn test_resolve_unknown_path() {
        assert_eq!(Route::resolve("#employee/unknown"), None);
    }

    #[test]
    fn test_descriptor_matches_route() {
        for d in ROUTES.iter() {
            assert_eq!(d.route.descriptor().name, d.name);
            assert_eq!(Route::resolve(d.path), Some(d.route));
        }
    }
}
