use std::sync::Arc;

use crate::api::ApiError;
use crate::services::{AuthService, CurrentUser};
use crate::session::{Route, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub route: Route,
}

pub const MENU: [MenuItem; 4] = [
    MenuItem {
        title: "Products",
        route: Route::Products,
    },
    MenuItem {
        title: "Categories",
        route: Route::Categories,
    },
    MenuItem {
        title: "Suppliers",
        route: Route::Suppliers,
    },
    MenuItem {
        title: "Orders",
        route: Route::Orders,
    },
];

/// Shell around the resource pages: menu, sidebar, current user, logout.
#[derive(Debug)]
pub struct DashboardLayout {
    auth: AuthService,
    session: Arc<Session>,
    sidebar_open: bool,
    user: Option<CurrentUser>,
}

impl DashboardLayout {
    pub fn new(auth: AuthService, session: Arc<Session>) -> Self {
        Self {
            auth,
            session,
            sidebar_open: false,
            user: None,
        }
    }

    pub fn menu_items(&self) -> &'static [MenuItem] {
        &MENU
    }

    pub fn is_active(&self, route: Route) -> bool {
        self.session.current_route() == route
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Follow a menu entry; the mobile sidebar closes behind it.
    pub fn navigate(&mut self, route: Route) -> Route {
        self.sidebar_open = false;
        self.session.guard(route)
    }

    pub async fn load_user(&mut self) -> Result<(), ApiError> {
        self.user = Some(self.auth.me().await?);
        Ok(())
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn user_label(&self) -> &str {
        self.user.as_ref().map_or("Admin", |u| u.email.as_str())
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.sidebar_open = false;
        self.session.logout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::storage::MemoryStorage;

    fn layout() -> (DashboardLayout, Arc<Session>) {
        let session = Arc::new(Session::new(Arc::new(MemoryStorage::new())));
        let client = Arc::new(ApiClient::new("http://127.0.0.1:9/api", session.clone()));
        (DashboardLayout::new(AuthService::new(client), session.clone()), session)
    }

    #[test]
    fn navigation_marks_active_entry_and_closes_sidebar() {
        let (mut l, session) = layout();
        session.store_token("t").unwrap();

        l.toggle_sidebar();
        assert!(l.sidebar_open());

        assert_eq!(l.navigate(Route::Suppliers), Route::Suppliers);
        assert!(!l.sidebar_open());
        assert!(l.is_active(Route::Suppliers));
        assert!(!l.is_active(Route::Products));
    }

    #[test]
    fn logout_returns_to_login() {
        let (mut l, session) = layout();
        session.store_token("t").unwrap();
        l.navigate(Route::Orders);

        l.logout();

        assert!(!session.is_authenticated());
        assert_eq!(session.current_route(), Route::Login);
        assert_eq!(l.user_label(), "Admin");
    }

    #[test]
    fn menu_lists_every_resource_page() {
        let (l, _) = layout();
        let routes: Vec<_> = l.menu_items().iter().map(|m| m.route).collect();
        assert_eq!(routes, [Route::Products, Route::Categories, Route::Suppliers, Route::Orders]);
    }
}
