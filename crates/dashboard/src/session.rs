//! Authentication state and the current route.

use std::sync::{Arc, Mutex};

use crate::storage::{LocalStorage, StorageError, TOKEN_KEY};

/// Screens of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Products,
    Categories,
    Suppliers,
    Orders,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Products => "/dashboard/products",
            Route::Categories => "/dashboard/categories",
            Route::Suppliers => "/dashboard/suppliers",
            Route::Orders => "/dashboard/orders",
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

/// Holds the current route. Views observe it; nothing here renders.
#[derive(Debug)]
pub struct Navigator {
    current: Mutex<Route>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    pub fn current(&self) -> Route {
        *self.current.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn go(&self, route: Route) {
        let mut current = self.current.lock().unwrap_or_else(|p| p.into_inner());
        if *current != route {
            tracing::debug!(from = current.path(), to = route.path(), "navigate");
            *current = route;
        }
    }
}

/// Token storage plus navigation, shared by the fetch wrapper and every page.
pub struct Session {
    storage: Arc<dyn LocalStorage>,
    navigator: Navigator,
}

impl Session {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        let start = if storage.get_item(TOKEN_KEY).is_some() {
            Route::Dashboard
        } else {
            Route::Login
        };
        Self {
            storage,
            navigator: Navigator::new(start),
        }
    }

    pub fn store_token(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set_item(TOKEN_KEY, token)
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Forget the token and send the user to the login screen.
    pub fn logout(&self) {
        if let Err(e) = self.storage.remove_item(TOKEN_KEY) {
            tracing::warn!(error = %e, "failed to clear stored token");
        }
        self.navigator.go(Route::Login);
    }

    pub fn current_route(&self) -> Route {
        self.navigator.current()
    }

    /// Navigate to `route`, or to the login screen when it needs a token we do not have.
    ///
    /// Returns the route actually shown.
    pub fn guard(&self, route: Route) -> Route {
        let target = if route.requires_auth() && !self.is_authenticated() {
            Route::Login
        } else {
            route
        };
        self.navigator.go(target);
        target
    }
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("route", &self.current_route())
            .finish()
    }
}
