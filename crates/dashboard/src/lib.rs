//! `stockdesk-dashboard`
//!
//! **Responsibility:** headless client for the Stockdesk API.
//!
//! This crate provides:
//! - Token persistence (`storage`) and the session/route state (`session`)
//! - A fetch wrapper that attaches the bearer token and logs out on 401 (`api`)
//! - Typed per-resource services (`services`)
//! - Page controllers a view layer binds to (`pages`)
//!
//! The API remains the only authority; nothing is cached or written offline.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod pages;
pub mod services;
pub mod session;
pub mod storage;

pub use api::{ApiClient, ApiError};
pub use config::DashboardConfig;
pub use services::{AuthService, CurrentUser, ResourceService};
pub use session::{Navigator, Route, Session};
pub use storage::{FileStorage, LocalStorage, MemoryStorage, StorageError, TOKEN_KEY};

use pages::{CategoriesPage, DashboardLayout, LoginPage, OrdersPage, ProductsPage, SuppliersPage};

/// Everything a view layer needs, wired around one shared session.
#[derive(Clone)]
pub struct Dashboard {
    session: Arc<Session>,
    client: Arc<ApiClient>,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig, storage: Arc<dyn LocalStorage>) -> Self {
        let session = Arc::new(Session::new(storage));
        let client = Arc::new(ApiClient::new(config.api_url.clone(), session.clone()));
        Self { session, client }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.client.clone())
    }

    pub fn resource<E: stockdesk_core::Record>(&self) -> ResourceService<E> {
        ResourceService::new(self.client.clone())
    }

    pub fn login_page(&self) -> LoginPage {
        LoginPage::new(self.auth(), self.session.clone())
    }

    pub fn layout(&self) -> DashboardLayout {
        DashboardLayout::new(self.auth(), self.session.clone())
    }

    pub fn categories_page(&self) -> CategoriesPage {
        CategoriesPage::new(self.resource())
    }

    pub fn suppliers_page(&self) -> SuppliersPage {
        SuppliersPage::new(self.resource())
    }

    pub fn products_page(&self) -> ProductsPage {
        ProductsPage::new(self.resource(), self.resource(), self.resource())
    }

    pub fn orders_page(&self) -> OrdersPage {
        OrdersPage::new(self.resource(), self.resource())
    }
}
