use std::sync::Arc;

use rust_decimal::Decimal;
use stockdesk_api::config::AdminSeed;
use stockdesk_core::{Category, CategoryDraft, CategoryId, Supplier, SupplierDraft, SupplierId};
use stockdesk_dashboard::pages::{Dialog, ToastKind};
use stockdesk_dashboard::{
    ApiError, Dashboard, DashboardConfig, LocalStorage, MemoryStorage, Route, TOKEN_KEY,
};

const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "admin123";

struct TestServer {
    api_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let admin = AdminSeed {
            email: ADMIN_EMAIL.into(),
            password: ADMIN_PASSWORD.into(),
        };
        let app = stockdesk_api::app::build_in_memory_app("dashboard-secret", &admin)
            .await
            .expect("failed to build app");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            api_url: format!("http://{}/api", addr),
            handle,
        }
    }

    fn dashboard(&self) -> (Dashboard, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let dashboard = Dashboard::new(&DashboardConfig::new(&self.api_url), storage.clone());
        (dashboard, storage)
    }

    async fn logged_in(&self) -> (Dashboard, Arc<MemoryStorage>) {
        let (dashboard, storage) = self.dashboard();
        let mut login = dashboard.login_page();
        login.email = ADMIN_EMAIL.into();
        login.password = ADMIN_PASSWORD.into();
        assert!(login.submit().await, "login failed: {:?}", login.error());
        (dashboard, storage)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn login_page_validates_then_signs_in() {
    let srv = TestServer::spawn().await;
    let (dashboard, storage) = srv.dashboard();
    let mut login = dashboard.login_page();

    assert!(!login.submit().await);
    assert_eq!(login.error(), Some("Email and password are required"));

    login.email = ADMIN_EMAIL.into();
    login.password = "wrong".into();
    assert!(!login.submit().await);
    assert_eq!(login.error(), Some("Invalid email or password"));
    assert!(storage.get_item(TOKEN_KEY).is_none());

    login.password = ADMIN_PASSWORD.into();
    assert!(login.submit().await);
    assert!(login.error().is_none());
    assert!(storage.get_item(TOKEN_KEY).is_some());
    assert_eq!(dashboard.session().current_route(), Route::Dashboard);
}

#[tokio::test]
async fn layout_shows_current_user() {
    let srv = TestServer::spawn().await;
    let (dashboard, _) = srv.logged_in().await;
    let mut layout = dashboard.layout();

    layout.load_user().await.unwrap();
    assert_eq!(layout.user_label(), ADMIN_EMAIL);
}

#[tokio::test]
async fn rejected_token_logs_out_and_redirects() {
    let srv = TestServer::spawn().await;
    let (dashboard, storage) = srv.dashboard();
    storage.set_item(TOKEN_KEY, "stale-token").unwrap();
    dashboard.session().guard(Route::Categories);

    let mut page = dashboard.categories_page();
    page.load().await;

    assert!(page.list().state().error().is_some());
    assert!(storage.get_item(TOKEN_KEY).is_none());
    assert_eq!(dashboard.session().current_route(), Route::Login);

    let err = dashboard.resource::<Category>().get_all().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn categories_create_reloads_and_filters() {
    let srv = TestServer::spawn().await;
    let (dashboard, _) = srv.logged_in().await;
    let mut page = dashboard.categories_page();

    page.load().await;
    assert!(page.list().items().is_empty());

    for name in ["Hand Tools", "Paint", "Power tools"] {
        assert!(page.open_create());
        page.form.name = name.into();
        assert!(page.save().await);
        assert_eq!(page.list().dialog(), Dialog::None);
    }

    assert_eq!(page.list().items().len(), 3);
    assert_eq!(page.list().toasts().latest().unwrap().kind, ToastKind::Success);

    page.list_mut().set_search("TOOLS");
    let names: Vec<_> = page.visible().iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, ["Hand Tools", "Power tools"]);
}

#[tokio::test]
async fn failed_save_keeps_dialog_open() {
    let srv = TestServer::spawn().await;
    let (dashboard, _) = srv.logged_in().await;
    let categories = dashboard.resource::<Category>();
    let created = categories
        .create(&CategoryDraft { name: "Tools".into() })
        .await
        .unwrap();

    let mut page = dashboard.categories_page();
    page.load().await;
    assert!(page.open_edit(created.id));
    assert_eq!(page.form.name, "Tools");

    // Someone else deletes it meanwhile.
    categories.delete(created.id).await.unwrap();

    page.form.name = "Renamed".into();
    assert!(!page.save().await);
    assert_eq!(page.list().dialog(), Dialog::Edit(created.id));
    let toast = page.list().toasts().latest().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "category not found");
}

#[tokio::test]
async fn supplier_delete_confirm_reloads() {
    let srv = TestServer::spawn().await;
    let (dashboard, _) = srv.logged_in().await;
    let suppliers = dashboard.resource::<Supplier>();
    let acme = suppliers
        .create(&SupplierDraft {
            name: "Acme".into(),
            contact: "sales@acme.test".into(),
        })
        .await
        .unwrap();

    let mut page = dashboard.suppliers_page();
    page.load().await;

    page.list_mut().set_search("ACME.TEST");
    assert_eq!(page.visible().len(), 1);

    assert!(page.list_mut().open_delete(acme.id));
    assert!(page.confirm_delete().await);
    assert!(page.list().items().is_empty());

    // Second delete of the same id reports not found.
    let err = suppliers.delete(acme.id).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn products_filter_by_category_name() {
    let srv = TestServer::spawn().await;
    let (dashboard, _) = srv.logged_in().await;

    let mut categories = dashboard.categories_page();
    categories.load().await;
    for name in ["Garden", "Kitchen"] {
        categories.open_create();
        categories.form.name = name.into();
        assert!(categories.save().await);
    }
    let mut suppliers = dashboard.suppliers_page();
    suppliers.load().await;
    suppliers.open_create();
    suppliers.form.name = "Acme".into();
    assert!(suppliers.save().await);

    let mut page = dashboard.products_page();
    page.load().await;
    let garden = page.categories()[0].id;
    let kitchen = page.categories()[1].id;
    let acme = page.suppliers()[0].id;

    for (name, price, category) in [("Rake", "19.90", garden), ("Kettle", "35", kitchen), ("Hose", "24.5", garden)] {
        assert!(page.open_create());
        page.form.name = name.into();
        page.form.price = price.into();
        page.form.category_id = Some(category);
        page.form.supplier_id = Some(acme);
        assert!(page.save().await, "{:?}", page.list().toasts().latest());
    }

    page.list_mut().set_search("garden");
    let names: Vec<_> = page.visible().iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, ["Rake", "Hose"]);

    page.list_mut().set_search("KETT");
    assert_eq!(page.visible().len(), 1);

    page.list_mut().set_search("acme");
    assert_eq!(page.visible().len(), 3);

    assert_eq!(page.category_name(CategoryId::new(999)), None);
}

#[tokio::test]
async fn order_form_submits_computed_total() {
    let srv = TestServer::spawn().await;
    let (dashboard, _) = srv.logged_in().await;

    let mut products = dashboard.products_page();
    products.load().await;
    products.open_create();
    products.form.name = "Widget".into();
    products.form.price = "9.99".into();
    products.form.category_id = Some(CategoryId::new(1));
    products.form.supplier_id = Some(SupplierId::new(1));
    assert!(products.save().await);
    let widget = products.list().items()[0].id;

    let mut page = dashboard.orders_page();
    page.load().await;
    assert!(page.open_create());
    page.form.product_id = Some(widget);
    page.form.quantity = "3".into();
    assert_eq!(page.form_total(), Some(Decimal::new(2997, 2)));
    assert!(page.save().await);

    let order = page.list().items()[0].clone();
    assert_eq!(order.quantity, 3);
    assert_eq!(order.total_price, Decimal::new(2997, 2));

    page.list_mut().set_search("widg");
    assert_eq!(page.visible().len(), 1);
    page.list_mut().set_search(order.id.to_string());
    assert_eq!(page.visible().len(), 1);

    // Zero quantity makes a zero total; the server refuses it.
    assert!(page.open_create());
    page.form.product_id = Some(widget);
    page.form.quantity = "0".into();
    assert!(!page.save().await);
    assert_eq!(page.list().dialog(), Dialog::Create);
    assert_eq!(page.list().toasts().latest().unwrap().kind, ToastKind::Error);
}
