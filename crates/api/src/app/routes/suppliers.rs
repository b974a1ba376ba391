use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    response::Response,
    routing::get,
};

use stockdesk_core::{Supplier, SupplierDraft};

use crate::app::routes::common;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_suppliers).post(create_supplier))
        .route("/:id", get(get_supplier).put(update_supplier).delete(delete_supplier))
}

pub async fn list_suppliers(Extension(services): Extension<Arc<AppServices>>) -> Response {
    common::list_records::<Supplier>(services.suppliers.as_ref()).await
}

pub async fn get_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    common::get_record::<Supplier>(services.suppliers.as_ref(), id).await
}

pub async fn create_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<SupplierDraft>, JsonRejection>,
) -> Response {
    common::create_record::<Supplier>(services.suppliers.as_ref(), body).await
}

pub async fn update_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<SupplierDraft>, JsonRejection>,
) -> Response {
    common::update_record::<Supplier>(services.suppliers.as_ref(), id, body).await
}

pub async fn delete_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    common::delete_record::<Supplier>(services.suppliers.as_ref(), id).await
}
