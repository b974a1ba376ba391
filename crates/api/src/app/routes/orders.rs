use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    response::Response,
    routing::get,
};

use stockdesk_core::{Order, OrderDraft};

use crate::app::routes::common;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:id", get(get_order).put(update_order).delete(delete_order))
}

pub async fn list_orders(Extension(services): Extension<Arc<AppServices>>) -> Response {
    common::list_records::<Order>(services.orders.as_ref()).await
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    common::get_record::<Order>(services.orders.as_ref(), id).await
}

pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<OrderDraft>, JsonRejection>,
) -> Response {
    common::create_record::<Order>(services.orders.as_ref(), body).await
}

pub async fn update_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<OrderDraft>, JsonRejection>,
) -> Response {
    common::update_record::<Order>(services.orders.as_ref(), id, body).await
}

pub async fn delete_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    common::delete_record::<Order>(services.orders.as_ref(), id).await
}
