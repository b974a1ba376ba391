use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    response::Response,
    routing::get,
};

use stockdesk_core::{Category, CategoryDraft};

use crate::app::routes::common;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:id", get(get_category).put(update_category).delete(delete_category))
}

pub async fn list_categories(Extension(services): Extension<Arc<AppServices>>) -> Response {
    common::list_records::<Category>(services.categories.as_ref()).await
}

pub async fn get_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    common::get_record::<Category>(services.categories.as_ref(), id).await
}

pub async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<CategoryDraft>, JsonRejection>,
) -> Response {
    common::create_record::<Category>(services.categories.as_ref(), body).await
}

pub async fn update_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<CategoryDraft>, JsonRejection>,
) -> Response {
    common::update_record::<Category>(services.categories.as_ref(), id, body).await
}

pub async fn delete_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    common::delete_record::<Category>(services.categories.as_ref(), id).await
}
