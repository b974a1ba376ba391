//! Verb-to-repository mapping shared by every resource.
//!
//! Status mapping: list/get 200, create 201 + `Location`, update/delete 204,
//! unknown id 404, malformed id or body 400.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use stockdesk_core::{Record, Validate};
use stockdesk_infra::Repository;

use crate::app::errors;

fn parse_id<E: Record>(raw: &str) -> Result<E::Id, Response> {
    raw.parse::<E::Id>().map_err(errors::domain_error_to_response)
}

fn accept_draft<E: Record>(body: Result<Json<E::Draft>, JsonRejection>) -> Result<E::Draft, Response> {
    let Json(draft) = body.map_err(errors::body_rejection_to_response)?;
    draft.validate().map_err(errors::domain_error_to_response)?;
    Ok(draft)
}

pub async fn list_records<E: Record>(repo: &dyn Repository<E>) -> Response {
    match repo.get_all().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::repo_error_to_response(e),
    }
}

pub async fn get_record<E: Record>(repo: &dyn Repository<E>, raw_id: String) -> Response {
    let id = match parse_id::<E>(&raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match repo.get_by_id(id).await {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => errors::not_found(E::LABEL),
        Err(e) => errors::repo_error_to_response(e),
    }
}

pub async fn create_record<E: Record>(
    repo: &dyn Repository<E>,
    body: Result<Json<E::Draft>, JsonRejection>,
) -> Response {
    let draft = match accept_draft::<E>(body) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    let id = match repo.create(draft.clone()).await {
        Ok(id) => id,
        Err(e) => return errors::repo_error_to_response(e),
    };

    tracing::info!(collection = E::COLLECTION, %id, "created");
    let location = format!("/api/{}/{}", E::COLLECTION, id);
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(E::from_draft(id, draft)),
    )
        .into_response()
}

pub async fn update_record<E: Record>(
    repo: &dyn Repository<E>,
    raw_id: String,
    body: Result<Json<E::Draft>, JsonRejection>,
) -> Response {
    let id = match parse_id::<E>(&raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let draft = match accept_draft::<E>(body) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    match repo.update(id, draft).await {
        Ok(true) => {
            tracing::info!(collection = E::COLLECTION, %id, "updated");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => errors::not_found(E::LABEL),
        Err(e) => errors::repo_error_to_response(e),
    }
}

pub async fn delete_record<E: Record>(repo: &dyn Repository<E>, raw_id: String) -> Response {
    let id = match parse_id::<E>(&raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match repo.delete(id).await {
        Ok(true) => {
            tracing::info!(collection = E::COLLECTION, %id, "deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => errors::not_found(E::LABEL),
        Err(e) => errors::repo_error_to_response(e),
    }
}
