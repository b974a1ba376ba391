//! Bodies that are not domain records (records serialize themselves).

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockdesk_core::UserId;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: UserId,
    pub email: String,
}
