//! Login check: resolve an account and compare the password.

use std::sync::OnceLock;

use serde::Deserialize;

use stockdesk_core::User;

use crate::password::{hash_password, verify_password};

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Hash verified when no account matches, so both failures cost one argon2 run.
fn decoy_hash() -> &'static str {
    static DECOY: OnceLock<String> = OnceLock::new();
    DECOY.get_or_init(|| hash_password("stockdesk-decoy").unwrap_or_default())
}

/// Return the account when `password` matches its stored hash.
///
/// An unknown account and a wrong password are indistinguishable to the caller,
/// in result and in time spent. CPU-bound: run it off the async executor.
pub fn check_credentials(account: Option<User>, password: &str) -> Option<User> {
    match account {
        Some(user) if verify_password(password, &user.password_hash) => Some(user),
        Some(_) => None,
        None => {
            let _ = verify_password(password, decoy_hash());
            None
        }
    }
}
