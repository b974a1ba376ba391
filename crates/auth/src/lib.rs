//! `stockdesk-auth`: token issuing, validation and password checks.
//!
//! This crate is decoupled from HTTP and storage.

pub mod claims;
pub mod credentials;
pub mod jwt;
pub mod password;

pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use credentials::{Credentials, check_credentials};
pub use jwt::{DEFAULT_TOKEN_TTL_MINUTES, Hs256Jwt, IssuedToken, JwtValidator, TokenError, TokenIssuer};
pub use password::{PasswordError, hash_password, verify_password};
