//! Access-token handling.
//!
//! Sign-in happens at the hosted auth provider; this module only verifies the
//! HS256 tokens it issues (and mints equivalent ones for tests and local
//! development).

pub mod jwt;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Token subject is not a user id: {0}")]
    InvalidSubject(String),
}
