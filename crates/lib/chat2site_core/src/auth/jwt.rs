//! JWT token generation and verification.

use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::distr::Alphanumeric;
use rand::{Rng, rng};
use tracing::{info, warn};
use uuid::Uuid;

use super::AuthError;
use crate::models::auth::TokenClaims;

/// Lifetime of locally minted tokens: 1 hour.
const ACCESS_TOKEN_EXPIRY_SECS: i64 = 60 * 60;

/// Generate a signed HS256 access token for `user_id`.
pub fn generate_access_token(
    user_id: &Uuid,
    email: Option<&str>,
    secret: &[u8],
) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: user_id.to_string(),
        email: email.map(str::to_string),
        role: Some("authenticated".to_string()),
        exp: (now + Duration::seconds(ACCESS_TOKEN_EXPIRY_SECS)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::TokenError(format!("jwt encode: {e}")))
}

/// Verify an access token, returning the claims on success.
///
/// The audience is only checked when `audience` is given; provider tokens
/// usually carry `aud = "authenticated"`.
pub fn verify_access_token(
    token: &str,
    secret: &[u8],
    audience: Option<&str>,
) -> Option<TokenClaims> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;
    match audience {
        Some(aud) => validation.set_audience(&[aud]),
        None => validation.validate_aud = false,
    }
    decode::<TokenClaims>(token, &key, &validation)
        .ok()
        .map(|data| data.claims)
}

/// Extract the owning user id from verified claims.
pub fn user_id(claims: &TokenClaims) -> Result<Uuid, AuthError> {
    Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidSubject(claims.sub.clone()))
}

/// Length of a generated signing secret.
const GENERATED_SECRET_LEN: usize = 64;

/// Signing secret for locally minted tokens. `JWT_SECRET` wins over
/// `AUTH_SECRET`; with neither set the secret lives in
/// `<data dir>/chat2site/jwt-secret` and is created on first use.
pub fn resolve_jwt_secret() -> String {
    let from_env = ["JWT_SECRET", "AUTH_SECRET"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|secret| !secret.is_empty());
    if let Some(secret) = from_env {
        return secret;
    }

    let path = jwt_secret_path();
    if let Some(secret) = read_secret(&path) {
        return secret;
    }
    let secret: String = rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_SECRET_LEN)
        .map(char::from)
        .collect();
    match store_secret(&path, &secret) {
        Ok(()) => info!(path = %path.display(), "generated new JWT secret"),
        Err(e) => warn!(
            path = %path.display(),
            error = %e,
            "could not persist generated JWT secret; tokens will not survive a restart"
        ),
    }
    secret
}

/// Stored secret at `path`, if the file exists and is not blank.
fn read_secret(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let secret = content.trim();
    (!secret.is_empty()).then(|| secret.to_string())
}

fn store_secret(path: &Path, secret: &str) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, secret)
}

fn jwt_secret_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chat2site")
        .join("jwt-secret")
}
