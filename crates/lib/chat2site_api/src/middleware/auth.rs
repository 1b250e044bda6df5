//! Authentication middleware: Bearer token extraction and JWT verification.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chat2site_core::auth::jwt::{user_id, verify_access_token};
use chat2site_core::models::auth::TokenClaims;
use uuid::Uuid;

use crate::AppState;
use crate::error::AppError;

/// Caller identity stored in request extensions by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Owning user id, parsed from the `sub` claim.
    pub id: Uuid,
    pub claims: TokenClaims,
}

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies the JWT,
/// and injects `AuthenticatedUser` into request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".into()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization scheme".into()))?;

    let claims = verify_access_token(
        token,
        state.config.jwt_secret.as_bytes(),
        state.config.jwt_audience.as_deref(),
    )
    .ok_or_else(|| AppError::Unauthorized("Invalid or expired token".into()))?;
    let id = user_id(&claims)?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { id, claims });

    Ok(next.run(request).await)
}
