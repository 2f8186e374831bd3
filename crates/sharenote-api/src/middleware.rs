use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation, decode};

use sharenote_types::api::{Claims, Principal};

use crate::auth::AppState;
use crate::error::ApiError;

/// Pull the raw credential out of the Authorization header. Clients may send
/// the bare token or prefix it with the `Bearer` scheme.
pub(crate) fn credential_from_headers(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    Some(value.strip_prefix("Bearer ").unwrap_or(value))
}

/// Extract and validate the JWT, then re-fetch the user by id so tokens for
/// deleted users are rejected. The token payload is a capability hint only;
/// the attached principal carries the store's current username.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = credential_from_headers(req.headers()).ok_or(ApiError::MissingCredential)?;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::InvalidCredential)?;

    let user = state
        .db
        .get_user_by_id(&token_data.claims.sub.to_string())?
        .ok_or(ApiError::InvalidCredential)?;

    req.extensions_mut().insert(Principal {
        id: token_data.claims.sub,
        username: user.username,
    });
    Ok(next.run(req).await)
}
