use std::sync::Arc;

use anyhow::anyhow;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::{SaltString, rand_core::OsRng}};
use axum::{Json, extract::State, http::{HeaderMap, StatusCode}, response::IntoResponse};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::info;
use uuid::Uuid;

use sharenote_db::Database;
use sharenote_types::api::{Claims, LoginRequest, LoginResponse, MsgResponse, RegisterRequest, VerifyResponse};

use crate::error::ApiError;
use crate::middleware::credential_from_headers;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub jwt_secret: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.username.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation(
            "username, email and password are required".into(),
        ));
    }

    if state.db.get_user_by_email(&req.email)?.is_some() {
        info!("registration rejected, email already taken");
        return Err(ApiError::DuplicateEmail);
    }

    // Slow salted hash; the plaintext is never stored.
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|e| anyhow!("password hashing failed: {}", e))?
        .to_string();

    let user_id = Uuid::new_v4();
    state
        .db
        .create_user(&user_id.to_string(), &req.username, &req.email, &password_hash)?;

    info!("user registered: {}", req.username);

    // No auto-login; the client logs in separately.
    Ok(Json(MsgResponse {
        msg: "sign up successful".into(),
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .db
        .get_user_by_email(&req.email)?
        .ok_or(ApiError::UserNotFound)?;

    let parsed_hash =
        PasswordHash::new(&user.password).map_err(|e| anyhow!("stored hash unreadable: {}", e))?;

    Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed_hash)
        .map_err(|_| ApiError::IncorrectPassword)?;

    let user_id: Uuid = user
        .id
        .parse()
        .map_err(|e| anyhow!("corrupt user id '{}': {}", user.id, e))?;

    let token = create_token(&state.jwt_secret, user_id, &user.username)?;

    info!("login successful: {}", user.username);

    Ok(Json(LoginResponse {
        token,
        username: user.username,
    }))
}

/// GET /auth/verify — re-validates a presented token and re-fetches the user
/// to confirm it still exists. Invalid, missing, or expired tokens come back
/// as a boolean payload, never an error object; only store faults are 500s.
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let Some(token) = credential_from_headers(&headers) else {
        return Ok(invalid_verify());
    };

    let Ok(data) = decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
        &Validation::default(),
    ) else {
        return Ok(invalid_verify());
    };

    // A well-signed token for a since-deleted user is still invalid.
    let Some(user) = state.db.get_user_by_id(&data.claims.sub.to_string())? else {
        return Ok(invalid_verify());
    };

    info!("token verified for {}", user.username);
    Ok((
        StatusCode::OK,
        Json(VerifyResponse {
            msg: true,
            username: user.username,
        }),
    ))
}

fn invalid_verify() -> (StatusCode, Json<VerifyResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(VerifyResponse {
            msg: false,
            username: String::new(),
        }),
    )
}

/// Credentials are valid for exactly one day from issuance.
fn create_token(secret: &str, user_id: Uuid, username: &str) -> anyhow::Result<String> {
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        exp: (chrono::Utc::now() + chrono::Duration::days(1)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_decodes_with_original_claims() {
        let id = Uuid::new_v4();
        let token = create_token("secret", id, "alice").unwrap();

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"secret"),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(data.claims.sub, id);
        assert_eq!(data.claims.username, "alice");
        assert!(data.claims.exp > chrono::Utc::now().timestamp() as usize);
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let token = create_token("secret", Uuid::new_v4(), "alice").unwrap();
        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"other-secret"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn expired_token_fails_regardless_of_claims() {
        let claims = Claims {
            sub: Uuid::new_v4(),
            username: "alice".into(),
            exp: (chrono::Utc::now() - chrono::Duration::hours(1)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"secret"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn password_hash_is_not_the_plaintext() {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(b"hunter22", &salt)
            .unwrap()
            .to_string();

        assert_ne!(hash, "hunter22");

        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default().verify_password(b"hunter22", &parsed).is_ok());
        assert!(Argon2::default().verify_password(b"wrong", &parsed).is_err());
    }
}
