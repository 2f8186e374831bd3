use serde::{Deserialize, Serialize};
use uuid::Uuid;

// -- JWT Claims --

/// JWT claims shared by the auth handlers and the middleware. Canonical
/// definition lives here in sharenote-types to eliminate duplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub exp: usize,
}

/// The authenticated identity attached to a request by the middleware.
/// The username comes from the store at verification time, not from the
/// token payload — the claims are treated as a capability hint only.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: Uuid,
    pub username: String,
}

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// Verification reports a boolean payload, never an error object — invalid
/// and missing tokens both come back as `{ msg: false, username: "" }`.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub msg: bool,
    pub username: String,
}

// -- Shared notes --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddNoteRequest {
    pub note_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoveNoteRequest {
    pub note_id: String,
}

// -- Generic acknowledgement --

#[derive(Debug, Serialize)]
pub struct MsgResponse {
    pub msg: String,
}
