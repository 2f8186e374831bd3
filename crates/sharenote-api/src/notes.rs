use axum::{Extension, Json, extract::State, response::IntoResponse};
use tracing::info;

use sharenote_types::api::{AddNoteRequest, MsgResponse, Principal, RemoveNoteRequest};

use crate::auth::AppState;
use crate::error::ApiError;

/// POST /notes — append a note id to the principal's shared list, creating
/// the record lazily on first use. Duplicates are kept on purpose: the list
/// records every share, and the store-level upsert makes concurrent appends
/// safe.
pub async fn add_note(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<AddNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .db
        .add_shared_note(&principal.id.to_string(), &principal.username, &req.note_id)?;

    info!("shared note added for {}", principal.username);
    Ok(Json(MsgResponse {
        msg: "shared note added".into(),
    }))
}

/// GET /notes — the principal's note ids in insertion order, `[]` when the
/// user never shared anything.
pub async fn list_notes(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<impl IntoResponse, ApiError> {
    let note_ids = state
        .db
        .get_shared_notes(&principal.id.to_string())?
        .map(|row| row.note_ids)
        .unwrap_or_default();

    info!("shared notes listed for {}", principal.username);
    Ok(Json(note_ids))
}

/// POST /notes/delete — remove every occurrence of the given note id.
/// A user with no shared-notes record gets the same success acknowledgement;
/// removal is idempotent.
pub async fn remove_note(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<RemoveNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let changed = state
        .db
        .remove_shared_note(&principal.id.to_string(), &req.note_id)?;

    if changed == 0 {
        info!("no shared notes record for {}, delete is a no-op", principal.username);
    } else {
        info!("shared note deleted for {}", principal.username);
    }

    Ok(Json(MsgResponse {
        msg: "shared note deleted".into(),
    }))
}
