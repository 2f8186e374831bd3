pub mod auth;
pub mod error;
pub mod middleware;
pub mod notes;

pub use auth::{AppState, AppStateInner};

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

/// Build the full API router. Identity routes are public; the shared-notes
/// routes sit behind the auth middleware.
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/verify", get(auth::verify))
        .with_state(state.clone());

    let protected = Router::new()
        .route("/notes", get(notes::list_notes).post(notes::add_note))
        .route("/notes/delete", post(notes::remove_note))
        .layer(from_fn_with_state(state.clone(), middleware::require_auth))
        .with_state(state);

    public.merge(protected)
}
