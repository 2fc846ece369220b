//! Route definitions for the `/registrations` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::registration;
use crate::state::AppState;

/// Routes mounted at `/registrations`.
///
/// ```text
/// POST   /                    -> submit
/// POST   /validate            -> validate
/// POST   /validate/{field}    -> validate_field
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(registration::submit))
        .route("/validate", post(registration::validate))
        .route("/validate/{field}", post(registration::validate_field))
}
