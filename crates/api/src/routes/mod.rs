pub mod health;
pub mod registration;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /registrations                     submit (POST)
/// /registrations/validate            validate whole record (POST)
/// /registrations/validate/{field}    validate, report one field (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/registrations", registration::router())
}
