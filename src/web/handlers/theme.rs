//! Theme preference handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::store::{ThemePreference, ThemeRepository};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /theme - Get the current theme preference.
///
/// Returns the documented default when nothing was ever set.
pub async fn get_theme(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ThemePreference>, ApiError> {
    let prefs = ThemeRepository::new(state.db.pool()).get().await?;

    Ok(Json(prefs))
}

/// POST /theme - Replace the theme preference.
pub async fn set_theme(
    State(state): State<Arc<AppState>>,
    Json(prefs): Json<ThemePreference>,
) -> Result<StatusCode, ApiError> {
    ThemeRepository::new(state.db.pool()).set(&prefs).await?;

    Ok(StatusCode::NO_CONTENT)
}
