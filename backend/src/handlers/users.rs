//! HTTP handlers for user management endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use shared::{NewUser, User};

use crate::error::AppResult;
use crate::AppState;

/// List all users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let store = state.store.lock().await;
    Ok(Json(store.users().to_vec()))
}

/// Create a user
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> AppResult<Json<User>> {
    let user = {
        let mut store = state.store.lock().await;
        store.add_user(input)?
    };
    state.persist();
    Ok(Json(user))
}

/// Update a user's mutable fields
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(input): Json<NewUser>,
) -> AppResult<Json<User>> {
    let user = {
        let mut store = state.store.lock().await;
        store.update_user(user_id, input)?
    };
    state.persist();
    Ok(Json(user))
}

/// Delete a user (blocked while purchases reference them)
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    {
        let mut store = state.store.lock().await;
        store.delete_user(user_id)?;
    }
    state.persist();
    Ok(Json(()))
}
