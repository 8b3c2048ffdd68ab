use std::sync::Arc;

use axum::{
    Router,
    extract::{Json as ExtractJson, Path, State},
    response::Json,
    routing::{get, post},
};

use user_records::{
    DeleteConfirmation, User, UserInput, UserStore, create_user, delete_user, get_user,
    list_users, update_user,
};

use super::error::{ErrorResponse, IntoResponseError};

/// Create a router for the user record endpoints
pub(super) fn router() -> Router<Arc<UserStore>> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/users/", post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
}

async fn create_user_handler(
    State(store): State<Arc<UserStore>>,
    ExtractJson(payload): ExtractJson<UserInput>,
) -> Result<Json<User>, ErrorResponse> {
    tracing::debug!(email = %payload.email, "Create user request");

    create_user(&store, payload)
        .await
        .map(Json)
        .into_response_error()
}

/// Return every record, ordered by id
///
/// An empty store answers 404 with code `not_found`.
async fn list_users_handler(
    State(store): State<Arc<UserStore>>,
) -> Result<Json<Vec<User>>, ErrorResponse> {
    list_users(&store).await.map(Json).into_response_error()
}

async fn get_user_handler(
    State(store): State<Arc<UserStore>>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ErrorResponse> {
    get_user(&store, id).await.map(Json).into_response_error()
}

async fn update_user_handler(
    State(store): State<Arc<UserStore>>,
    Path(id): Path<i64>,
    ExtractJson(payload): ExtractJson<UserInput>,
) -> Result<Json<User>, ErrorResponse> {
    tracing::debug!(id, email = %payload.email, "Update user request");

    update_user(&store, id, payload)
        .await
        .map(Json)
        .into_response_error()
}

async fn delete_user_handler(
    State(store): State<Arc<UserStore>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteConfirmation>, ErrorResponse> {
    tracing::debug!(id, "Delete user request");

    delete_user(&store, id).await.map(Json).into_response_error()
}
