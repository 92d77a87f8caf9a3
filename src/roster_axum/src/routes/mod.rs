//! User routes.

pub mod create_user;
pub mod delete_user;
pub mod find_user;

pub use create_user::{CreateUserRequest, CreateUserResponse, create_user};
pub use delete_user::delete_user;
pub use find_user::{UserResponse, find_user};

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/{id}", get(find_user).delete(delete_user))
        .with_state(state)
}
