//! User records subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → handlers.rs (extract path id / JSON payload, validate name)
//!     → store.rs (RwLock-guarded map + id counter)
//!     → handlers.rs (map Option/bool results to status codes)
//!     → error.rs (ApiError → plain-text error response)
//! ```
//!
//! # Design Decisions
//! - Identifiers are assigned by the store only; payload ids are ignored
//! - Not-found is a value (`Option`/`bool`) in the store, an error only at the HTTP boundary
//! - Validation happens in the handlers and never reaches the store

pub mod error;
pub mod handlers;
pub mod model;
pub mod store;

pub use error::ApiError;
pub use model::{User, UserId, UserInput};
pub use store::UserStore;

use axum::{routing::get, Router};

use crate::http::server::AppState;
use self::handlers::*;

/// Build the `/users` routes.
pub fn users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
