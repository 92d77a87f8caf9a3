//! Axum surface of the roster service.
//!
//! Routes translate HTTP requests into [`UserService`](roster_application::UserService)
//! calls, each under a [`RequestContext`](roster_application::RequestContext) bounded by
//! the configured request timeout, and render failures as RFC 7807 problem documents.
//!
//! ```ignore
//! let state = AppState::new(Arc::new(service), Duration::from_secs(10));
//! let app = roster_axum::routes::router(state);
//! ```

pub mod problem;
pub mod routes;
pub mod state;

pub use problem::{ApiError, InvalidParam, PROBLEM_CONTENT_TYPE, Problem};
pub use state::AppState;
