pub mod admin;
pub mod visitor;

use axum::Router;
use crate::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(visitor::router())
        .merge(admin::router())
        .with_state(state)
}
