use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
    Json, Router,
};

use crate::error::AppError;
use crate::models::slot::Slot;
use crate::render;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin))
        .route("/admin/reset", post(reset))
        .route("/api/admin/slots", get(list_slots))
}

async fn admin(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let slots = state.reservations.get_admin_view().await?;
    Ok(render::admin_page(&slots))
}

#[utoipa::path(
    get,
    path = "/api/admin/slots",
    responses(
        (status = 200, description = "Raw counts of every slot", body = Vec<Slot>),
    ),
    tag = "Admin"
)]
pub(crate) async fn list_slots(State(state): State<AppState>) -> Result<Json<Vec<Slot>>, AppError> {
    let slots = state.reservations.get_admin_view().await?;
    Ok(Json(slots))
}

/// Redirect::to answers 303 See Other, so the browser follows up with a GET.
#[utoipa::path(
    post,
    path = "/admin/reset",
    responses(
        (status = 303, description = "All slots reset, redirect to /admin"),
    ),
    tag = "Admin"
)]
pub(crate) async fn reset(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.reservations.reset().await?;
    Ok(Redirect::to("/admin"))
}
