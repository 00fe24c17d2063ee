use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};

use crate::error::AppError;
use crate::models::slot::{ReservationForm, SlotAvailability};
use crate::render;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/submit", post(submit))
        .route("/api/slots", get(list_availability))
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let slots = state.reservations.get_availability_view().await?;
    Ok(render::index_page(&slots))
}

#[utoipa::path(
    post,
    path = "/submit",
    request_body(content = ReservationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Confirmation or full-session page"),
        (status = 422, description = "Missing or blank form field"),
    ),
    tag = "Reservations"
)]
pub(crate) async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ReservationForm>,
) -> Result<Html<String>, AppError> {
    let outcome = state
        .reservations
        .submit_reservation(&form.name, &form.grade, &form.slot)
        .await?;
    Ok(render::result_page(&outcome.message()))
}

#[utoipa::path(
    get,
    path = "/api/slots",
    responses(
        (status = 200, description = "Availability of every slot", body = Vec<SlotAvailability>),
    ),
    tag = "Reservations"
)]
pub(crate) async fn list_availability(
    State(state): State<AppState>,
) -> Result<Json<Vec<SlotAvailability>>, AppError> {
    let slots = state.reservations.get_availability_view().await?;
    Ok(Json(slots))
}
