use axum::{
    extract::{Path, State},
    response::{Html, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::action::Action;
use crate::client::Backend;
use crate::render::map::MarkerLayer;
use crate::routes::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{page, success};

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "event-board",
    };

    success(payload, "Health check successful")
}

fn document(body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Events</title></head><body>{body}</body></html>"
    ))
}

/// Page load: fetch the profile and events, render the whole page.
pub async fn index<B: Backend + 'static>(
    State(state): State<AppState<B>>,
) -> Result<Html<String>, AppError> {
    let mut controller = state.controller.lock().await;
    controller.get_events().await?;
    Ok(document(&controller.render(Utc::now()).to_html()))
}

/// Applies one UI action and returns the page as it looks afterwards.
pub async fn apply_action<B: Backend + 'static>(
    State(state): State<AppState<B>>,
    Json(action): Json<Action>,
) -> Result<Response, AppError> {
    let mut controller = state.controller.lock().await;
    controller.dispatch(action).await?;

    Ok(page(&controller.render(Utc::now()), "Action applied"))
}

pub async fn event_map<B: Backend + 'static>(
    State(state): State<AppState<B>>,
) -> Result<Response, AppError> {
    let controller = state.controller.lock().await;
    let layer: MarkerLayer = controller.create_map().await?;
    Ok(success(layer, "Map loaded"))
}

/// The organization's edit form for one event.
pub async fn edit_event_form<B: Backend + 'static>(
    State(state): State<AppState<B>>,
    Path(event_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let controller = state.controller.lock().await;
    let form = controller.load_event_info(&format!("#{event_id}")).await?;
    Ok(document(&form.to_html()))
}
