use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::client::Backend;
use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::controller::Controller;
use crate::handlers::{apply_action, edit_event_form, event_map, health_check, index};

/// One controller for the single interactive user the page serves.
pub struct AppState<B> {
    pub controller: Arc<Mutex<Controller<B>>>,
}

impl<B> AppState<B> {
    pub fn new(controller: Controller<B>) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
        }
    }
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
        }
    }
}

pub fn create_routes<B: Backend + 'static>(state: AppState<B>) -> Router {
    Router::new()
        .route("/", get(index::<B>))
        .route("/actions", post(apply_action::<B>))
        .route("/map", get(event_map::<B>))
        .route("/events/:event_id/edit", get(edit_event_form::<B>))
        .route("/health", get(health_check))
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
