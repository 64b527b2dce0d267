//! Access to the event backend.
//!
//! Every call is a single request: no timeout, no retry, no caching.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Event, Review, UserProfile};

pub use http::HttpBackend;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    #[error("Request to {endpoint} failed")]
    Network {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("{endpoint} returned an unexpected body")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn endpoint(&self) -> Option<&'static str> {
        match self {
            ClientError::InvalidUrl(_) => None,
            ClientError::Network { endpoint, .. }
            | ClientError::Status { endpoint, .. }
            | ClientError::Decode { endpoint, .. } => Some(*endpoint),
        }
    }
}

pub const USER_INFO: &str = "user-info";
pub const GET_ALL_EVENTS: &str = "get-all-events";
pub const GET_EVENT: &str = "get-event";
pub const NEW_REVIEW: &str = "new-review";
pub const DELETE_REVIEW: &str = "delete-review";
pub const REVIEW_LIKES: &str = "review-likes";
pub const SET_TEXT: &str = "set-text";

/// The backend endpoints the view layer consumes.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn user_info(&self) -> Result<UserProfile, ClientError>;

    async fn get_all_events(&self) -> Result<Vec<Event>, ClientError>;

    async fn get_event(&self, event_id: &str) -> Result<Event, ClientError>;

    /// Returns the event's review list after the insert.
    async fn new_review(&self, event_id: i64, text: &str) -> Result<Vec<Review>, ClientError>;

    async fn delete_review(&self, review_id: i64) -> Result<(), ClientError>;

    /// Returns the review's like count after the increment.
    async fn like_review(&self, review_id: i64) -> Result<i64, ClientError>;

    async fn set_review_text(&self, review_id: i64, new_text: &str) -> Result<(), ClientError>;
}
