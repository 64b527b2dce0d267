use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{
    Backend, ClientError, DELETE_REVIEW, GET_ALL_EVENTS, GET_EVENT, NEW_REVIEW, REVIEW_LIKES,
    SET_TEXT, USER_INFO,
};
use crate::models::{Event, Review, UserProfile};

/// [`Backend`] over HTTP. Reads are GETs; mutations are form-encoded POSTs.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    /// `base_url` is the directory the endpoints live under; a missing
    /// trailing slash is added.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base = Url::parse(&normalized).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, endpoint: &str) -> Result<Url, ClientError> {
        self.base
            .join(endpoint)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        debug!(endpoint, "GET");
        let response = self
            .client
            .get(self.url(endpoint)?)
            .query(query)
            .send()
            .await
            .map_err(|source| network(endpoint, source))?;

        decode(endpoint, response).await
    }

    async fn post(
        &self,
        endpoint: &'static str,
        form: &[(&str, String)],
    ) -> Result<Response, ClientError> {
        debug!(endpoint, "POST");
        let response = self
            .client
            .post(self.url(endpoint)?)
            .form(form)
            .send()
            .await
            .map_err(|source| network(endpoint, source))?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, status = status.as_u16(), "Backend rejected request");
            return Err(ClientError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

fn network(endpoint: &'static str, source: reqwest::Error) -> ClientError {
    warn!(endpoint, error = %source, "Backend request failed");
    ClientError::Network { endpoint, source }
}

async fn decode<T: DeserializeOwned>(
    endpoint: &'static str,
    response: Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        warn!(endpoint, status = status.as_u16(), "Backend rejected request");
        return Err(ClientError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| network(endpoint, source))?;
    serde_json::from_str(&body).map_err(|source| {
        warn!(endpoint, error = %source, "Backend body did not decode");
        ClientError::Decode { endpoint, source }
    })
}

#[async_trait]
impl Backend for HttpBackend {
    async fn user_info(&self) -> Result<UserProfile, ClientError> {
        self.get(USER_INFO, &[]).await
    }

    async fn get_all_events(&self) -> Result<Vec<Event>, ClientError> {
        self.get(GET_ALL_EVENTS, &[]).await
    }

    async fn get_event(&self, event_id: &str) -> Result<Event, ClientError> {
        self.get(GET_EVENT, &[("event-id", event_id)]).await
    }

    async fn new_review(&self, event_id: i64, text: &str) -> Result<Vec<Review>, ClientError> {
        let form = [("text", text.to_string()), ("eventId", event_id.to_string())];
        let response = self.post(NEW_REVIEW, &form).await?;
        decode(NEW_REVIEW, response).await
    }

    async fn delete_review(&self, review_id: i64) -> Result<(), ClientError> {
        self.post(DELETE_REVIEW, &[("reviewId", review_id.to_string())])
            .await
            .map(|_| ())
    }

    async fn like_review(&self, review_id: i64) -> Result<i64, ClientError> {
        let response = self
            .post(REVIEW_LIKES, &[("reviewId", review_id.to_string())])
            .await?;
        decode(REVIEW_LIKES, response).await
    }

    async fn set_review_text(&self, review_id: i64, new_text: &str) -> Result<(), ClientError> {
        let form = [
            ("newText", new_text.to_string()),
            ("reviewId", review_id.to_string()),
        ];
        self.post(SET_TEXT, &form).await.map(|_| ())
    }
}
