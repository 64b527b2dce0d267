use chrono::{DateTime, FixedOffset, Utc};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::client::{Backend, ClientError};
use crate::models::Viewer;
use crate::render::detail::is_backdrop_click;
use crate::render::form::{event_id_from_hash, render_event_form};
use crate::render::map::{add_event_markers, MapOptions, MapWidget, MAP_ID};
use crate::render::{render_page, RenderContext};
use crate::state::{ModalState, PageState};
use crate::view::Element;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("No event at position {0}")]
    UnknownEvent(usize),

    #[error("No event with id {0}")]
    EventNotFound(i64),
}

/// Owns the page state and runs every user action against the backend.
///
/// Each mutation is followed by a full re-fetch of the event list, whether or
/// not the mutation succeeded. A mutation error is returned after that
/// refresh has run.
pub struct Controller<B> {
    backend: B,
    state: PageState,
    utc_offset: FixedOffset,
}

impl<B: Backend> Controller<B> {
    pub fn new(backend: B, utc_offset: FixedOffset) -> Self {
        Self {
            backend,
            state: PageState::default(),
            utc_offset,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn viewer(&self) -> Viewer {
        self.state
            .profile
            .as_ref()
            .map(|profile| profile.viewer())
            .unwrap_or_default()
    }

    pub fn render_context(&self, now: DateTime<Utc>) -> RenderContext {
        RenderContext {
            viewer: self.viewer(),
            utc_offset: self.utc_offset,
            now,
        }
    }

    pub fn render(&self, now: DateTime<Utc>) -> Element {
        render_page(&self.state, &self.render_context(now))
    }

    /// Fetches the profile and, when the user has one, the full event list.
    pub async fn get_events(&mut self) -> Result<(), ClientError> {
        let profile = self.backend.user_info().await?;
        let has_profile = profile.has_profile();
        self.state.profile = Some(profile);

        if !has_profile {
            debug!("No profile, hiding main section");
            self.state.main_visible = false;
            self.state.events.clear();
            return Ok(());
        }

        debug!(filters = ?self.state.filters.selected, "Loading events");
        let events = self.backend.get_all_events().await?;
        info!(count = events.len(), "Loaded events");
        self.state.events = events;
        self.state.main_visible = true;
        Ok(())
    }

    /// Opens the detail modal on a copy of the listed event.
    pub fn open_event(&mut self, index: usize) -> Result<(), DispatchError> {
        let event = self
            .state
            .events
            .get(index)
            .cloned()
            .ok_or(DispatchError::UnknownEvent(index))?;
        self.state.modal = Some(ModalState::open(event));
        Ok(())
    }

    /// Opens the modal on the listed event with this datastore id, wherever
    /// the latest refresh placed it.
    pub fn open_event_by_id(&mut self, event_id: i64) -> Result<(), DispatchError> {
        let event = self
            .state
            .events
            .iter()
            .find(|event| event.datastore_id == Some(event_id))
            .cloned()
            .ok_or(DispatchError::EventNotFound(event_id))?;
        self.state.modal = Some(ModalState::open(event));
        Ok(())
    }

    pub fn window_click(&mut self, target: Option<&str>) {
        if is_backdrop_click(target) {
            self.state.modal = None;
        }
    }

    /// Posts a review unless the trimmed text is empty. The modal's list is
    /// replaced by the list the backend returns.
    pub async fn submit_review(&mut self, event_id: i64, text: &str) -> Result<(), ClientError> {
        if text.trim().is_empty() {
            debug!(event_id, "Ignoring empty review");
            return Ok(());
        }

        let outcome = self.backend.new_review(event_id, text).await;
        let refreshed = self.refresh().await;
        let reviews = outcome?;
        if let Some(modal) = self
            .state
            .modal
            .as_mut()
            .filter(|modal| modal.event.datastore_id == Some(event_id))
        {
            modal.reviews = reviews;
        }
        refreshed
    }

    /// Removes the review from the modal right away, then asks the backend to
    /// delete it.
    pub async fn delete_review(&mut self, review_id: i64) -> Result<(), ClientError> {
        if let Some(modal) = self.state.modal.as_mut() {
            modal.remove_review(review_id);
        }

        let outcome = self.backend.delete_review(review_id).await;
        let refreshed = self.refresh().await;
        outcome?;
        refreshed
    }

    pub async fn like_review(&mut self, review_id: i64) -> Result<(), ClientError> {
        let outcome = self.backend.like_review(review_id).await;
        let refreshed = self.refresh().await;
        let likes = outcome?;
        if let Some(review) = self
            .state
            .modal
            .as_mut()
            .and_then(|modal| modal.review_mut(review_id))
        {
            review.likes = Some(likes);
        }
        refreshed
    }

    /// Edit/Done. The first click only unlocks the text; the second sends the
    /// text as shown and locks it again.
    pub async fn toggle_edit(&mut self, review_id: i64, text: &str) -> Result<(), ClientError> {
        let Some(modal) = self.state.modal.as_mut() else {
            return Ok(());
        };

        if modal.ui.editing.insert(review_id) {
            return Ok(());
        }
        modal.ui.editing.remove(&review_id);
        if let Some(review) = modal.review_mut(review_id) {
            review.text = Some(text.to_string());
        }

        let outcome = self.backend.set_review_text(review_id, text).await;
        let refreshed = self.refresh().await;
        outcome?;
        refreshed
    }

    pub async fn dispatch(&mut self, action: Action) -> Result<(), DispatchError> {
        debug!(?action, "Dispatching");
        match action {
            Action::OpenEvent { index, event_id } => match event_id {
                Some(event_id) => self.open_event_by_id(event_id)?,
                None => self.open_event(index)?,
            },
            Action::WindowClick { target } => self.window_click(target.as_deref()),
            Action::SaveEvent { event_id } => {
                // The backend exposes no endpoint for saving an event to a profile.
                info!(event_id, "Save event requested");
            }
            Action::SubmitReview { event_id, text } => {
                self.submit_review(event_id, &text).await?
            }
            Action::DeleteReview { review_id } => self.delete_review(review_id).await?,
            Action::LikeReview { review_id } => self.like_review(review_id).await?,
            Action::ToggleEdit { review_id, text } => self.toggle_edit(review_id, &text).await?,
            Action::ToggleFilters => self.state.filters.toggle_more(),
            Action::ToggleFilter { element_id, value } => self
                .state
                .filters
                .toggle_border_selection(&element_id, value.as_deref()),
        }
        Ok(())
    }

    /// Builds the map with one marker per event on the backend.
    pub async fn create_map<W: MapWidget>(&self) -> Result<W, ClientError> {
        let mut widget = W::create(MAP_ID, MapOptions::default());
        let events = self.backend.get_all_events().await?;
        add_event_markers(&mut widget, &events);
        Ok(widget)
    }

    /// The event form, pre-filled from `get-event` when the location hash
    /// names an event.
    pub async fn load_event_info(&self, hash: &str) -> Result<Element, ClientError> {
        match event_id_from_hash(hash) {
            None => Ok(render_event_form(None)),
            Some(event_id) => {
                let event = self.backend.get_event(event_id).await?;
                Ok(render_event_form(Some(&event)))
            }
        }
    }

    async fn refresh(&mut self) -> Result<(), ClientError> {
        self.get_events().await.map_err(|e| {
            warn!(error = %e, "Refresh after mutation failed");
            e
        })
    }
}
