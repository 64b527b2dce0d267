use crate::models::{Event, Review, UserProfile};
use crate::render::filters::FilterPanel;
use crate::render::reviews::ReviewUiState;

/// Everything the page shows, owned by the controller and handed to the
/// renderer on every pass.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub profile: Option<UserProfile>,
    pub main_visible: bool,
    /// The list exactly as last fetched.
    pub events: Vec<Event>,
    pub modal: Option<ModalState>,
    pub filters: FilterPanel,
}

/// The open detail modal.
///
/// The event is the copy that was clicked; refreshing the list does not
/// replace it. Its review list only changes through backend responses
/// (new review list, like count) or an immediate delete.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    pub event: Event,
    pub reviews: Vec<Review>,
    pub ui: ReviewUiState,
}

impl ModalState {
    pub fn open(event: Event) -> Self {
        Self {
            reviews: event.reviews.clone(),
            event,
            ui: ReviewUiState::default(),
        }
    }

    pub fn review_mut(&mut self, review_id: i64) -> Option<&mut Review> {
        self.reviews
            .iter_mut()
            .find(|r| r.datastore_id == Some(review_id))
    }

    pub fn remove_review(&mut self, review_id: i64) {
        self.reviews.retain(|r| r.datastore_id != Some(review_id));
        self.ui.editing.remove(&review_id);
    }
}
