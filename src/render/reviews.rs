use std::collections::BTreeSet;

use crate::action::Action;
use crate::models::{or_undefined, Review, Viewer};
use crate::view::{create_element, Element};

use super::RenderContext;

pub const REVIEW_CONTAINER_ID: &str = "review-container";
pub const REVIEW_LIST_ID: &str = "review-list-container";
pub const REVIEW_INPUT_ID: &str = "review-input";

/// Per-review UI state that survives between renders of the modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewUiState {
    /// Reviews whose text is currently editable in place.
    pub editing: BTreeSet<i64>,
}

pub fn like_label(likes: Option<i64>) -> String {
    format!("{} Likes", or_undefined(likes))
}

/// Builds `#review-container`: heading, the submission box for individuals and
/// the list of reviews.
///
/// The submit action is rendered with an empty `text`; the page fills in the
/// value of `#review-input` when it posts the action back.
pub fn render_review_section(
    event_id: Option<i64>,
    reviews: &[Review],
    ui: &ReviewUiState,
    ctx: &RenderContext,
) -> Element {
    let mut section = Element::new("div").id(REVIEW_CONTAINER_ID);
    create_element(&mut section, "h1", "Reviews");

    if ctx.viewer.is_individual {
        section.append(
            Element::new("input")
                .id(REVIEW_INPUT_ID)
                .class("review-submission")
                .attr("placeholder", "Leave a review")
                .attr("type", "text"),
        );

        let submit = create_element(&mut section, "button", "Submit");
        submit.add_class("review-submission");
        if let Some(event_id) = event_id {
            submit.on_click(Action::SubmitReview {
                event_id,
                text: String::new(),
            });
        }
    }

    let list = section.append(Element::new("div").id(REVIEW_LIST_ID));
    create_review_list(list, reviews, ui, &ctx.viewer);
    section
}

/// Appends one `div.review` per review, in order.
pub fn create_review_list(
    container: &mut Element,
    reviews: &[Review],
    ui: &ReviewUiState,
    viewer: &Viewer,
) {
    for review in reviews {
        create_review_element(container, review, ui, viewer);
    }
}

pub fn review_element_id(review_id: i64) -> String {
    format!("review-{review_id}")
}

fn create_review_element(
    container: &mut Element,
    review: &Review,
    ui: &ReviewUiState,
    viewer: &Viewer,
) {
    let review_element = create_element(container, "div", "");
    review_element.add_class("review");
    if let Some(id) = review.datastore_id {
        review_element.id = Some(review_element_id(id));
    }

    let details = create_element(review_element, "div", "");
    details.add_class("review-details");
    create_element(details, "p", or_undefined(review.individual_name.as_deref()));
    let time = create_element(details, "time", "");
    time.add_class("timeago");
    time.set_attribute("datetime", or_undefined(review.timestamp.as_deref()));

    let editing = review
        .datastore_id
        .is_some_and(|id| ui.editing.contains(&id));
    let text = create_element(review_element, "p", or_undefined(review.text.as_deref()));
    text.add_class("review-text");
    if editing {
        text.set_attribute("contenteditable", "true");
    }

    let like = create_element(review_element, "button", like_label(review.likes));
    like.add_class("review-like");
    if let Some(review_id) = review.datastore_id {
        like.on_click(Action::LikeReview { review_id });
    }

    if viewer.is_author_of(review.individual_email.as_deref()) {
        create_author_controls(review_element, review, editing);
    }
}

/// Delete and Edit/Done controls, shown only to the review's author.
fn create_author_controls(review_element: &mut Element, review: &Review, editing: bool) {
    let delete = create_element(review_element, "button", "Delete");
    delete.add_class("review-delete");
    if let Some(review_id) = review.datastore_id {
        delete.on_click(Action::DeleteReview { review_id });
    }

    let label = if editing { "Done" } else { "Edit" };
    let edit = create_element(review_element, "button", label);
    edit.add_class("review-edit");
    if let Some(review_id) = review.datastore_id {
        edit.on_click(Action::ToggleEdit {
            review_id,
            text: review.text.clone().unwrap_or_default(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::context;

    fn review(id: i64, email: &str) -> Review {
        Review {
            datastore_id: Some(id),
            individual_name: Some("Ann Lee".into()),
            individual_email: Some(email.into()),
            text: Some("Great fair".into()),
            timestamp: Some("2021-05-01T09:00:00Z".into()),
            likes: Some(3),
        }
    }

    #[test]
    fn test_submission_box_only_for_individuals() {
        let ui = ReviewUiState::default();

        let section = render_review_section(Some(1), &[], &ui, &context(Viewer::individual("a@b.edu")));
        assert_eq!(section.find_all_by_class("review-submission").len(), 2);
        let input = section.find_by_id(REVIEW_INPUT_ID).unwrap();
        assert_eq!(input.attribute("placeholder"), Some("Leave a review"));

        let section =
            render_review_section(Some(1), &[], &ui, &context(Viewer::organization("c@b.edu")));
        assert!(section.find_all_by_class("review-submission").is_empty());
        assert_eq!(section.children[0].text, "Reviews");
    }

    #[test]
    fn test_review_contents() {
        let section = render_review_section(
            Some(1),
            &[review(42, "x@b.edu")],
            &ReviewUiState::default(),
            &context(Viewer::individual("a@b.edu")),
        );
        let list = section.find_by_id(REVIEW_LIST_ID).unwrap();
        let rendered = &list.children[0];

        assert_eq!(rendered.id.as_deref(), Some("review-42"));
        assert_eq!(rendered.children[0].children[0].text, "Ann Lee");
        assert_eq!(
            rendered.children[0].children[1].attribute("datetime"),
            Some("2021-05-01T09:00:00Z")
        );
        assert_eq!(rendered.children[1].text, "Great fair");
        assert_eq!(rendered.children[2].text, "3 Likes");
        assert_eq!(
            rendered.children[2].on_click,
            Some(Action::LikeReview { review_id: 42 })
        );
    }

    #[test]
    fn test_author_controls_follow_email() {
        let reviews = [review(1, "a@b.edu"), review(2, "x@b.edu")];
        let section = render_review_section(
            Some(9),
            &reviews,
            &ReviewUiState::default(),
            &context(Viewer::individual("a@b.edu")),
        );
        let list = section.find_by_id(REVIEW_LIST_ID).unwrap();

        let own = &list.children[0];
        assert_eq!(own.find_all_by_text("Delete").len(), 1);
        assert_eq!(own.find_all_by_text("Edit").len(), 1);

        let other = &list.children[1];
        assert!(other.find_all_by_text("Delete").is_empty());
        assert!(other.find_all_by_text("Edit").is_empty());
    }

    #[test]
    fn test_editing_state_relabels_and_unlocks_text() {
        let mut ui = ReviewUiState::default();
        ui.editing.insert(1);
        let section = render_review_section(
            Some(9),
            &[review(1, "a@b.edu")],
            &ui,
            &context(Viewer::individual("a@b.edu")),
        );

        let text = &section.find_all_by_class("review-text")[0];
        assert_eq!(text.attribute("contenteditable"), Some("true"));
        assert_eq!(section.find_all_by_text("Done").len(), 1);
        assert!(section.find_all_by_text("Edit").is_empty());
    }

    #[test]
    fn test_missing_likes_label() {
        assert_eq!(like_label(None), "undefined Likes");
        assert_eq!(like_label(Some(0)), "0 Likes");
    }
}
