use crate::action::Action;
use crate::models::{or_undefined, Event, Review};
use crate::view::{create_element, set_inner_text, Element};

use super::reviews::{render_review_section, ReviewUiState, REVIEW_CONTAINER_ID};
use super::time::{format_event_time, render_timeago};
use super::RenderContext;

pub const MODAL_ID: &str = "modal";

/// What the open modal shows: the event captured when it was opened and the
/// review list currently displayed for it.
#[derive(Debug, Clone, Copy)]
pub struct DetailView<'a> {
    pub event: &'a Event,
    pub reviews: &'a [Review],
    pub ui: &'a ReviewUiState,
}

/// A click closes the modal only when it lands on the backdrop itself.
pub fn is_backdrop_click(target_id: Option<&str>) -> bool {
    target_id == Some(MODAL_ID)
}

pub fn render_modal(detail: Option<DetailView<'_>>, ctx: &RenderContext) -> Element {
    let mut modal = modal_skeleton();
    let Some(detail) = detail else {
        modal.set_display(false);
        return modal;
    };

    fill_details(&mut modal, detail.event, ctx);
    if let Some(container) = modal.find_by_id_mut(REVIEW_CONTAINER_ID) {
        *container =
            render_review_section(detail.event.datastore_id, detail.reviews, detail.ui, ctx);
    }
    // Keyed on the event as it was when the modal opened.
    if !detail.event.reviews.is_empty() {
        render_timeago(&mut modal, ctx.now, ctx.utc_offset);
    }
    modal.set_display(true);
    modal
}

fn modal_skeleton() -> Element {
    let mut modal = Element::new("div").id(MODAL_ID).class("modal");
    modal.on_click(Action::WindowClick {
        target: Some(MODAL_ID.to_string()),
    });

    let content = modal.append(Element::new("div").class("modal-content"));
    for id in [
        "eventTitle",
        "eventTime",
        "eventLocation",
        "eventOrganization",
        "eventDescription",
    ] {
        create_element(content, "p", "").id = Some(id.to_string());
    }
    content.append(Element::new("div").id(REVIEW_CONTAINER_ID));
    modal
}

/// Fills the fixed detail fields of the modal.
pub fn fill_details(modal: &mut Element, event: &Event, ctx: &RenderContext) {
    set_inner_text(modal, "eventTitle", or_undefined(event.event_title.as_deref()));
    set_inner_text(
        modal,
        "eventTime",
        format_event_time(event.event_date_time.as_deref(), ctx.utc_offset),
    );
    set_inner_text(modal, "eventLocation", or_undefined(event.event_latitude));
    set_inner_text(
        modal,
        "eventOrganization",
        or_undefined(event.organization_name.as_deref()),
    );
    set_inner_text(
        modal,
        "eventDescription",
        or_undefined(event.event_description.as_deref()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Viewer;
    use crate::render::reviews::REVIEW_LIST_ID;
    use crate::render::tests::context;

    fn fair() -> Event {
        Event {
            datastore_id: Some(5),
            event_title: Some("Fair".into()),
            event_date_time: Some("2021-05-01T10:00:00Z".into()),
            event_latitude: Some(40.3),
            organization_name: Some("Club".into()),
            event_description: Some("Rides".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_closed_modal_is_hidden() {
        let modal = render_modal(None, &context(Viewer::default()));
        assert!(!modal.is_displayed());
        assert_eq!(modal.find_by_id("eventTitle").unwrap().text, "");
    }

    #[test]
    fn test_open_modal_shows_details() {
        let event = fair();
        let ui = ReviewUiState::default();
        let modal = render_modal(
            Some(DetailView {
                event: &event,
                reviews: &event.reviews,
                ui: &ui,
            }),
            &context(Viewer::individual("a@b.edu")),
        );

        assert!(modal.is_displayed());
        assert_eq!(modal.find_by_id("eventTitle").unwrap().text, "Fair");
        assert_eq!(
            modal.find_by_id("eventTime").unwrap().text,
            "Sat May 01 2021 10:00"
        );
        assert_eq!(modal.find_by_id("eventLocation").unwrap().text, "40.3");
        assert_eq!(modal.find_by_id("eventOrganization").unwrap().text, "Club");
        assert_eq!(modal.find_by_id("eventDescription").unwrap().text, "Rides");

        // Zero reviews: only the heading and the submission control.
        assert!(modal
            .find_by_id(REVIEW_LIST_ID)
            .unwrap()
            .children
            .is_empty());
        assert_eq!(modal.find_all_by_class("review-submission").len(), 2);
    }

    fn reviewed_at_nine() -> Vec<Review> {
        vec![Review {
            datastore_id: Some(1),
            timestamp: Some("2021-05-01T09:00:00Z".into()),
            ..Default::default()
        }]
    }

    #[test]
    fn test_relative_times_rendered_when_reviews_exist() {
        let event = Event {
            reviews: reviewed_at_nine(),
            ..fair()
        };
        let ui = ReviewUiState::default();
        let modal = render_modal(
            Some(DetailView {
                event: &event,
                reviews: &event.reviews,
                ui: &ui,
            }),
            &context(Viewer::individual("a@b.edu")),
        );

        assert_eq!(modal.find_all_by_class("timeago")[0].text, "3 hours ago");
    }

    #[test]
    fn test_first_review_on_empty_event_keeps_blank_time() {
        let event = fair();
        let reviews = reviewed_at_nine();
        let ui = ReviewUiState::default();
        let modal = render_modal(
            Some(DetailView {
                event: &event,
                reviews: &reviews,
                ui: &ui,
            }),
            &context(Viewer::individual("a@b.edu")),
        );

        let times = modal.find_all_by_class("timeago");
        assert_eq!(times.len(), 1);
        assert_eq!(times[0].text, "");
    }

    #[test]
    fn test_backdrop_click() {
        assert!(is_backdrop_click(Some("modal")));
        assert!(!is_backdrop_click(Some("eventTitle")));
        assert!(!is_backdrop_click(None));
    }
}
