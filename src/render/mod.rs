//! Pure render functions: immutable input in, element tree out.

pub mod detail;
pub mod events;
pub mod filters;
pub mod form;
pub mod map;
pub mod reviews;
pub mod time;

use chrono::{DateTime, FixedOffset, Utc};

use crate::models::Viewer;
use crate::state::PageState;
use crate::view::Element;

pub use detail::{render_modal, DetailView};
pub use events::render_event_list;
pub use reviews::render_review_section;

pub const MAIN_ID: &str = "main";

/// Everything a render pass needs besides the data being rendered.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub viewer: Viewer,
    /// Offset event times are displayed in.
    pub utc_offset: FixedOffset,
    /// Reference point for relative review times.
    pub now: DateTime<Utc>,
}

/// The whole page: filter panel, main listing and the detail modal.
///
/// Without a profile the main section is hidden and left empty.
pub fn render_page(state: &PageState, ctx: &RenderContext) -> Element {
    let mut page = Element::new("div").id("page");
    page.append(state.filters.render());

    let main = page.append(Element::new("div").id(MAIN_ID));
    main.set_display(state.main_visible);
    if state.main_visible {
        main.append(render_event_list(&state.events, ctx));
    }

    let detail = state.modal.as_ref().map(|modal| DetailView {
        event: &modal.event,
        reviews: &modal.reviews,
        ui: &modal.ui,
    });
    page.append(render_modal(detail, ctx));
    page
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::Event;
    use crate::state::ModalState;
    use chrono::TimeZone;

    /// UTC display, clock fixed at 2021-05-01 12:00 UTC.
    pub fn context(viewer: Viewer) -> RenderContext {
        RenderContext {
            viewer,
            utc_offset: FixedOffset::east_opt(0).unwrap(),
            now: Utc.with_ymd_and_hms(2021, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_page_without_profile_hides_main() {
        let state = PageState::default();
        let page = render_page(&state, &context(Viewer::default()));

        let main = page.find_by_id(MAIN_ID).unwrap();
        assert!(!main.is_displayed());
        assert!(main.children.is_empty());
        assert!(!page.find_by_id(detail::MODAL_ID).unwrap().is_displayed());
    }

    #[test]
    fn test_page_with_open_modal() {
        let event = Event {
            event_title: Some("Fair".into()),
            ..Default::default()
        };
        let state = PageState {
            main_visible: true,
            events: vec![event.clone()],
            modal: Some(ModalState::open(event)),
            ..Default::default()
        };
        let page = render_page(&state, &context(Viewer::individual("a@b.edu")));

        assert_eq!(page.find_by_id(events::EVENT_LIST_ID).unwrap().children.len(), 1);
        let modal = page.find_by_id(detail::MODAL_ID).unwrap();
        assert!(modal.is_displayed());
        assert_eq!(modal.find_by_id("eventTitle").unwrap().text, "Fair");
    }
}
