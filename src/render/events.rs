use crate::action::Action;
use crate::models::{or_undefined, Event};
use crate::view::{create_element, Element};

use super::time::format_event_time;
use super::RenderContext;

pub const EVENT_LIST_ID: &str = "events";

/// Builds `ul#events` with one `li.event` per event, in the order given.
pub fn render_event_list(events: &[Event], ctx: &RenderContext) -> Element {
    let mut list = Element::new("ul").id(EVENT_LIST_ID);
    for (index, event) in events.iter().enumerate() {
        create_event_element(&mut list, index, event, ctx);
    }
    list
}

/// Appends one listing entry: title, time, location, organization and, for
/// individuals, a save button. Clicking the entry opens the detail modal.
pub fn create_event_element<'a>(
    list: &'a mut Element,
    index: usize,
    event: &Event,
    ctx: &RenderContext,
) -> &'a mut Element {
    let item = create_element(list, "li", "");
    item.add_class("event");
    item.on_click(Action::OpenEvent {
        index,
        event_id: event.datastore_id,
    });

    create_element(item, "p", or_undefined(event.event_title.as_deref()));
    create_element(
        item,
        "p",
        format_event_time(event.event_date_time.as_deref(), ctx.utc_offset),
    );
    // Latitude stands in for a location name until events carry one.
    create_element(item, "p", or_undefined(event.event_latitude));
    create_element(item, "p", or_undefined(event.organization_name.as_deref()));

    if ctx.viewer.is_individual {
        create_save_event_button(item, event);
    }
    item
}

fn create_save_event_button(item: &mut Element, event: &Event) {
    let button = create_element(item, "button", "Save Event");
    button.add_class("save-event");
    if let Some(event_id) = event.datastore_id {
        button.on_click(Action::SaveEvent { event_id });
    }
}
