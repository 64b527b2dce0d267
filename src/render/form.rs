use crate::models::Event;
use crate::view::Element;

pub const EVENT_FORM_ID: &str = "event-form";

/// The event id carried in a location hash such as `#123`.
pub fn event_id_from_hash(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    (!id.is_empty()).then_some(id)
}

/// The organization's event form. With an event, every input is pre-filled
/// for editing; without one the form is blank.
pub fn render_event_form(event: Option<&Event>) -> Element {
    let value = |f: fn(&Event) -> Option<String>| event.and_then(f).unwrap_or_default();

    let fields: [(&str, &str, String); 6] = [
        ("eventTitle", "text", value(|e| e.event_title.clone())),
        (
            "eventDateTime",
            "datetime-local",
            value(|e| e.event_date_time.clone()),
        ),
        (
            "eventLatitude",
            "number",
            value(|e| e.event_latitude.map(|v| v.to_string())),
        ),
        (
            "eventLongitude",
            "number",
            value(|e| e.event_longitude.map(|v| v.to_string())),
        ),
        (
            "eventDescription",
            "text",
            value(|e| e.event_description.clone()),
        ),
        (
            "event-id",
            "hidden",
            value(|e| e.datastore_id.map(|v| v.to_string())),
        ),
    ];

    let mut form = Element::new("form")
        .id(EVENT_FORM_ID)
        .attr("action", "save-event")
        .attr("method", "POST");
    for (name, kind, value) in fields {
        form.append(
            Element::new("input")
                .id(name)
                .attr("name", name)
                .attr("type", kind)
                .attr("value", value),
        );
    }
    form
}
