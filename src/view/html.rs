use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::Element;

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

impl Element {
    /// Serialises the tree. Click actions are emitted as a JSON `data-action`
    /// attribute for the page script to post back.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, self);
        out
    }
}

fn write_element(out: &mut String, element: &Element) {
    let _ = write!(out, "<{}", element.tag);
    if let Some(id) = &element.id {
        let _ = write!(out, " id=\"{}\"", encode_double_quoted_attribute(id));
    }
    if !element.classes.is_empty() {
        let classes = element.classes.join(" ");
        let _ = write!(out, " class=\"{}\"", encode_double_quoted_attribute(&classes));
    }
    for (name, value) in &element.attributes {
        let _ = write!(out, " {}=\"{}\"", name, encode_double_quoted_attribute(value));
    }
    if let Some(action) = &element.on_click {
        if let Ok(json) = serde_json::to_string(action) {
            let _ = write!(
                out,
                " data-action=\"{}\"",
                encode_double_quoted_attribute(&json)
            );
        }
    }
    out.push('>');

    if VOID_TAGS.contains(&element.tag.as_str()) {
        return;
    }

    out.push_str(&encode_text(&element.text));
    for child in &element.children {
        write_element(out, child);
    }
    let _ = write!(out, "</{}>", element.tag);
}
