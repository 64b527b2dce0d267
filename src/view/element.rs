use crate::action::Action;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Kept in insertion order so serialised output is stable.
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Element>,
    pub on_click: Option<Action>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(tag)
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_display(&mut self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        self.set_attribute("style", format!("display: {display}"));
    }

    pub fn is_displayed(&self) -> bool {
        self.attribute("style") != Some("display: none")
    }

    pub fn on_click(&mut self, action: Action) {
        self.on_click = Some(action);
    }

    pub fn append(&mut self, child: Element) -> &mut Element {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    /// Depth-first, pre-order walk over this element and all descendants.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants());
        }
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.descendants()
            .into_iter()
            .find(|e| e.id.as_deref() == Some(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_id_mut(id))
    }

    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.tag == tag)
            .collect()
    }

    /// Elements whose own text is exactly `text`.
    pub fn find_all_by_text(&self, text: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.text == text)
            .collect()
    }

    pub fn for_each_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(self);
        for child in &mut self.children {
            child.for_each_mut(f);
        }
    }
}

/// Creates an element with the given inner text, appends it to `parent` and
/// returns the appended element.
pub fn create_element<'a>(
    parent: &'a mut Element,
    tag: &str,
    inner_text: impl Into<String>,
) -> &'a mut Element {
    parent.append(Element::with_text(tag, inner_text))
}

/// Replaces the contents of the element with the given id by `inner_text`.
///
/// Like assigning `innerText`, this drops any existing children.
pub fn set_inner_text<'a>(
    root: &'a mut Element,
    id: &str,
    inner_text: impl Into<String>,
) -> Option<&'a mut Element> {
    let element = root.find_by_id_mut(id)?;
    element.text = inner_text.into();
    element.children.clear();
    Some(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element_appends_and_returns_child() {
        let mut list = Element::new("ul");
        let item = create_element(&mut list, "li", "first");
        item.add_class("event");
        create_element(&mut list, "li", "second");

        assert_eq!(list.children.len(), 2);
        assert_eq!(list.children[0].text, "first");
        assert!(list.children[0].has_class("event"));
        assert_eq!(list.children[1].tag, "li");
    }

    #[test]
    fn test_set_inner_text_clears_children() {
        let mut root = Element::new("div");
        let events = root.append(Element::new("ul").id("events"));
        create_element(events, "li", "stale");

        let cleared = set_inner_text(&mut root, "events", "").unwrap();
        assert!(cleared.children.is_empty());
        assert!(set_inner_text(&mut root, "missing", "x").is_none());
    }

    #[test]
    fn test_queries() {
        let mut root = Element::new("div");
        let review = root.append(Element::new("div").class("review"));
        create_element(review, "time", "").add_class("timeago");
        create_element(review, "button", "Delete");
        root.append(Element::new("p").id("eventTitle"));

        assert_eq!(root.find_all_by_class("timeago").len(), 1);
        assert_eq!(root.find_all_by_tag("button").len(), 1);
        assert_eq!(root.find_all_by_text("Delete").len(), 1);
        assert!(root.find_by_id("eventTitle").is_some());
    }

    #[test]
    fn test_attributes_and_display() {
        let mut modal = Element::new("div").id("modal");
        assert!(modal.is_displayed());
        modal.set_display(false);
        assert!(!modal.is_displayed());
        modal.set_display(true);
        assert_eq!(modal.attribute("style"), Some("display: block"));
        assert_eq!(modal.attributes.len(), 1);
    }
}
