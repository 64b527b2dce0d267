use std::collections::{BTreeMap, BTreeSet};

use crate::action::Action;
use crate::view::{create_element, Element};

pub const FILTER_BUTTON_ID: &str = "filterButton";
pub const ADDITIONAL_FILTERS_ID: &str = "additionalFilters";

/// Toggle buttons offered in the advanced filter panel.
pub const FILTER_BUTTONS: &[(&str, &str)] = &[
    ("foodAvailable", "Food Available"),
    ("requiredFee", "Required Fee"),
];

/// Drop-down filters: id, blank-option label and the choices offered.
pub const FILTER_SELECTS: &[(&str, &str, &[&str])] =
    &[("university", "Any University", &["Princeton", "Rutgers", "Columbia"])];

/// The search page's advanced filter panel. Selection is purely visual; the
/// listing request does not carry it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPanel {
    pub expanded: bool,
    pub selected: BTreeSet<String>,
    /// Current value of each drop-down filter with a non-empty choice.
    pub values: BTreeMap<String, String>,
}

impl FilterPanel {
    /// The MORE/LESS button.
    pub fn toggle_more(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Buttons flip their selection; selects (`value` present) are selected
    /// while their value is non-empty.
    pub fn toggle_border_selection(&mut self, element_id: &str, value: Option<&str>) {
        match value {
            None => {
                if !self.selected.remove(element_id) {
                    self.selected.insert(element_id.to_string());
                }
            }
            Some("") => {
                self.selected.remove(element_id);
                self.values.remove(element_id);
            }
            Some(value) => {
                self.selected.insert(element_id.to_string());
                self.values.insert(element_id.to_string(), value.to_string());
            }
        }
    }

    pub fn render(&self) -> Element {
        let mut panel = Element::new("div").class("filters");

        let label = if self.expanded { "LESS" } else { "MORE" };
        let toggle = create_element(&mut panel, "button", label);
        toggle.id = Some(FILTER_BUTTON_ID.to_string());
        toggle.on_click(Action::ToggleFilters);

        let additional = panel.append(Element::new("div").id(ADDITIONAL_FILTERS_ID));
        additional.set_display(self.expanded);
        for (id, label) in FILTER_BUTTONS {
            let button = create_element(additional, "button", *label);
            button.id = Some(id.to_string());
            if self.selected.contains(*id) {
                button.add_class("selected");
            }
            button.on_click(Action::ToggleFilter {
                element_id: id.to_string(),
                value: None,
            });
        }
        for (id, blank, choices) in FILTER_SELECTS {
            self.render_select(additional, id, blank, choices);
        }
        panel
    }

    /// The page script replaces the action's value with the chosen option.
    fn render_select(&self, parent: &mut Element, id: &str, blank: &str, choices: &[&str]) {
        let current = self.values.get(id).map(String::as_str).unwrap_or("");
        let select = parent.append(Element::new("select").id(id));
        if self.selected.contains(id) {
            select.add_class("selected");
        }
        select.on_click(Action::ToggleFilter {
            element_id: id.to_string(),
            value: Some(current.to_string()),
        });

        let option = create_element(select, "option", blank);
        option.set_attribute("value", "");
        for choice in choices {
            let option = create_element(select, "option", *choice);
            option.set_attribute("value", *choice);
            if *choice == current {
                option.set_attribute("selected", "selected");
            }
        }
    }
}
