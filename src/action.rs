use serde::{Deserialize, Serialize};

/// A user interaction attached to a rendered element.
///
/// Elements carry their action as data; the host posts it back and the
/// controller applies it. Values typed by the user (review drafts, edited
/// text, select values) travel with the action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Action {
    /// Open the detail modal for a listed event. The id wins when present;
    /// `index` is the list position for events without one.
    OpenEvent {
        index: usize,
        #[serde(default)]
        event_id: Option<i64>,
    },
    /// A click anywhere on the page; closes the modal when it hits the backdrop.
    WindowClick { target: Option<String> },
    SaveEvent { event_id: i64 },
    SubmitReview { event_id: i64, text: String },
    DeleteReview { review_id: i64 },
    LikeReview { review_id: i64 },
    /// The Edit/Done button. `text` is the review text as currently shown.
    ToggleEdit { review_id: i64, text: String },
    ToggleFilters,
    ToggleFilter {
        element_id: String,
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_format() {
        let action: Action =
            serde_json::from_str(r#"{"type": "delete-review", "review_id": 42}"#).unwrap();
        assert_eq!(action, Action::DeleteReview { review_id: 42 });

        let json = serde_json::to_value(Action::OpenEvent {
            index: 2,
            event_id: Some(5),
        })
        .unwrap();
        assert_eq!(json["type"], "open-event");
        assert_eq!(json["index"], 2);
        assert_eq!(json["event_id"], 5);

        let action: Action = serde_json::from_str(r#"{"type": "open-event", "index": 1}"#).unwrap();
        assert_eq!(
            action,
            Action::OpenEvent {
                index: 1,
                event_id: None
            }
        );
    }
}
