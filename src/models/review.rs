use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub datastore_id: Option<i64>,
    pub individual_name: Option<String>,
    pub individual_email: Option<String>,
    pub text: Option<String>,
    pub timestamp: Option<String>,
    pub likes: Option<i64>,
}
