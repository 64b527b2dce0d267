use serde::{Deserialize, Serialize};

/// Role reported by `user-info`. Anything unrecognised is treated as no profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Individual,
    Organization,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub user_type: UserType,
    pub email: Option<String>,
}

impl UserProfile {
    pub fn has_profile(&self) -> bool {
        self.user_type != UserType::Unknown
    }

    pub fn viewer(&self) -> Viewer {
        Viewer {
            is_individual: self.user_type == UserType::Individual,
            email: self.email.clone(),
        }
    }
}

/// The slice of the profile that decides which controls get rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    pub is_individual: bool,
    pub email: Option<String>,
}

impl Viewer {
    pub fn individual(email: impl Into<String>) -> Self {
        Self {
            is_individual: true,
            email: Some(email.into()),
        }
    }

    pub fn organization(email: impl Into<String>) -> Self {
        Self {
            is_individual: false,
            email: Some(email.into()),
        }
    }

    /// Author controls follow plain equality, so two missing emails match.
    pub fn is_author_of(&self, author_email: Option<&str>) -> bool {
        self.email.as_deref() == author_email
    }
}
