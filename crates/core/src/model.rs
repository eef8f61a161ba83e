//! Catalog domain model
//!
//! Plain data types shared by the catalog store, the query engine and the
//! presentation adapter. Everything here is serde-serializable so the shell
//! can emit JSON and load fixture catalogs without extra mapping types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a [`ProjectCategory`].
///
/// Projects reference their category through this id; the catalog checks the
/// reference when it is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maturity stage of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Concept,
    Prototype,
    Mvp,
    Beta,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Concept,
        ProjectStatus::Prototype,
        ProjectStatus::Mvp,
        ProjectStatus::Beta,
    ];

    /// Wire token, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Concept => "concept",
            ProjectStatus::Prototype => "prototype",
            ProjectStatus::Mvp => "mvp",
            ProjectStatus::Beta => "beta",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Concept => "Concept",
            ProjectStatus::Prototype => "Prototype",
            ProjectStatus::Mvp => "MVP",
            ProjectStatus::Beta => "Beta",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid status: {0}. Valid statuses: concept, prototype, mvp, beta")]
pub struct ParseStatusError(pub String);

impl FromStr for ProjectStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCategory {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub title: String,
    pub location: String,
    /// Years of experience
    pub experience: u32,
    pub skills: Vec<String>,
    pub bio: String,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub category: CategoryId,
    /// Display order is insertion order
    pub tech_stack: Vec<String>,
    pub status: ProjectStatus,
    /// Whole dollars
    pub funding_goal: u64,
    /// Whole dollars, may exceed the goal
    pub current_funding: u64,
    pub created_at: DateTime<Utc>,
    pub developer: Developer,
    /// First entry is the primary image
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_known_tokens() {
        assert_eq!("concept".parse(), Ok(ProjectStatus::Concept));
        assert_eq!("prototype".parse(), Ok(ProjectStatus::Prototype));
        assert_eq!("mvp".parse(), Ok(ProjectStatus::Mvp));
        assert_eq!("beta".parse(), Ok(ProjectStatus::Beta));
    }

    #[test]
    fn test_status_parse_is_case_sensitive() {
        let err = "MVP".parse::<ProjectStatus>().unwrap_err();
        assert_eq!(err, ParseStatusError("MVP".to_string()));
        assert!(err.to_string().contains("Valid statuses"));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProjectStatus::Mvp.label(), "MVP");
        assert_eq!(ProjectStatus::Beta.to_string(), "beta");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ProjectStatus::Prototype).unwrap();
        assert_eq!(json, "\"prototype\"");
    }

    #[test]
    fn test_category_id_is_transparent() {
        let json = serde_json::to_string(&CategoryId::new("7")).unwrap();
        assert_eq!(json, "\"7\"");
    }

    #[test]
    fn test_contact_omits_missing_links() {
        let contact = Contact {
            email: "dev@example.com".to_string(),
            linkedin: None,
            github: Some("https://github.com/dev".to_string()),
            website: None,
        };

        let value = serde_json::to_value(&contact).unwrap();

        assert_eq!(value["email"], "dev@example.com");
        assert!(value.get("linkedin").is_none());
        assert!(value.get("github").is_some());
    }
}
