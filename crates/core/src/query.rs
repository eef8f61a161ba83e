//! Catalog query engine
//!
//! Derives the visible project subset from a [`QueryState`]: three
//! independent filters (text, category, status) followed by a stable sort.
//! Everything here is a pure function of the catalog and the state.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::model::{Project, ProjectStatus};
use crate::present::funding_ratio;

/// Ordering applied to the filtered projects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recently created first
    #[default]
    Newest,
    /// Least recently created first
    Oldest,
    /// Highest funding ratio first
    Funding,
    /// Largest funding goal first
    Goal,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::Funding,
        SortKey::Goal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Funding => "funding",
            SortKey::Goal => "goal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
            SortKey::Funding => "Funding Progress",
            SortKey::Goal => "Funding Goal",
        }
    }

    fn compare(&self, a: &Project, b: &Project) -> Ordering {
        match self {
            SortKey::Newest => b.created_at.cmp(&a.created_at),
            SortKey::Oldest => a.created_at.cmp(&b.created_at),
            SortKey::Funding => funding_ratio(b).total_cmp(&funding_ratio(a)),
            SortKey::Goal => b.funding_goal.cmp(&a.funding_goal),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid sort key: {0}. Valid keys: newest, oldest, funding, goal")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseSortKeyError(s.to_string()))
    }
}

/// Search text, selected category, selected status and sort key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    #[serde(default)]
    pub search_text: String,
    /// Category name; `None` or an empty name means all categories
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub sort: SortKey,
}

impl QueryState {
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.category = Some(name.into());
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Whether any filter is active (sorting alone does not count)
    pub fn is_filtered(&self) -> bool {
        !self.search_text.trim().is_empty()
            || self.selected_category().is_some()
            || self.status.is_some()
    }

    fn selected_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|name| !name.is_empty())
    }
}

/// Compute the visible projects for a query state
///
/// An empty result is a normal outcome (nothing matched), not an error.
pub fn query<'a>(catalog: &'a Catalog, state: &QueryState) -> Vec<&'a Project> {
    let term = state.search_text.to_lowercase();

    let category = match state.selected_category() {
        Some(name) => match catalog.category_by_name(name) {
            Some(category) => Some(&category.id),
            // A name that is not in the catalog matches nothing
            None => return Vec::new(),
        },
        None => None,
    };

    let mut visible: Vec<&Project> = catalog
        .list_projects()
        .iter()
        .filter(|p| state.status.map_or(true, |status| p.status == status))
        .filter(|p| category.map_or(true, |id| &p.category == id))
        .filter(|p| term.trim().is_empty() || matches_text(catalog, p, &term))
        .collect();

    sort_projects(&mut visible, state.sort);
    visible
}

/// Stable sort; ties keep their current relative order
pub fn sort_projects(projects: &mut [&Project], key: SortKey) {
    projects.sort_by(|a, b| key.compare(a, b));
}

/// `term` must already be lowercase
pub(crate) fn matches_text(catalog: &Catalog, project: &Project, term: &str) -> bool {
    project.title.to_lowercase().contains(term)
        || project.description.to_lowercase().contains(term)
        || catalog
            .category_name(project)
            .to_lowercase()
            .contains(term)
        || project
            .tech_stack
            .iter()
            .any(|tech| tech.to_lowercase().contains(term))
}
