//! Catalog store
//!
//! An immutable, validated collection of projects and categories. The
//! catalog is built once per session (generated or loaded) and then only
//! read. Category counts are not cached; they are computed from the current
//! project list every time they are asked for.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::{CategoryId, Project, ProjectCategory};
use crate::present::funding_ratio;
use crate::query::matches_text;

/// Funding ratio a project must exceed to be featured
pub const FEATURED_RATIO: f64 = 0.3;

/// Maximum number of featured projects
pub const FEATURED_LIMIT: usize = 3;

/// Error type for catalog construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate category id: {0}")]
    DuplicateCategoryId(String),

    #[error("Duplicate category name: {0}")]
    DuplicateCategoryName(String),

    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(String),

    #[error("Project {project} references unknown category {category}")]
    UnknownCategory { project: String, category: String },

    #[error("Invalid catalog document: {0}")]
    InvalidDocument(String),
}

/// A category with the number of projects currently carrying it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount<'a> {
    #[serde(flatten)]
    pub category: &'a ProjectCategory,
    pub count: usize,
}

/// Serialized form of a catalog, as read from and written to JSON files
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<ProjectCategory>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<ProjectCategory>,
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness and category references
    pub fn new(
        categories: Vec<ProjectCategory>,
        projects: Vec<Project>,
    ) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        for category in &categories {
            if !ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategoryId(category.id.to_string()));
            }
            if !names.insert(category.name.as_str()) {
                return Err(CatalogError::DuplicateCategoryName(
                    category.name.clone(),
                ));
            }
        }

        let mut project_ids = HashSet::new();
        for project in &projects {
            if !project_ids.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateProjectId(project.id.clone()));
            }
            if !ids.contains(project.category.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    project: project.id.clone(),
                    category: project.category.to_string(),
                });
            }
        }

        Ok(Self {
            categories,
            projects,
        })
    }

    /// All projects in insertion order
    pub fn list_projects(&self) -> &[Project] {
        &self.projects
    }

    /// All categories in insertion order, each with its live project count
    pub fn list_categories(&self) -> Vec<CategoryCount<'_>> {
        self.categories
            .iter()
            .map(|category| CategoryCount {
                category,
                count: self.count_in(&category.id),
            })
            .collect()
    }

    pub fn get_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Projects whose funding ratio exceeds [`FEATURED_RATIO`], capped at
    /// [`FEATURED_LIMIT`]. Fewer qualifying projects means a shorter list.
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| funding_ratio(p) > FEATURED_RATIO)
            .take(FEATURED_LIMIT)
            .collect()
    }

    /// Projects in the category with exactly this name
    pub fn projects_by_category(&self, name: &str) -> Vec<&Project> {
        match self.category_by_name(name) {
            Some(category) => self
                .projects
                .iter()
                .filter(|p| p.category == category.id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Case-insensitive text search over title, description, category name
    /// and tech stack. A blank term matches everything.
    pub fn search_projects(&self, text: &str) -> Vec<&Project> {
        let term = text.to_lowercase();
        self.projects
            .iter()
            .filter(|p| term.trim().is_empty() || matches_text(self, p, &term))
            .collect()
    }

    pub fn category(&self, id: &CategoryId) -> Option<&ProjectCategory> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn category_by_name(&self, name: &str) -> Option<&ProjectCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Name of the category a project belongs to
    pub fn category_name(&self, project: &Project) -> &str {
        // References are checked in `new`, so the lookup only misses for
        // projects that do not belong to this catalog.
        self.category(&project.category)
            .map(|c| c.name.as_str())
            .unwrap_or_default()
    }

    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            categories: self.categories.clone(),
            projects: self.projects.clone(),
        }
    }

    fn count_in(&self, id: &CategoryId) -> usize {
        self.projects.iter().filter(|p| &p.category == id).count()
    }
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(document: CatalogDocument) -> Result<Self, Self::Error> {
        Catalog::new(document.categories, document.projects)
    }
}

/// Parse and validate a JSON catalog document
pub fn parse_catalog_json(json: &str) -> Result<Catalog, CatalogError> {
    let document: CatalogDocument =
        serde_json::from_str(json).map_err(|e| CatalogError::InvalidDocument(e.to_string()))?;
    Catalog::try_from(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{category, project, sample_catalog};

    #[test]
    fn test_new_rejects_duplicate_category_id() {
        let result = Catalog::new(vec![category("1", "AI"), category("1", "Web")], vec![]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateCategoryId("1".to_string())
        );
    }

    #[test]
    fn test_new_rejects_duplicate_category_name() {
        let result = Catalog::new(vec![category("1", "AI"), category("2", "AI")], vec![]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateCategoryName("AI".to_string())
        );
    }

    #[test]
    fn test_new_rejects_duplicate_project_id() {
        let result = Catalog::new(
            vec![category("1", "AI")],
            vec![project("p1", "One", "1"), project("p1", "Two", "1")],
        );
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateProjectId("p1".to_string())
        );
    }

    #[test]
    fn test_new_rejects_unknown_category() {
        let result = Catalog::new(vec![category("1", "AI")], vec![project("p1", "One", "9")]);
        let err = result.unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownCategory {
                project: "p1".to_string(),
                category: "9".to_string(),
            }
        );
        assert!(err.to_string().contains("unknown category 9"));
    }

    #[test]
    fn test_list_projects_keeps_insertion_order() {
        let catalog = sample_catalog();
        let titles: Vec<&str> = catalog
            .list_projects()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["AI Bot", "Web App"]);
    }

    #[test]
    fn test_list_categories_counts_projects() {
        let catalog = Catalog::new(
            vec![category("1", "AI"), category("2", "Web"), category("3", "IoT")],
            vec![
                project("a", "A", "1"),
                project("b", "B", "2"),
                project("c", "C", "1"),
            ],
        )
        .unwrap();

        let counts: Vec<(&str, usize)> = catalog
            .list_categories()
            .iter()
            .map(|c| (c.category.name.as_str(), c.count))
            .collect();

        assert_eq!(counts, vec![("AI", 2), ("Web", 1), ("IoT", 0)]);
    }

    #[test]
    fn test_category_count_serializes_flat() {
        let catalog = sample_catalog();
        let value = serde_json::to_value(catalog.list_categories()).unwrap();

        assert_eq!(value[0]["name"], "AI");
        assert_eq!(value[0]["id"], "1");
        assert_eq!(value[0]["count"], 1);
    }

    #[test]
    fn test_get_project() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get_project("web-app").unwrap().title, "Web App");
        assert!(catalog.get_project("missing").is_none());
    }

    #[test]
    fn test_featured_requires_ratio_above_threshold() {
        let mut exactly = project("exact", "Exact", "1");
        exactly.current_funding = 30_000;
        exactly.funding_goal = 100_000;
        let mut above = project("above", "Above", "1");
        above.current_funding = 30_001;
        above.funding_goal = 100_000;

        let catalog = Catalog::new(vec![category("1", "AI")], vec![exactly, above]).unwrap();

        let featured: Vec<&str> = catalog
            .featured_projects()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(featured, vec!["above"]);
    }

    #[test]
    fn test_featured_truncates_to_first_three() {
        let projects = (0..5)
            .map(|i| {
                let mut p = project(&format!("p{i}"), &format!("P{i}"), "1");
                p.current_funding = 60_000;
                p.funding_goal = 100_000;
                p
            })
            .collect();
        let catalog = Catalog::new(vec![category("1", "AI")], projects).unwrap();

        let featured: Vec<&str> = catalog
            .featured_projects()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(featured, vec!["p0", "p1", "p2"]);
    }

    #[test]
    fn test_featured_skips_zero_goal() {
        let mut degenerate = project("zero", "Zero", "1");
        degenerate.current_funding = 10;
        degenerate.funding_goal = 0;
        let catalog = Catalog::new(vec![category("1", "AI")], vec![degenerate]).unwrap();

        assert!(catalog.featured_projects().is_empty());
    }

    #[test]
    fn test_projects_by_category() {
        let catalog = sample_catalog();

        let web = catalog.projects_by_category("Web");
        assert_eq!(web.len(), 1);
        assert_eq!(web[0].title, "Web App");

        assert!(catalog.projects_by_category("web").is_empty());
        assert!(catalog.projects_by_category("Unknown").is_empty());
    }

    #[test]
    fn test_search_projects_matches_category_name() {
        let catalog = sample_catalog();

        let found = catalog.search_projects("WEB");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "web-app");

        assert_eq!(catalog.search_projects("").len(), 2);
        assert_eq!(catalog.search_projects("  ").len(), 2);
    }

    #[test]
    fn test_search_projects_keeps_surrounding_spaces() {
        let catalog = sample_catalog();

        assert!(catalog.search_projects(" pytorch ").is_empty());
        assert!(catalog.search_projects(" web ").is_empty());
    }

    #[test]
    fn test_category_lookups() {
        let catalog = sample_catalog();
        let ai = catalog.category_by_name("AI").unwrap();

        assert_eq!(catalog.category(&ai.id).unwrap().name, "AI");
        assert_eq!(catalog.category_name(&catalog.list_projects()[0]), "AI");
        assert!(catalog.category(&CategoryId::new("42")).is_none());
    }

    #[test]
    fn test_parse_catalog_json_round_trip() {
        let catalog = sample_catalog();
        let json = serde_json::to_string(&catalog.to_document()).unwrap();

        let parsed = parse_catalog_json(&json).unwrap();

        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_parse_catalog_json_validates_references() {
        let mut document = sample_catalog().to_document();
        document.projects[0].category = CategoryId::new("missing");
        let json = serde_json::to_string(&document).unwrap();

        let result = parse_catalog_json(&json);

        assert!(matches!(
            result,
            Err(CatalogError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_parse_catalog_json_invalid_document() {
        let result = parse_catalog_json("{\"categories\": 3}");
        assert!(matches!(result, Err(CatalogError::InvalidDocument(_))));
    }
}
