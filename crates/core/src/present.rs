//! Presentation adapter
//!
//! Display-only values derived from projects: funding progress, money
//! labels, tech stack summaries, project cards and the two page views (home
//! and listing) the shell renders. Nothing here mutates the catalog.

use serde::Serialize;
use std::collections::HashSet;

use crate::catalog::{Catalog, CategoryCount};
use crate::model::Project;
use crate::query::{query, QueryState};

/// Number of tech stack entries shown on a card
pub const TECH_SUMMARY_LEN: usize = 3;

/// Number of categories shown on the home page
pub const HOME_CATEGORY_LIMIT: usize = 6;

/// `current_funding / funding_goal`, or `0.0` when the goal is zero
pub fn funding_ratio(project: &Project) -> f64 {
    if project.funding_goal == 0 {
        return 0.0;
    }
    project.current_funding as f64 / project.funding_goal as f64
}

/// Funding progress rounded to the nearest whole percent
///
/// Not clamped: an over-funded project reports more than 100.
pub fn funding_percentage(project: &Project) -> u32 {
    (funding_ratio(project) * 100.0).round() as u32
}

/// Funding progress clamped to `0..=100`, for progress bars
pub fn progress_width(project: &Project) -> u32 {
    funding_percentage(project).min(100)
}

/// Dollar amount in thousands, e.g. `$30K`
pub fn format_thousands(amount: u64) -> String {
    format!("${}K", (amount as f64 / 1000.0).round() as u64)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechSummary {
    pub shown: Vec<String>,
    /// Entries left out of `shown`
    pub overflow: usize,
}

pub fn tech_summary(tech_stack: &[String]) -> TechSummary {
    let shown: Vec<String> = tech_stack.iter().take(TECH_SUMMARY_LEN).cloned().collect();
    TechSummary {
        overflow: tech_stack.len() - shown.len(),
        shown,
    }
}

/// Everything a project card displays
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub status: String,
    pub category: String,
    pub short_description: String,
    pub tech: TechSummary,
    pub current_funding: String,
    pub funding_goal: String,
    pub funding_percentage: u32,
    pub progress_width: u32,
    pub developer_name: String,
    pub developer_title: String,
    pub image: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
}

pub fn project_card(project: &Project, catalog: &Catalog) -> ProjectCard {
    ProjectCard {
        id: project.id.clone(),
        title: project.title.clone(),
        status: project.status.label().to_string(),
        category: catalog.category_name(project).to_string(),
        short_description: project.short_description.clone(),
        tech: tech_summary(&project.tech_stack),
        current_funding: format_thousands(project.current_funding),
        funding_goal: format_thousands(project.funding_goal),
        funding_percentage: funding_percentage(project),
        progress_width: progress_width(project),
        developer_name: project.developer.name.clone(),
        developer_title: project.developer.title.clone(),
        image: project.images.first().cloned(),
        demo_url: project.demo_url.clone(),
        github_url: project.github_url.clone(),
    }
}

/// Headline numbers for the home page banner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub projects: usize,
    pub developers: usize,
    /// Sum of current funding over all projects, whole dollars, saturating
    pub total_funding: u64,
    /// Mean funding percentage, 0 for an empty catalog
    pub average_percentage: u32,
}

pub fn catalog_stats(catalog: &Catalog) -> CatalogStats {
    let projects = catalog.list_projects();
    let developers: HashSet<&str> = projects.iter().map(|p| p.developer.id.as_str()).collect();
    let total_funding = projects
        .iter()
        .fold(0u64, |acc, p| acc.saturating_add(p.current_funding));
    let average_percentage = if projects.is_empty() {
        0
    } else {
        let sum: u64 = projects.iter().map(|p| funding_percentage(p) as u64).sum();
        (sum as f64 / projects.len() as f64).round() as u32
    };

    CatalogStats {
        projects: projects.len(),
        developers: developers.len(),
        total_funding,
        average_percentage,
    }
}

/// Home page: banner stats, featured projects and popular categories
#[derive(Debug, Clone, Serialize)]
pub struct HomePage<'a> {
    pub stats: CatalogStats,
    pub featured: Vec<ProjectCard>,
    pub categories: Vec<CategoryCount<'a>>,
}

pub fn home_page(catalog: &Catalog) -> HomePage<'_> {
    let mut categories = catalog.list_categories();
    categories.truncate(HOME_CATEGORY_LIMIT);

    HomePage {
        stats: catalog_stats(catalog),
        featured: catalog
            .featured_projects()
            .into_iter()
            .map(|p| project_card(p, catalog))
            .collect(),
        categories,
    }
}

/// Listing page: the query that produced it and the visible cards
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub query: QueryState,
    /// Size of the unfiltered catalog
    pub total_projects: usize,
    pub projects: Vec<ProjectCard>,
}

impl ListingPage {
    /// Nothing matched the query
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

pub fn listing_page(catalog: &Catalog, state: &QueryState) -> ListingPage {
    ListingPage {
        query: state.clone(),
        total_projects: catalog.list_projects().len(),
        projects: query(catalog, state)
            .into_iter()
            .map(|p| project_card(p, catalog))
            .collect(),
    }
}
