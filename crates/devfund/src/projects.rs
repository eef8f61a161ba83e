use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use devfund_core::catalog::Catalog;
use devfund_core::model::ProjectStatus;
use devfund_core::present::{listing_page, ListingPage, ProjectCard};
use devfund_core::query::{QueryState, SortKey};

#[derive(Debug, clap::Args, Clone)]
pub struct ProjectsOptions {
    /// Search projects by name, technology, or category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show projects in this category (exact name)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only show projects with this status: concept, prototype, mvp, beta
    #[arg(long)]
    pub status: Option<ProjectStatus>,

    /// Sort order: newest, oldest, funding, goal
    #[arg(long, env = "DEVFUND_SORT", default_value = "newest")]
    pub sort: SortKey,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ProjectsOptions {
    pub fn query_state(&self) -> QueryState {
        QueryState {
            search_text: self.search.clone().unwrap_or_default(),
            category: self.category.clone(),
            status: self.status,
            sort: self.sort,
        }
    }
}

pub fn run(options: ProjectsOptions, catalog: &Catalog, global: &crate::Global) -> Result<()> {
    let state = options.query_state();

    if global.verbose {
        eprintln!("Query: {:?}", state);
    }

    let page = listing_page(catalog, &state);
    log::debug!(
        "{} of {} projects visible",
        page.projects.len(),
        page.total_projects
    );

    if options.json {
        println!("{}", format_listing_json(&page)?);
    } else {
        print!("{}", format_listing_text(&page));
    }

    Ok(())
}

fn format_listing_json(page: &ListingPage) -> Result<String> {
    serde_json::to_string_pretty(page).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// One project card as colored text, numbered from 1
pub fn format_card_text(card: &ProjectCard, number: usize) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{} {} {}\n",
        format!("[{number}]").yellow().bold(),
        card.title.white().bold(),
        format!("({})", card.status).bright_magenta()
    ));
    result.push_str(&format!(
        "    {}: {}\n",
        "Category".green(),
        card.category.bright_white()
    ));
    result.push_str(&format!("    {}\n", card.short_description));

    let mut tech = card.tech.shown.join(", ");
    if card.tech.overflow > 0 {
        tech.push_str(&format!(" +{}", card.tech.overflow));
    }
    result.push_str(&format!("    {}: {}\n", "Tech".green(), tech.cyan()));

    result.push_str(&format!(
        "    {}: {} of {} goal {} {}\n",
        "Funding".green(),
        card.current_funding.bright_yellow(),
        card.funding_goal,
        progress_bar(card.progress_width),
        format!("{}%", card.funding_percentage).bright_yellow()
    ));
    result.push_str(&format!(
        "    {}: {} | {}\n",
        "Developer".green(),
        card.developer_name.bright_white(),
        card.developer_title.bright_black()
    ));

    if let Some(url) = &card.demo_url {
        result.push_str(&format!("    {}: {}\n", "Demo".green(), url.cyan().underline()));
    }
    if let Some(url) = &card.github_url {
        result.push_str(&format!("    {}: {}\n", "Code".green(), url.cyan().underline()));
    }

    result.push_str(&format!(
        "    {}: {}\n",
        "Details".green(),
        format!("devfund project {}", card.id).cyan()
    ));

    result
}

/// Twenty-cell progress bar for a clamped percentage
fn progress_bar(width: u32) -> String {
    let filled = (width.min(100) / 5) as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

fn format_listing_text(page: &ListingPage) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", rule().bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "ALL PROJECTS ({} of {}, {})",
            page.projects.len(),
            page.total_projects,
            page.query.sort.label()
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", rule().bright_cyan()));

    let filters = describe_filters(&page.query);
    if !filters.is_empty() {
        result.push_str(&format!("{}: {}\n", "Filters".green(), filters));
    }

    if page.is_empty() {
        result.push_str(&format!("\n{}\n", "No projects found".yellow().bold()));
        result.push_str(&format!(
            "{}\n",
            "Try adjusting your search criteria or filters.".yellow()
        ));
    } else {
        for (idx, card) in page.projects.iter().enumerate() {
            result.push_str(&format_card_text(card, idx + 1));
        }
    }

    result.push_str(&format!("\n{}:\n", "To refine".bright_white().bold()));
    result.push_str(&format!(
        "  {}\n",
        "devfund projects --search <text> --category <name> --status <status>".cyan()
    ));
    result.push_str(&format!(
        "  {}\n",
        "devfund projects --sort <newest|oldest|funding|goal>".cyan()
    ));

    result.push('\n');
    result
}

fn describe_filters(state: &QueryState) -> String {
    let mut parts = Vec::new();

    let search = state.search_text.trim();
    if !search.is_empty() {
        parts.push(format!("search \"{search}\""));
    }
    if let Some(category) = state.category.as_deref().filter(|c| !c.is_empty()) {
        parts.push(format!("category {category}"));
    }
    if let Some(status) = state.status {
        parts.push(format!("status {}", status.label()));
    }

    parts.join(", ")
}
