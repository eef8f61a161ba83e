use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use devfund_core::catalog::Catalog;
use devfund_core::model::Project;
use devfund_core::present::{format_thousands, funding_percentage};

#[derive(Debug, clap::Args, Clone)]
pub struct ProjectOptions {
    /// Project id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: ProjectOptions, catalog: &Catalog, global: &crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Looking up project {}...", options.id);
    }

    let project = project_data(catalog, &options.id)?;

    if options.json {
        let json = serde_json::to_string_pretty(project)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_project_text(project, catalog));
    }

    Ok(())
}

/// Looks up a project, turning a miss into a user-facing error
pub fn project_data<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Project> {
    let id = id.trim();
    let project = catalog
        .get_project(id)
        .ok_or_else(|| Error::ProjectNotFound(id.to_string()))?;
    Ok(project)
}

fn format_project_text(project: &Project, catalog: &Catalog) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", rule().bright_cyan()));
    result.push_str(&format!("{}\n", project.title.bright_cyan().bold()));
    result.push_str(&format!("{}\n", rule().bright_cyan()));

    result.push_str(&format!(
        "{}: {} | {}: {} | {}: {}\n",
        "Status".green(),
        project.status.label().bright_magenta(),
        "Category".green(),
        catalog.category_name(project).bright_white(),
        "Created".green(),
        project
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    ));
    result.push_str(&format!(
        "{}: {} of {} ({}%)\n",
        "Funding".green(),
        format_thousands(project.current_funding).bright_yellow(),
        format_thousands(project.funding_goal),
        funding_percentage(project)
    ));

    result.push_str(&format!(
        "{}: {}\n",
        "Tech".green(),
        project.tech_stack.join(", ").cyan()
    ));
    if !project.tags.is_empty() {
        result.push_str(&format!(
            "{}: {}\n",
            "Tags".green(),
            project.tags.join(", ")
        ));
    }

    result.push_str(&format!("\n{}\n", project.short_description.white().bold()));
    result.push_str(&format!("\n{}\n", project.description));

    let developer = &project.developer;
    result.push_str(&format!("\n{}\n", "DEVELOPER".bright_yellow().bold()));
    result.push_str(&format!(
        "  {} ({}, {} years)\n",
        developer.name.bright_white().bold(),
        developer.title,
        developer.experience
    ));
    result.push_str(&format!("  {}: {}\n", "Location".green(), developer.location));
    result.push_str(&format!(
        "  {}: {}\n",
        "Skills".green(),
        developer.skills.join(", ")
    ));
    result.push_str(&format!(
        "  {}: {}\n",
        "Email".green(),
        developer.contact.email.cyan()
    ));
    for (label, link) in [
        ("LinkedIn", &developer.contact.linkedin),
        ("GitHub", &developer.contact.github),
        ("Website", &developer.contact.website),
    ] {
        if let Some(url) = link {
            result.push_str(&format!("  {}: {}\n", label.green(), url.cyan().underline()));
        }
    }

    result.push_str(&format!("\n{}\n", "LINKS".bright_yellow().bold()));
    for (label, link) in [("Demo", &project.demo_url), ("Code", &project.github_url)] {
        if let Some(url) = link {
            result.push_str(&format!("  {}: {}\n", label.green(), url.cyan().underline()));
        }
    }
    for image in &project.images {
        result.push_str(&format!("  {}: {}\n", "Image".green(), image.bright_black()));
    }

    result.push('\n');
    result
}
