use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use devfund_core::catalog::Catalog;
use devfund_core::present::{format_thousands, home_page, HomePage};

use crate::projects::format_card_text;

#[derive(Debug, clap::Args, Clone)]
pub struct HomeOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: HomeOptions, catalog: &Catalog, global: &crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Building home page...");
    }

    let page = home_page(catalog);

    if options.json {
        let json = serde_json::to_string_pretty(&page)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_home_text(&page));
    }

    Ok(())
}

fn format_home_text(page: &HomePage) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", rule().bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        "BUILD THE FUTURE WITH INNOVATIVE PROJECTS"
            .bright_cyan()
            .bold()
    ));
    result.push_str(&format!("{}\n", rule().bright_cyan()));
    result.push_str(&format!(
        "  {} {} | {} {} | {} {} | {} {}\n",
        page.stats.projects.to_string().bright_yellow().bold(),
        "Active Projects".bright_white(),
        page.stats.developers.to_string().bright_yellow().bold(),
        "Developers".bright_white(),
        format_thousands(page.stats.total_funding)
            .bright_yellow()
            .bold(),
        "Funded".bright_white(),
        format!("{}%", page.stats.average_percentage)
            .bright_yellow()
            .bold(),
        "Average Progress".bright_white()
    ));

    result.push_str(&format!("\n{}\n", "FEATURED PROJECTS".bright_white().bold()));
    if page.featured.is_empty() {
        result.push_str(&format!(
            "\n{}\n",
            "No project has passed 30% of its funding goal yet.".yellow()
        ));
    } else {
        for (idx, card) in page.featured.iter().enumerate() {
            result.push_str(&format_card_text(card, idx + 1));
        }
    }

    result.push_str(&format!("\n{}\n", "POPULAR CATEGORIES".bright_white().bold()));
    for entry in &page.categories {
        result.push_str(&format!(
            "  {} {}\n",
            entry.category.name.bright_white(),
            format!("({} projects)", entry.count).bright_black()
        ));
    }

    result.push_str(&format!("\n{}:\n", "Next steps".bright_white().bold()));
    result.push_str(&format!(
        "  {}: {}\n",
        "View all projects".green(),
        "devfund projects".cyan()
    ));
    result.push_str(&format!(
        "  {}: {}\n",
        "View all categories".green(),
        "devfund categories".cyan()
    ));

    result.push('\n');
    result
}
