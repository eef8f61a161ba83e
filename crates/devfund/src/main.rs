use crate::prelude::*;
use clap::Parser;

mod categories;
mod error;
mod home;
mod mcp;
mod prelude;
mod project;
mod projects;
mod source;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse a catalog of developer projects seeking investment"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Seed for the generated catalog
    #[clap(long, env = "DEVFUND_SEED", global = true, default_value = "42")]
    seed: u64,

    /// Number of projects to generate
    #[clap(long, env = "DEVFUND_PROJECTS", global = true, default_value = "12")]
    projects: usize,

    /// Load the catalog from a JSON file instead of generating it
    #[clap(long, env = "DEVFUND_CATALOG", global = true)]
    catalog: Option<std::path::PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "DEVFUND_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Featured projects, catalog stats and popular categories
    Home(crate::home::HomeOptions),

    /// Search, filter and sort all projects
    Projects(crate::projects::ProjectsOptions),

    /// Show a single project
    Project(crate::project::ProjectOptions),

    /// List categories with their project counts
    Categories(crate::categories::CategoriesOptions),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    let catalog = crate::source::load_catalog(&app.global)?;

    match app.command {
        SubCommands::Home(options) => crate::home::run(options, &catalog, &app.global),
        SubCommands::Projects(options) => crate::projects::run(options, &catalog, &app.global),
        SubCommands::Project(options) => crate::project::run(options, &catalog, &app.global),
        SubCommands::Categories(options) => {
            crate::categories::run(options, &catalog, &app.global)
        }
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, &catalog, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
