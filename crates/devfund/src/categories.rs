use crate::prelude::{eprintln, println, *};
use devfund_core::catalog::{Catalog, CategoryCount};

#[derive(Debug, clap::Args, Clone)]
pub struct CategoriesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: CategoriesOptions, catalog: &Catalog, global: &crate::Global) -> Result<()> {
    let categories = catalog.list_categories();

    if global.verbose {
        eprintln!("{} categories", categories.len());
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else {
        println!("\nAll Categories\n");
        categories_table(&categories).printstd();
        println!("\nTo browse a category: devfund projects --category \"<name>\"\n");
    }

    Ok(())
}

fn categories_table(categories: &[CategoryCount]) -> prettytable::Table {
    let mut table = crate::prelude::new_table();
    table.set_titles(prettytable::row!["ID", "Name", "Icon", "Projects"]);

    for entry in categories {
        table.add_row(prettytable::row![
            entry.category.id,
            entry.category.name,
            entry.category.icon,
            entry.count
        ]);
    }

    table
}
