use crate::prelude::{eprintln, *};
use devfund_core::catalog::Catalog;
use devfund_core::model::ProjectStatus;
use devfund_core::present::{home_page, listing_page};
use devfund_core::query::{QueryState, SortKey};
use serde::Deserialize;

use super::{text_result, JsonRpcError};

fn invalid_arguments(e: impl std::fmt::Display) -> JsonRpcError {
    JsonRpcError {
        code: -32602,
        message: format!("Invalid arguments: {e}"),
        data: None,
    }
}

pub fn handle_catalog_query(
    arguments: Option<serde_json::Value>,
    catalog: &Catalog,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CatalogQueryArgs {
        search: Option<String>,
        category: Option<String>,
        status: Option<ProjectStatus>,
        sort: Option<SortKey>,
    }

    // Every argument is optional, so a missing object means no filters
    let args: CatalogQueryArgs =
        serde_json::from_value(arguments.unwrap_or_else(|| serde_json::json!({})))
            .map_err(invalid_arguments)?;

    if global.verbose {
        eprintln!(
            "Calling catalog_query: search={:?}, category={:?}, status={:?}, sort={:?}",
            args.search, args.category, args.status, args.sort
        );
    }

    let state = QueryState {
        search_text: args.search.unwrap_or_default(),
        category: args.category,
        status: args.status,
        sort: args.sort.unwrap_or_default(),
    };

    text_result(&listing_page(catalog, &state))
}

pub fn handle_catalog_get(
    arguments: Option<serde_json::Value>,
    catalog: &Catalog,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CatalogGetArgs {
        id: String,
    }

    let args: CatalogGetArgs =
        serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
            .map_err(invalid_arguments)?;

    if global.verbose {
        eprintln!("Calling catalog_get: id={}", args.id);
    }

    let project = crate::project::project_data(catalog, &args.id).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Tool execution error: {e}"),
        data: None,
    })?;

    text_result(project)
}

pub fn handle_catalog_featured(
    catalog: &Catalog,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    if global.verbose {
        eprintln!("Calling catalog_featured");
    }

    text_result(&home_page(catalog))
}

pub fn handle_catalog_categories(
    catalog: &Catalog,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    if global.verbose {
        eprintln!("Calling catalog_categories");
    }

    text_result(&catalog.list_categories())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devfund_core::mock::{generate, MockOptions};
    use serde_json::json;

    fn catalog() -> Catalog {
        generate(&MockOptions::new(42, 12, chrono::Utc::now())).unwrap()
    }

    fn global() -> crate::Global {
        crate::Global {
            seed: 42,
            projects: 12,
            catalog: None,
            verbose: false,
        }
    }

    /// Unwraps the JSON document carried in the first text content block
    fn payload(result: serde_json::Value) -> serde_json::Value {
        let text = result["content"][0]["text"].as_str().unwrap();
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn test_catalog_query_defaults() {
        let catalog = catalog();

        let result = handle_catalog_query(None, &catalog, &global()).unwrap();
        let page = payload(result);

        assert_eq!(page["projects"].as_array().unwrap().len(), 12);
        assert_eq!(page["query"]["sort"], "newest");
    }

    #[test]
    fn test_catalog_query_no_match() {
        let catalog = catalog();
        let args = json!({ "search": "nonexistent-term-xyz" });

        let result = handle_catalog_query(Some(args), &catalog, &global()).unwrap();
        let page = payload(result);

        assert!(page["projects"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_catalog_query_invalid_status() {
        let catalog = catalog();
        let args = json!({ "status": "launched" });

        let err = handle_catalog_query(Some(args), &catalog, &global()).unwrap_err();

        assert_eq!(err.code, -32602);
        assert!(err.message.contains("Invalid arguments"));
    }

    #[test]
    fn test_catalog_get() {
        let catalog = catalog();
        let id = catalog.list_projects()[5].id.clone();

        let result = handle_catalog_get(Some(json!({ "id": id })), &catalog, &global()).unwrap();
        let project = payload(result);

        assert_eq!(project["id"], id);
        assert!(project["developer"]["name"].is_string());
    }

    #[test]
    fn test_catalog_get_not_found() {
        let catalog = catalog();

        let err = handle_catalog_get(Some(json!({ "id": "nope" })), &catalog, &global())
            .unwrap_err();

        assert_eq!(err.code, -32603);
        assert!(err.message.contains("Project not found: nope"));
    }

    #[test]
    fn test_catalog_get_missing_id() {
        let catalog = catalog();

        let err = handle_catalog_get(None, &catalog, &global()).unwrap_err();

        assert_eq!(err.code, -32602);
    }

    #[test]
    fn test_catalog_featured() {
        let catalog = catalog();

        let result = handle_catalog_featured(&catalog, &global()).unwrap();
        let home = payload(result);

        assert_eq!(home["stats"]["projects"], 12);
        assert!(home["featured"].as_array().unwrap().len() <= 3);
    }

    #[test]
    fn test_catalog_categories() {
        let catalog = catalog();

        let result = handle_catalog_categories(&catalog, &global()).unwrap();
        let categories = payload(result);

        assert_eq!(categories.as_array().unwrap().len(), 8);
        assert_eq!(categories[0]["name"], "AI & Machine Learning");
    }

    #[test]
    fn test_unknown_tool() {
        let catalog = catalog();
        let params = json!({ "name": "hn_list_items" });

        let err = super::super::handle_tools_call(Some(params), &catalog, &global()).unwrap_err();

        assert_eq!(err.code, -32602);
        assert!(err.message.contains("Unknown tool"));
    }
}
