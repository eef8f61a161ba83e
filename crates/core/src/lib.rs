//! Core library for devfund
//!
//! This crate implements the **Functional Core** of the devfund project
//! catalog, following the Functional Core - Imperative Shell architectural
//! pattern.
//!
//! # Architecture Overview
//!
//! The devfund project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`devfund_core`** (this crate): The catalog and everything derived from it, zero I/O
//! - **`devfund`**: Argument parsing, file loading, terminal output and the MCP server
//!   (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Even the mock generator is driven by an explicit seed and clock
//! - **Testable**: Can be tested with simple fixture catalogs, no mocking required
//!
//! # Module Organization
//!
//! - [`model`]: Projects, developers, categories and statuses
//! - [`catalog`]: The validated, read-only catalog store
//! - [`query`]: Search, category and status filters plus the four sort orders
//! - [`present`]: Funding progress, money labels, project cards and banner stats
//! - [`mock`]: Seeded generator for the session catalog
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use devfund_core::mock::{generate, MockOptions};
//! use devfund_core::query::{query, QueryState, SortKey};
//!
//! let catalog = generate(&MockOptions::new(42, 12, chrono::Utc::now()))?;
//!
//! let state = QueryState::default()
//!     .with_search("react")
//!     .with_sort(SortKey::Funding);
//!
//! for project in query(&catalog, &state) {
//!     println!("{}", project.title);
//! }
//! ```

pub mod catalog;
pub mod mock;
pub mod model;
pub mod present;
pub mod query;

#[cfg(test)]
mod fixtures;
