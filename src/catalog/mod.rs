//! Catalog module for govscore.
//!
//! This module provides the questionnaire definitions assessments run against:
//! - Type-safe catalog structures with weighted categories and typed questions
//! - Construction-time validation that reports every problem at once
//! - The built-in healthcare LLM governance catalog
//! - JSON/YAML catalog file loading
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use govscore::catalog::Catalog;
//!
//! // Use the built-in healthcare AI governance framework
//! let catalog = Catalog::builtin();
//!
//! // Load a custom catalog
//! let catalog = Catalog::from_path(Path::new("my-catalog.yaml"))?;
//!
//! // Build one programmatically
//! let catalog = Catalog::builder("my-framework")
//!     .category(Category::new("privacy", "Privacy", 1.0, questions))
//!     .build()?;
//! ```
//!
//! # Catalog File
//!
//! Catalog files hold a name and weighted categories:
//!
//! ```yaml
//! name: my-framework
//! categories:
//!   - id: privacy
//!     name: Privacy
//!     weight: 1.0
//!     questions:
//!       - id: encrypted
//!         text: Is data encrypted?
//!         type: boolean
//!         critical: true
//! ```

mod builtin;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use builtin::{healthcare_llm_governance, BUILTIN_CATALOG_NAME};
pub use types::{
    Catalog, CatalogBuilder, Category, CategoryId, Question, QuestionId, QuestionKind,
    WEIGHT_SUM_TOLERANCE,
};
pub use validation::{CatalogIssue, Validatable};

// Re-export file utilities
pub use file::{
    catalog_from_json_str, catalog_from_yaml_str, generate_example_catalog, load_catalog_file,
};

/// Generate a JSON Schema for the catalog file format.
///
/// The schema documents the structure `Catalog::from_path` accepts. It can be
/// used by editors for validation and autocompletion of catalog files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(Catalog);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}
