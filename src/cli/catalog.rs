//! Catalog command handler.
//!
//! Implements the `catalog` subcommand: inspect the active question
//! catalog, print the catalog file schema, or emit a starter catalog.

use anyhow::Result;
use clap::ValueEnum;
use std::path::PathBuf;

use crate::catalog::{generate_example_catalog, generate_json_schema, Catalog, QuestionKind};
use crate::cli::{exit_codes, load_catalog};

/// Output format for the catalog listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CatalogOutput {
    /// Human-readable listing
    #[default]
    Text,
    /// The catalog as JSON
    Json,
}

/// Catalog command configuration
pub struct CatalogConfig {
    pub catalog_path: Option<PathBuf>,
    pub output: CatalogOutput,
    pub schema: bool,
    pub example: bool,
}

/// Run the catalog command, returning the desired exit code.
pub fn run_catalog(config: CatalogConfig) -> Result<i32> {
    if config.schema {
        println!("{}", generate_json_schema());
        return Ok(exit_codes::SUCCESS);
    }
    if config.example {
        print!("{}", generate_example_catalog());
        return Ok(exit_codes::SUCCESS);
    }

    let catalog = load_catalog(config.catalog_path.as_deref())?;
    match config.output {
        CatalogOutput::Text => println!("{}", format_catalog_text(&catalog)),
        CatalogOutput::Json => println!("{}", serde_json::to_string_pretty(&catalog)?),
    }

    Ok(exit_codes::SUCCESS)
}

/// Describe a question kind for the listing.
fn kind_summary(kind: &QuestionKind) -> String {
    match kind {
        QuestionKind::Boolean => "boolean".to_string(),
        QuestionKind::Scale { max } => format!("scale 1-{max}"),
        QuestionKind::Select { options } => format!("select: {}", options.join(" | ")),
        QuestionKind::Number { unit: Some(unit) } => format!("number ({unit})"),
        QuestionKind::Number { unit: None } => "number".to_string(),
    }
}

/// Format the catalog as a plain listing.
fn format_catalog_text(catalog: &Catalog) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} ({} categories, {} questions)",
        catalog.name,
        catalog.categories.len(),
        catalog.question_count()
    ));

    for category in &catalog.categories {
        lines.push(String::new());
        lines.push(format!(
            "{} [{}]  weight {:.2}",
            category.name,
            category.id,
            category.weight
        ));
        for question in &category.questions {
            let critical = if question.critical { ", critical" } else { "" };
            lines.push(format!(
                "  {} ({}{})",
                question.text,
                kind_summary(&question.kind),
                critical
            ));
        }
    }

    lines.join("\n")
}
