//! Catalog file loading.
//!
//! Catalogs can be defined in JSON or YAML files and loaded by explicit path;
//! the format is chosen by file extension. Every loaded catalog passes the
//! same construction validation as the built-in one before it is returned.

use std::path::Path;

use crate::error::{CatalogErrorKind, ErrorContext, GovScoreError, Result};

use super::types::Catalog;

/// Load a catalog from a JSON or YAML file.
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content =
        std::fs::read_to_string(path).map_err(|e| GovScoreError::io(path.to_path_buf(), e))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    let catalog = match extension.to_ascii_lowercase().as_str() {
        "json" => parse_json(&content),
        "yaml" | "yml" => parse_yaml(&content),
        other => Err(GovScoreError::catalog(
            path.display().to_string(),
            CatalogErrorKind::UnsupportedExtension {
                extension: other.to_string(),
            },
        )),
    };

    catalog.with_context(|| format!("loading {}", path.display()))
}

/// Parse a catalog from a JSON string and validate it.
pub fn catalog_from_json_str(content: &str) -> Result<Catalog> {
    parse_json(content)
}

/// Parse a catalog from a YAML string and validate it.
pub fn catalog_from_yaml_str(content: &str) -> Result<Catalog> {
    parse_yaml(content)
}

impl Catalog {
    /// Load a catalog from a JSON or YAML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        load_catalog_file(path)
    }
}

fn parse_json(content: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(content).map_err(|e| {
        GovScoreError::catalog("JSON catalog", CatalogErrorKind::InvalidJson(e.to_string()))
    })?;
    catalog.ensure_valid()
}

fn parse_yaml(content: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_yaml_ng::from_str(content).map_err(|e| {
        GovScoreError::catalog("YAML catalog", CatalogErrorKind::InvalidYaml(e.to_string()))
    })?;
    catalog.ensure_valid()
}

// ============================================================================
// Example Catalog Generation
// ============================================================================

/// Generate a commented starter catalog in YAML, showing every question kind.
#[must_use]
pub fn generate_example_catalog() -> String {
    r"# govscore catalog definition
# ===========================
#
# A catalog is a named set of weighted categories; category weights must
# sum to 1.0. Question ids must be unique across the whole file.
#
# Question kinds:
#   boolean - yes/no; yes scores 100, no scores 0. Mark `critical: true`
#             to count a 'no' as a critical compliance issue.
#   scale   - integer rating from 1 to `max`; scores value/max * 100.
#   select  - one of `options`; option order is the scoring rank
#             (first 100, second 75, third 50, anything later 0).
#   number  - non-negative measurement, lower is better;
#             scores 100 - value*10, floored at 0.

name: example-governance
categories:
  - id: data_handling
    name: Data Handling
    weight: 0.6
    questions:
      - id: encryption_at_rest
        text: Is stored data encrypted?
        type: boolean
        critical: true
      - id: retention_policy
        text: How mature is the data retention policy?
        type: scale
        max: 5
  - id: operations
    name: Operations
    weight: 0.4
    questions:
      - id: deployment_review
        text: Are deployments reviewed before release?
        type: select
        options:
          - Always
          - Usually
          - Sometimes
          - Never
      - id: incident_rate
        text: Monthly incident rate
        type: number
        unit: incidents
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID_YAML: &str = r"
name: test-catalog
categories:
  - id: privacy
    name: Privacy
    weight: 0.7
    questions:
      - id: encrypted
        text: Data encrypted?
        type: boolean
        critical: true
  - id: safety
    name: Safety
    weight: 0.3
    questions:
      - id: oversight
        text: Oversight level
        type: scale
        max: 5
";

    #[test]
    fn test_load_yaml_catalog() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.yaml");
        std::fs::write(&path, VALID_YAML).unwrap();

        let catalog = load_catalog_file(&path).unwrap();
        assert_eq!(catalog.name, "test-catalog");
        assert_eq!(catalog.question_count(), 2);
        assert_eq!(catalog.critical_question_count(), 1);
    }

    #[test]
    fn test_load_json_catalog() {
        let json = r#"{
            "name": "test-catalog",
            "categories": [
                {
                    "id": "privacy",
                    "name": "Privacy",
                    "weight": 1.0,
                    "questions": [
                        {"id": "encrypted", "text": "Data encrypted?", "type": "boolean"}
                    ]
                }
            ]
        }"#;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.json");
        std::fs::write(&path, json).unwrap();

        let catalog = load_catalog_file(&path).unwrap();
        assert_eq!(catalog.categories.len(), 1);
    }

    #[test]
    fn test_unsupported_extension() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.toml");
        std::fs::write(&path, "name = \"x\"").unwrap();

        let err = load_catalog_file(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid catalog"), "got: {err}");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_catalog_file(Path::new("/nonexistent/catalog.yaml")).unwrap_err();
        assert!(matches!(err, GovScoreError::Io { .. }));
    }

    #[test]
    fn test_invalid_weights_rejected_on_load() {
        let yaml = VALID_YAML.replace("weight: 0.3", "weight: 0.2");
        let err = catalog_from_yaml_str(&yaml).unwrap_err();
        assert!(
            err.to_string().contains("loading") || err.to_string().contains("Invalid catalog"),
            "got: {err}"
        );
        match err {
            GovScoreError::Catalog {
                source: CatalogErrorKind::Invalid { issues },
                ..
            } => {
                assert!(issues.iter().any(|i| i.field == "weights"));
            }
            other => panic!("expected validation failure, got {other}"),
        }
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let err = catalog_from_yaml_str("name: [unclosed").unwrap_err();
        assert!(matches!(
            err,
            GovScoreError::Catalog {
                source: CatalogErrorKind::InvalidYaml(_),
                ..
            }
        ));
    }

    #[test]
    fn test_example_catalog_parses_and_validates() {
        let catalog = catalog_from_yaml_str(&generate_example_catalog()).unwrap();
        assert_eq!(catalog.name, "example-governance");
        assert_eq!(catalog.question_count(), 4);
    }
}
