//! JSON report renderer.

use crate::error::{GovScoreError, ReportErrorKind, Result};
use crate::report::{Report, ReportFormat, ReportRenderer};

/// Renders reports as JSON, pretty-printed by default.
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing.
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, rep: &Report) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(rep)
        } else {
            serde_json::to_string(rep)
        };
        json.map_err(|e| {
            GovScoreError::report(
                "serializing assessment report",
                ReportErrorKind::JsonSerializationError(e.to_string()),
            )
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
