//! Colored terminal report renderer.

use crate::error::Result;
use crate::report::{Report, ReportFormat, ReportRenderer};
use crate::scoring::{RecommendationKind, RiskLevel};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Terminal color for a risk level.
const fn risk_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "green",
        RiskLevel::Medium => "yellow",
        RiskLevel::High => "red",
    }
}

/// Terminal color for a recommendation kind.
const fn kind_color(kind: RecommendationKind) -> &'static str {
    match kind {
        RecommendationKind::Error => "red",
        RecommendationKind::Warning => "yellow",
        RecommendationKind::Info => "cyan",
    }
}

/// Renders reports as a compact colored terminal summary.
pub struct TextRenderer {
    /// Use colored output
    colored: bool,
    /// Include the per-category score section
    show_categories: bool,
}

impl TextRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colored: true,
            show_categories: false,
        }
    }

    /// Disable colored output.
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    /// Include per-category scores in the summary.
    #[must_use]
    pub const fn with_categories(mut self) -> Self {
        self.show_categories = true;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, rep: &Report) -> Result<String> {
        let mut lines = Vec::new();

        lines.push(self.color("Governance Assessment", "bold"));
        lines.push(self.color("─".repeat(44).as_str(), "dim"));

        lines.push(format!(
            "{}   {}",
            self.color("Catalog:", "cyan"),
            rep.catalog_name
        ));
        lines.push(format!(
            "{}  {} of {} questions answered",
            self.color("Progress:", "cyan"),
            rep.answered,
            rep.total_questions
        ));

        lines.push(String::new());

        let level_color = risk_color(rep.risk_level);
        lines.push(format!(
            "{}     {}  {}",
            self.color("Score:", "cyan"),
            self.color(&format!("{} / 100", rep.display_score), level_color),
            self.color(rep.risk_level.label(), level_color)
        ));

        if rep.critical_issues > 0 {
            lines.push(format!(
                "{}  {}",
                self.color("Critical:", "cyan"),
                self.color(
                    &format!(
                        "{} critical {}",
                        rep.critical_issues,
                        if rep.critical_issues == 1 {
                            "issue"
                        } else {
                            "issues"
                        }
                    ),
                    "red"
                )
            ));
        }

        if self.show_categories && !rep.categories.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Category Scores:", "bold"));
            for category in &rep.categories {
                let percent_color = risk_color(RiskLevel::from_score(category.percent));
                lines.push(format!(
                    "  {:<36} {}  ({}/{} answered)",
                    category.name,
                    self.color(&format!("{:>5.1}%", category.percent), percent_color),
                    category.answered,
                    category.question_count
                ));
            }
        }

        if !rep.recommendations.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Recommendations:", "bold"));
            for rec in &rep.recommendations {
                lines.push(format!(
                    "  {} {}",
                    self.color(
                        &format!("[{}]", rec.priority.label()),
                        kind_color(rec.kind)
                    ),
                    rec.text
                ));
            }
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}
