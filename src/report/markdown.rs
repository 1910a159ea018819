//! Markdown report renderer.

use crate::error::Result;
use crate::report::{Report, ReportFormat, ReportRenderer};

/// Escape characters that would break Markdown table cells.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Renders reports as a Markdown document.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for MarkdownRenderer {
    fn render(&self, rep: &Report) -> Result<String> {
        let mut lines = Vec::new();

        lines.push("# Governance Assessment Report".to_string());
        lines.push(String::new());
        lines.push(format!("**Catalog:** {}", escape_cell(&rep.catalog_name)));
        lines.push(format!(
            "**Generated:** {}",
            rep.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        lines.push(format!(
            "**Tool:** {} {} (engine {})",
            rep.tool.name, rep.tool.version, rep.engine_version
        ));
        lines.push(String::new());

        lines.push("## Result".to_string());
        lines.push(String::new());
        lines.push(format!(
            "- **Score:** {} / 100 ({:.2} unrounded)",
            rep.display_score, rep.final_score
        ));
        lines.push(format!("- **Risk level:** {}", rep.risk_level.label()));
        lines.push(format!("- **Critical issues:** {}", rep.critical_issues));
        lines.push(format!(
            "- **Progress:** {} of {} questions answered",
            rep.answered, rep.total_questions
        ));
        lines.push(String::new());

        if !rep.categories.is_empty() {
            lines.push("## Categories".to_string());
            lines.push(String::new());
            lines.push("| Category | Weight | Score | Answered |".to_string());
            lines.push("| --- | --- | --- | --- |".to_string());
            for category in &rep.categories {
                lines.push(format!(
                    "| {} | {:.0}% | {:.1}% | {}/{} |",
                    escape_cell(&category.name),
                    category.weight * 100.0,
                    category.percent,
                    category.answered,
                    category.question_count
                ));
            }
            lines.push(String::new());
        }

        if !rep.answers.is_empty() {
            lines.push("## Answers".to_string());
            // Records arrive in catalog order, so consecutive runs of the
            // same category form one section.
            let mut current_category: Option<&str> = None;
            for record in &rep.answers {
                if current_category != Some(record.category.as_str()) {
                    current_category = Some(record.category.as_str());
                    lines.push(String::new());
                    lines.push(format!("### {}", escape_cell(&record.category_name)));
                    lines.push(String::new());
                    lines.push("| Question | Answer |".to_string());
                    lines.push("| --- | --- |".to_string());
                }
                let marker = if record.critical { " *(critical)*" } else { "" };
                lines.push(format!(
                    "| {}{} | {} |",
                    escape_cell(&record.text),
                    marker,
                    escape_cell(&record.value.to_string())
                ));
            }
            lines.push(String::new());
        }

        lines.push("## Recommendations".to_string());
        lines.push(String::new());
        if rep.recommendations.is_empty() {
            lines.push("No recommendations. All checks within acceptable bounds.".to_string());
        } else {
            for rec in &rep.recommendations {
                lines.push(format!(
                    "- **{}**: {}",
                    rec.priority.label(),
                    escape_cell(&rec.text)
                ));
            }
        }
        lines.push(String::new());

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
