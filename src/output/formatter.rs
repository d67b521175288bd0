//! Output formatters for score reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{Priority, ScoreReport};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering score reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and an optional detailed mode
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable reports
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_priority_icon(&self, priority: &Priority) -> &'static str {
        match priority {
            Priority::High => "[!]",
            Priority::Medium => "[*]",
            Priority::Low => "[+]",
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME SCORE REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "Overall Score: {}/100 {}\n",
            report.breakdown.overall_score,
            self.format_score_badge(report.breakdown.overall_score)
        ));
        output.push_str(&format!(
            "Verdict: {}\n\n",
            self.colorize(&report.verdict, Color::Cyan)
        ));

        output.push_str(&self.format_header("Score Breakdown", 3));
        output.push_str(&format!(
            "Keyword match: {:.1}% ({} of {} job keywords)\n",
            report.breakdown.keyword_match_ratio * 100.0,
            report.keyword_analysis.matched.len(),
            report.keyword_analysis.total()
        ));
        output.push_str(&format!(
            "Structure bonus: +{} | Content bonus: +{}\n",
            report.breakdown.structure_bonus, report.breakdown.content_bonus
        ));

        if !report.keyword_analysis.missing.is_empty() {
            output.push_str(&self.format_header("Missing Keywords", 3));
            for keyword in &report.keyword_analysis.missing {
                output.push_str(&format!(
                    "  • {}\n",
                    self.colorize(keyword, Color::Yellow)
                ));
            }
        }

        if !report.suggestions.is_empty() {
            output.push_str(&self.format_header("Suggestions", 2));
            for (i, suggestion) in report.suggestions.iter().enumerate() {
                output.push_str(&format!(
                    "{}. {} {} {}\n",
                    i + 1,
                    self.format_priority_icon(&suggestion.priority),
                    self.colorize(&suggestion.title, Color::White),
                    self.colorize(&format!("({})", suggestion.section), Color::BrightBlack)
                ));
                if self.detailed {
                    output.push_str(&format!("   {}\n", suggestion.description));
                }
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Resume Stats", 2));
            output.push_str(&format!(
                "Words: {} | Experience entries: {} | Skills: {}\n",
                report.resume_stats.word_count,
                report.resume_stats.experience_entries,
                report.resume_stats.skill_count
            ));
            output.push_str(&format!(
                "Sections present: {}\n",
                report.resume_stats.sections_present.join(", ")
            ));
            if !report.keyword_analysis.matched.is_empty() {
                output.push_str(&format!(
                    "Matched keywords: {}\n",
                    report.keyword_analysis.matched.join(", ")
                ));
            }
        }

        output.push_str(&format!(
            "\nGenerated by resume-scorer v{}\n",
            report.metadata.scorer_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume Score Report\n\n");
        output.push_str(&format!(
            "Generated: {} | resume-scorer v{}\n\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.metadata.scorer_version
        ));

        output.push_str(&format!(
            "## Overall Score: {}/100\n\n**{}**\n\n",
            report.breakdown.overall_score, report.verdict
        ));

        output.push_str("## Breakdown\n\n");
        output.push_str("| Component | Value |\n|---|---|\n");
        output.push_str(&format!(
            "| Keyword match ratio | {:.1}% |\n",
            report.breakdown.keyword_match_ratio * 100.0
        ));
        output.push_str(&format!(
            "| Structure bonus | +{} |\n",
            report.breakdown.structure_bonus
        ));
        output.push_str(&format!(
            "| Content bonus | +{} |\n\n",
            report.breakdown.content_bonus
        ));

        if !report.keyword_analysis.matched.is_empty() {
            output.push_str(&format!(
                "**Matched keywords:** {}\n\n",
                report.keyword_analysis.matched.join(", ")
            ));
        }
        if !report.keyword_analysis.missing.is_empty() {
            output.push_str(&format!(
                "**Missing keywords:** {}\n\n",
                report.keyword_analysis.missing.join(", ")
            ));
        }

        if !report.suggestions.is_empty() {
            output.push_str("## Suggestions\n\n");
            for suggestion in &report.suggestions {
                output.push_str(&format!(
                    "- **{}** ({}): {}\n",
                    suggestion.title, suggestion.section, suggestion.description
                ));
            }
            output.push('\n');
        }

        output.push_str("## Resume Stats\n\n");
        output.push_str(&format!(
            "- Words: {}\n- Experience entries: {}\n- Skills: {}\n- Sections: {}\n",
            report.resume_stats.word_count,
            report.resume_stats.experience_entries,
            report.resume_stats.skill_count,
            report.resume_stats.sections_present.join(", ")
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Coordinates formatters and optional save-to-file
pub struct ReportGenerator {
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console: ConsoleFormatter::new(use_colors, detailed),
            json: JsonFormatter::new(true),
            markdown: MarkdownFormatter,
        }
    }

    pub fn format(&self, report: &ScoreReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console.format_report(report),
            OutputFormat::Json => self.json.format_report(report),
            OutputFormat::Markdown => self.markdown.format_report(report),
        }
    }

    pub fn save_to_file(
        &self,
        report: &ScoreReport,
        format: &OutputFormat,
        path: &Path,
    ) -> Result<()> {
        // No terminal escapes in files
        let content = match format {
            OutputFormat::Console => {
                ConsoleFormatter::new(false, self.console.detailed).format_report(report)?
            }
            OutputFormat::Json => self.json.format_report(report)?,
            OutputFormat::Markdown => self.markdown.format_report(report)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::resume::ResumeRecord;
    use crate::scoring::KeywordScorer;

    fn sample_report() -> ScoreReport {
        let resume = ResumeRecord {
            summary: "Rust engineer".to_string(),
            ..Default::default()
        };
        ScoreReport::build(
            &KeywordScorer::new().unwrap(),
            &resume,
            "rust kubernetes",
            &Config::default(),
            "resume.json".to_string(),
            "job.txt".to_string(),
            1,
        )
    }

    #[test]
    fn test_console_plain_output_has_no_escapes() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("RESUME SCORE REPORT"));
        assert!(output.contains("Missing Keywords"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_json_output_is_parseable() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["breakdown"]["overallScore"].is_u64());
    }

    #[test]
    fn test_markdown_output_has_breakdown_table() {
        let output = MarkdownFormatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("# Resume Score Report"));
        assert!(output.contains("| Structure bonus |"));
        assert!(output.contains("**Missing keywords:** kubernetes"));
    }
}
