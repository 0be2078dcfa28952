//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use colored::*;
use covenant_document::PdfInfo;
use covenant_domain::RiskLevel;
use covenant_extractor::{summary_report, to_csv, ExtractionResult, SystemStatus};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Render an extraction result in the selected format.
    pub fn format_result(&self, result: &ExtractionResult) -> Result<String> {
        match self.format {
            CliFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            CliFormat::Csv => Ok(to_csv(result)),
            CliFormat::Report => Ok(summary_report(result)),
            CliFormat::Table => Ok(self.format_result_table(result)),
        }
    }

    fn format_result_table(&self, result: &ExtractionResult) -> String {
        let mut out = String::new();

        let header = format!(
            "Extracted {} obligations via {} ({}, {} chars)",
            result.total_obligations,
            result.api_used.as_deref().unwrap_or("unknown"),
            result.parser_used.as_deref().unwrap_or("unknown"),
            result.contract_length.unwrap_or(0),
        );
        out.push_str(&self.success(&header));
        out.push('\n');

        if result.obligations.is_empty() {
            out.push_str(&self.colorize("No obligations found.", "yellow"));
            return out;
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Risk", "Responsible Party", "Due Date", "Summary"]);
        for (idx, o) in result.obligations.iter().enumerate() {
            builder.push_record([
                &(idx + 1).to_string(),
                &self.risk_label(o.risk_level),
                &o.responsible_party,
                &o.due_date,
                &o.summary,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        out.push_str(&table.to_string());

        if let Some(summary) = &result.risk_summary {
            out.push('\n');
            out.push_str(&format!(
                "Risk: {} high / {} medium / {} low",
                summary.risk_breakdown.high,
                summary.risk_breakdown.medium,
                summary.risk_breakdown.low,
            ));
        }

        out
    }

    /// Render the readiness report.
    pub fn format_status(&self, status: &SystemStatus) -> Result<String> {
        if self.format == CliFormat::Json {
            return Ok(serde_json::to_string_pretty(status)?);
        }

        let mark = |available: bool| {
            if available {
                self.colorize("available", "green")
            } else {
                self.colorize("not configured", "red")
            }
        };

        let mut out = String::new();
        out.push_str(&format!("OpenAI:          {}\n", mark(status.apis.primary_available)));
        out.push_str(&format!("Gemini:          {}\n", mark(status.apis.secondary_available)));
        out.push_str(&format!(
            "Document parser: {}\n",
            mark(status.document_parser_available)
        ));
        out.push_str(&if status.system_ready {
            self.success("System ready")
        } else {
            self.error("System not ready: set OPENAI_API_KEY or GEMINI_API_KEY")
        });
        Ok(out)
    }

    /// Render PDF inspection output.
    pub fn format_pdf_info(&self, info: &PdfInfo) -> Result<String> {
        if self.format == CliFormat::Json {
            return Ok(serde_json::to_string_pretty(info)?);
        }

        let mut out = String::new();
        out.push_str(&format!("Pages:     {}\n", info.page_count));
        out.push_str(&format!("File size: {} bytes\n", info.file_size));
        let field = |label: &str, value: &Option<String>| match value {
            Some(value) => format!("{} {}\n", label, value),
            None => String::new(),
        };
        out.push_str(&field("Title:    ", &info.metadata.title));
        out.push_str(&field("Author:   ", &info.metadata.author));
        out.push_str(&field("Subject:  ", &info.metadata.subject));
        out.push_str(&field("Creator:  ", &info.metadata.creator));
        out.push_str(&field("Producer: ", &info.metadata.producer));
        if !info.metadata.keywords.is_empty() {
            out.push_str(&format!("Keywords:  {}\n", info.metadata.keywords.join(", ")));
        }
        Ok(out)
    }

    fn risk_label(&self, level: RiskLevel) -> String {
        let color = match level {
            RiskLevel::High => "red",
            RiskLevel::Medium => "yellow",
            RiskLevel::Low => "green",
        };
        self.colorize(level.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
