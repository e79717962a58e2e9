use chrono::{DateTime, Utc};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

use crate::core::{
    adjusted_sale_price, FeasibilityResult, IndirectCostKind, IndirectCostLine, Outlook,
    ProjectParameters,
};
use crate::formatting::{format_area, format_currency, format_pct, format_ratio};

/// Everything a writer needs to render one computation.
#[derive(Debug, Clone, Serialize)]
pub struct FeasibilityReport {
    pub project: String,
    pub generated_at: DateTime<Utc>,
    pub parameters: ProjectParameters,
    pub indirect_costs: Vec<IndirectCostLine>,
    pub result: FeasibilityResult,
    pub business_outlook: Outlook,
    pub margin_outlook: Outlook,
}

impl FeasibilityReport {
    pub fn new(
        project: impl Into<String>,
        parameters: ProjectParameters,
        indirect_costs: Vec<IndirectCostLine>,
        result: FeasibilityResult,
    ) -> Self {
        Self {
            project: project.into(),
            generated_at: Utc::now(),
            parameters,
            indirect_costs,
            business_outlook: Outlook::of(result.business_result),
            margin_outlook: Outlook::of(result.profit_margin_pct),
            result,
        }
    }

    /// Sale price after the scenario variation, for display next to the
    /// base price.
    pub fn adjusted_price(&self) -> f64 {
        adjusted_sale_price(
            self.parameters.avg_sale_price_per_sqm,
            self.parameters.price_variation_pct,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &FeasibilityReport) -> anyhow::Result<()>;
}

pub fn create_writer(format: OutputFormat, out: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &FeasibilityReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &FeasibilityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Feasibility Report: {}", report.project)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_project_summary(&mut self, report: &FeasibilityReport) -> anyhow::Result<()> {
        let params = &report.parameters;
        let result = &report.result;

        writeln!(self.writer, "## Project Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Land area | {} |", format_area(params.land_area))?;
        writeln!(
            self.writer,
            "| Utilization index | {} |",
            format_ratio(params.utilization_index)
        )?;
        writeln!(
            self.writer,
            "| Private/built ratio | {} |",
            format_ratio(params.private_to_built_ratio)
        )?;
        writeln!(
            self.writer,
            "| Private area | {} |",
            format_area(result.private_area)
        )?;
        writeln!(self.writer, "| Built area | {} |", format_area(result.built_area))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cost_summary(&mut self, report: &FeasibilityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Cost Summary")?;
        writeln!(self.writer)?;

        if !report.indirect_costs.is_empty() {
            writeln!(self.writer, "| Indirect cost | Basis | Amount |")?;
            writeln!(self.writer, "|---------------|-------|--------|")?;
            for line in &report.indirect_costs {
                writeln!(
                    self.writer,
                    "| {} | {} | {} |",
                    line.label,
                    basis_label(line),
                    format_currency(line.amount)
                )?;
            }
            writeln!(self.writer)?;
        }

        let result = &report.result;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Direct costs | {} |",
            format_currency(result.direct_cost_total)
        )?;
        writeln!(
            self.writer,
            "| Indirect costs | {} |",
            format_currency(result.indirect_cost_total)
        )?;
        writeln!(
            self.writer,
            "| Total cost | {} |",
            format_currency(result.total_cost)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_financial_summary(&mut self, report: &FeasibilityReport) -> anyhow::Result<()> {
        let result = &report.result;

        writeln!(self.writer, "## Financial Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value | Status |")?;
        writeln!(self.writer, "|--------|-------|--------|")?;
        writeln!(
            self.writer,
            "| Gross sales value (VGV) | {} | - |",
            format_currency(result.vgv)
        )?;
        writeln!(
            self.writer,
            "| Business result | {} | {} |",
            format_currency(result.business_result),
            outlook_label(report.business_outlook)
        )?;
        writeln!(
            self.writer,
            "| Profit margin | {} | {} |",
            format_pct(result.profit_margin_pct),
            outlook_label(report.margin_outlook)
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &FeasibilityReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_project_summary(report)?;
        self.write_cost_summary(report)?;
        self.write_financial_summary(report)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_line(&mut self, label: &str, value: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(self.writer, "{label:<26}{value}")?;
        Ok(())
    }

    fn write_section(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", title.bold())?;
        writeln!(self.writer, "{}", "───────────────────────────────────────────".dimmed())?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &FeasibilityReport) -> anyhow::Result<()> {
        let params = &report.parameters;
        let result = &report.result;

        writeln!(self.writer, "{}", "═══════════════════════════════════════════".cyan())?;
        writeln!(
            self.writer,
            "{}",
            format!("  FEASIBILITY: {}", report.project).bold().cyan()
        )?;
        writeln!(self.writer, "{}", "═══════════════════════════════════════════".cyan())?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;

        self.write_section("Project summary")?;
        self.write_line("Land area", format_area(params.land_area))?;
        self.write_line("Utilization index", format_ratio(params.utilization_index))?;
        self.write_line(
            "Private/built ratio",
            format_ratio(params.private_to_built_ratio),
        )?;
        self.write_line("Private area", format_area(result.private_area))?;
        self.write_line("Built area", format_area(result.built_area))?;

        self.write_section("Sales")?;
        self.write_line(
            "Base sale price",
            format!("{} /m²", format_currency(params.avg_sale_price_per_sqm)),
        )?;
        self.write_line("Price variation", format_pct(params.price_variation_pct))?;
        self.write_line(
            "Adjusted sale price",
            format!("{} /m²", format_currency(report.adjusted_price())),
        )?;

        self.write_section("Cost summary")?;
        if !report.indirect_costs.is_empty() {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Indirect cost", "Basis", "Amount"]);
            for line in &report.indirect_costs {
                table.add_row(vec![
                    Cell::new(&line.label),
                    Cell::new(basis_label(line)),
                    Cell::new(format_currency(line.amount)).set_alignment(CellAlignment::Right),
                ]);
            }
            writeln!(self.writer, "{table}")?;
        }
        self.write_line("Direct costs", format_currency(result.direct_cost_total))?;
        self.write_line("Indirect costs", format_currency(result.indirect_cost_total))?;
        self.write_line("Total cost", format_currency(result.total_cost))?;

        self.write_section("Financial summary")?;
        self.write_line("Gross sales value (VGV)", format_currency(result.vgv))?;
        self.write_line(
            "Business result",
            paint(
                format_currency(result.business_result),
                report.business_outlook,
            ),
        )?;
        self.write_line(
            "Profit margin",
            paint(format_pct(result.profit_margin_pct), report.margin_outlook),
        )?;
        Ok(())
    }
}

fn basis_label(line: &IndirectCostLine) -> String {
    match line.kind {
        IndirectCostKind::Percentage => format!("{:.2}% of VGV", line.value),
        IndirectCostKind::FlatAmount => "flat".to_string(),
    }
}

fn outlook_label(outlook: Outlook) -> &'static str {
    match outlook {
        Outlook::Positive => "✅ Positive",
        Outlook::Negative => "⚠️ Negative",
        Outlook::Neutral => "-",
    }
}

fn paint(text: String, outlook: Outlook) -> String {
    match outlook {
        Outlook::Positive => text.green().bold().to_string(),
        Outlook::Negative => text.red().bold().to_string(),
        Outlook::Neutral => text,
    }
}
