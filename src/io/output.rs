use crate::core::{GoalStatus, PerformanceReport};
use crate::formatting::format_percent;
use colored::*;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &PerformanceReport) -> anyhow::Result<()>;
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
    fn write_report(&mut self, report: &PerformanceReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
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
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &PerformanceReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_months(report)?;
        self.write_quarters(report)?;
        self.write_years(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &PerformanceReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Performance Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_months(&mut self, report: &PerformanceReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Monthly Performance")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Axis ceiling: {}%", report.axis_max)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Month | Actual | Goal | % of Goal | Status |")?;
        writeln!(self.writer, "|-------|--------|------|-----------|--------|")?;
        for entry in &report.months {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                entry.record.label,
                entry.actual_label.as_deref().unwrap_or("N/A"),
                entry.tick[1],
                format_percent(entry.metric.percentage),
                status_label(entry.metric.status),
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_quarters(&mut self, report: &PerformanceReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Quarterly Goals")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Quarter | Actual | Goal | % of Goal | Progress |"
        )?;
        writeln!(
            self.writer,
            "|---------|--------|------|-----------|----------|"
        )?;
        for entry in &report.quarters {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                entry.period.label,
                entry.actual_label,
                entry.goal_label,
                format_percent(entry.metric.percentage),
                format_percent(i64::from(entry.progress)),
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_years(&mut self, report: &PerformanceReport) -> anyhow::Result<()> {
        if report.years.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Previous Years")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Year | Actual / Goal | Bar Extent |")?;
        writeln!(self.writer, "|------|---------------|------------|")?;
        for entry in &report.years {
            writeln!(
                self.writer,
                "| {} | {} | {:.1} |",
                entry.summary.year, entry.caption, entry.extent,
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &PerformanceReport) -> anyhow::Result<()> {
        print_header();
        print_months(report);
        print_quarters(report);
        print_years(report);
        Ok(())
    }
}

fn print_header() {
    println!("{}", "Performance Report".bold().blue());
    println!("{}", "==================".blue());
    println!();
}

fn print_months(report: &PerformanceReport) {
    println!(
        "{} Monthly performance (axis to {}%):",
        "📊".bold(),
        report.axis_max
    );
    for entry in &report.months {
        println!(
            "  {:<6} {:>12} of {:<12} {:>6} {}",
            entry.record.label,
            entry.actual_label.as_deref().unwrap_or("N/A"),
            entry.tick[1],
            format_percent(entry.metric.percentage),
            status_display(entry.metric.status),
        );
    }
    println!();
}

fn print_quarters(report: &PerformanceReport) {
    println!("{} Quarterly goals:", "🎯".bold());
    for entry in &report.quarters {
        let filled = usize::from(entry.progress / 10);
        let bar = format!("[{}{}]", "#".repeat(filled), "-".repeat(10 - filled));
        println!(
            "  {:<10} {} {:>6} {:>12} of {}",
            entry.period.label,
            bar,
            format_percent(entry.metric.percentage),
            entry.actual_label,
            entry.goal_label,
        );
    }
    println!();
}

fn print_years(report: &PerformanceReport) {
    if report.years.is_empty() {
        return;
    }
    println!("{} Previous years:", "📅".bold());
    for entry in &report.years {
        println!(
            "  {}  {}  (extent {:.1})",
            entry.summary.year, entry.caption, entry.extent
        );
    }
    println!();
}

fn status_label(status: GoalStatus) -> &'static str {
    match status {
        GoalStatus::Met => "Met",
        GoalStatus::Under => "Under",
        GoalStatus::NoData => "No data",
    }
}

fn status_display(status: GoalStatus) -> ColoredString {
    match status {
        GoalStatus::Met => "met".green(),
        GoalStatus::Under => "under".red(),
        GoalStatus::NoData => "no data".dimmed(),
    }
}

pub fn create_writer(
    output: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    Ok(match (format, output) {
        (OutputFormat::Json, Some(path)) => Box::new(JsonWriter::new(std::fs::File::create(path)?)),
        (OutputFormat::Json, None) => Box::new(JsonWriter::new(std::io::stdout())),
        (OutputFormat::Markdown, Some(path)) => {
            Box::new(MarkdownWriter::new(std::fs::File::create(path)?))
        }
        (OutputFormat::Markdown, None) => Box::new(MarkdownWriter::new(std::io::stdout())),
        // The terminal format always talks to the terminal.
        (OutputFormat::Terminal, _) => Box::new(TerminalWriter::new()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GaugeConfig;
    use crate::core::{PeriodRecord, PerformanceSnapshot, YearlySummary};
    use crate::report::build_report;

    fn sample_report() -> PerformanceReport {
        let snapshot = PerformanceSnapshot {
            months: vec![
                PeriodRecord::new("Jan", Some(400_000.0), 50_000.0),
                PeriodRecord::new("Feb", Some(60_000.0), 80_000.0),
                PeriodRecord::new("Mar", None, 100_000.0),
            ],
            years: vec![YearlySummary {
                year: 2024,
                actual_sum: 900_000.0,
                goal_sum: 1_100_000.0,
            }],
        };
        build_report(&snapshot, &GaugeConfig::default()).unwrap()
    }

    #[test]
    fn markdown_writer_emits_all_sections() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let rendered = String::from_utf8(buffer).unwrap();

        assert!(rendered.contains("# Performance Report"));
        assert!(rendered.contains("Axis ceiling: 800%"));
        assert!(rendered.contains("| Jan | $400,000 | $50,000 | 800% | Met |"));
        assert!(rendered.contains("| Mar | N/A | $100,000 | 2% | No data |"));
        assert!(rendered.contains("## Quarterly Goals"));
        assert!(rendered.contains("| 2024 | $900,000 / $1,100,000 |"));
    }

    #[test]
    fn json_writer_round_trips() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["axis_max"], 800);
        assert_eq!(value["months"].as_array().unwrap().len(), 3);
        assert_eq!(value["months"][0]["swatch"], "#57B77D");
        assert_eq!(value["months"][2]["metric"]["status"], "NoData");
    }
}
