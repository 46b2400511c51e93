//! Terminal rendering of an analysis report

use crate::analysis::{AnalysisReport, YesNo};
use crate::core::constants::{output_formats, text};
use crate::core::error::Result;
use crate::core::types::Emotion;
use crate::ui::color::{Colors, colorize, label, supports_color};

/// Widest emotion bar in the text report
const BAR_WIDTH: usize = 30;
const BAR_CHAR: char = '█';

/// Print the report in the requested format
pub fn display_report(report: &AnalysisReport, output_format: &str) -> Result<()> {
    let rendered = match output_format {
        output_formats::JSON => format_json(report)?,
        output_formats::MINIMAL => format_minimal(report),
        _ => format_text(report),
    };
    println!("{rendered}");
    Ok(())
}

/// One JSON document describing every view
pub fn format_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Plain `key value` lines without colors
pub fn format_minimal(report: &AnalysisReport) -> String {
    let mut lines = vec![
        format!("records {}", report.records),
        format!("records_with_keyword {}", report.records_with_keyword),
    ];
    lines.extend(
        report
            .emotions
            .iter()
            .map(|c| format!("emotion.{} {}", c.emotion, c.count)),
    );
    lines.push(format!("polarity.positive {}", report.polarity.positive));
    lines.push(format!("polarity.negative {}", report.polarity.negative));
    lines.extend(
        report
            .negative_keywords
            .iter()
            .map(|k| format!("negative_keyword.{} {}", k.keyword, k.count)),
    );
    lines.push(format!("sample_rows {}", report.sample.len()));
    lines.push(format!(
        "conclusion {}",
        if report.conclusion.is_positive() {
            "positive"
        } else {
            "negative"
        }
    ));
    lines.join("\n")
}

/// Sectioned, colored report
pub fn format_text(report: &AnalysisReport) -> String {
    let mut out = Vec::new();

    out.push(colorize(text::PROJECT_NAME, Colors::BRIGHT_BLUE));
    out.push(format!(
        "{}: {} ({} with keyword)",
        label("Records"),
        report.records,
        report.records_with_keyword
    ));

    out.push(String::new());
    out.push(heading("Emotion distribution"));
    let max_count = report.emotions.iter().map(|c| c.count).max().unwrap_or(0);
    for count in &report.emotions {
        out.push(format!(
            "  {:<12} {:>7} {}",
            count.emotion.column(),
            count.count,
            colorize(&bar(count.count, max_count), Colors::GREEN)
        ));
    }

    out.push(String::new());
    out.push(heading("Polarity"));
    out.push(format!(
        "  {:<12} {:>7} ({:.1}%)",
        text::POSITIVE_LABEL,
        report.polarity.positive,
        report.polarity.positive_share()
    ));
    out.push(format!(
        "  {:<12} {:>7} ({:.1}%)",
        text::NEGATIVE_LABEL,
        report.polarity.negative,
        report.polarity.negative_share()
    ));

    out.push(String::new());
    out.push(heading("Top keywords in negative messages"));
    if report.negative_keywords.is_empty() {
        out.push(colorize("  (none)", Colors::DIM));
    }
    for (i, keyword) in report.negative_keywords.iter().enumerate() {
        out.push(format!("  {:>3}. {:<20} {}", i + 1, keyword.keyword, keyword.count));
    }

    out.push(String::new());
    out.push(heading(&format!("Sample ({} rows)", report.sample.len())));
    out.extend(sample_table(report));

    out.push(String::new());
    out.push(heading("Conclusion"));
    let color = if report.conclusion.is_positive() {
        Colors::BRIGHT_GREEN
    } else {
        Colors::BRIGHT_YELLOW
    };
    out.push(format!("  {}", colorize(report.conclusion.message(), color)));

    out.join("\n")
}

fn heading(title: &str) -> String {
    if supports_color() {
        format!("{}{}{}{}", Colors::BOLD, Colors::BRIGHT_WHITE, title, Colors::RESET)
    } else {
        title.to_string()
    }
}

fn bar(count: usize, max_count: usize) -> String {
    if max_count == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(max_count);
    BAR_CHAR.to_string().repeat(width)
}

fn sample_table(report: &AnalysisReport) -> Vec<String> {
    let keyword_width = report
        .sample
        .iter()
        .map(|row| row.predicted_keyword.chars().count())
        .chain(std::iter::once("predicted_keyword".len()))
        .max()
        .unwrap_or(0);

    let header = std::iter::once(format!("{:<keyword_width$}", "predicted_keyword"))
        .chain(Emotion::ALL.iter().map(|e| e.column().to_string()))
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![format!("  {header}")];
    for row in &report.sample {
        let cells = row
            .emotions
            .iter()
            .map(|(emotion, value)| {
                let padded = format!("{:<width$}", value.as_str(), width = emotion.column().len());
                match value {
                    YesNo::Yes => colorize(&padded, Colors::GREEN),
                    YesNo::No => colorize(&padded, Colors::RED),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!(
            "  {:<keyword_width$} {cells}",
            row.predicted_keyword
        ));
    }
    lines
}
