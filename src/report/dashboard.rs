//! Self-contained HTML dashboard.
//!
//! One page with metric cards, the stage list and a footer. Every value taken
//! from the log is HTML-escaped before it is substituted.

use super::types::coverage_rating;
use crate::types::{BuildStatus, ReportData, StageStatus};

const STYLE: &str = r#"        * { margin: 0; padding: 0; box-sizing: border-box; }
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background: #f5f7fa; }
        .container { max-width: 1200px; margin: 0 auto; padding: 20px; }
        .header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; border-radius: 10px; margin-bottom: 30px; text-align: center; }
        .header h1 { font-size: 2.5rem; margin-bottom: 10px; }
        .header p { font-size: 1.2rem; opacity: 0.9; }
        .metrics-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 20px; margin-bottom: 30px; }
        .metric-card { background: white; padding: 25px; border-radius: 10px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); border-left: 5px solid; }
        .metric-card.success { border-left-color: #10b981; }
        .metric-card.info { border-left-color: #3b82f6; }
        .metric-card.warning { border-left-color: #f59e0b; }
        .metric-card.failure { border-left-color: #ef4444; }
        .metric-number { font-size: 2.5rem; font-weight: bold; margin-bottom: 5px; }
        .metric-label { color: #6b7280; font-size: 0.9rem; text-transform: uppercase; letter-spacing: 1px; }
        .metric-description { color: #374151; margin-top: 10px; }
        .success { color: #10b981; }
        .info { color: #3b82f6; }
        .warning { color: #f59e0b; }
        .failure { color: #ef4444; }
        .stages-section { background: white; padding: 30px; border-radius: 10px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); margin-bottom: 30px; }
        .stage { display: flex; align-items: center; padding: 15px; margin: 10px 0; background: #f9fafb; border-radius: 8px; }
        .stage-icon { font-size: 1.5rem; margin-right: 15px; }
        .stage-name { font-weight: 600; flex-grow: 1; }
        .stage-status { font-weight: bold; }
        .stage-details { color: #6b7280; font-size: 0.9rem; margin-top: 4px; list-style: none; }
        .footer { text-align: center; margin-top: 40px; color: #6b7280; }
        @media (max-width: 768px) {
            .header h1 { font-size: 2rem; }
            .metric-number { font-size: 2rem; }
        }"#;

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Icon shown next to a stage, looked up by the stage's name
fn stage_icon(name: &str) -> &'static str {
    match name {
        "Setup Environment" => "🔧",
        "Code Quality Check" => "🔍",
        "Test" => "🧪",
        "Build Artifact" => "📦",
        _ => "⚙️",
    }
}

fn stage_class(status: StageStatus) -> &'static str {
    match status {
        StageStatus::Passed => "success",
        StageStatus::Failed => "failure",
        StageStatus::Skipped => "warning",
    }
}

fn status_class(status: BuildStatus) -> &'static str {
    match status {
        BuildStatus::Success => "success",
        BuildStatus::Failure => "failure",
        BuildStatus::Unknown => "warning",
    }
}

fn metric_card(class: &str, number: &str, label: &str, description: &str) -> String {
    let mut card = String::new();
    card.push_str(&format!("            <div class=\"metric-card {}\">\n", class));
    card.push_str(&format!("                <div class=\"metric-number {}\">{}</div>\n", class, number));
    card.push_str(&format!("                <div class=\"metric-label\">{}</div>\n", label));
    card.push_str(&format!("                <div class=\"metric-description\">{}</div>\n", description));
    card.push_str("            </div>\n");
    card
}

/// First `max_chars` characters of `text`, with "..." when something was cut
fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Render the HTML dashboard, showing at most `commit_chars` characters of the
/// commit message in the footer.
pub fn render_dashboard(data: &ReportData, commit_chars: usize) -> String {
    let record = &data.record;
    let build = escape_html(&record.build_number.to_string());

    let mut cards = String::new();

    let status_description = match record.status {
        BuildStatus::Success => "All pipeline stages completed",
        BuildStatus::Failure => "The build reported a failure",
        BuildStatus::Unknown => "No final status in the console log",
    };
    cards.push_str(&metric_card(
        status_class(record.status),
        record.status.emoji(),
        "Build Status",
        &format!("{} - {}", record.status.as_str(), status_description),
    ));

    let total_tests = data.tests.total_tests();
    let tests_description = if total_tests > 0 { "Tests executed in this build" } else { "No test runs found" };
    cards.push_str(&metric_card("info", &total_tests.to_string(), "Total Tests", tests_description));

    match &data.quality.coverage {
        Some(cov) => {
            let class = if coverage_rating(&cov.percentage) == "LOW" { "warning" } else { "success" };
            cards.push_str(&metric_card(
                class,
                &escape_html(&cov.percentage),
                "Code Coverage",
                &format!("{} statements, {} missed in {}", cov.statements, cov.missed, escape_html(&cov.file)),
            ));
        }
        None => cards.push_str(&metric_card("warning", "N/A", "Code Coverage", "No coverage report found")),
    }

    let violations = data.quality.lint_violations;
    let lint_class = if violations == 0 { "info" } else { "warning" };
    let lint_description = if violations == 0 { "No style violations reported" } else { "Style violations in the log" };
    cards.push_str(&metric_card(lint_class, &violations.to_string(), "Style Violations", lint_description));

    let mut stages = String::new();
    if data.stages.is_empty() {
        stages.push_str("            <p>No pipeline stages found in the console log.</p>\n");
    }
    for stage in &data.stages {
        stages.push_str("            <div class=\"stage\">\n");
        stages.push_str(&format!("                <div class=\"stage-icon\">{}</div>\n", stage_icon(&stage.name)));
        stages.push_str("                <div class=\"stage-name\">");
        stages.push_str(&escape_html(&stage.name));
        if !stage.details.is_empty() {
            stages.push_str("\n                    <ul class=\"stage-details\">\n");
            for detail in &stage.details {
                stages.push_str(&format!("                        <li>{}</li>\n", escape_html(detail)));
            }
            stages.push_str("                    </ul>\n                ");
        }
        stages.push_str("</div>\n");
        stages.push_str(&format!(
            "                <div class=\"stage-status {}\">{}</div>\n",
            stage_class(stage.status),
            stage.status.label()
        ));
        stages.push_str("            </div>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Jenkins Build Dashboard - Build #{build}</title>
    <style>
{style}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🚀 Jenkins Build Dashboard</h1>
            <p>Build #{build} - Triggered by {trigger}</p>
        </div>

        <div class="metrics-grid">
{cards}        </div>

        <div class="stages-section">
            <h2>🔄 Pipeline Stages</h2>
{stages}        </div>

        <div class="footer">
            <p><strong>Commit:</strong> {commit}</p>
            <p>Duration: {duration} | Generated on {generated_at} | Jenkins Build #{build}</p>
        </div>
    </div>
</body>
</html>
"#,
        build = build,
        style = STYLE,
        trigger = escape_html(&record.trigger),
        cards = cards,
        stages = stages,
        commit = escape_html(&preview(&record.commit_message, commit_chars)),
        duration = escape_html(&record.duration),
        generated_at = escape_html(&data.generated_at),
    )
}
