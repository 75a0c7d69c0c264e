//! Clean Markdown build report.
//!
//! Turns the parsed console log into a readable Markdown document: build
//! information, one section per pipeline stage, test results, archived
//! artifacts and a short summary. Sections whose source list is empty are
//! left out.

use crate::types::{ReportData, StageStatus};

/// Render the cleaned Markdown report.
pub fn render_clean_report(data: &ReportData) -> String {
    let record = &data.record;
    let mut out = String::new();

    out.push_str(&format!("# {} Jenkins Build Report\n\n", record.status.emoji()));

    out.push_str("## 📋 Build Information\n");
    out.push_str(&format!("- **Build Number**: #{}\n", record.build_number));
    out.push_str(&format!("- **Status**: {} {}\n", record.status.emoji(), record.status.as_str()));
    out.push_str(&format!("- **Duration**: {}\n", record.duration));
    out.push_str(&format!("- **Triggered by**: {}\n", record.trigger));
    out.push_str(&format!("- **Commit**: {}\n\n", record.commit_message));

    if !data.stages.is_empty() {
        out.push_str("## 🚀 Pipeline Stages\n\n");
        for stage in &data.stages {
            out.push_str(&format!("### {} {}\n", stage.status.label(), stage.name));
            for detail in &stage.details {
                out.push_str(&format!("- {}\n", detail));
            }
            out.push('\n');
        }
    }

    if !data.tests.is_empty() || data.quality.coverage.is_some() {
        out.push_str("## 🧪 Test Results\n\n");
        if let Some(ut) = &data.tests.unittest {
            out.push_str(&format!("- **Unittest**: ✅ {} tests passed in {}s\n", ut.count, ut.duration));
        }
        if let Some(pt) = &data.tests.pytest {
            out.push_str(&format!("- **Pytest**: ✅ {} tests passed in {}s\n", pt.count, pt.duration));
        }
        if let Some(cov) = &data.quality.coverage {
            out.push_str(&format!(
                "- **Coverage**: 📊 {} ({} statements, {} missed)\n",
                cov.percentage, cov.statements, cov.missed
            ));
        }
        out.push('\n');
    }

    if !data.artifacts.is_empty() {
        out.push_str("## 📁 Build Artifacts\n\n");
        for artifact in &data.artifacts {
            out.push_str(&format!("- {}\n", artifact.describe()));
        }
        out.push('\n');
    }

    write_summary(&mut out, data);

    out.push_str("---\n");
    out.push_str(&format!("*Report generated on {}*\n", data.generated_at));

    out
}

fn write_summary(out: &mut String, data: &ReportData) {
    let count = |status: StageStatus| data.stages.iter().filter(|s| s.status == status).count();

    out.push_str("## 💡 Summary\n\n");
    out.push_str(&format!(
        "- **Stages**: {} passed, {} failed, {} skipped\n",
        count(StageStatus::Passed),
        count(StageStatus::Failed),
        count(StageStatus::Skipped)
    ));
    out.push_str(&format!("- **Tests executed**: {}\n", data.tests.total_tests()));
    out.push_str(&format!("- **Style violations**: {}\n", data.quality.lint_violations));

    let verdict = if data.failed_stages() > 0 {
        "❌ Pipeline has failing stages"
    } else if data.record.status.is_success() {
        "✅ Pipeline completed successfully"
    } else {
        "❌ Build did not report success"
    };
    out.push_str(&format!("\n**Result**: {}\n\n", verdict));
}
