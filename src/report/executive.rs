//! Executive summary report (Markdown).
//!
//! A short, table-first view of the build for readers who don't want the
//! stage-by-stage detail. Every verdict in it is derived from the parsed
//! record: build status, failed stages, lint violations and coverage.

use super::types::{coverage_rating, duration_rating};
use crate::types::{BuildStatus, ReportData, StageStatus};

/// PASSED / FAILED / UNKNOWN verdict for the build status row
pub fn build_verdict(status: BuildStatus) -> &'static str {
    match status {
        BuildStatus::Success => "PASSED",
        BuildStatus::Failure => "FAILED",
        BuildStatus::Unknown => "UNKNOWN",
    }
}

/// Ready to deploy when Jenkins reported success and no stage failed
pub fn deployment_ready(data: &ReportData) -> bool {
    data.record.status.is_success() && data.all_stages_passed()
}

/// Render the executive Markdown report.
pub fn render_executive_report(data: &ReportData) -> String {
    let record = &data.record;
    let total_tests = data.tests.total_tests();
    let violations = data.quality.lint_violations;
    let ready = deployment_ready(data);

    let mut out = String::new();
    out.push_str(&format!("# 📊 Executive Build Dashboard - Build #{}\n\n", record.build_number));

    // Executive summary table
    out.push_str("## 🎯 Executive Summary\n\n");
    out.push_str("| **Metric** | **Result** | **Status** |\n");
    out.push_str("|------------|------------|------------|\n");
    out.push_str(&format!(
        "| **Build Status** | {} {} | **{}** |\n",
        record.status.emoji(),
        record.status.as_str(),
        build_verdict(record.status)
    ));
    if violations == 0 {
        out.push_str("| **Quality Gate** | ✅ NO VIOLATIONS | **PASSED** |\n");
    } else {
        out.push_str(&format!("| **Quality Gate** | ⚠️ {} VIOLATIONS | **FAILED** |\n", violations));
    }
    match &data.quality.coverage {
        Some(cov) => out.push_str(&format!(
            "| **Test Coverage** | 📊 {} ({}) | **{}** |\n",
            cov.percentage,
            cov.file,
            coverage_rating(&cov.percentage)
        )),
        None => out.push_str("| **Test Coverage** | 📊 N/A | **UNKNOWN** |\n"),
    }
    out.push_str(&format!(
        "| **Total Tests** | 🧪 {} tests executed | **{}** |\n",
        total_tests,
        if total_tests > 0 { "EXECUTED" } else { "NONE" }
    ));
    out.push_str(&format!("| **Build Duration** | ⏱️ {} | **{}** |\n", record.duration, duration_rating(&record.duration)));
    out.push_str(&format!(
        "| **Deployment Ready** | {} | **{}** |\n\n",
        if ready { "🚀 YES" } else { "🛑 NO" },
        if ready { "READY" } else { "BLOCKED" }
    ));

    // Quality metrics
    out.push_str("## 📈 Quality Metrics\n\n");
    out.push_str("### **Code Quality**\n");
    if violations == 0 {
        out.push_str("- **Style Violations**: ✅ **ZERO**\n");
    } else {
        out.push_str(&format!("- **Style Violations**: ⚠️ **{}**\n", violations));
    }
    match &data.quality.coverage {
        Some(cov) => out.push_str(&format!(
            "- **Coverage**: {} of {} statements covered in {} ({} missed)\n\n",
            cov.percentage, cov.statements, cov.file, cov.missed
        )),
        None => out.push_str("- **Coverage**: no coverage report found\n\n"),
    }

    if !data.tests.is_empty() {
        out.push_str("### **Test Results**\n");
        if let Some(ut) = &data.tests.unittest {
            out.push_str(&format!("- **Unit Tests**: ✅ **{} PASSED** ({}s)\n", ut.count, ut.duration));
        }
        if let Some(pt) = &data.tests.pytest {
            out.push_str(&format!("- **Pytest Suite**: ✅ **{} PASSED** ({}s)\n", pt.count, pt.duration));
        }
        out.push('\n');
    }

    // Recommendations
    out.push_str("## 🎯 Recommendations\n\n");
    if ready {
        out.push_str("1. **✅ DEPLOY**: This build meets all quality standards\n");
        out.push_str("2. **📊 Monitor**: Continue tracking quality metrics trends\n");
    } else {
        let failed: Vec<&str> =
            data.stages.iter().filter(|s| s.status == StageStatus::Failed).map(|s| s.name.as_str()).collect();
        if failed.is_empty() {
            out.push_str(&format!(
                "1. **🛑 HOLD**: Jenkins reported {} for this build\n",
                record.status.as_str()
            ));
        } else {
            out.push_str(&format!("1. **🛑 HOLD**: Fix the failing stages: {}\n", failed.join(", ")));
        }
        out.push_str("2. **🔄 Re-run**: Trigger a new build once the fixes are merged\n");
    }
    if violations > 0 {
        out.push_str("3. **🧹 Clean up**: Resolve the reported style violations\n");
    }
    out.push('\n');

    out.push_str("---\n\n");
    out.push_str(&format!("*Report generated: {}*\n\n", data.generated_at));
    out.push_str("---\n\n");

    // Technical details
    out.push_str("### 📋 Technical Details (For Development Team)\n\n");
    out.push_str(&format!("**Commit**: {}\n", record.commit_message));
    out.push_str(&format!("**Triggered by**: {}\n", record.trigger));
    let chain: Vec<&str> = data.stages.iter().map(|s| s.name.as_str()).collect();
    if chain.is_empty() {
        out.push_str("**Pipeline Stages**: none detected\n");
    } else {
        out.push_str(&format!("**Pipeline Stages**: {}\n", chain.join(" → ")));
    }
    let artifacts: Vec<String> = data.artifacts.iter().map(|a| a.describe()).collect();
    if artifacts.is_empty() {
        out.push_str("**Artifacts**: none archived\n");
    } else {
        out.push_str(&format!("**Artifacts**: {}\n", artifacts.join(", ")));
    }

    out
}
