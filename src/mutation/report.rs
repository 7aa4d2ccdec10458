use std::collections::BTreeMap;

use serde::Serialize;

use super::runner::{MutationSummary, MutationTestResult};

/// Supported output formats for mutation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Markdown summary.
    Markdown,
    /// JSON with every mutation inline.
    Json,
    /// JUnit XML for CI systems.
    Junit,
}

/// Counts across every test in a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    /// Number of tests.
    pub tests: usize,
    /// Mutations across all tests.
    pub total: usize,
    /// Caught mutations.
    pub caught: usize,
    /// Uncaught mutations.
    pub uncaught: usize,
    /// Errored mutations.
    pub errors: usize,
    /// Caught / total, as a percentage.
    pub detection_rate: f64,
}

impl BatchSummary {
    /// Fold per-test summaries.
    pub fn from_results(results: &BTreeMap<String, MutationTestResult>) -> Self {
        let summary = results
            .values()
            .fold(MutationSummary::default(), |mut acc, result| {
                acc.total += result.summary.total;
                acc.caught += result.summary.caught;
                acc.uncaught += result.summary.uncaught;
                acc.errors += result.summary.errors;
                acc
            });
        Self {
            tests: results.len(),
            total: summary.total,
            caught: summary.caught,
            uncaught: summary.uncaught,
            errors: summary.errors,
            detection_rate: summary.detection_rate(),
        }
    }
}

/// Render a batch of mutation test results.
pub fn render_report(results: &BTreeMap<String, MutationTestResult>, format: ReportFormat) -> String {
    let summary = BatchSummary::from_results(results);
    match format {
        ReportFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "summary": summary,
            "tests": results,
        }))
        .expect("report JSON should serialize"),
        ReportFormat::Markdown => render_markdown_report(results, &summary),
        ReportFormat::Junit => render_junit_report(results),
    }
}

fn render_markdown_report(
    results: &BTreeMap<String, MutationTestResult>,
    summary: &BatchSummary,
) -> String {
    let mut out = String::from("# Mutation Test Report\n\n");

    out.push_str("## Summary\n\n| metric | count |\n|---|---:|\n");
    out.push_str(&format!("| tests | {} |\n", summary.tests));
    out.push_str(&format!("| mutations | {} |\n", summary.total));
    out.push_str(&format!("| caught | {} |\n", summary.caught));
    out.push_str(&format!("| uncaught | {} |\n", summary.uncaught));
    out.push_str(&format!("| errors | {} |\n", summary.errors));
    out.push_str(&format!(
        "| detection rate | {:.2}% |\n",
        summary.detection_rate
    ));

    for (name, result) in results {
        out.push_str(&format!("\n## {name}\n\n"));
        out.push_str(&format!("- **type**: {}\n", result.type_name));
        out.push_str(&format!("- **seed**: `{}`\n", result.original_value));
        out.push_str(&format!(
            "- **caught**: {}/{}\n",
            result.summary.caught, result.summary.total
        ));

        let uncaught: Vec<_> = result.uncaught().collect();
        if !uncaught.is_empty() {
            out.push_str("\n**uncaught mutations**:\n");
            for m in uncaught {
                out.push_str(&format!("- `{}`", m.value));
                if !m.changed_paths.is_empty() {
                    out.push_str(&format!(" (changed: {})", m.changed_paths.join(", ")));
                }
                out.push('\n');
            }
        }

        let errored: Vec<_> = result
            .mutations
            .iter()
            .filter_map(|m| m.error.as_ref().map(|e| (m, e)))
            .collect();
        if !errored.is_empty() {
            out.push_str("\n**errors**:\n");
            for (m, e) in errored {
                out.push_str(&format!("- `{}`: {}\n", m.value, e));
            }
        }
    }

    out
}

fn render_junit_report(results: &BTreeMap<String, MutationTestResult>) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<testsuites>\n");

    for (name, result) in results {
        out.push_str(&format!(
            "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\">\n",
            xml_escape(name),
            result.summary.total,
            result.summary.uncaught
        ));
        for (idx, m) in result.mutations.iter().enumerate() {
            let case_name = xml_escape(&format!("{}#{idx}", result.type_name));
            if m.caught {
                out.push_str(&format!(
                    "    <testcase classname=\"{}\" name=\"{case_name}\"/>\n",
                    xml_escape(name)
                ));
            } else {
                out.push_str(&format!(
                    "    <testcase classname=\"{}\" name=\"{case_name}\">\n",
                    xml_escape(name)
                ));
                out.push_str(&format!(
                    "      <failure message=\"Mutation accepted\">{}</failure>\n",
                    xml_escape(&m.value.to_string())
                ));
                out.push_str("    </testcase>\n");
            }
        }
        out.push_str("  </testsuite>\n");
    }

    out.push_str("</testsuites>\n");
    out
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
