//! CLI output formatting for the end-of-run tally.

use doc_mirror::RunSummary;

const RULE_WIDTH: usize = 50;

/// Returns the summary block printed after a run.
pub(crate) fn summary_lines(summary: &RunSummary) -> Vec<String> {
    vec![
        String::new(),
        "=".repeat(RULE_WIDTH),
        "Download complete!".to_string(),
        format!("Successfully downloaded: {} files", summary.successful),
        format!("Skipped (already exist): {} files", summary.skipped),
        format!("Failed downloads: {} files", summary.failed),
        format!("Files saved to: {}", summary.output_dir.display()),
    ]
}

/// Prints the summary block to stdout.
pub(crate) fn print_summary(summary: &RunSummary) {
    for line in summary_lines(summary) {
        println!("{line}");
    }
}
