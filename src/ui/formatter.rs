//! Pure formatting functions for UI output.
//!
//! Display logic is kept apart from prompting so the strings can be tested.

use crate::domain::{BranchCatalog, FixVersionResult, ScanReport};
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Headline for a finished resolution, as shown to the user
pub fn format_result(result: &FixVersionResult) -> String {
    match result {
        FixVersionResult::Fixed(version) => format!("Fix version = {}", version),
        other => other.to_string(),
    }
}

/// Print the outcome of a scan.
///
/// In verbose mode the whole confirmed run is listed below the headline.
pub fn display_scan_report(report: &ScanReport, verbose: bool) {
    match &report.result {
        FixVersionResult::Fixed(_) => {
            println!("\n{}", style(format_result(&report.result)).green().bold())
        }
        _ => println!("\n{}", style(format_result(&report.result)).yellow()),
    }

    if verbose {
        if !report.confirmed.is_empty() {
            let run: Vec<String> = report.confirmed.iter().map(|v| v.to_string()).collect();
            println!("  Present in: {}", run.join(", "));
        }
        println!("  Release branches checked: {}", report.queries);
    }
}

/// Render the catalog as "version  remote/branch" lines, newest first
pub fn format_catalog(catalog: &BranchCatalog) -> Vec<String> {
    let width = catalog
        .scan_order()
        .map(|(version, _)| version.to_string().len())
        .max()
        .unwrap_or(0);

    catalog
        .scan_order()
        .map(|(version, branch)| format!("{:<width$}  {}", version.to_string(), branch))
        .collect()
}

/// Print the release catalog.
pub fn display_catalog(catalog: &BranchCatalog) {
    if catalog.is_empty() {
        display_status("No release branches found");
        return;
    }

    println!("{}", style("Release branches (newest first):").bold());
    for line in format_catalog(catalog) {
        println!("  {}", line);
    }
}
