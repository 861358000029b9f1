//! Markdown report generation
//!
//! Renders the module taxonomy together with the run statistics as a
//! human-readable document.

use crate::classifier::ClassificationResult;
use crate::output::stats::RunStats;

/// Formats a classification result and run statistics as markdown
pub fn format_markdown(result: &ClassificationResult, stats: &RunStats) -> String {
    let mut md = String::new();

    md.push_str("# Documentation Modules\n\n");
    md.push_str(&format!(
        "_Generated {}_\n\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    if result.is_empty() {
        md.push_str("No modules could be extracted from the provided URLs.\n\n");
    }

    for module in result {
        md.push_str(&format!("## {}\n\n", module.name));
        md.push_str(&format!("{}\n\n", module.description));

        if !module.submodules.is_empty() {
            md.push_str("| Submodule | Description |\n");
            md.push_str("|-----------|-------------|\n");
            for (name, description) in &module.submodules {
                md.push_str(&format!(
                    "| {} | {} |\n",
                    escape_cell(name),
                    escape_cell(description)
                ));
            }
            md.push('\n');
        }
    }

    md.push_str("## Run Statistics\n\n");
    md.push_str(&format!(
        "- **Seeds**: {} crawled, {} skipped\n",
        stats.seeds_accepted, stats.seeds_skipped
    ));
    md.push_str(&format!(
        "- **Pages**: {} fetched, {} failed ({:.2}% success)\n",
        stats.pages_fetched,
        stats.pages_failed(),
        stats.fetch_success_rate()
    ));
    md.push_str(&format!("- **Fragments**: {}\n", stats.fragments));
    md.push_str(&format!("- **Modules**: {}\n", stats.modules));
    md.push_str(&format!("- **Classifier**: {}\n", stats.strategy_label()));

    md
}

/// Makes text safe for a single markdown table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}
